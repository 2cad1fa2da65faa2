//! Per-field normalizers applied before provider data is compared with
//! what the user declared.

fn strip_punctuation(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Lowercase, punctuation removed, whitespace runs collapsed to one space.
pub fn name(s: &str) -> String {
    strip_punctuation(s)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, punctuation removed, all whitespace removed.
pub fn state(s: &str) -> String {
    strip_punctuation(s)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn gender(s: &str) -> String {
    let g = s.trim().to_lowercase();
    match g.as_str() {
        "m" | "male" => "male".to_string(),
        "f" | "female" => "female".to_string(),
        "t" | "other" => "other".to_string(),
        _ => g,
    }
}

pub fn pincode(s: &str) -> String {
    s.trim().to_string()
}

/// Converts a provider `DD-MM-YYYY` date into `YYYY-MM-DD`.
/// Anything that is not three dash-separated digit groups yields `None`.
pub fn provider_date_to_iso(s: &str) -> Option<String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    let all_digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    if !(all_digits(day) && all_digits(month) && all_digits(year)) {
        return None;
    }
    Some(format!("{}-{}-{}", year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_ignores_case_punctuation_and_spacing() {
        assert_eq!(name("John Doe"), "john doe");
        assert_eq!(name("  john   doe!! "), "john doe");
        assert_eq!(name("O'Brien,  Mary"), "obrien mary");
    }

    #[test]
    fn state_drops_internal_spaces() {
        assert_eq!(state("Tamil Nadu"), "tamilnadu");
        assert_eq!(state("tamil-nadu"), "tamilnadu");
        assert_eq!(state("TAMILNADU"), "tamilnadu");
    }

    #[test]
    fn gender_maps_short_forms() {
        assert_eq!(gender("M"), "male");
        assert_eq!(gender(" Female "), "female");
        assert_eq!(gender("T"), "other");
        assert_eq!(gender("Nonbinary"), "nonbinary");
    }

    #[test]
    fn provider_date_is_reordered() {
        assert_eq!(
            provider_date_to_iso("15-01-1990").as_deref(),
            Some("1990-01-15")
        );
    }

    #[test]
    fn malformed_provider_dates_fail() {
        assert_eq!(provider_date_to_iso("1990/01/15"), None);
        assert_eq!(provider_date_to_iso("15-01"), None);
        assert_eq!(provider_date_to_iso("aa-01-1990"), None);
        assert_eq!(provider_date_to_iso(""), None);
    }
}
