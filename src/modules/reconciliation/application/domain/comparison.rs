use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalize;

/// The five identity attributes both sides are reconciled on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityFields {
    pub name: String,
    /// Provider side: `DD-MM-YYYY`. Declared side: `YYYY-MM-DD`.
    pub dob: String,
    pub gender: String,
    pub state: String,
    pub pincode: String,
}

impl IdentityFields {
    pub fn value(&self, field: ReconciledField) -> &str {
        match field {
            ReconciledField::Name => &self.name,
            ReconciledField::Dob => &self.dob,
            ReconciledField::Gender => &self.gender,
            ReconciledField::State => &self.state,
            ReconciledField::Pincode => &self.pincode,
        }
    }

    /// First field, in reconciliation order, that is empty after trimming.
    pub fn first_blank(&self) -> Option<ReconciledField> {
        ReconciledField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconciledField {
    Name,
    Dob,
    Gender,
    State,
    Pincode,
}

impl ReconciledField {
    pub const ALL: [ReconciledField; 5] = [
        ReconciledField::Name,
        ReconciledField::Dob,
        ReconciledField::Gender,
        ReconciledField::State,
        ReconciledField::Pincode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReconciledField::Name => "name",
            ReconciledField::Dob => "dob",
            ReconciledField::Gender => "gender",
            ReconciledField::State => "state",
            ReconciledField::Pincode => "pincode",
        }
    }

    /// A blank provider value never matches, whatever was declared.
    fn matches(&self, provider: &IdentityFields, declared: &IdentityFields) -> bool {
        let (ours, theirs) = match self {
            ReconciledField::Dob => {
                return normalize::provider_date_to_iso(&provider.dob)
                    .is_some_and(|iso| iso == declared.dob.trim())
            }
            ReconciledField::Name => (
                normalize::name(&provider.name),
                normalize::name(&declared.name),
            ),
            ReconciledField::Gender => (
                normalize::gender(&provider.gender),
                normalize::gender(&declared.gender),
            ),
            ReconciledField::State => (
                normalize::state(&provider.state),
                normalize::state(&declared.state),
            ),
            ReconciledField::Pincode => (
                normalize::pincode(&provider.pincode),
                normalize::pincode(&declared.pincode),
            ),
        };
        !ours.is_empty() && ours == theirs
    }
}

impl fmt::Display for ReconciledField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub is_match: bool,
    pub matched_fields: Vec<ReconciledField>,
    pub mismatched_fields: Vec<ReconciledField>,
}

impl Reconciliation {
    /// `"name, dob"` style list used in mismatch errors.
    pub fn mismatch_list(&self) -> String {
        self.mismatched_fields
            .iter()
            .map(ReconciledField::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn report(&self) -> ComparisonReport {
        let matched = |f: ReconciledField| self.matched_fields.contains(&f);
        ComparisonReport {
            name_match: matched(ReconciledField::Name),
            dob_match: matched(ReconciledField::Dob),
            gender_match: matched(ReconciledField::Gender),
            state_match: matched(ReconciledField::State),
            pincode_match: matched(ReconciledField::Pincode),
            mismatches: self.mismatched_fields.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub name_match: bool,
    pub dob_match: bool,
    pub gender_match: bool,
    pub state_match: bool,
    pub pincode_match: bool,
    pub mismatches: Vec<ReconciledField>,
}

/// All-or-nothing: a single mismatched field fails the whole comparison.
pub fn compare(provider: &IdentityFields, declared: &IdentityFields) -> Reconciliation {
    let (matched_fields, mismatched_fields): (Vec<_>, Vec<_>) = ReconciledField::ALL
        .into_iter()
        .partition(|field| field.matches(provider, declared));

    Reconciliation {
        is_match: mismatched_fields.is_empty(),
        matched_fields,
        mismatched_fields,
    }
}
