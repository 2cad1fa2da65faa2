use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationMethod {
    Digilocker,
    StripeIdentity,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::Digilocker => "DIGILOCKER",
            VerificationMethod::StripeIdentity => "STRIPE_IDENTITY",
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIGILOCKER" => Ok(VerificationMethod::Digilocker),
            "STRIPE_IDENTITY" => Ok(VerificationMethod::StripeIdentity),
            other => Err(format!("Unknown verification method: {}", other)),
        }
    }
}

/// Country to identity-provider lookup table.
#[derive(Debug, Clone)]
pub struct CountryRoutes {
    routes: Vec<(String, VerificationMethod)>,
    fallback: VerificationMethod,
}

impl CountryRoutes {
    pub fn new(routes: Vec<(&str, VerificationMethod)>, fallback: VerificationMethod) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|(country, method)| (country.trim().to_lowercase(), method))
                .collect(),
            fallback,
        }
    }

    pub fn method_for(&self, country: &str) -> VerificationMethod {
        let key = country.trim().to_lowercase();
        self.routes
            .iter()
            .find(|(c, _)| *c == key)
            .map(|(_, m)| *m)
            .unwrap_or(self.fallback)
    }
}

impl Default for CountryRoutes {
    fn default() -> Self {
        Self::new(
            vec![("india", VerificationMethod::Digilocker)],
            VerificationMethod::StripeIdentity,
        )
    }
}
