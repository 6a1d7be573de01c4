use std::str::FromStr;

use serde::Deserialize;
use strum::VariantNames;

/// Deployment mode, deciding how much error detail reaches clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    /// Whether diagnostics must be withheld from clients
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Unrecognised environment name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment `{name}`, expected one of: {}", Environment::VARIANTS.join(", "))]
pub struct ParseEnvironmentError {
    name: String,
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ParseEnvironmentError { name: s.to_owned() }),
        }
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
