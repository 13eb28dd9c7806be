//! The closed set of plan domains.
//!
//! A domain is assigned exactly once per plan by the classifier and selects
//! which template catalog entry (if any) drives enhancement and fallback
//! content. `general` is the deterministic default and carries no template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application category of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Marketplace,
    Dashboard,
    Social,
    General,
}

/// All domains, in classification-prompt order.
pub const ALL_DOMAINS: [Domain; 4] = [
    Domain::Marketplace,
    Domain::Dashboard,
    Domain::Social,
    Domain::General,
];

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Marketplace => "marketplace",
            Self::Dashboard => "dashboard",
            Self::Social => "social",
            Self::General => "general",
        };
        f.write_str(s)
    }
}

impl FromStr for Domain {
    type Err = DomainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marketplace" => Ok(Self::Marketplace),
            "dashboard" => Ok(Self::Dashboard),
            "social" => Ok(Self::Social),
            "general" => Ok(Self::General),
            other => Err(DomainParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Domain`] string.
#[derive(Debug, Clone)]
pub struct DomainParseError(pub String);

impl fmt::Display for DomainParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid domain: {:?}", self.0)
    }
}

impl std::error::Error for DomainParseError {}
