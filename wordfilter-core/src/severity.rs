//! severity.rs - The closed, ordered set of severity levels.
//!
//! A `SeverityLevel` partitions a word list into buckets and is reported back
//! by validation. The derived ordering is the severity rank:
//! `Low < Medium < High < Highest`.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::WordFilterError;

/// How objectionable a flagged term is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Highest,
}

impl SeverityLevel {
    /// Every level, in ascending rank.
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::Low,
        SeverityLevel::Medium,
        SeverityLevel::High,
        SeverityLevel::Highest,
    ];

    /// The lowercase tag used in YAML files, JSON output and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
            SeverityLevel::Highest => "highest",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = WordFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(SeverityLevel::Low),
            "medium" => Ok(SeverityLevel::Medium),
            "high" => Ok(SeverityLevel::High),
            "highest" => Ok(SeverityLevel::Highest),
            _ => Err(WordFilterError::UnknownLevel(s.to_string())),
        }
    }
}
