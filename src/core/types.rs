//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// Simulation tick counter (one tick = one displayed second)
pub type Tick = u64;

/// Language used for diagnostic text and stimulus labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "zh")]
    Chinese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "zh" | "chinese" | "cn" => Ok(Self::Chinese),
            _ => Err(EngineError::InvalidLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!(" chinese ".parse::<Language>().unwrap(), Language::Chinese);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(EngineError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_language_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().to_string(), "en");
    }
}
