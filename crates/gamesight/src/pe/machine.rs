use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::layout::machine;

/// CPU architecture a PE image was built for
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Architecture {
    #[serde(rename = "32")]
    #[strum(serialize = "32")]
    X86,
    #[serde(rename = "64")]
    #[strum(serialize = "64")]
    X64,
    #[default]
    #[serde(rename = "unknown")]
    #[strum(serialize = "unknown")]
    Unknown,
}

impl Architecture {
    /// Classify a raw COFF machine value
    pub fn from_machine(machine_type: u16) -> Self {
        match machine_type {
            machine::I386 => Self::X86,
            machine::AMD64 => Self::X64,
            _ => Self::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Short label used by launcher front-ends ("x86", "x64")
    pub fn label(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_machine() {
        assert_eq!(Architecture::from_machine(0x014c), Architecture::X86);
        assert_eq!(Architecture::from_machine(0x8664), Architecture::X64);
        // ARM64 is a valid machine but not one we classify
        assert_eq!(Architecture::from_machine(0xAA64), Architecture::Unknown);
        assert_eq!(Architecture::from_machine(0), Architecture::Unknown);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Architecture::X86.to_string(), "32");
        assert_eq!(Architecture::X64.to_string(), "64");
        assert_eq!(Architecture::Unknown.to_string(), "unknown");
        assert_eq!(Architecture::from_str("64").unwrap(), Architecture::X64);
        assert!(Architecture::from_str("arm").is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Architecture::X64).unwrap();
        assert_eq!(json, "\"64\"");
        let parsed: Architecture = serde_json::from_str("\"32\"").unwrap();
        assert_eq!(parsed, Architecture::X86);
    }

    #[test]
    fn test_label() {
        assert_eq!(Architecture::X86.label(), "x86");
        assert_eq!(Architecture::X64.label(), "x64");
        assert!(!Architecture::Unknown.is_known());
    }
}
