//! Disassembly settings.
//!
//! A [`DisasmConfig`] can be assembled from command-line flags or loaded
//! from a JSON file; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::strategy::Strategy;
use crate::{Address, DisassemblyError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Address of the first byte of the image
    pub base_address: Address,
    /// Where recursive descent starts; the base address when unset
    pub entry_point: Option<Address>,
    pub strategy: Strategy,
    pub format: OutputFormat,
    /// Annotate special-function registers in operand text
    pub register_names: bool,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            base_address: 0,
            entry_point: None,
            strategy: Strategy::Linear,
            format: OutputFormat::Text,
            register_names: false,
        }
    }
}

impl DisasmConfig {
    pub fn from_json(text: &str) -> Result<Self, DisassemblyError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| DisassemblyError::Config(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DisassemblyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Start address for recursive descent.
    pub fn entry(&self) -> Address {
        self.entry_point.unwrap_or(self.base_address)
    }

    pub fn validate(&self) -> Result<(), DisassemblyError> {
        if let Some(entry) = self.entry_point {
            if entry < self.base_address {
                return Err(DisassemblyError::Config(format!(
                    "entry point 0x{:X} lies before base address 0x{:X}",
                    entry, self.base_address
                )));
            }
        }
        Ok(())
    }
}

/// Parses `0x`-prefixed hexadecimal or plain decimal addresses.
pub fn parse_address(text: &str) -> Result<Address, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => Address::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", text, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = DisasmConfig::default();
        assert_eq!(config.strategy, Strategy::Linear);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.entry(), 0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = DisasmConfig::from_json(
            r#"{ "base_address": 8192, "strategy": "recursive", "format": "jsonl" }"#,
        )
        .unwrap();
        assert_eq!(config.base_address, 0x2000);
        assert_eq!(config.strategy, Strategy::Recursive);
        assert_eq!(config.format, OutputFormat::JsonLines);
        assert_eq!(config.entry(), 0x2000);
        assert!(!config.register_names);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            DisasmConfig::from_json(r#"{ "strategy": "sideways" }"#),
            Err(DisassemblyError::Config(_))
        ));
        assert!(matches!(
            DisasmConfig::from_json(r#"{ "base_address": 16, "entry_point": 8 }"#),
            Err(DisassemblyError::Config(_))
        ));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcs96dis.json");
        std::fs::write(&path, r#"{ "register_names": true, "entry_point": 8320 }"#).unwrap();
        let config = DisasmConfig::load(&path).unwrap();
        assert!(config.register_names);
        assert_eq!(config.entry(), 0x2080);
    }

    #[rstest]
    #[case("0x2080", Ok(0x2080))]
    #[case("0X1f", Ok(0x1F))]
    #[case("8192", Ok(8192))]
    #[case(" 16 ", Ok(16))]
    fn test_parse_address(#[case] text: &str, #[case] expected: Result<Address, String>) {
        assert_eq!(parse_address(text), expected);
    }

    #[test]
    fn test_parse_address_invalid() {
        assert!(parse_address("0xZZ").is_err());
        assert!(parse_address("").is_err());
    }
}
