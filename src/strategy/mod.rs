//! Image walkers

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Address, Decoder, Disassembly, DisassemblyError};

/// Available disassembly strategies.
#[derive(Copy, Clone, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Linear sweep disassembly
    #[default]
    Linear,
    /// Superset disassembly (every byte offset)
    Superset,
    /// Recursive descent disassembly (control flow analysis)
    Recursive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Linear => write!(f, "Linear sweep"),
            Strategy::Superset => write!(f, "Superset"),
            Strategy::Recursive => write!(f, "Recursive descent"),
        }
    }
}

impl Strategy {
    /// Run the selected strategy on `image`, whose first byte sits at
    /// `base`. Only the recursive walker uses `entry`.
    pub fn run(
        &self,
        image: &[u8],
        base: Address,
        entry: Address,
        decoder: &dyn Decoder,
    ) -> Result<Disassembly, DisassemblyError> {
        match self {
            Strategy::Linear => linear::run(image, base, decoder),
            Strategy::Superset => superset::run(image, base, decoder),
            Strategy::Recursive => recursive::run_from(image, base, entry, decoder),
        }
    }

    /// Return all available strategies
    pub fn all() -> &'static [Strategy] {
        &[Strategy::Linear, Strategy::Superset, Strategy::Recursive]
    }
}

pub mod linear;
pub mod recursive;
pub mod superset;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mcs96Decoder;

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Linear.to_string(), "Linear sweep");
        assert_eq!(Strategy::Recursive.to_string(), "Recursive descent");
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(serde_json::to_string(&Strategy::Superset).unwrap(), "\"superset\"");
        assert_eq!(
            Strategy::from_str("recursive", true).unwrap(),
            Strategy::Recursive
        );
        assert_eq!(Strategy::all().len(), 3);
    }

    #[test]
    fn test_linear_strategy() {
        // NOP, RET
        let bytes = [0xFD, 0xF0];
        let decoder = Mcs96Decoder::new();
        let result = Strategy::Linear.run(&bytes, 0x2000, 0x2000, &decoder).unwrap();

        if let Disassembly::Stream(insns) = result {
            assert_eq!(insns.len(), 2);
            assert_eq!(insns[0].mnemonic.to_string(), "NOP");
            assert_eq!(insns[1].address, 0x2001);
        } else {
            panic!("Expected Stream disassembly");
        }
    }

    #[test]
    fn test_recursive_strategy_yields_cfg() {
        let decoder = Mcs96Decoder::new();
        let result = Strategy::Recursive.run(&[0xF0], 0, 0, &decoder).unwrap();
        assert!(matches!(result, Disassembly::Cfg(_)));
    }
}
