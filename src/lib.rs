//! Core IR, traits, and dispatch for the MCS-96 disassembler.
//!
//! This library decodes machine code for the Intel MCS-96 family (8096,
//! 80C196KB/KC/EA and relatives) into annotated [`Instruction`] records:
//! mnemonic, resolved operands, addressing mode, control-flow edges and a
//! pseudo-code line. On top of the single-instruction decoder it ships
//! linear, superset and recursive-descent image walkers and several output
//! formats.
//!
//! # Basic Usage
//!
//! ```rust
//! use mcs96_disasm::decoder::parse;
//!
//! // SJMP +5 at 0x100
//! let insn = parse(&[0x20, 0x05], 0x100).unwrap();
//! assert_eq!(insn.to_string(), "SJMP 0x107");
//! assert!(insn.flow.jumps.contains_key(&0x107));
//! ```
//!
//! Whole images go through a [`strategy::Strategy`]:
//!
//! ```rust,no_run
//! use mcs96_disasm::{disassemble_file, config::DisasmConfig};
//!
//! let config = DisasmConfig { base_address: 0x2000, ..Default::default() };
//! let disassembly = disassemble_file("rom.bin", &config).unwrap();
//! for insn in disassembly.all_instructions() {
//!     println!("{:#06X}: {}", insn.address, insn);
//! }
//! ```

pub mod config;
pub mod decoder;
pub mod displacement;
pub mod flow;
pub mod format;
pub mod instruction;
mod large_tests;
pub mod mnemonic;
pub mod opcodes;
pub mod operand;
pub mod pseudo;
pub mod registers;
mod resolve;
pub mod strategy;

use std::path::Path;

pub use crate::decoder::{DecodeError, Mcs96Decoder};
pub use crate::flow::ControlFlow;
pub use crate::instruction::Instruction;

use crate::config::DisasmConfig;

/// Represents an address in the MCS-96 code space
pub type Address = u32;

/// Longest encoding: a signed-prefixed long-indexed three-operand form.
pub const MAX_INSTRUCTION_SIZE: usize = 7;

/// Decoder trait: turns the bytes at one address into an instruction.
pub trait Decoder: Send + Sync {
    /// Decode the instruction at the start of `bytes`, which sits at
    /// `address` in the target's address space.
    fn decode(&self, bytes: &[u8], address: Address) -> Result<Instruction, DecodeError>;
}

/// One basic block for CFG strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicBlock {
    /// Starting address of the basic block
    pub start: Address,
    /// Instructions within this basic block
    pub insns: Vec<Instruction>,
    /// Successor addresses (branch targets and fall-through)
    pub succs: Vec<Address>,
}

impl BasicBlock {
    pub fn new(start: Address) -> Self {
        Self {
            start,
            insns: Vec::new(),
            succs: Vec::new(),
        }
    }

    /// Address just past the last instruction in the block
    pub fn end_address(&self) -> Option<Address> {
        self.insns.last().map(Instruction::next_address)
    }

    pub fn last_instruction(&self) -> Option<&Instruction> {
        self.insns.last()
    }

    /// Size of the block in bytes
    pub fn size(&self) -> usize {
        self.insns.iter().map(|i| i.byte_length).sum()
    }
}

/// Unified disassembly output.
#[derive(Debug, Clone)]
pub enum Disassembly {
    /// Instructions in address order
    Stream(Vec<Instruction>),
    /// Control flow graph of basic blocks
    Cfg(Vec<BasicBlock>),
}

impl Disassembly {
    pub fn instruction_count(&self) -> usize {
        match self {
            Disassembly::Stream(insns) => insns.len(),
            Disassembly::Cfg(blocks) => blocks.iter().map(|b| b.insns.len()).sum(),
        }
    }

    /// All instructions sorted by address.
    pub fn all_instructions(&self) -> Vec<Instruction> {
        let mut result = match self {
            Disassembly::Stream(insns) => insns.clone(),
            Disassembly::Cfg(blocks) => blocks
                .iter()
                .flat_map(|block| block.insns.iter().cloned())
                .collect(),
        };
        result.sort_by_key(|insn| insn.address);
        result
    }

    /// Every instruction's edges merged into one map.
    pub fn control_flow(&self) -> ControlFlow {
        let mut flow = ControlFlow::new();
        let mut merge = |insns: &[Instruction]| {
            for insn in insns {
                flow.merge(&insn.flow);
            }
        };
        match self {
            Disassembly::Stream(insns) => merge(insns.as_slice()),
            Disassembly::Cfg(blocks) => {
                for block in blocks {
                    merge(block.insns.as_slice());
                }
            }
        }
        flow
    }
}

/// Error type for disassembly operations
#[derive(Debug, thiserror::Error)]
pub enum DisassemblyError {
    /// Decoder error
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecodeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Generic(String),
}

/// Disassembles a raw ROM image according to `config`.
pub fn disassemble(image: &[u8], config: &DisasmConfig) -> Result<Disassembly, DisassemblyError> {
    config.validate()?;
    let decoder = Mcs96Decoder::new().with_register_names(config.register_names);
    config
        .strategy
        .run(image, config.base_address, config.entry(), &decoder)
}

/// Reads a raw ROM image from `path` and disassembles it.
pub fn disassemble_file(
    path: impl AsRef<Path>,
    config: &DisasmConfig,
) -> Result<Disassembly, DisassemblyError> {
    let image = std::fs::read(path)?;
    disassemble(&image, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::parse;
    use std::io::Write;

    #[test]
    fn test_basic_block_operations() {
        let mut block = BasicBlock::new(0x2000);
        block.insns.push(parse(&[0x01, 0x30], 0x2000).unwrap());
        block.insns.push(parse(&[0xF0], 0x2002).unwrap());

        assert_eq!(block.end_address(), Some(0x2003));
        assert_eq!(block.last_instruction().unwrap().mnemonic.to_string(), "RET");
        assert_eq!(block.size(), 3);
    }

    #[test]
    fn test_disassembly_views() {
        let cfg = Disassembly::Cfg(vec![
            BasicBlock {
                start: 0x2004,
                insns: vec![parse(&[0xC8, 0x30], 0x2004).unwrap()],
                succs: vec![],
            },
            BasicBlock {
                start: 0x2000,
                insns: vec![
                    parse(&[0xC8, 0x30], 0x2000).unwrap(),
                    parse(&[0x20, 0x00], 0x2002).unwrap(),
                ],
                succs: vec![0x2004],
            },
        ]);

        assert_eq!(cfg.instruction_count(), 3);
        let addresses: Vec<Address> = cfg.all_instructions().iter().map(|i| i.address).collect();
        assert_eq!(addresses, vec![0x2000, 0x2002, 0x2004]);

        let flow = cfg.control_flow();
        assert_eq!(flow.xrefs[&0x30].len(), 2);
        assert_eq!(flow.jumps[&0x2004].len(), 1);
    }

    #[test]
    fn test_disassemble_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x01, 0x30, 0xF0]).unwrap();

        let config = DisasmConfig {
            base_address: 0x2000,
            ..Default::default()
        };
        let disassembly = disassemble_file(file.path(), &config).unwrap();
        let insns = disassembly.all_instructions();
        assert_eq!(insns.len(), 2);
        assert_eq!(insns[0].address, 0x2000);
        assert_eq!(insns[1].address, 0x2002);
    }

    #[test]
    fn test_missing_file() {
        let err = disassemble_file("/nonexistent/rom.bin", &DisasmConfig::default()).unwrap_err();
        assert!(matches!(err, DisassemblyError::Io(_)));
    }
}
