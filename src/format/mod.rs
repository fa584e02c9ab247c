//! Output formats for disassembly results

mod csv;
mod json;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Address, Disassembly, DisassemblyError, Instruction};

/// Supported output formats for disassembly results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text listing (default)
    #[default]
    Text,
    /// JSON document (hierarchical)
    Json,
    /// JSON Lines (one object per instruction)
    #[value(name = "jsonl")]
    #[serde(rename = "jsonl")]
    JsonLines,
    /// Comma-separated values
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonLines => write!(f, "jsonl"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "jsonlines" => Ok(OutputFormat::JsonLines),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl OutputFormat {
    /// Get all available output formats
    pub fn available_formats() -> &'static [Self] {
        &[
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::JsonLines,
            OutputFormat::Csv,
        ]
    }

    /// Get a formatter for this output format
    pub fn get_formatter(&self) -> Box<dyn DisassemblyFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::JsonLines => Box::new(JsonLinesFormatter),
            OutputFormat::Csv => Box::new(CsvFormatter),
        }
    }
}

/// Formatter trait for disassembly output
pub trait DisassemblyFormatter {
    /// Format a disassembly result
    fn format(&self, disassembly: &Disassembly, base_addr: Address) -> Result<String, DisassemblyError>;
}

/// Format disassembly as an assembler-style listing
pub struct TextFormatter;

/// Format disassembly in JSON
pub struct JsonFormatter;

/// Format disassembly in JSON Lines
pub struct JsonLinesFormatter;

/// Format disassembly in CSV
pub struct CsvFormatter;

/// One listing line: address, raw bytes, mnemonic, operands and pseudo-code.
pub fn text_line(insn: &Instruction) -> String {
    let line = format!(
        "0x{:06X}: {:<20} {:<8} {:<30}",
        insn.address,
        insn.hex_bytes(),
        insn.mnemonic_text(),
        insn.operand_text()
    );
    if insn.pseudo_code.is_empty() {
        line.trim_end().to_string()
    } else {
        format!("{} ; {}", line, insn.pseudo_code)
    }
}

impl DisassemblyFormatter for TextFormatter {
    fn format(&self, disassembly: &Disassembly, base_addr: Address) -> Result<String, DisassemblyError> {
        let mut output = String::new();

        match disassembly {
            Disassembly::Stream(insns) => {
                output.push_str(&format!("Disassembly at 0x{:X}:\n\n", base_addr));

                for insn in insns {
                    output.push_str(&text_line(insn));
                    output.push('\n');
                }
            }
            Disassembly::Cfg(blocks) => {
                output.push_str(&format!("Control Flow Graph at 0x{:X}:\n\n", base_addr));

                for block in blocks {
                    output.push_str(&format!("Block at 0x{:06X}:\n", block.start));

                    for insn in &block.insns {
                        output.push_str("  ");
                        output.push_str(&text_line(insn));
                        output.push('\n');
                    }

                    if block.succs.is_empty() {
                        output.push_str("  No successors (terminal block)\n");
                    } else {
                        let succs: Vec<String> =
                            block.succs.iter().map(|succ| format!("0x{:06X}", succ)).collect();
                        output.push_str(&format!("  Successors: {}\n", succs.join(", ")));
                    }

                    output.push('\n');
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::decoder::parse;
    use crate::BasicBlock;

    // 0x2000: CLR R_30
    // 0x2002: JE 0x2007
    // 0x2004: ADD R_30, #1234
    // 0x2008: RET
    pub(crate) fn sample_instructions() -> Vec<Instruction> {
        vec![
            parse(&[0x01, 0x30], 0x2000).unwrap(),
            parse(&[0xDF, 0x03], 0x2002).unwrap(),
            parse(&[0x65, 0x34, 0x12, 0x30], 0x2004).unwrap(),
            parse(&[0xF0], 0x2008).unwrap(),
        ]
    }

    pub(crate) fn sample_blocks() -> Vec<BasicBlock> {
        let insns = sample_instructions();
        vec![
            BasicBlock {
                start: 0x2000,
                insns: insns[..2].to_vec(),
                succs: vec![0x2007, 0x2004],
            },
            BasicBlock {
                start: 0x2004,
                insns: insns[2..].to_vec(),
                succs: vec![],
            },
        ]
    }

    #[test]
    fn test_text_line() {
        let insns = sample_instructions();
        let line = text_line(&insns[2]);
        assert!(line.starts_with("0x002004: 65 34 12 30"));
        assert!(line.contains("ADD      R_30, #1234"));
        assert!(line.ends_with("; $r_30 = $r_30 + 0x1234"));
    }

    #[test]
    fn test_text_formatter_stream() {
        let disasm = Disassembly::Stream(sample_instructions());
        let result = TextFormatter.format(&disasm, 0x2000).unwrap();

        assert!(result.starts_with("Disassembly at 0x2000:"));
        assert!(result.contains("0x002000: 01 30"));
        assert!(result.contains("JE       0x2007"));
        assert!(result.contains("0x002008: f0"));
        assert_eq!(result.lines().filter(|l| l.starts_with("0x")).count(), 4);
    }

    #[test]
    fn test_text_formatter_cfg() {
        let disasm = Disassembly::Cfg(sample_blocks());
        let result = TextFormatter.format(&disasm, 0x2000).unwrap();

        assert!(result.contains("Block at 0x002000"));
        assert!(result.contains("Block at 0x002004"));
        assert!(result.contains("Successors: 0x002007, 0x002004"));
        assert!(result.contains("No successors"));
    }

    #[test]
    fn test_format_names() {
        for format in OutputFormat::available_formats() {
            let parsed: OutputFormat = format.to_string().parse().unwrap();
            assert_eq!(&parsed, format);
        }
        assert_eq!(serde_json::to_string(&OutputFormat::JsonLines).unwrap(), "\"jsonl\"");
        assert!("ngram".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_selection() {
        let disasm = Disassembly::Stream(sample_instructions());
        for format in OutputFormat::available_formats() {
            let output = format.get_formatter().format(&disasm, 0x2000).unwrap();
            assert!(!output.is_empty(), "{} produced no output", format);
        }
    }
}
