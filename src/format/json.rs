//! JSON and JSON Lines output formatters

use serde::Serialize;
use serde_json::json;

use super::DisassemblyFormatter;
use crate::{Address, BasicBlock, ControlFlow, Disassembly, DisassemblyError, Instruction};

/// Serializable basic block for JSON output
#[derive(Serialize)]
struct BasicBlockJson<'a> {
    /// Starting address of the block
    start: String,
    /// Instructions in this block
    instructions: &'a [Instruction],
    /// Successor blocks
    successors: Vec<String>,
}

/// Serializable disassembly result for JSON output
#[derive(Serialize)]
struct DisassemblyJson<'a> {
    /// Address of the first image byte
    base_address: String,
    /// Type of disassembly ("stream" or "cfg")
    #[serde(rename = "type")]
    disasm_type: &'static str,
    instruction_count: usize,
    /// Instructions (for Stream disassembly)
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<&'a [Instruction]>,
    /// Basic blocks (for CFG disassembly)
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<Vec<BasicBlockJson<'a>>>,
    /// Edges of every instruction, keyed by target address
    control_flow: ControlFlow,
}

fn json_error(e: serde_json::Error) -> DisassemblyError {
    DisassemblyError::Format(format!("JSON serialization error: {}", e))
}

impl DisassemblyFormatter for super::JsonFormatter {
    fn format(&self, disassembly: &Disassembly, base_addr: Address) -> Result<String, DisassemblyError> {
        let mut result = DisassemblyJson {
            base_address: format!("0x{:x}", base_addr),
            disasm_type: "stream",
            instruction_count: disassembly.instruction_count(),
            instructions: None,
            blocks: None,
            control_flow: disassembly.control_flow(),
        };

        match disassembly {
            Disassembly::Stream(insns) => result.instructions = Some(insns.as_slice()),
            Disassembly::Cfg(blocks) => {
                result.disasm_type = "cfg";
                result.blocks = Some(blocks.iter().map(block_to_json).collect());
            }
        }

        serde_json::to_string_pretty(&result).map_err(json_error)
    }
}

impl DisassemblyFormatter for super::JsonLinesFormatter {
    fn format(&self, disassembly: &Disassembly, _base_addr: Address) -> Result<String, DisassemblyError> {
        let mut output = String::new();

        match disassembly {
            Disassembly::Stream(insns) => {
                for insn in insns {
                    output.push_str(&serde_json::to_string(insn).map_err(json_error)?);
                    output.push('\n');
                }
            }
            Disassembly::Cfg(blocks) => {
                for block in blocks {
                    let block_start = format!("0x{:x}", block.start);
                    for insn in &block.insns {
                        let mut value = serde_json::to_value(insn).map_err(json_error)?;
                        if let Some(object) = value.as_object_mut() {
                            object.insert("block_start".to_string(), json!(block_start));
                        }
                        output.push_str(&serde_json::to_string(&value).map_err(json_error)?);
                        output.push('\n');
                    }
                }
            }
        }

        Ok(output)
    }
}

/// Convert a basic block to JSON format
fn block_to_json(block: &BasicBlock) -> BasicBlockJson<'_> {
    BasicBlockJson {
        start: format!("0x{:x}", block.start),
        instructions: &block.insns,
        successors: block.succs.iter().map(|succ| format!("0x{:x}", succ)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_blocks, sample_instructions};
    use super::super::{JsonFormatter, JsonLinesFormatter};
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_stream() {
        let disasm = Disassembly::Stream(sample_instructions());
        let text = JsonFormatter.format(&disasm, 0x2000).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["type"], "stream");
        assert_eq!(doc["base_address"], "0x2000");
        assert_eq!(doc["instruction_count"], 4);

        let add = &doc["instructions"][2];
        assert_eq!(add["mnemonic"], "ADD");
        assert_eq!(add["address"], 0x2004);
        assert_eq!(add["raw"], "65341230");
        assert_eq!(add["pseudo_code"], "$r_30 = $r_30 + 0x1234");
        let expected = &sample_instructions()[2];
        assert_eq!(add["description"], expected.description);
        assert_eq!(add["long_description"], expected.long_description);
        assert!(add["long_description"].as_str().is_some_and(|text| !text.is_empty()));
        assert_eq!(doc["control_flow"]["jumps"]["8199"][0]["mnemonic"], "JE");
    }

    #[test]
    fn test_json_cfg() {
        let disasm = Disassembly::Cfg(sample_blocks());
        let text = JsonFormatter.format(&disasm, 0x2000).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["type"], "cfg");
        assert!(doc.get("instructions").is_none());
        assert_eq!(doc["blocks"][0]["start"], "0x2000");
        assert_eq!(doc["blocks"][0]["successors"][0], "0x2007");
        assert_eq!(doc["blocks"][1]["instructions"][1]["mnemonic"], "RET");
    }

    #[test]
    fn test_json_lines() {
        let disasm = Disassembly::Stream(sample_instructions());
        let text = JsonLinesFormatter.format(&disasm, 0x2000).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        for line in &lines {
            let value: Value = serde_json::from_str(line).unwrap();
            assert!(value["address"].is_u64());
        }
    }

    #[test]
    fn test_json_lines_cfg_block_start() {
        let disasm = Disassembly::Cfg(sample_blocks());
        let text = JsonLinesFormatter.format(&disasm, 0x2000).unwrap();
        let last: Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();

        assert_eq!(last["block_start"], "0x2004");
        assert_eq!(last["mnemonic"], "RET");
    }
}
