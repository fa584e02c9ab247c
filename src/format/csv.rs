//! CSV output formatter

use super::DisassemblyFormatter;
use crate::{Address, Disassembly, DisassemblyError, Instruction};

const HEADER: [&str; 8] = [
    "address",
    "bytes",
    "mnemonic",
    "operands",
    "mode",
    "length",
    "pseudocode",
    "block_address",
];

fn csv_error(e: impl std::fmt::Display) -> DisassemblyError {
    DisassemblyError::Format(format!("CSV serialization error: {}", e))
}

fn write_row<W: std::io::Write>(
    writer: &mut ::csv::Writer<W>,
    insn: &Instruction,
    block: Option<Address>,
) -> Result<(), DisassemblyError> {
    let block = block.map(|start| format!("0x{:x}", start)).unwrap_or_default();
    writer
        .write_record([
            format!("0x{:x}", insn.address),
            insn.hex_bytes(),
            insn.mnemonic_text(),
            insn.operand_text(),
            insn.mode.as_str().to_string(),
            insn.byte_length.to_string(),
            insn.pseudo_code.clone(),
            block,
        ])
        .map_err(csv_error)
}

impl DisassemblyFormatter for super::CsvFormatter {
    fn format(&self, disassembly: &Disassembly, _base_addr: Address) -> Result<String, DisassemblyError> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER).map_err(csv_error)?;

        match disassembly {
            Disassembly::Stream(insns) => {
                for insn in insns {
                    write_row(&mut writer, insn, None)?;
                }
            }
            Disassembly::Cfg(blocks) => {
                for block in blocks {
                    for insn in &block.insns {
                        write_row(&mut writer, insn, Some(block.start))?;
                    }
                }
            }
        }

        let bytes = writer.into_inner().map_err(csv_error)?;
        String::from_utf8(bytes).map_err(csv_error)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_blocks, sample_instructions};
    use super::super::CsvFormatter;
    use super::*;

    #[test]
    fn test_csv_stream() {
        let disasm = Disassembly::Stream(sample_instructions());
        let text = CsvFormatter.format(&disasm, 0x2000).unwrap();
        let mut reader = ::csv::Reader::from_reader(text.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());

        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[2][0], "0x2004");
        assert_eq!(&rows[2][1], "65 34 12 30");
        assert_eq!(&rows[2][2], "ADD");
        // Operand lists contain commas and must survive quoting
        assert_eq!(&rows[2][3], "R_30, #1234");
        assert_eq!(&rows[2][5], "4");
        assert_eq!(&rows[2][7], "");
    }

    #[test]
    fn test_csv_cfg() {
        let disasm = Disassembly::Cfg(sample_blocks());
        let text = CsvFormatter.format(&disasm, 0x2000).unwrap();
        let mut reader = ::csv::Reader::from_reader(text.as_bytes());

        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[1][7], "0x2000");
        assert_eq!(&rows[3][7], "0x2004");
    }
}
