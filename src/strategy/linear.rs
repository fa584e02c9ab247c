//! Linear-sweep disassembly strategy

use std::time::Instant;

use crate::{Address, Decoder, Disassembly, DisassemblyError};

/// Linear-sweep disassembly.
///
/// Decodes from the first byte of `image`, stepping by each instruction's
/// length. Bytes that do not decode are skipped one at a time.
///
/// # Arguments
/// * `image` - The binary image to disassemble
/// * `base` - Address of the first byte of `image`
/// * `decoder` - The decoder to use for disassembly
///
/// # Returns
/// A stream of disassembled instructions in address order
pub fn run(image: &[u8], base: Address, decoder: &dyn Decoder) -> Result<Disassembly, DisassemblyError> {
    log::debug!("Starting linear sweep on {} bytes at 0x{:X}", image.len(), base);
    let start_time = Instant::now();

    let mut insns = Vec::new();
    let mut skipped = 0usize;
    let mut offset = 0usize;

    while offset < image.len() {
        let address = base.wrapping_add(offset as Address);
        match decoder.decode(&image[offset..], address) {
            Ok(insn) => {
                offset += insn.byte_length.max(1);
                insns.push(insn);
            }
            Err(err) => {
                log::trace!("0x{:X}: {}", address, err);
                offset += err.byte_length();
                skipped += 1;
            }
        }
    }

    log::debug!(
        "Linear sweep completed in {:?}: {} instructions, {} undecodable bytes",
        start_time.elapsed(),
        insns.len(),
        skipped
    );

    Ok(Disassembly::Stream(insns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mcs96Decoder;

    fn sweep(bytes: &[u8], base: Address) -> Vec<crate::Instruction> {
        match run(bytes, base, &Mcs96Decoder::new()).unwrap() {
            Disassembly::Stream(insns) => insns,
            Disassembly::Cfg(_) => panic!("Expected Stream disassembly"),
        }
    }

    #[test]
    fn test_empty_image() {
        assert!(sweep(&[], 0).is_empty());
    }

    #[test]
    fn test_sequential_addresses() {
        // CLR R_30; LD R_30, R_32; SJMP -2; RET
        let insns = sweep(&[0x01, 0x30, 0xA0, 0x32, 0x30, 0x27, 0xFE, 0xF0], 0x2000);
        let addresses: Vec<Address> = insns.iter().map(|i| i.address).collect();
        assert_eq!(addresses, vec![0x2000, 0x2002, 0x2005, 0x2007]);
        assert_eq!(insns[2].to_string(), "SJMP 0x2005");
    }

    #[test]
    fn test_skips_reserved_and_truncated_bytes() {
        // Reserved 0x10 decodes; a lone LJMP opcode is truncated
        let insns = sweep(&[0x10, 0xF0, 0xE7], 0);
        assert_eq!(insns.len(), 2);
        assert!(insns[0].reserved);
        assert_eq!(insns[1].address, 1);
    }
}
