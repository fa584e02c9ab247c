//! Superset disassembly strategy
//!
//! Every byte offset is treated as a potential instruction start. The
//! decoder is a pure function, so offsets are decoded in parallel.

use std::time::Instant;

use rayon::prelude::*;

use crate::{Address, Decoder, Disassembly, DisassemblyError, Instruction};

/// Superset disassembly
///
/// # Arguments
/// * `image` - The binary image to disassemble
/// * `base` - Address of the first byte of `image`
/// * `decoder` - The decoder to use for disassembly
///
/// # Returns
/// Every successful decode, sorted by address
pub fn run(image: &[u8], base: Address, decoder: &dyn Decoder) -> Result<Disassembly, DisassemblyError> {
    log::debug!("Starting superset disassembly on {} bytes", image.len());
    let start_time = Instant::now();

    let mut instructions: Vec<Instruction> = (0..image.len())
        .into_par_iter()
        .filter_map(|offset| {
            decoder
                .decode(&image[offset..], base.wrapping_add(offset as Address))
                .ok()
        })
        .collect();

    // Sort by address for deterministic output
    instructions.sort_by_key(|insn| insn.address);

    log::debug!(
        "Superset disassembly completed in {:?}: {} candidates from {} offsets",
        start_time.elapsed(),
        instructions.len(),
        image.len()
    );

    Ok(Disassembly::Stream(instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mcs96Decoder;

    #[test]
    fn test_every_offset_decoded() {
        // LD R_30, R_32: each byte is also an opcode of its own
        let bytes = [0xA0, 0x32, 0x30];
        let insns = match run(&bytes, 0x100, &Mcs96Decoder::new()).unwrap() {
            Disassembly::Stream(insns) => insns,
            Disassembly::Cfg(_) => panic!("Expected Stream disassembly"),
        };

        assert_eq!(insns[0].address, 0x100);
        assert_eq!(insns[0].to_string(), "LD R_30, R_32");
        assert!(insns.windows(2).all(|w| w[0].address < w[1].address));
        assert!(insns.iter().all(|i| i.address < 0x103));
    }

    #[test]
    fn test_matches_single_decodes() {
        let bytes = [0x20, 0x05, 0xF0, 0xFD, 0x10];
        let decoder = Mcs96Decoder::new();
        let insns = match run(&bytes, 0, &decoder).unwrap() {
            Disassembly::Stream(insns) => insns,
            Disassembly::Cfg(_) => panic!("Expected Stream disassembly"),
        };

        for insn in &insns {
            let alone = decoder.decode(&bytes[insn.address as usize..], insn.address).unwrap();
            assert_eq!(&alone, insn);
        }
    }
}
