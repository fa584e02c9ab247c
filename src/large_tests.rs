#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Instant;

    use crate::decoder::parse;
    use crate::opcodes::{SIGNED_OPCODES, SIGNED_PREFIX, UNSIGNED_OPCODES};
    use crate::operand::AddressingMode;
    use crate::strategy::Strategy;
    use crate::{Address, Decoder, Disassembly, Mcs96Decoder};

    const IMAGE_SIZE: usize = 64 * 1024;

    // Deterministic filler so failures reproduce
    fn synthetic_image() -> Vec<u8> {
        let mut state: u32 = 0x2080_1996;
        (0..IMAGE_SIZE)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect()
    }

    /// Operand bytes for a sweep: the first one carries the mode flag in
    /// bit 0, the rest are an ordinary register number.
    fn encoding(prefix: &[u8], flag: bool) -> Vec<u8> {
        let mut bytes = prefix.to_vec();
        bytes.push(0x40 | u8::from(flag));
        bytes.extend_from_slice(&[0x40; 8]);
        bytes
    }

    fn expected_length(byte_length: u8, signed: bool, indexed_vl: bool, flag: bool) -> usize {
        usize::from(byte_length) + usize::from(signed) + usize::from(indexed_vl && flag)
    }

    #[test]
    fn test_every_unsigned_opcode() {
        let start = Instant::now();
        for (op, template) in UNSIGNED_OPCODES.iter().enumerate() {
            let op = op as u8;
            if op == SIGNED_PREFIX {
                continue;
            }
            for flag in [false, true] {
                let bytes = encoding(&[op], flag);
                let insn = parse(&bytes, 0x2000)
                    .unwrap_or_else(|e| panic!("0x{:02X} (flag {}): {}", op, flag, e));

                let indexed_vl = template.variable_length && template.mode == AddressingMode::Indexed;
                let expected = expected_length(template.byte_length, false, indexed_vl, flag);
                assert_eq!(insn.byte_length, expected, "length of 0x{:02X}", op);
                assert_eq!(insn.raw.len(), insn.byte_length, "raw of 0x{:02X}", op);
                assert_eq!(insn.mnemonic, template.mnemonic);
                assert!(!insn.signed);
            }
        }
        println!("Swept unsigned table in {:?}", start.elapsed());
    }

    #[test]
    fn test_every_signed_opcode() {
        for (op, template) in SIGNED_OPCODES.iter() {
            for flag in [false, true] {
                let bytes = encoding(&[SIGNED_PREFIX, *op], flag);
                let insn = parse(&bytes, 0x2000)
                    .unwrap_or_else(|e| panic!("signed 0x{:02X} (flag {}): {}", op, flag, e));

                let indexed_vl = template.variable_length && template.mode == AddressingMode::Indexed;
                let expected = expected_length(template.byte_length, true, indexed_vl, flag);
                assert_eq!(insn.byte_length, expected, "length of signed 0x{:02X}", op);
                assert_eq!(insn.raw.len(), insn.byte_length);
                assert!(insn.signed);
                assert!(insn.mnemonic_text().starts_with("SGN "));
            }
        }
    }

    #[test]
    fn test_variable_length_indexed_forms() {
        let mut seen = 0;
        for (op, template) in UNSIGNED_OPCODES.iter().enumerate() {
            if !(template.variable_length && template.mode == AddressingMode::Indexed) {
                continue;
            }
            let op = op as u8;
            let short = parse(&encoding(&[op], false), 0).unwrap();
            let long = parse(&encoding(&[op], true), 0).unwrap();

            assert_eq!(short.mode, AddressingMode::ShortIndexed, "0x{:02X}", op);
            assert_eq!(long.mode, AddressingMode::LongIndexed, "0x{:02X}", op);
            assert_eq!(long.byte_length, short.byte_length + 1, "0x{:02X}", op);
            seen += 1;
        }
        assert!(seen > 30, "only {} variable length opcodes", seen);
    }

    #[test]
    fn test_determinism_over_image() {
        let image = synthetic_image();
        for offset in (0..image.len()).step_by(97) {
            let address = 0x2000 + offset as Address;
            let first = parse(&image[offset..], address);
            let second = parse(&image[offset..], address);
            assert_eq!(first, second, "offset {}", offset);
        }
    }

    #[test]
    fn test_linear_sweep_large_image() {
        let image = synthetic_image();
        let decoder = Mcs96Decoder::new();

        let start = Instant::now();
        let result = Strategy::Linear.run(&image, 0x2000, 0x2000, &decoder).unwrap();
        println!("Linear sweep of {} bytes in {:?}", image.len(), start.elapsed());

        let insns = match result {
            Disassembly::Stream(insns) => insns,
            Disassembly::Cfg(_) => panic!("Expected Stream disassembly"),
        };
        assert!(!insns.is_empty());
        for pair in insns.windows(2) {
            assert!(pair[0].next_address() <= pair[1].address);
        }
        let end = 0x2000 + image.len() as Address;
        assert!(insns.iter().all(|i| i.next_address() <= end));
    }

    #[test]
    fn test_superset_contains_linear() {
        let image = synthetic_image();
        let decoder = Mcs96Decoder::new();

        let start = Instant::now();
        let superset = Strategy::Superset.run(&image, 0, 0, &decoder).unwrap();
        println!("Superset of {} bytes in {:?}", image.len(), start.elapsed());
        let linear = Strategy::Linear.run(&image, 0, 0, &decoder).unwrap();

        let candidates: HashSet<Address> =
            superset.all_instructions().iter().map(|i| i.address).collect();
        for insn in linear.all_instructions() {
            assert!(candidates.contains(&insn.address), "0x{:X} missing", insn.address);
        }
        assert!(superset.instruction_count() >= linear.instruction_count());
    }

    #[test]
    fn test_recursive_large_image() {
        let image = synthetic_image();
        let decoder = Mcs96Decoder::new();

        let start = Instant::now();
        let result = Strategy::Recursive.run(&image, 0x2000, 0x2000, &decoder).unwrap();
        println!("Recursive descent of {} bytes in {:?}", image.len(), start.elapsed());

        let blocks = match result {
            Disassembly::Cfg(blocks) => blocks,
            Disassembly::Stream(_) => panic!("Expected CFG disassembly"),
        };
        if let Some(first) = blocks.first() {
            assert_eq!(first.start, 0x2000);
        }
        let starts: HashSet<Address> = blocks.iter().map(|b| b.start).collect();
        assert_eq!(starts.len(), blocks.len(), "duplicate block starts");
        for block in &blocks {
            assert!(!block.insns.is_empty());
            assert_eq!(block.insns[0].address, block.start);
            // Every instruction in a block decodes the same on its own
            let insn = &block.insns[0];
            let offset = (insn.address - 0x2000) as usize;
            assert_eq!(decoder.decode(&image[offset..], insn.address).as_ref(), Ok(insn));
        }
    }
}
