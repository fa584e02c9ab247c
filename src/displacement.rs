//! Branch displacement decoding.
//!
//! `SJMP` and `SCALL` pack an 11-bit displacement into the low three bits of
//! the opcode and the following byte. The other relative forms use plain
//! little-endian two's-complement fields of 8, 16 or 24 bits.

use crate::Address;

/// Extended (24-bit) targets are confined to the 21-bit address space.
pub const EXTENDED_ADDRESS_MASK: Address = 0x1F_FFFF;

/// Decodes the 11-bit displacement of a short jump or call.
///
/// Only the low three bits of `opcode` belong to the displacement; bit 2 is
/// its sign. The result lies in `-1024..=1023`.
pub fn short_offset(opcode: u8, low: u8) -> i32 {
    let mut high = opcode & 0x07;
    if high & 0x04 != 0 {
        high |= 0xFC;
    }
    i32::from(i16::from_be_bytes([high, low]))
}

pub fn offset8(byte: u8) -> i32 {
    i32::from(byte as i8)
}

pub fn offset16(bytes: [u8; 2]) -> i32 {
    i32::from(i16::from_le_bytes(bytes))
}

/// Sign-extends a little-endian 24-bit field.
pub fn offset24(bytes: [u8; 3]) -> i32 {
    let raw = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]);
    (raw << 8) >> 8
}

/// Target of a relative branch: the address following the instruction plus
/// the displacement.
pub fn relative_target(address: Address, length: usize, offset: i32) -> Address {
    address
        .wrapping_add(length as Address)
        .wrapping_add_signed(offset)
}

/// Target of a 24-bit relative branch, masked to the extended address space.
pub fn extended_target(address: Address, length: usize, offset: i32) -> Address {
    relative_target(address, length, offset) & EXTENDED_ADDRESS_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x20, 0x00, 0)]
    #[case(0x20, 0x05, 5)]
    #[case(0x23, 0xFF, 1023)]
    #[case(0x24, 0x00, -1024)]
    #[case(0x27, 0xFF, -1)]
    #[case(0x2F, 0xFE, -2)]
    fn test_short_offset(#[case] opcode: u8, #[case] low: u8, #[case] expected: i32) {
        assert_eq!(short_offset(opcode, low), expected);
    }

    #[test]
    fn test_short_offset_ignores_opcode_high_bits() {
        assert_eq!(short_offset(0x2B, 0x10), short_offset(0x23, 0x10));
    }

    #[test]
    fn test_fixed_width_offsets() {
        assert_eq!(offset8(0x7F), 127);
        assert_eq!(offset8(0x80), -128);
        assert_eq!(offset16([0x00, 0x80]), -32768);
        assert_eq!(offset16([0x34, 0x12]), 0x1234);
        assert_eq!(offset24([0xFF, 0xFF, 0xFF]), -1);
        assert_eq!(offset24([0x00, 0x00, 0x80]), -0x80_0000);
        assert_eq!(offset24([0x56, 0x34, 0x12]), 0x12_3456);
    }

    #[test]
    fn test_targets() {
        assert_eq!(relative_target(0x100, 2, 5), 0x107);
        assert_eq!(relative_target(0x2080, 2, -2), 0x2080);
        assert_eq!(relative_target(0, 2, -4), u32::MAX - 1);
        assert_eq!(extended_target(0, 4, -4), 0);
        assert_eq!(extended_target(0x1F_FFF0, 4, 0x20), 0x14);
    }
}
