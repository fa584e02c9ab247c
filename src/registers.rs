//! Register and address text formatting.
//!
//! The decoder never builds operand text itself; it hands a [`Format`] and a
//! raw value to a [`RegisterNames`] implementation. [`PlainRegisters`] is
//! purely numeric, [`Mcs96Registers`] additionally tags the well-known
//! special-function registers of the 80C196 lower register file.

/// Text templates used for operand values and control-flow edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `R_1A`
    Reg,
    /// `[R_1A]`
    Ptr,
    /// `[R_1A]+`
    PtrInc,
    /// `0x2080`
    Hex,
    /// `0x1A`
    Hex2,
    /// `0x001A`
    Hex4,
    /// `0x00201A`
    Hex6,
    /// `#1A`
    Imm2,
    /// `#001A`
    Imm4,
    /// `5`
    Dec,
}

impl Format {
    /// Plain numeric rendering with no register annotation.
    pub fn apply(self, value: u32) -> String {
        match self {
            Format::Reg => format!("R_{value:02X}"),
            Format::Ptr => format!("[R_{value:02X}]"),
            Format::PtrInc => format!("[R_{value:02X}]+"),
            Format::Hex => format!("0x{value:X}"),
            Format::Hex2 => format!("0x{value:02X}"),
            Format::Hex4 => format!("0x{value:04X}"),
            Format::Hex6 => format!("0x{value:06X}"),
            Format::Imm2 => format!("#{value:02X}"),
            Format::Imm4 => format!("#{value:04X}"),
            Format::Dec => value.to_string(),
        }
    }

    /// True for the formats that name a register rather than a constant or
    /// an address.
    pub fn is_register(self) -> bool {
        matches!(self, Format::Reg | Format::Ptr | Format::PtrInc)
    }
}

/// Formats raw register numbers and addresses for display.
///
/// Implementations must be usable from several decoding threads at once.
pub trait RegisterNames: Send + Sync {
    fn format_register(&self, format: Format, value: u32) -> String;
}

/// Numeric formatting only.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRegisters;

impl RegisterNames for PlainRegisters {
    fn format_register(&self, format: Format, value: u32) -> String {
        format.apply(value)
    }
}

/// Appends ` ~(Name)` to the special-function registers of the lower
/// register file, e.g. `R_18 ~(Stack Pointer)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mcs96Registers;

impl Mcs96Registers {
    pub fn name(value: u32) -> Option<&'static str> {
        let name = match value {
            0x00 => "Zero Register",
            0x02 => "Ones Register",
            0x08 => "Interrupt Mask",
            0x09 => "Interrupt Pending",
            0x12 => "Interrupt Pending 1",
            0x13 => "Interrupt Mask 1",
            0x14 => "Window Select",
            0x18 => "Stack Pointer",
            _ => return None,
        };
        Some(name)
    }
}

impl RegisterNames for Mcs96Registers {
    fn format_register(&self, format: Format, value: u32) -> String {
        match Self::name(value) {
            Some(name) if format.is_register() => {
                let text = format!("R_{value:02X} ~({name})");
                match format {
                    Format::Ptr => format!("[{text}]"),
                    Format::PtrInc => format!("[{text}]+"),
                    _ => text,
                }
            }
            _ => format.apply(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Format::Reg, 0x1A, "R_1A")]
    #[case(Format::Ptr, 0x04, "[R_04]")]
    #[case(Format::PtrInc, 0x30, "[R_30]+")]
    #[case(Format::Hex, 0x2080, "0x2080")]
    #[case(Format::Hex2, 0x0A, "0x0A")]
    #[case(Format::Hex4, 0x1A, "0x001A")]
    #[case(Format::Hex6, 0x1234, "0x001234")]
    #[case(Format::Imm2, 0x05, "#05")]
    #[case(Format::Imm4, 0x1234, "#1234")]
    #[case(Format::Dec, 7, "7")]
    fn test_plain_formats(#[case] format: Format, #[case] value: u32, #[case] expected: &str) {
        assert_eq!(PlainRegisters.format_register(format, value), expected);
    }

    #[test]
    fn test_named_registers() {
        let names = Mcs96Registers;
        assert_eq!(names.format_register(Format::Reg, 0x18), "R_18 ~(Stack Pointer)");
        assert_eq!(
            names.format_register(Format::Ptr, 0x00),
            "[R_00 ~(Zero Register)]"
        );
        assert_eq!(names.format_register(Format::Reg, 0x40), "R_40");
        // constants are never annotated
        assert_eq!(names.format_register(Format::Imm2, 0x02), "#02");
        assert_eq!(names.format_register(Format::Hex, 0x18), "0x18");
    }
}
