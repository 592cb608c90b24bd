use crate::version::Version;

/// Describes how a segment's payload bits are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mode {
    /// Decimal digits, packed three to ten bits.
    Numeric,
    /// The 45-character alphanumeric subset, packed two to eleven bits.
    Alphanumeric,
    /// Arbitrary bytes, eight bits each.
    Byte,
    /// An Extended Channel Interpretation designator.
    Eci,
}

impl Mode {
    // The 4-bit mode indicator written ahead of each segment.
    pub(crate) fn indicator(self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Eci => 0x7,
        }
    }

    // Bit width of the character count field at the given version.
    // Versions fall into three groups: 1-9, 10-26, and 27-40.
    pub(crate) fn char_count_bits(self, ver: Version) -> u8 {
        let group = usize::from((ver.value() + 7) / 17);
        (match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Eci => [0, 0, 0],
        })[group]
    }
}
