/// The error correction level in a QR Code symbol.
///
/// Levels are ordered by ascending correction strength, so `Low < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EccLevel {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl EccLevel {
    // Row index into the capacity tables.
    pub(crate) fn ordinal(self) -> usize {
        match self {
            EccLevel::Low => 0,
            EccLevel::Medium => 1,
            EccLevel::Quartile => 2,
            EccLevel::High => 3,
        }
    }

    // The 2-bit value packed into the format information. Distinct from the
    // ordinal: the standard numbers the levels L=1, M=0, Q=3, H=2.
    pub(crate) fn format_bits(self) -> u8 {
        match self {
            EccLevel::Low => 1,
            EccLevel::Medium => 0,
            EccLevel::Quartile => 3,
            EccLevel::High => 2,
        }
    }
}
