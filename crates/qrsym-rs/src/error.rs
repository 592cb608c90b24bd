use thiserror::Error;

use crate::mode::Mode;

/// The failure conditions reported by segment factories and the encoder.
///
/// All errors are synchronous and leave no partial output behind. Ways to
/// recover from [`QrError::DataTooLong`] include lowering the error
/// correction level, widening the version range passed to
/// `QrCode::encode_segments_advanced()`, shortening the payload, or
/// reshaping the text to fit a denser segment mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    /// The payload does not fit in any permitted version at the requested
    /// error correction level.
    #[error("data needs {needed_bits} bits but at most {capacity_bits} are available")]
    DataTooLong {
        /// Header plus payload bits at the largest version tried.
        needed_bits: usize,
        /// Data capacity in bits of the largest version tried.
        capacity_bits: usize,
    },

    /// A character outside the mode's alphabet was passed to a strict
    /// segment factory.
    #[error("character {character:?} cannot be encoded in {mode:?} mode")]
    BadCharset {
        /// The offending character.
        character: char,
        /// The mode whose alphabet it violates.
        mode: Mode,
    },

    /// An ECI assignment value outside `[0, 1000000)`.
    #[error("ECI assignment value {0} is outside [0, 1000000)")]
    BadEci(u32),

    /// The automatic segment factory cannot pick a mode for empty text.
    #[error("cannot choose a segment mode for empty text")]
    EmptyText,

    /// A version number outside `[1, 40]`.
    #[error("version {0} is outside the range 1 to 40")]
    InvalidVersion(u8),

    /// `BitBuffer::append_bits` was called with a width outside `[0, 31]`
    /// or a value that does not fit in that width.
    #[error("cannot append value {value} as a {len}-bit field")]
    InvalidBitWidth {
        /// The value that was to be appended.
        value: u32,
        /// The requested field width in bits.
        len: u8,
    },
}
