use crate::bits::{bit, BitBuffer};
use crate::error::QrError;
use crate::mode::Mode;
use crate::version::Version;

// The set of all legal characters in alphanumeric mode, where each
// character's value is its index in the string.
pub(crate) static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// A segment of character, binary, or control data in a QR Code symbol.
///
/// Segments are immutable value objects. The usual way to obtain one is a
/// factory such as [`Segment::make_numeric`] or the mode-picking
/// [`Segment::make_segment`]; the low-level way is to assemble the bit
/// payload by hand and call [`Segment::new`].
///
/// A segment imposes no length limit of its own, but symbols do: even under
/// the most favorable conditions a QR Code holds 7089 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    // Character count for text modes, byte count for byte mode, 0 for ECI.
    // Not the same as the bit length of `data`.
    num_chars: usize,
    data: Vec<bool>,
}

impl Segment {
    /// Creates a segment from raw parts.
    ///
    /// The character count must agree with the mode and the data length per
    /// the standard; this constructor does not check the relation.
    pub fn new(mode: Mode, num_chars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            num_chars,
            data,
        }
    }

    /// Returns a segment representing the given binary data in byte mode.
    ///
    /// Any byte slice is acceptable; any text can be encoded this way via
    /// its UTF-8 bytes.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer::with_capacity(data.len() * 8);
        for &b in data {
            for i in (0..8).rev() {
                bb.push(bit(u32::from(b), i));
            }
        }
        Segment::new(Mode::Byte, data.len(), bb.into_bits())
    }

    /// Returns a segment representing the given decimal digits in numeric
    /// mode. The empty string yields an empty segment.
    ///
    /// Returns [`QrError::BadCharset`] if any character is not in `0-9`.
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(text.len() * 3 + text.len().div_ceil(3));
        let mut group: u32 = 0;
        let mut count: u8 = 0;
        for c in text.chars() {
            let digit = c.to_digit(10).ok_or(QrError::BadCharset {
                character: c,
                mode: Mode::Numeric,
            })?;
            group = group * 10 + digit;
            count += 1;
            if count == 3 {
                bb.append_bits(group, 10)?;
                group = 0;
                count = 0;
            }
        }
        if count > 0 {
            // 1 or 2 digits remaining
            bb.append_bits(group, count * 3 + 1)?;
        }
        Ok(Segment::new(Mode::Numeric, text.len(), bb.into_bits()))
    }

    /// Returns a segment representing the given text in alphanumeric mode.
    /// The empty string yields an empty segment.
    ///
    /// The alphabet is `0-9`, `A-Z` (uppercase only), space, and
    /// `$ % * + - . / :`. Returns [`QrError::BadCharset`] for anything else.
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(text.len() * 5 + text.len().div_ceil(2));
        let mut pair: u32 = 0;
        let mut count: u8 = 0;
        for c in text.chars() {
            let index = ALPHANUMERIC_CHARSET
                .find(c)
                .ok_or(QrError::BadCharset {
                    character: c,
                    mode: Mode::Alphanumeric,
                })?;
            pair = pair * 45 + index as u32;
            count += 1;
            if count == 2 {
                bb.append_bits(pair, 11)?;
                pair = 0;
                count = 0;
            }
        }
        if count > 0 {
            // 1 character remaining
            bb.append_bits(pair, 6)?;
        }
        Ok(Segment::new(Mode::Alphanumeric, text.len(), bb.into_bits()))
    }

    /// Returns a segment representing an Extended Channel Interpretation
    /// designator with the given assignment value.
    ///
    /// Returns [`QrError::BadEci`] if the value is outside `[0, 1000000)`.
    pub fn make_eci(assign_value: u32) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(24);
        if assign_value < 1 << 7 {
            bb.append_bits(assign_value, 8)?;
        } else if assign_value < 1 << 14 {
            bb.append_bits(0b10, 2)?;
            bb.append_bits(assign_value, 14)?;
        } else if assign_value < 1_000_000 {
            bb.append_bits(0b110, 3)?;
            bb.append_bits(assign_value, 21)?;
        } else {
            return Err(QrError::BadEci(assign_value));
        }
        Ok(Segment::new(Mode::Eci, 0, bb.into_bits()))
    }

    /// Returns a segment for the given text, picking the densest mode that
    /// covers it: numeric, then alphanumeric, then UTF-8 bytes.
    ///
    /// Returns [`QrError::EmptyText`] for empty input. This factory never
    /// splits the text into more than one segment.
    pub fn make_segment(text: &str) -> Result<Self, QrError> {
        if text.is_empty() {
            Err(QrError::EmptyText)
        } else if Segment::is_numeric(text) {
            Segment::make_numeric(text)
        } else if Segment::is_alphanumeric(text) {
            Segment::make_alphanumeric(text)
        } else {
            Ok(Segment::make_bytes(text.as_bytes()))
        }
    }

    /// Returns the mode indicator of this segment.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the character count field value of this segment.
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Returns the payload bits of this segment.
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Tests whether every character of the string is a decimal digit.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    /// Tests whether every character of the string is in the alphanumeric
    /// mode alphabet.
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }

    // The number of bits the given segments occupy at the given version,
    // headers included. None if some segment's character count overflows
    // its count field width, or the total overflows usize.
    pub(crate) fn total_bits(segs: &[Segment], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let cc_bits = seg.mode.char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(cc_bits.into()) {
                if seg.num_chars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(cc_bits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }
}
