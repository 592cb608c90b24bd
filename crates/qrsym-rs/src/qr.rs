use crate::blocks;
use crate::ecc::EccLevel;
use crate::encoder;
use crate::error::QrError;
use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::penalty;
use crate::segment::Segment;
use crate::version::Version;

/// A finished QR Code symbol: an immutable square grid of dark and light
/// modules, as described by ISO/IEC 18004 (Model 2).
///
/// Symbols are created through the `encode_*` factory functions, which pick
/// the smallest version able to carry the payload. Renderers read the grid
/// through [`QrCode::get`]; everything else about the symbol is fixed once
/// construction finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QrCode {
    version: Version,
    ecc: EccLevel,
    mask: Mask,
    size: i32,
    modules: Vec<bool>,
}

impl QrCode {
    /// Encodes Unicode text at the given error correction level, picking
    /// the densest single segment mode that covers it.
    ///
    /// The resulting level may be higher than requested when that fits in
    /// the same version. Returns [`QrError::EmptyText`] for empty input and
    /// [`QrError::DataTooLong`] when no version can carry the text.
    pub fn encode_text(text: &str, ecc: EccLevel) -> Result<Self, QrError> {
        let seg = Segment::make_segment(text)?;
        Self::encode_segments(&[seg], ecc)
    }

    /// Encodes a string of decimal digits in numeric mode.
    pub fn encode_numeric(digits: &str, ecc: EccLevel) -> Result<Self, QrError> {
        let seg = Segment::make_numeric(digits)?;
        Self::encode_segments(&[seg], ecc)
    }

    /// Encodes text drawn from the 45-character alphanumeric alphabet.
    pub fn encode_alphanumeric(text: &str, ecc: EccLevel) -> Result<Self, QrError> {
        let seg = Segment::make_alphanumeric(text)?;
        Self::encode_segments(&[seg], ecc)
    }

    /// Encodes arbitrary binary data in byte mode.
    pub fn encode_binary(data: &[u8], ecc: EccLevel) -> Result<Self, QrError> {
        Self::encode_segments(&[Segment::make_bytes(data)], ecc)
    }

    /// Encodes a caller-assembled segment list, in order, at the given
    /// error correction level.
    ///
    /// The smallest fitting version is chosen, and the level is boosted to
    /// the highest one that still fits that version.
    pub fn encode_segments(segs: &[Segment], ecc: EccLevel) -> Result<Self, QrError> {
        Self::encode_segments_advanced(segs, ecc, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes a segment list with full control over the version range,
    /// mask choice, and error correction boosting.
    ///
    /// The smallest fitting version within `[min_version, max_version]` is
    /// chosen. Passing `Some(mask)` skips the penalty evaluation and forces
    /// that mask; `None` scores all eight and takes the cheapest. With
    /// `boost_ecc` the level may rise above `ecc` when the chosen version
    /// has room; it never rises at the cost of a larger version.
    ///
    /// Panics if `min_version > max_version`.
    pub fn encode_segments_advanced(
        segs: &[Segment],
        ecc: EccLevel,
        min_version: Version,
        max_version: Version,
        mask: Option<Mask>,
        boost_ecc: bool,
    ) -> Result<Self, QrError> {
        let (version, ecc, codewords) =
            encoder::prepare(segs, ecc, min_version, max_version, boost_ecc)?;
        Ok(Self::from_codewords(version, ecc, &codewords, mask))
    }

    /// Builds a symbol from pre-assembled data codewords (segment headers
    /// and padding included, error correction excluded).
    ///
    /// This is the low-level entry point under the `encode_*` family; the
    /// codeword slice must be exactly the data capacity of the given
    /// version and level.
    pub fn from_codewords(
        version: Version,
        ecc: EccLevel,
        data_codewords: &[u8],
        mask: Option<Mask>,
    ) -> Self {
        let all_codewords = blocks::add_ecc_and_interleave(data_codewords, version, ecc);

        let mut matrix = Matrix::new(version);
        matrix.draw_function_patterns(version, ecc);
        matrix.draw_codewords(&all_codewords);

        let mask = mask.unwrap_or_else(|| penalty::select_mask(&mut matrix, ecc));
        matrix.apply_mask(mask);
        matrix.draw_format_bits(ecc, mask);

        QrCode {
            version,
            ecc,
            mask,
            size: version.size(),
            modules: matrix.into_modules(),
        }
    }

    /// Returns this symbol's version, in the range `[1, 40]`.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this symbol's error correction level.
    pub fn ecc(&self) -> EccLevel {
        self.ecc
    }

    /// Returns the mask applied to this symbol.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the side length in modules, in the range `[21, 177]`.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the color of the module at `(x, y)`: true for dark, false
    /// for light. The top-left corner is `(0, 0)`; coordinates outside the
    /// symbol read as light.
    pub fn get(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && self.modules[(y * self.size + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_light() {
        let qr = QrCode::encode_text("HELLO WORLD", EccLevel::Quartile).unwrap();
        assert!(!qr.get(-1, 0));
        assert!(!qr.get(0, -1));
        assert!(!qr.get(qr.size(), 0));
        assert!(!qr.get(0, qr.size()));
    }

    #[test]
    fn size_tracks_the_version() {
        let qr = QrCode::encode_text("HELLO WORLD", EccLevel::Quartile).unwrap();
        assert_eq!(qr.size(), i32::from(qr.version().value()) * 4 + 17);
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = QrCode::encode_text("determinism", EccLevel::Medium).unwrap();
        let b = QrCode::encode_text("determinism", EccLevel::Medium).unwrap();
        assert_eq!(a, b);
    }
}
