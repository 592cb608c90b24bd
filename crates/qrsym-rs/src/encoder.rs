use crate::bits::BitBuffer;
use crate::ecc::EccLevel;
use crate::error::QrError;
use crate::segment::Segment;
use crate::tables;
use crate::version::Version;

// Turns a list of segments into the padded data codeword sequence, choosing
// the smallest version in the allowed range and optionally boosting the
// error correction level. Returns the chosen version and level along with
// the codewords.
pub(crate) fn prepare(
    segs: &[Segment],
    ecc: EccLevel,
    min_version: Version,
    max_version: Version,
    boost_ecc: bool,
) -> Result<(Version, EccLevel, Vec<u8>), QrError> {
    assert!(min_version <= max_version, "invalid version range");

    // Find the smallest version whose data capacity fits the payload.
    let mut version = min_version;
    let used_bits = loop {
        let capacity_bits = tables::num_data_codewords(version, ecc) * 8;
        match Segment::total_bits(segs, version) {
            Some(n) if n <= capacity_bits => break n,
            _ if version >= max_version => {
                let needed_bits = segs.iter().fold(0usize, |acc, seg| {
                    let header = 4 + usize::from(seg.mode().char_count_bits(version));
                    acc.saturating_add(header).saturating_add(seg.data().len())
                });
                return Err(QrError::DataTooLong {
                    needed_bits,
                    capacity_bits,
                });
            }
            _ => version = Version::new_unchecked(version.value() + 1),
        }
    };

    // Raise the error correction level as far as the chosen version allows.
    let mut ecc = ecc;
    if boost_ecc {
        for candidate in [EccLevel::Medium, EccLevel::Quartile, EccLevel::High] {
            if candidate > ecc && used_bits <= tables::num_data_codewords(version, candidate) * 8 {
                ecc = candidate;
            }
        }
    }

    // Concatenate the segments into one bit stream.
    let mut bb = BitBuffer::with_capacity(used_bits);
    for seg in segs {
        bb.append_bits(seg.mode().indicator(), 4)?;
        bb.append_bits(seg.num_chars() as u32, seg.mode().char_count_bits(version))?;
        bb.append_run(seg.data());
    }
    debug_assert_eq!(bb.len(), used_bits);

    // Terminator of up to 4 zero bits, then zero-pad to a byte boundary.
    let capacity_bits = tables::num_data_codewords(version, ecc) * 8;
    debug_assert!(bb.len() <= capacity_bits);
    let terminator = std::cmp::min(4, capacity_bits - bb.len());
    bb.append_bits(0, terminator as u8)?;
    bb.append_bits(0, (bb.len().wrapping_neg() & 7) as u8)?;
    debug_assert_eq!(bb.len() % 8, 0);

    // Alternating pad bytes up to the full data capacity.
    for &pad in [0xECu32, 0x11].iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.append_bits(pad, 8)?;
    }

    Ok((version, ecc, bb.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_numeric_example_packs_as_in_the_standard() {
        let segs = [Segment::make_numeric("01234567").unwrap()];
        let (version, ecc, codewords) =
            prepare(&segs, EccLevel::Medium, Version::MIN, Version::MAX, false).unwrap();
        assert_eq!(version, Version::MIN);
        assert_eq!(ecc, EccLevel::Medium);
        assert_eq!(
            codewords,
            vec![
                0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
                0x11, 0xEC, 0x11,
            ]
        );
    }

    #[test]
    fn alphanumeric_example_packs_as_in_the_standard() {
        let segs = [Segment::make_alphanumeric("HELLO WORLD").unwrap()];
        let (version, ecc, codewords) =
            prepare(&segs, EccLevel::Quartile, Version::MIN, Version::MAX, true).unwrap();
        assert_eq!(version, Version::MIN);
        // High would need 74 bits in 72; the boost stays at Quartile.
        assert_eq!(ecc, EccLevel::Quartile);
        assert_eq!(
            codewords,
            vec![
                0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC,
            ]
        );
    }

    #[test]
    fn boost_raises_the_level_without_changing_the_version() {
        let segs = [Segment::make_numeric("01234567").unwrap()];
        let (version, ecc, codewords) =
            prepare(&segs, EccLevel::Medium, Version::MIN, Version::MAX, true).unwrap();
        assert_eq!(version, Version::MIN);
        assert_eq!(ecc, EccLevel::High);
        assert_eq!(codewords.len(), 9);
        assert_eq!(&codewords[..8], &[0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11]);
    }

    #[test]
    fn version_search_stops_at_the_first_fit() {
        // 20 payload bytes cannot fit version 1 Low (19 data codewords
        // minus the 12-bit header) but fit version 2.
        let segs = [Segment::make_bytes(&[0u8; 20])];
        let (version, _, _) =
            prepare(&segs, EccLevel::Low, Version::MIN, Version::MAX, false).unwrap();
        assert_eq!(version, Version::new(2).unwrap());
    }

    #[test]
    fn capped_version_range_reports_data_too_long() {
        let segs = [Segment::make_bytes(&[0u8; 20])];
        let err = prepare(&segs, EccLevel::Low, Version::MIN, Version::MIN, false).unwrap_err();
        assert_eq!(
            err,
            QrError::DataTooLong {
                needed_bits: 4 + 8 + 160,
                capacity_bits: 19 * 8,
            }
        );
    }

    #[test]
    fn empty_segment_list_fills_version_one_with_padding() {
        let (version, ecc, codewords) =
            prepare(&[], EccLevel::Low, Version::MIN, Version::MAX, false).unwrap();
        assert_eq!(version, Version::MIN);
        assert_eq!(ecc, EccLevel::Low);
        assert_eq!(codewords.len(), 19);
        // One zero byte from the terminator, then the alternating pads.
        assert_eq!(&codewords[..3], &[0x00, 0xEC, 0x11]);
    }
}
