//! End-to-end encoding scenarios, checked against the behavior the
//! ISO/IEC 18004 Model 2 standard prescribes.

use pretty_assertions::assert_eq;
use qrsym_rs::{EccLevel, Mask, Mode, QrCode, QrError, Segment, Version};

#[test]
fn mixed_text_uses_byte_mode_and_version_two() {
    // Comma, space, and mixed case rule out the text modes.
    let qr = QrCode::encode_text("Hello, World!", EccLevel::High).unwrap();
    assert_eq!(qr.version(), Version::new(2).unwrap());
    assert_eq!(qr.size(), 25);
    assert_eq!(qr.ecc(), EccLevel::High);
}

#[test]
fn uppercase_text_uses_alphanumeric_mode_at_version_one() {
    let qr = QrCode::encode_text("HELLO WORLD", EccLevel::Quartile).unwrap();
    assert_eq!(qr.version(), Version::MIN);
    assert_eq!(qr.size(), 21);
    // High would not fit version 1, so the boost leaves Quartile alone.
    assert_eq!(qr.ecc(), EccLevel::Quartile);
}

#[test]
fn short_binary_payload_boosts_to_high_at_version_one() {
    let qr = QrCode::encode_binary(&[0x01, 0x02, 0x03], EccLevel::Medium).unwrap();
    assert_eq!(qr.version(), Version::MIN);
    assert_eq!(qr.ecc(), EccLevel::High);
}

#[test]
fn segment_list_is_encoded_in_caller_order() {
    let segs = vec![
        Segment::make_alphanumeric("HELLO ").unwrap(),
        Segment::make_numeric("12345").unwrap(),
    ];
    assert_eq!(segs[0].mode(), Mode::Alphanumeric);
    assert_eq!(segs[1].mode(), Mode::Numeric);
    let qr = QrCode::encode_segments(&segs, EccLevel::Quartile).unwrap();
    assert_eq!(qr.version(), Version::MIN);
}

#[test]
fn alphanumeric_capacity_boundary_at_version_forty_low() {
    let text = "A".repeat(4296);
    let qr = QrCode::encode_text(&text, EccLevel::Low).unwrap();
    assert_eq!(qr.version(), Version::MAX);
    assert_eq!(qr.ecc(), EccLevel::Low);

    let text = "A".repeat(4297);
    let err = QrCode::encode_text(&text, EccLevel::Low).unwrap_err();
    assert!(matches!(err, QrError::DataTooLong { .. }), "got {err:?}");
}

#[test]
fn empty_text_is_rejected_before_encoding() {
    assert_eq!(QrCode::encode_text("", EccLevel::Low), Err(QrError::EmptyText));
}

#[test]
fn function_patterns_survive_masking() {
    let qr = QrCode::encode_text("HELLO WORLD", EccLevel::Quartile).unwrap();
    let size = qr.size();
    // Finder cores and rings at all three corners.
    for (cx, cy) in [(3, 3), (size - 4, 3), (3, size - 4)] {
        assert!(qr.get(cx, cy));
        assert!(!qr.get(cx - 1, cy - 2));
        assert!(qr.get(cx - 3, cy - 3));
    }
    // The timing patterns alternate, starting dark at even indices.
    assert!(qr.get(8, 6));
    assert!(!qr.get(9, 6));
    assert!(qr.get(6, 8));
    assert!(!qr.get(6, 9));
    // The dark module above the lower-left finder.
    assert!(qr.get(8, size - 8));
}

#[test]
fn forced_mask_and_pinned_version_are_honored() {
    let segs = [Segment::make_numeric("31415926").unwrap()];
    for mask in 0..8 {
        let qr = QrCode::encode_segments_advanced(
            &segs,
            EccLevel::Low,
            Version::new(3).unwrap(),
            Version::new(3).unwrap(),
            Some(Mask::new(mask)),
            false,
        )
        .unwrap();
        assert_eq!(qr.version(), Version::new(3).unwrap());
        assert_eq!(qr.mask().value(), mask);
        assert_eq!(qr.ecc(), EccLevel::Low);
    }
}

#[test]
fn automatic_mask_matches_the_best_forced_mask() {
    // Re-encoding with the automatically chosen mask forced must
    // reproduce the same symbol.
    let segs = [Segment::make_alphanumeric("MASK CHECK").unwrap()];
    let auto = QrCode::encode_segments(&segs, EccLevel::Medium).unwrap();
    let forced = QrCode::encode_segments_advanced(
        &segs,
        auto.ecc(),
        auto.version(),
        auto.version(),
        Some(auto.mask()),
        false,
    )
    .unwrap();
    assert_eq!(auto, forced);
}

#[test]
fn version_seven_carries_version_information() {
    let segs = [Segment::make_bytes(b"version info")];
    let qr = QrCode::encode_segments_advanced(
        &segs,
        EccLevel::Low,
        Version::new(7).unwrap(),
        Version::new(7).unwrap(),
        None,
        false,
    )
    .unwrap();
    let size = qr.size();
    assert_eq!(size, 45);
    // Version 7's codeword is 0x07C94; bit 2 is set, bits 0 and 1 clear.
    // The first stamp fills a 3x6 region left of the top-right finder,
    // lowest bit at (size - 11, 0); the second is its transpose.
    assert!(!qr.get(size - 11, 0));
    assert!(!qr.get(size - 10, 0));
    assert!(qr.get(size - 9, 0));
    assert!(!qr.get(0, size - 11));
    assert!(!qr.get(0, size - 10));
    assert!(qr.get(0, size - 9));
}

#[test]
fn eci_segment_prefixes_a_byte_payload() {
    // ECI 26 declares UTF-8; the segment carries no characters itself.
    let segs = [
        Segment::make_eci(26).unwrap(),
        Segment::make_bytes("héllo".as_bytes()),
    ];
    let qr = QrCode::encode_segments(&segs, EccLevel::Low).unwrap();
    assert_eq!(qr.version(), Version::MIN);
}

#[test]
fn numeric_only_text_picks_numeric_mode_capacity() {
    // 41 digits are the version 1 Low ceiling for numeric mode; byte
    // mode would overflow it several times over.
    let digits = "1".repeat(41);
    let qr = QrCode::encode_text(&digits, EccLevel::Low).unwrap();
    assert_eq!(qr.version(), Version::MIN);
}
