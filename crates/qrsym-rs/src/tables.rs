use crate::ecc::EccLevel;
use crate::version::Version;

// Indexed by [ecc ordinal][version]; index 0 of each row is padding and
// holds an illegal value.
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Low
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // Medium
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    // Quartile
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // High
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Low
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    // Medium
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    // Quartile
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    // High
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

// Number of error correction codewords in each block at the given version
// and level.
pub(crate) fn ecc_codewords_per_block(ver: Version, ecc: EccLevel) -> usize {
    ECC_CODEWORDS_PER_BLOCK[ecc.ordinal()][usize::from(ver.value())] as usize
}

// Number of error correction blocks at the given version and level.
pub(crate) fn num_error_correction_blocks(ver: Version, ecc: EccLevel) -> usize {
    NUM_ERROR_CORRECTION_BLOCKS[ecc.ordinal()][usize::from(ver.value())] as usize
}

// Number of data modules available at the given version once all function
// modules are excluded. Includes remainder bits, so the result need not be
// a multiple of 8. Always in [208, 29648].
pub(crate) fn num_raw_data_modules(ver: Version) -> usize {
    let ver = usize::from(ver.value());
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

// Number of 8-bit data codewords (ECC excluded, remainder bits discarded)
// at the given version and level.
pub(crate) fn num_data_codewords(ver: Version, ecc: EccLevel) -> usize {
    num_raw_data_modules(ver) / 8
        - ecc_codewords_per_block(ver, ecc) * num_error_correction_blocks(ver, ecc)
}
