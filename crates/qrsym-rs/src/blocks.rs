use crate::ecc::EccLevel;
use crate::gf256;
use crate::tables;
use crate::version::Version;

// Splits the data codewords into blocks, appends the Reed-Solomon remainder
// to each, and interleaves the blocks column-major into the final codeword
// sequence laid onto the grid.
//
// Blocks come in two lengths: the first S = B - (R mod B) blocks are one
// data codeword shorter than the rest. Short blocks carry a virtual padding
// slot at their last data column, which the interleave pass skips.
pub(crate) fn add_ecc_and_interleave(data: &[u8], ver: Version, ecc: EccLevel) -> Vec<u8> {
    assert_eq!(data.len(), tables::num_data_codewords(ver, ecc));

    let num_blocks = tables::num_error_correction_blocks(ver, ecc);
    let block_ecc_len = tables::ecc_codewords_per_block(ver, ecc);
    let raw_codewords = tables::num_raw_data_modules(ver) / 8;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_len = raw_codewords / num_blocks;

    let rs_divisor = gf256::divisor(block_ecc_len);
    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut k = 0;
    for i in 0..num_blocks {
        let data_len = short_block_len - block_ecc_len + usize::from(i >= num_short_blocks);
        let mut block = data[k..k + data_len].to_vec();
        k += data_len;
        let ecc_bytes = gf256::remainder(&block, &rs_divisor);
        if i < num_short_blocks {
            block.push(0); // virtual padding slot
        }
        block.extend_from_slice(&ecc_bytes);
        blocks.push(block);
    }

    let mut result = Vec::with_capacity(raw_codewords);
    for i in 0..=short_block_len {
        for (j, block) in blocks.iter().enumerate() {
            if i != short_block_len - block_ecc_len || j >= num_short_blocks {
                result.push(block[i]);
            }
        }
    }
    debug_assert_eq!(result.len(), raw_codewords);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_output_is_data_followed_by_ecc() {
        // Version 1 Low: one block, 19 data + 7 ECC codewords.
        let ver = Version::MIN;
        let data: Vec<u8> = (0..19).collect();
        let out = add_ecc_and_interleave(&data, ver, EccLevel::Low);
        assert_eq!(out.len(), 26);
        assert_eq!(&out[..19], data.as_slice());
        let expected_ecc = gf256::remainder(&data, &gf256::divisor(7));
        assert_eq!(&out[19..], expected_ecc.as_slice());
    }

    #[test]
    fn short_and_long_blocks_interleave_column_major() {
        // Version 5 High: 4 blocks over 134 raw codewords, 22 ECC each,
        // so 2 short blocks of 11 data codewords and 2 long ones of 12.
        let ver = Version::new(5).unwrap();
        let data: Vec<u8> = (0..46).collect();
        let out = add_ecc_and_interleave(&data, ver, EccLevel::High);
        assert_eq!(out.len(), 134);
        // First interleave column: first byte of each block's data run.
        assert_eq!(&out[..4], &[data[0], data[11], data[22], data[34]]);
        // Column 11 is the last shared data column before the virtual
        // padding slot of the short blocks kicks in: only the long blocks
        // contribute their 12th data codeword.
        let idx = 4 * 11;
        assert_eq!(&out[idx..idx + 2], &[data[33], data[45]]);
    }
}
