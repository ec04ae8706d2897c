use crate::ecl::Ecl;
use crate::error::QrError;
use crate::reed_solomon;
use crate::tables::{self, EcBlockInfo};
use crate::version::Version;

/// Splits padded data codewords into their error-correction blocks, computes
/// each block's ECC codewords, and interleaves both the data and the ECC
/// codewords column-major, per spec §4.4.
///
/// Returns the final codeword sequence: all data codewords first
/// (interleaved across blocks), followed by all ECC codewords (also
/// interleaved). The version-dependent remainder bits this sequence is
/// padded out with at placement time are not included here.
pub(crate) fn interleave(
    data_codewords: &[u8],
    version: Version,
    ecl: Ecl,
) -> Result<Vec<u8>, QrError> {
    let info = tables::ec_info(version, ecl);
    if data_codewords.len() != info.total_data_codewords {
        return Err(QrError::InternalInvariant(
            "data codeword count did not match the EC block layout",
        ));
    }

    let blocks = split_into_blocks(data_codewords, &info);
    let ecc_blocks = compute_ecc_blocks(&blocks, info.ecc_codewords_per_block);

    let mut result = interleave_blocks(&blocks);
    result.extend(interleave_blocks(&ecc_blocks));
    Ok(result)
}

/// Splits `data` into `info.group1_blocks` blocks of `group1_size`
/// followed by `info.group2_blocks` blocks of `group2_size`.
fn split_into_blocks(data: &[u8], info: &EcBlockInfo) -> Vec<Vec<u8>> {
    let mut blocks = Vec::with_capacity(info.group1_blocks + info.group2_blocks);
    let mut offset = 0;
    for _ in 0..info.group1_blocks {
        blocks.push(data[offset..offset + info.group1_size].to_vec());
        offset += info.group1_size;
    }
    for _ in 0..info.group2_blocks {
        blocks.push(data[offset..offset + info.group2_size].to_vec());
        offset += info.group2_size;
    }
    blocks
}

/// Computes each block's error-correction codewords against a shared
/// generator polynomial of the given degree.
fn compute_ecc_blocks(blocks: &[Vec<u8>], ecc_len: usize) -> Vec<Vec<u8>> {
    let divisor = reed_solomon::generator_polynomial(ecc_len);
    blocks
        .iter()
        .map(|block| reed_solomon::compute_ecc_codewords(block, &divisor))
        .collect()
}

/// Reads blocks column-major: codeword 0 of every block, then codeword 1
/// of every block (skipping blocks shorter than the current column), and
/// so on.
fn interleave_blocks(blocks: &[Vec<u8>]) -> Vec<u8> {
    let max_len = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let mut result = Vec::new();
    for i in 0..max_len {
        for block in blocks {
            if let Some(&byte) = block.get(i) {
                result.push(byte);
            }
        }
    }
    result
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn pass_a_single_block_through_unchanged_in_order() {
        let info = tables::ec_info(Version::new(1), Ecl::Medium);
        let data: Vec<u8> = (0..info.total_data_codewords as u8).collect();
        let result = interleave(&data, Version::new(1), Ecl::Medium).unwrap();
        assert_eq!(&result[..info.total_data_codewords], &data[..]);
        assert_eq!(result.len(), info.total_data_codewords + info.ecc_codewords_per_block);
    }

    #[test]
    fn interleave_two_groups_column_major() {
        // Version 5-Q has two unequal-length groups (2 blocks of 15, 2 of 16).
        let info = tables::ec_info(Version::new(5), Ecl::Quartile);
        let data: Vec<u8> = (0..info.total_data_codewords as u8).collect();
        let result = interleave(&data, Version::new(5), Ecl::Quartile).unwrap();
        let blocks = split_into_blocks(&data, &info);
        let expected_data = interleave_blocks(&blocks);
        assert_eq!(&result[..expected_data.len()], &expected_data[..]);
    }

    #[test]
    fn reject_a_data_codeword_count_that_does_not_match_the_block_layout() {
        let err = interleave(&[0u8; 3], Version::new(1), Ecl::Medium);
        assert!(matches!(err, Err(QrError::InternalInvariant(_))));
    }
}
