//! Every shared, read-only reference table the pipeline consults.
//!
//! Values are transcribed from the QR Code (ISO/IEC 18004) Model 2 tables
//! for versions 1 through 5. `CAPACITIES`, `EC_INFO`, `REMAINDER_BITS`, and
//! `ALIGNMENT_CENTERS` are plain compile-time data and need no
//! initialization guard. `FORMAT_INFO` is the one table computed rather
//! than transcribed (via the same BCH code used to draw format bits), so it
//! is built lazily behind a `OnceLock` per §5's "thread-safe lazy
//! initialization on first use" option.

use std::sync::OnceLock;

use crate::ecl::Ecl;
use crate::version::Version;

/// Maximum character count `[numeric, alphanumeric, byte]` for one
/// (version, ECL) pair.
pub type Capacity = [usize; 3];

/// Per-(version, ECL) error-correction block layout.
///
/// Invariant: `group1_blocks * group1_size + group2_blocks * group2_size
/// == total_data_codewords`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EcBlockInfo {
    pub total_data_codewords: usize,
    pub ecc_codewords_per_block: usize,
    pub group1_blocks: usize,
    pub group1_size: usize,
    pub group2_blocks: usize,
    pub group2_size: usize,
}

// Indexed [version - 1][ecl.ordinal()]. Source: ISO/IEC 18004 Table 7.
const CAPACITIES: [[Capacity; 4]; 5] = [
    // Version 1
    [[41, 25, 17], [34, 20, 14], [27, 16, 11], [17, 10, 7]],
    // Version 2
    [[77, 47, 32], [63, 38, 26], [48, 29, 20], [34, 20, 14]],
    // Version 3
    [[127, 77, 53], [101, 61, 42], [77, 47, 32], [58, 35, 24]],
    // Version 4
    [[187, 114, 78], [149, 90, 62], [111, 67, 46], [82, 50, 34]],
    // Version 5
    [[255, 154, 106], [202, 122, 84], [144, 87, 60], [106, 64, 44]],
];

/// Returns the character capacity for `(version, ecl)`, indexed
/// `[numeric, alphanumeric, byte]`.
pub(crate) fn capacity(version: Version, ecl: Ecl) -> Capacity {
    CAPACITIES[usize::from(version.value()) - 1][ecl.ordinal()]
}

// Indexed [version - 1][ecl.ordinal()]. Source: ISO/IEC 18004 Table 9.
const EC_INFO: [[EcBlockInfo; 4]; 5] = [
    // Version 1
    [
        EcBlockInfo { total_data_codewords: 19, ecc_codewords_per_block: 7, group1_blocks: 1, group1_size: 19, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 16, ecc_codewords_per_block: 10, group1_blocks: 1, group1_size: 16, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 13, ecc_codewords_per_block: 13, group1_blocks: 1, group1_size: 13, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 9, ecc_codewords_per_block: 17, group1_blocks: 1, group1_size: 9, group2_blocks: 0, group2_size: 0 },
    ],
    // Version 2
    [
        EcBlockInfo { total_data_codewords: 34, ecc_codewords_per_block: 10, group1_blocks: 1, group1_size: 34, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 28, ecc_codewords_per_block: 16, group1_blocks: 1, group1_size: 28, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 22, ecc_codewords_per_block: 22, group1_blocks: 1, group1_size: 22, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 16, ecc_codewords_per_block: 28, group1_blocks: 1, group1_size: 16, group2_blocks: 0, group2_size: 0 },
    ],
    // Version 3
    [
        EcBlockInfo { total_data_codewords: 55, ecc_codewords_per_block: 15, group1_blocks: 1, group1_size: 55, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 44, ecc_codewords_per_block: 26, group1_blocks: 1, group1_size: 44, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 34, ecc_codewords_per_block: 18, group1_blocks: 2, group1_size: 17, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 26, ecc_codewords_per_block: 22, group1_blocks: 2, group1_size: 13, group2_blocks: 0, group2_size: 0 },
    ],
    // Version 4
    [
        EcBlockInfo { total_data_codewords: 80, ecc_codewords_per_block: 20, group1_blocks: 1, group1_size: 80, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 64, ecc_codewords_per_block: 18, group1_blocks: 2, group1_size: 32, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 48, ecc_codewords_per_block: 26, group1_blocks: 2, group1_size: 24, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 36, ecc_codewords_per_block: 16, group1_blocks: 4, group1_size: 9, group2_blocks: 0, group2_size: 0 },
    ],
    // Version 5
    [
        EcBlockInfo { total_data_codewords: 108, ecc_codewords_per_block: 26, group1_blocks: 1, group1_size: 108, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 86, ecc_codewords_per_block: 24, group1_blocks: 2, group1_size: 43, group2_blocks: 0, group2_size: 0 },
        EcBlockInfo { total_data_codewords: 62, ecc_codewords_per_block: 18, group1_blocks: 2, group1_size: 15, group2_blocks: 2, group2_size: 16 },
        EcBlockInfo { total_data_codewords: 46, ecc_codewords_per_block: 22, group1_blocks: 2, group1_size: 11, group2_blocks: 2, group2_size: 12 },
    ],
];

/// Returns the EC block layout for `(version, ecl)`.
pub(crate) fn ec_info(version: Version, ecl: Ecl) -> EcBlockInfo {
    EC_INFO[usize::from(version.value()) - 1][ecl.ordinal()]
}

// Index 0 is version 1 (unused as a table index elsewhere, kept for
// readability of the literal). Source: spec §4.5 / ISO/IEC 18004 Table 1.
const REMAINDER_BITS: [usize; 5] = [0, 7, 7, 7, 7];

/// Returns the version-dependent zero-bit pad appended after interleaving.
pub(crate) fn remainder_bits(version: Version) -> usize {
    REMAINDER_BITS[usize::from(version.value()) - 1]
}

/// Returns the alignment pattern center coordinates `(row, col)` for
/// `version`. Empty for version 1.
pub(crate) fn alignment_centers(version: Version) -> &'static [(usize, usize)] {
    const V2: [(usize, usize); 1] = [(18, 18)];
    const V3: [(usize, usize); 1] = [(22, 22)];
    const V4: [(usize, usize); 1] = [(26, 26)];
    const V5: [(usize, usize); 1] = [(30, 30)];
    match version.value() {
        1 => &[],
        2 => &V2,
        3 => &V3,
        4 => &V4,
        5 => &V5,
        _ => unreachable!("version out of range"),
    }
}

/// 15-bit format-information strings, `[ecl.ordinal()][mask 0..8]`.
///
/// Each entry is the BCH(15,5) codeword for the 5-bit payload
/// `ecl.format_bits() << 3 | mask`, XORed with the fixed mask
/// `101010000010010` (0x5412), per spec §4.6.
fn format_info_table() -> &'static [[u16; 8]; 4] {
    static TABLE: OnceLock<[[u16; 8]; 4]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [[0u16; 8]; 4];
        for (ecl_idx, row) in table.iter_mut().enumerate() {
            let ecl = [Ecl::Low, Ecl::Medium, Ecl::Quartile, Ecl::High][ecl_idx];
            for (mask, slot) in row.iter_mut().enumerate() {
                *slot = compute_format_bits(ecl, mask as u8);
            }
        }
        table
    })
}

/// Computes the BCH-encoded 15-bit format string for one (ecl, mask) pair.
fn compute_format_bits(ecl: Ecl, mask: u8) -> u16 {
    let data: u32 = u32::from(ecl.format_bits() << 3 | mask);
    let mut rem: u32 = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    (((data << 10) | rem) ^ 0x5412) as u16
}

/// Returns the 15-bit format-information string for `(ecl, mask)`, with
/// `mask` in `0..8`.
pub(crate) fn format_info(ecl: Ecl, mask: u8) -> u16 {
    format_info_table()[ecl.ordinal()][usize::from(mask)]
}
