mod format_info;
mod function_patterns;
mod mask;
mod placement;
mod penalty;

use crate::cell::{Cell, Polarity};
use crate::ecl::Ecl;
use crate::matrix::Matrix;
use crate::version::Version;

/// Builds the final symbol matrix, quiet zone included, for the given
/// interleaved `codewords`.
///
/// Builds all 8 masked candidates, scores each with the four standard
/// penalty rules, and keeps the lowest-scoring one, ties going to the
/// lowest mask number since candidates are generated and compared in
/// ascending mask order.
pub(crate) fn build(codewords: &[u8], version: Version, ecl: Ecl) -> Matrix<Cell> {
    let (_, winner) = build_scored(codewords, version, ecl);
    winner.with_quiet_zone(4, Cell::Data(Polarity::Light))
}

/// Same pipeline as [`build`], but returns the winning candidate's penalty
/// score alongside the matrix, without the quiet zone. Exists so tests can
/// check the published total-penalty golden vector without re-deriving the
/// mask-selection loop.
fn build_scored(codewords: &[u8], version: Version, ecl: Ecl) -> (u32, Matrix<Cell>) {
    let mut base = function_patterns::build(version);
    placement::place_data_bits(&mut base, codewords);

    let mut best: Option<(u32, Matrix<Cell>)> = None;
    for mask_pattern in 0u8..8 {
        let mut candidate = base.clone();
        mask::apply(&mut candidate, mask_pattern);
        format_info::write(&mut candidate, ecl, mask_pattern);
        let score = penalty::score(&candidate);
        let is_better = match &best {
            Some((best_score, _)) => score < *best_score,
            None => true,
        };
        if is_better {
            best = Some((score, candidate));
        }
    }

    best.expect("eight mask candidates are always generated")
}
