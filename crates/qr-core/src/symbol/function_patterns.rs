use crate::cell::Cell;
use crate::matrix::Matrix;
use crate::tables;
use crate::version::Version;

/// Builds a fresh, `version`-sized matrix with every function pattern
/// (finders, separators, alignment patterns, timing patterns, the dark
/// module) drawn and the format-information strips marked `Reserved`.
///
/// Everything left `Empty` afterward is exactly the data-carrying area
/// [`super::placement::place_data_bits`] fills in.
pub(super) fn build(version: Version) -> Matrix<Cell> {
    let size = version.size();
    let mut matrix = Matrix::filled(size, Cell::Empty);

    draw_finder(&mut matrix, 0, 0);
    draw_finder(&mut matrix, 0, size - 7);
    draw_finder(&mut matrix, size - 7, 0);

    for &(row, col) in tables::alignment_centers(version) {
        draw_alignment(&mut matrix, row, col);
    }

    draw_timing_patterns(&mut matrix, size);
    matrix[(4 * usize::from(version.value()) + 9, 8)] = Cell::DarkModule;
    super::format_info::reserve(&mut matrix);

    matrix
}

/// Draws one 7x7 finder pattern (three concentric dark/light/dark rings)
/// with its top-left corner at `(top, left)`, plus the one-module light
/// separator ring around it.
fn draw_finder(matrix: &mut Matrix<Cell>, top: usize, left: usize) {
    for dr in 0..7 {
        for dc in 0..7 {
            let ring = dr.min(6 - dr).min(dc.min(6 - dc));
            let cell = if ring == 1 { Cell::FinderLight } else { Cell::FinderDark };
            matrix[(top + dr, left + dc)] = cell;
        }
    }
    draw_separator_ring(matrix, top, left);
}

/// Draws the light separator border immediately around a 7x7 finder,
/// clipped to the matrix bounds (finders at the symbol's edges only need
/// the ring on their interior sides).
fn draw_separator_ring(matrix: &mut Matrix<Cell>, top: usize, left: usize) {
    let side = matrix.side();
    let row_range = top.saturating_sub(1)..=(top + 7).min(side - 1);
    let col_range = left.saturating_sub(1)..=(left + 7).min(side - 1);
    for row in row_range.clone() {
        for col in col_range.clone() {
            let in_finder = (top..top + 7).contains(&row) && (left..left + 7).contains(&col);
            if in_finder {
                continue;
            }
            if matrix.get(row, col) == Some(&Cell::Empty) {
                matrix[(row, col)] = Cell::Separator;
            }
        }
    }
}

/// Draws one 5x5 alignment pattern (dark/light/dark rings) centered at
/// `(center_row, center_col)`.
fn draw_alignment(matrix: &mut Matrix<Cell>, center_row: usize, center_col: usize) {
    for dr in -2i32..=2 {
        for dc in -2i32..=2 {
            let ring = dr.unsigned_abs().max(dc.unsigned_abs());
            let cell = if ring == 1 { Cell::AlignmentLight } else { Cell::AlignmentDark };
            let row = (center_row as i32 + dr) as usize;
            let col = (center_col as i32 + dc) as usize;
            matrix[(row, col)] = cell;
        }
    }
}

/// Draws the alternating timing patterns along row 6 and column 6,
/// between the two finder patterns they connect, starting dark.
fn draw_timing_patterns(matrix: &mut Matrix<Cell>, size: usize) {
    for i in 8..size - 8 {
        let cell = if i % 2 == 0 { Cell::TimingDark } else { Cell::TimingLight };
        matrix[(6, i)] = cell;
        matrix[(i, 6)] = cell;
    }
}
