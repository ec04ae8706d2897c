use crate::cell::Cell;
use crate::matrix::Matrix;

/// Rule-pattern used by the N3 penalty: a 1:1:3:1:1 finder-like run,
/// light-padded on at least one side. `true` is dark.
const FINDER_LIKE: [bool; 11] =
    [true, false, true, true, true, false, true, false, false, false, false];

/// Computes the total penalty score for one fully-masked candidate
/// matrix, summing the four standard rules (N1 run length, N2 2x2
/// blocks, N3 finder-like patterns, N4 dark-module balance).
pub(super) fn score(matrix: &Matrix<Cell>) -> u32 {
    run_penalty(matrix) + block_penalty(matrix) + finder_like_penalty(matrix) + balance_penalty(matrix)
}

/// N1: for every row and column, a run of 5+ same-colored modules scores
/// 3, plus 1 for each module beyond the fifth.
fn run_penalty(matrix: &Matrix<Cell>) -> u32 {
    let size = matrix.side();
    let mut total = 0;
    for row in 0..size {
        total += score_run(|col| matrix[(row, col)].is_dark(), size);
    }
    for col in 0..size {
        total += score_run(|row| matrix[(row, col)].is_dark(), size);
    }
    total
}

fn score_run(is_dark: impl Fn(usize) -> bool, size: usize) -> u32 {
    let mut total = 0;
    let mut run_len = 0usize;
    let mut prev = None;
    for i in 0..size {
        let dark = is_dark(i);
        if Some(dark) == prev {
            run_len += 1;
        } else {
            if run_len >= 5 {
                total += 3 + (run_len - 5) as u32;
            }
            run_len = 1;
            prev = Some(dark);
        }
    }
    if run_len >= 5 {
        total += 3 + (run_len - 5) as u32;
    }
    total
}

/// N2: every 2x2 block of same-colored modules scores 3, counted with
/// overlap (a 3x2 block of one color counts as two blocks).
fn block_penalty(matrix: &Matrix<Cell>) -> u32 {
    let size = matrix.side();
    let mut total = 0;
    for row in 0..size.saturating_sub(1) {
        for col in 0..size.saturating_sub(1) {
            let a = matrix[(row, col)].is_dark();
            if a == matrix[(row, col + 1)].is_dark()
                && a == matrix[(row + 1, col)].is_dark()
                && a == matrix[(row + 1, col + 1)].is_dark()
            {
                total += 3;
            }
        }
    }
    total
}

/// N3: every occurrence of the 1:1:3:1:1 finder-like run (or its mirror)
/// in a row or column scores 40.
fn finder_like_penalty(matrix: &Matrix<Cell>) -> u32 {
    let size = matrix.side();
    let mut total = 0;
    for row in 0..size {
        total += count_finder_like(|col| matrix[(row, col)].is_dark(), size);
    }
    for col in 0..size {
        total += count_finder_like(|row| matrix[(row, col)].is_dark(), size);
    }
    total
}

fn count_finder_like(is_dark: impl Fn(usize) -> bool, size: usize) -> u32 {
    if size < FINDER_LIKE.len() {
        return 0;
    }
    let reversed: Vec<bool> = FINDER_LIKE.iter().rev().copied().collect();
    let mut total = 0;
    for start in 0..=size - FINDER_LIKE.len() {
        let window: Vec<bool> = (start..start + FINDER_LIKE.len()).map(&is_dark).collect();
        if window == FINDER_LIKE || window == reversed {
            total += 40;
        }
    }
    total
}

/// N4: twice the distance from 50% of the dark-module percentage,
/// rounded down to the nearest multiple of 5 above 50%, or up to the
/// nearest multiple of 5 at or below 50%.
fn balance_penalty(matrix: &Matrix<Cell>) -> u32 {
    let size = matrix.side();
    let total = size * size;
    let dark = matrix.iter().filter(|(_, _, c)| c.is_dark()).count();
    let percent_dark = dark * 100 / total;
    let rounded = if percent_dark > 50 {
        percent_dark / 5 * 5
    } else {
        percent_dark.div_ceil(5) * 5
    };
    (rounded as i64 - 50).unsigned_abs() as u32 * 2
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::cell::Polarity;

    fn row_of(colors: &[bool]) -> Matrix<Cell> {
        let size = colors.len();
        let mut m = Matrix::filled(size, Cell::Data(Polarity::Light));
        for (col, &dark) in colors.iter().enumerate() {
            m[(0, col)] = Cell::Data(if dark { Polarity::Dark } else { Polarity::Light });
        }
        m
    }

    #[test]
    fn score_a_run_of_five_as_three() {
        let colors = [true, true, true, true, true, false, false, false, false, false, false];
        let m = row_of(&colors);
        // Row 0 has the run; every other row is uniform light, each contributing
        // its own run-of-`size` penalty, so isolate column 0's vertical run too.
        assert_eq!(score_run(|c| colors[c], colors.len()), 3);
        assert_eq!(m.side(), colors.len());
    }

    #[test]
    fn score_a_run_of_six_as_four() {
        let colors = [true; 6];
        assert_eq!(score_run(|c| colors[c], colors.len()), 4);
    }

    #[test]
    fn score_a_uniform_matrix_heavily_on_balance() {
        let m = Matrix::filled(21, Cell::Data(Polarity::Dark));
        assert!(balance_penalty(&m) > 0);
    }

    #[test]
    fn score_zero_balance_penalty_at_exactly_half_dark() {
        let mut m = Matrix::filled(10, Cell::Data(Polarity::Light));
        for col in 0..5 {
            for row in 0..10 {
                m[(row, col)] = Cell::Data(Polarity::Dark);
            }
        }
        assert_eq!(balance_penalty(&m), 0);
    }

    #[test]
    fn score_twenty_when_dark_percentage_is_already_a_multiple_of_five_below_fifty() {
        // 40 of 100 modules dark: percentage is already a multiple of 5, so the
        // rounded bracket must stay at 40, not get pulled up to 45.
        let mut m = Matrix::filled(10, Cell::Data(Polarity::Light));
        for i in 0..40 {
            m[(i / 10, i % 10)] = Cell::Data(Polarity::Dark);
        }
        assert_eq!(balance_penalty(&m), 20);
    }
}
