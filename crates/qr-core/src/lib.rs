//! QR Code (Model 2) symbol generation for versions 1 through 5.
//!
//! [`encode`] is the single entry point: it classifies the payload's mode,
//! picks the smallest version that fits at the requested error-correction
//! level, builds the padded data codewords, computes and interleaves the
//! Reed-Solomon error-correction codewords, and places the result into a
//! masked symbol matrix with its quiet zone.
//!
//! ```
//! use qr_core::{encode, Ecl};
//!
//! let symbol = encode("HELLO WORLD", Ecl::Medium).unwrap();
//! assert!(symbol.side() > 0);
//! ```

mod bit_buffer;
mod cell;
mod ecl;
mod encoder;
mod error;
mod galois;
mod interleave;
mod matrix;
mod mode;
mod reed_solomon;
mod symbol;
mod tables;
mod version;

pub use cell::{Cell, Polarity};
pub use ecl::Ecl;
pub use error::QrError;
pub use matrix::Matrix;
pub use mode::Mode;
pub use version::Version;

use mode::unit_count;

/// Encodes `text` into a QR Code symbol matrix at the requested error
/// correction level.
///
/// Picks the mode (numeric, alphanumeric, or byte) and the smallest
/// version in `1..=5` that can hold `text` at `ecl`, then runs the full
/// encode -> error-correct -> interleave -> place -> mask pipeline.
/// Returns [`QrError::InvalidInput`] for empty or unsupported text, and
/// [`QrError::InputTooLong`] if no version 1-5 symbol has room for it.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn encode(text: &str, ecl: Ecl) -> Result<Matrix<Cell>, QrError> {
    let mode = mode::classify(text)?;
    tracing::debug!(?mode, "classified input mode");

    let version = select_version(text, mode, ecl)?;
    tracing::debug!(version = version.value(), "selected symbol version");

    let data_codewords = encoder::build_data_codewords(text, mode, version, ecl)?;
    tracing::trace!(codewords = data_codewords.len(), "built padded data codewords");

    let codewords = interleave::interleave(&data_codewords, version, ecl)?;
    tracing::trace!(
        codewords = codewords.len(),
        remainder_bits = tables::remainder_bits(version),
        "interleaved data and EC codewords"
    );

    let matrix = symbol::build(&codewords, version, ecl);
    tracing::debug!(side = matrix.side(), "built symbol matrix");
    Ok(matrix)
}

/// Picks the smallest version in `1..=5` whose capacity for `mode` at
/// `ecl` is at least `text`'s unit count (characters for numeric and
/// alphanumeric, UTF-8 bytes for byte mode).
fn select_version(text: &str, mode: Mode, ecl: Ecl) -> Result<Version, QrError> {
    let count = unit_count(text, mode);
    Version::all()
        .find(|&v| tables::capacity(v, ecl)[mode.capacity_index()] >= count)
        .ok_or(QrError::InputTooLong { len: count, ecl })
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn encode_hello_world_at_medium_into_a_version_one_symbol() {
        let symbol = encode("HELLO WORLD", Ecl::Medium).unwrap();
        assert_eq!(symbol.side(), Version::new(1).size() + 8);
    }

    #[test]
    fn pick_the_smallest_version_that_fits_the_payload() {
        let version = select_version("8675309", Mode::Numeric, Ecl::High).unwrap();
        assert_eq!(version.value(), 1);
    }

    #[test]
    fn reject_empty_input() {
        assert!(matches!(encode("", Ecl::Low), Err(QrError::InvalidInput)));
    }

    #[test]
    fn reject_text_too_long_for_any_supported_version() {
        let long = "A".repeat(1000);
        assert!(matches!(encode(&long, Ecl::High), Err(QrError::InputTooLong { .. })));
    }
}
