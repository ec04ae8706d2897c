use thiserror::Error;

use crate::ecl::Ecl;

/// Everything that can go wrong while turning a payload into a symbol.
///
/// `InvalidInput` and `InputTooLong` are ordinary, expected outcomes of
/// calling [`crate::encode`] with data the classifier or version selector
/// can't place. `InternalInvariant` should be unreachable given valid
/// upstream input; its presence here instead of a panic just gives callers
/// a typed value to match on in release builds.
#[derive(Debug, Clone, Error)]
pub enum QrError {
    /// The payload is empty, or contains octets that match none of the
    /// numeric, alphanumeric, or byte patterns.
    #[error("input is empty or matches no supported mode")]
    InvalidInput,

    /// No version in 1..=5 has enough capacity for `len` characters in
    /// `mode` at the requested error-correction level.
    #[error("{len} characters do not fit any version 1-5 symbol at level {ecl:?}")]
    InputTooLong { len: usize, ecl: Ecl },

    /// An arithmetic or lookup step that upstream validation should have
    /// already ruled out. Carries a short description of which invariant
    /// failed.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}
