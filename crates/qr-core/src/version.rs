/// A symbol version, between 1 and 5 (inclusive).
///
/// Determines the symbol's side length (`21 + 4*(version-1)` modules) and
/// indexes every reference table in [`crate::tables`]. The table-driven
/// design means supporting higher versions is purely a matter of growing
/// those tables; nothing here assumes `value() <= 5` beyond the range
/// check in [`Version::new`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version(u8);

impl Version {
    /// Smallest supported version.
    pub const MIN: Version = Version(1);

    /// Largest supported version.
    pub const MAX: Version = Version(5);

    /// Creates a version from its number.
    ///
    /// Panics if `ver` is outside `1..=5`; this core's scope stops at
    /// version 5, so any caller reaching this with a larger number has a
    /// bug upstream.
    pub fn new(ver: u8) -> Self {
        assert!(
            (Version::MIN.value()..=Version::MAX.value()).contains(&ver),
            "version number out of range 1..=5"
        );
        Self(ver)
    }

    /// The version number, in `1..=5`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The side length of the symbol, in modules, before the quiet zone.
    pub fn size(self) -> usize {
        21 + 4 * (usize::from(self.0) - 1)
    }

    /// Iterates every supported version in ascending order.
    pub(crate) fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.value()..=Self::MAX.value()).map(Version)
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn compute_the_standard_side_lengths() {
        assert_eq!(Version::new(1).size(), 21);
        assert_eq!(Version::new(2).size(), 25);
        assert_eq!(Version::new(5).size(), 37);
    }

    #[test]
    #[should_panic]
    fn reject_version_zero() {
        Version::new(0);
    }

    #[test]
    #[should_panic]
    fn reject_version_six() {
        Version::new(6);
    }

    #[test]
    fn enumerate_all_five_versions_in_order() {
        let vs: Vec<u8> = Version::all().map(Version::value).collect();
        assert_eq!(vs, vec![1, 2, 3, 4, 5]);
    }
}
