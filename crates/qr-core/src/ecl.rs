/// The error correction level in a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ecl {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl Ecl {
    /// Index into a `[T; 4]` table, in the order the reference tables use.
    pub(crate) fn ordinal(self) -> usize {
        use Ecl::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// The 2-bit value written into the format-information string.
    pub(crate) fn format_bits(self) -> u8 {
        use Ecl::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn order_ordinals_low_to_high() {
        assert_eq!(Ecl::Low.ordinal(), 0);
        assert_eq!(Ecl::Medium.ordinal(), 1);
        assert_eq!(Ecl::Quartile.ordinal(), 2);
        assert_eq!(Ecl::High.ordinal(), 3);
    }

    #[test]
    fn use_the_standard_format_bit_assignment() {
        assert_eq!(Ecl::Low.format_bits(), 1);
        assert_eq!(Ecl::Medium.format_bits(), 0);
        assert_eq!(Ecl::Quartile.format_bits(), 3);
        assert_eq!(Ecl::High.format_bits(), 2);
    }
}
