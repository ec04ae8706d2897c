//! GF(256) arithmetic for Reed-Solomon, built on the primitive polynomial
//! `x^8 + x^4 + x^3 + x^2 + 1` (0x11D / 285) with generator element α = 2.
//!
//! The log/antilog tables are computed once, on first use, behind a
//! `OnceLock` rather than transcribed as literals: they're cheap to derive
//! and a hand-transcribed 256-entry table is exactly the kind of place a
//! transcription error hides.

use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;
const GENERATOR: u8 = 2;

struct Tables {
    /// `exp[i]` = α^i for i in 0..255 (and mirrored at 255 for convenience).
    exp: [u8; 256],
    /// `log[v]` = the i such that α^i == v, for v in 1..256. `log[0]` is
    /// unused (0 is not in the multiplicative group) and left at 0.
    log: [u8; 256],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut value: u16 = 1;
        for i in 0..255usize {
            exp[i] = value as u8;
            log[value as usize] = i as u8;
            value <<= 1;
            if value & 0x100 != 0 {
                value ^= PRIMITIVE_POLY;
            }
        }
        exp[255] = exp[0];
        Tables { exp, log }
    })
}

/// Converts a field value (`1..=255`) to its discrete log base α
/// (`to_exp` in the reference algorithm).
pub(crate) fn to_exponent(value: u8) -> u8 {
    debug_assert_ne!(value, 0, "0 has no discrete logarithm");
    tables().log[value as usize]
}

/// Converts a discrete log (`0..255`) back to a field value (`to_val` in
/// the reference algorithm).
pub(crate) fn to_value(exponent: u8) -> u8 {
    tables().exp[exponent as usize]
}

/// Multiplies two field elements.
pub(crate) fn multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let sum = (u16::from(to_exponent(a)) + u16::from(to_exponent(b))) % 255;
    to_value(sum as u8)
}
