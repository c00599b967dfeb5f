//! Caesar cipher engine — shift normalization, encryption, decryption
//!
//! The cipher rotates ASCII letters within their own case's 26-letter
//! alphabet; every other character (digits, punctuation, whitespace,
//! non-ASCII letters) passes through unchanged, in its original position.
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces the same output
//! - **Pure**: no shared state, reentrant-safe
//! - **Invertible**: `decrypt(encrypt(t, s), s) == t` for every shift,
//!   including 0 and multiples of 26
//! - **Length preserving**: output has the same character count as input

use crate::{Error, Result};

/// Number of letters in the rotation alphabet
pub const ALPHABET_LEN: i64 = 26;

/// A shift amount, canonicalized to the residue range `[0, 25]`.
///
/// Any integer is accepted — negative or far out of range — and reduced
/// with true mathematical (Euclidean) modulo, so `Shift::new(s)` equals
/// `Shift::new(s + 26k)` for every `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Shift(u8);

impl Shift {
    /// Canonicalize an arbitrary integer shift into `[0, 25]`
    pub fn new(raw: i64) -> Self {
        // rem_euclid is ((raw % 26) + 26) % 26 — never negative
        Shift(raw.rem_euclid(ALPHABET_LEN) as u8)
    }

    /// Canonicalize a floating-point shift coming from an untyped boundary.
    ///
    /// # Errors
    /// Returns `InvalidShift` if the value is not finite or not
    /// integer-valued (e.g. `NaN`, `inf`, `3.5`).
    pub fn try_from_f64(raw: f64) -> Result<Self> {
        if !raw.is_finite() {
            return Err(Error::InvalidShift(format!(
                "shift must be a finite number, got {}",
                raw
            )));
        }
        if raw.fract() != 0.0 {
            return Err(Error::InvalidShift(format!(
                "shift must be integer-valued, got {}",
                raw
            )));
        }
        // i64::MAX as f64 rounds up to 2^63, which the cast would saturate;
        // treat everything at or beyond the i64 range as out of range
        if raw < i64::MIN as f64 || raw >= i64::MAX as f64 {
            return Err(Error::InvalidShift(format!(
                "shift magnitude too large: {}",
                raw
            )));
        }
        Ok(Self::new(raw as i64))
    }

    /// Canonical value in `[0, 25]`
    pub fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one: `26 - n`, normalized.
    ///
    /// The inverse of 0 is 0 (26 normalizes back to 0), so decrypting an
    /// unshifted message is the identity rather than a wrap-around error.
    pub fn inverse(self) -> Self {
        Shift::new(ALPHABET_LEN - i64::from(self.0))
    }
}

impl From<i64> for Shift {
    fn from(raw: i64) -> Self {
        Shift::new(raw)
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encrypt text by rotating each ASCII letter forward by `shift` positions.
///
/// Case is preserved: uppercase stays uppercase, lowercase stays lowercase.
/// Non-letter characters are emitted unchanged.
pub fn encrypt(text: &str, shift: Shift) -> String {
    let n = shift.value();
    text.chars().map(|c| rotate_char(c, n)).collect()
}

/// Decrypt text previously encrypted with `shift`.
///
/// Decryption with shift `n` is encryption with shift `26 - n`: the two
/// amounts sum to 0 mod 26, so the composition is the identity.
pub fn decrypt(text: &str, shift: Shift) -> String {
    encrypt(text, shift.inverse())
}

fn rotate_char(c: char, n: u8) -> char {
    match c {
        'a'..='z' => (((c as u8 - b'a' + n) % 26) + b'a') as char,
        'A'..='Z' => (((c as u8 - b'A' + n) % 26) + b'A') as char,
        _ => c,
    }
}
