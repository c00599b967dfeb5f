//! Guess normalizer — canonicalizes text for equality comparison
//!
//! Two guesses that differ only in case, surrounding whitespace, interior
//! whitespace runs, or injected control characters must compare equal.
//! The pipeline, in order:
//!
//! 1. Strip C0 (U+0000–U+001F, U+007F) and C1 (U+0080–U+009F) control
//!    characters — invisible or injected characters must not skew the
//!    comparison
//! 2. Lowercase with simple case folding
//! 3. Trim leading and trailing whitespace
//! 4. Collapse every whitespace run to a single space
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: same input always produces same output
//! - **Total**: never fails; empty or all-control input yields `""`

use sha2::{Digest, Sha256};

use crate::cipher::Shift;

/// Canonicalize text for comparison.
///
/// Control characters are stripped before whitespace handling, so a tab
/// or newline vanishes entirely rather than becoming a space.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_control(c) {
            continue;
        }
        if c.is_whitespace() {
            // Leading runs produce no space because `out` is still empty
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }
    // A trailing pending_space is dropped — that is the trim step
    out
}

/// C0 and C1 control ranges, including DEL
fn is_control(c: char) -> bool {
    matches!(u32::from(c), 0x00..=0x1F | 0x7F..=0x9F)
}

/// Deterministic SHA-256 fingerprint of a puzzle.
///
/// Computed over the normalized message and the canonical shift, so the
/// same puzzle always hashes identically while logs and transcripts never
/// need to carry the plaintext itself.
pub fn puzzle_fingerprint(message: &str, shift: Shift) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize(message).as_bytes());
    hasher.update([shift.value()]);
    format!("{:x}", hasher.finalize())
}
