// SPDX-License-Identifier: MIT

//! Digest producer — turns input bytes into a fixed 32-byte seed source.
//!
//! A cryptographic hash (SHA-256) is deliberate: adjacent inputs such as
//! "a" and "b" must produce uncorrelated digests, otherwise similar strings
//! would land on visually similar colors.

use sha2::{Digest, Sha256};

/// Hash arbitrary input bytes into a 32-byte digest.
///
/// Deterministic and defined for any byte sequence, including the empty
/// one. Byte-identical inputs always produce byte-identical digests; no
/// normalization is applied.
#[must_use]
pub fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
