// SPDX-License-Identifier: MIT

//! Parameter extractor — maps digest bytes into curated OKLCH start values.
//!
//! The bands are tuned for identity colors (tag pills, avatar fills):
//! chroma in [0.16, 0.30] is vivid but not neon, lightness in [0.50, 0.68]
//! sits comfortably between white and black text. Dark interfaces get a
//! higher lightness floor so fills don't vanish into the background; light
//! interfaces get a ceiling so they don't wash out against a white canvas.

use crate::convert::normalize_hue;

/// Initial OKLCH parameters derived from a digest.
///
/// A pure function of (digest, mode): identical inputs always yield an
/// identical seed. Hue is fixed from here on; chroma and lightness may
/// still shrink/shift inside the gamut and contrast loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    /// Hue angle in degrees, [0, 360).
    pub hue: f64,
    /// OKLCH chroma, [0.16, 0.30].
    pub chroma: f64,
    /// OKLCH lightness, [0.50, 0.68] after mode clamping.
    pub lightness: f64,
}

/// Normalize a digest byte to [0, 1).
#[inline]
fn unit(byte: u8) -> f64 {
    f64::from(byte) / 256.0
}

impl Seed {
    /// Extract seed parameters from a digest.
    ///
    /// Hue combines two bytes — the 0.25-weighted jitter byte keeps the hue
    /// from depending on a single byte, which reduces banding where
    /// consecutive hash values cluster.
    #[must_use]
    pub fn extract(digest: &[u8; 32], is_dark: bool) -> Self {
        let raw_hue = (unit(digest[3]).mul_add(0.25, unit(digest[0]))) * 360.0;
        let hue = normalize_hue(raw_hue);

        let chroma = unit(digest[1]).mul_add(0.14, 0.16);

        let lightness = unit(digest[2]).mul_add(0.18, 0.50);
        let lightness = if is_dark {
            lightness.max(0.56)
        } else {
            lightness.min(0.70)
        };

        Self { hue, chroma, lightness }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
