// SPDX-License-Identifier: MIT

//! Gamut mapper — pulls an OKLCH color back inside the sRGB volume.
//!
//! Chroma is the only parameter reduced. Desaturating is the least
//! perceptually disruptive correction: lightness and hue carry the color's
//! identity, so both are preserved exactly.
//!
//! The search is bounded and best-effort. If the iteration cap is hit while
//! still marginally out of gamut, the last value is accepted — the final
//! gamma-encoding step clamps channels into [0, 1], so the pipeline never
//! fails outright on a stubborn hue.

use crate::convert::oklch_to_linear_srgb;

/// Tolerance band around [0, 1] within which a channel counts as in-gamut.
const TOLERANCE: f64 = 1e-3;

/// Coarse variant: initial mapping of a freshly extracted seed.
pub const COARSE: Shrink = Shrink { factor: 0.92, max_iters: 12 };

/// Fine variant: re-mapping inside the contrast optimizer, where chroma has
/// already been fitted once and only small lightness steps disturb it.
pub const FINE: Shrink = Shrink { factor: 0.95, max_iters: 8 };

/// A chroma-reduction schedule: per-step scale factor and iteration cap.
#[derive(Debug, Clone, Copy)]
pub struct Shrink {
    pub factor: f64,
    pub max_iters: u32,
}

/// Whether all linear channels are within the gamut tolerance band.
#[inline]
fn in_gamut((r, g, b): (f64, f64, f64)) -> bool {
    let lo = -TOLERANCE;
    let hi = 1.0 + TOLERANCE;
    (lo..=hi).contains(&r) && (lo..=hi).contains(&g) && (lo..=hi).contains(&b)
}

/// Find the largest chroma (at most `c`) that keeps (l, c', h) inside the
/// sRGB gamut, within tolerance.
///
/// Returns the fitted chroma and the linear sRGB triple computed at it.
/// Always terminates; the result may be marginally out of range if the
/// iteration cap was exhausted.
#[must_use]
pub fn fit_chroma(l: f64, c: f64, h: f64, shrink: Shrink) -> (f64, (f64, f64, f64)) {
    let mut c = c;
    let mut linear = oklch_to_linear_srgb(l, c, h);

    let mut iters = 0;
    while !in_gamut(linear) && iters < shrink.max_iters {
        c *= shrink.factor;
        linear = oklch_to_linear_srgb(l, c, h);
        iters += 1;
    }

    (c, linear)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
