// SPDX-License-Identifier: MIT

//! WCAG contrast math and the lightness optimizer.
//!
//! The key split: contrast is *measured* in sRGB relative luminance space
//! (that is what WCAG defines), but the color is *adjusted* in OKLCH
//! lightness, where equal steps are perceptually equal. Each lightness move
//! re-fits chroma so the candidate stays displayable.
//!
//! The optimizer targets 4.5:1 — the WCAG AA threshold for normal-size
//! text — against whichever of white or black does better. It is
//! best-effort: a fixed budget of shrinking steps, then the best candidate
//! seen wins. The pipeline never fails on a pathological hue; it degrades
//! toward "closest achievable contrast".

use crate::color::Srgb;
use crate::convert::srgb_to_linear;
use crate::gamut::{self, FINE};
use crate::seed::Seed;

/// WCAG AA contrast threshold for normal-size text.
pub const TARGET_CONTRAST: f64 = 4.5;

const MAX_ITERS: u32 = 16;
const INITIAL_STEP: f64 = 0.02;
const STEP_DECAY: f64 = 0.9;

// How far the optimizer may drag lightness away from the seed before the
// color stops reading as "its" hue/chroma.
const LIGHTNESS_FLOOR: f64 = 0.42;
const LIGHTNESS_CEILING: f64 = 0.78;

/// Relative luminance of a linear sRGB triple per WCAG 2.1.
///
/// Channels are clamped to [0, 1] first, matching how a marginally
/// out-of-gamut color will actually be displayed after encoding.
#[inline]
#[must_use]
pub fn relative_luminance((r, g, b): (f64, f64, f64)) -> f64 {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio between two relative luminances.
///
/// Symmetric in its arguments; the result is in [1, 21].
#[inline]
#[must_use]
pub fn contrast_from_luminance(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG 2.1 contrast ratio between two gamma-encoded colors.
///
/// Linearizes each channel with the inverse sRGB transfer function before
/// computing luminance. Always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance((srgb_to_linear(a.r), srgb_to_linear(a.g), srgb_to_linear(a.b)));
    let lb = relative_luminance((srgb_to_linear(b.r), srgb_to_linear(b.g), srgb_to_linear(b.b)));
    contrast_from_luminance(la, lb)
}

/// The optimizer's resting state: an in-gamut (best-effort) background with
/// the highest contrast found against white-or-black text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Optimized {
    pub lightness: f64,
    pub chroma: f64,
    pub linear: (f64, f64, f64),
    /// Contrast against the better of white/black text.
    pub contrast: f64,
    /// Whether white text wins (ties favor white).
    pub prefer_white_text: bool,
}

/// Adjust lightness until white or black text reaches the 4.5:1 target, or
/// the iteration budget runs out.
///
/// Each step moves toward whichever extreme currently contrasts better:
/// white text winning means the background should darken, and vice versa.
/// Steps decay geometrically so late iterations settle rather than
/// oscillate. Chroma is re-fitted to the gamut after every move and only
/// ever shrinks.
pub(crate) fn optimize(seed: Seed) -> Optimized {
    let h = seed.hue;
    let mut l = seed.lightness;
    let (mut c, mut linear) = gamut::fit_chroma(l, seed.chroma, h, gamut::COARSE);

    let mut step = INITIAL_STEP;
    let mut best = evaluate(l, c, linear);

    for _ in 0..MAX_ITERS {
        let current = evaluate(l, c, linear);
        if current.contrast > best.contrast {
            best = current;
        }
        if current.contrast >= TARGET_CONTRAST {
            return current;
        }

        // Chase the extreme that is already ahead: if white text reads
        // better, darkening widens that lead fastest.
        if current.prefer_white_text {
            l = (l - step).max(LIGHTNESS_FLOOR);
        } else {
            l = (l + step).min(LIGHTNESS_CEILING);
        }

        let (next_c, next_linear) = gamut::fit_chroma(l, c, h, FINE);
        c = next_c;
        linear = next_linear;
        step *= STEP_DECAY;
    }

    best
}

/// Score a candidate background against white and black text.
fn evaluate(lightness: f64, chroma: f64, linear: (f64, f64, f64)) -> Optimized {
    let lum = relative_luminance(linear);
    let against_white = contrast_from_luminance(lum, 1.0);
    let against_black = contrast_from_luminance(lum, 0.0);
    Optimized {
        lightness,
        chroma,
        linear,
        contrast: against_white.max(against_black),
        prefer_white_text: against_white >= against_black,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
