// SPDX-License-Identifier: MIT
//
// Color space conversions for the derivation pipeline.
//
// Pipeline direction: OKLCH → Oklab → Linear sRGB → sRGB (gamma).

//! OKLCH → linear sRGB conversion and the sRGB transfer functions.
//!
//! The Oklab matrices are Björn Ottosson's original constants
//! (<https://bottosson.github.io/posts/oklab/>), kept at f64 precision
//! because the public API contract is f64 channels. All functions here are
//! pure and total; out-of-range inputs produce out-of-range outputs rather
//! than errors — gamut handling is the caller's job.

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab (L, a, b) to linear sRGB.
///
/// Goes through the intermediate LMS cone-response space. The result may
/// lie outside [0, 1] when the Oklab color is outside the sRGB gamut.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert an OKLCH color to linear sRGB.
///
/// The result is *not* gamut-mapped: channels may fall outside [0, 1] for
/// vivid chroma/lightness combinations.
#[inline]
#[must_use]
pub fn oklch_to_linear_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    oklab_to_linear_srgb(l, a, b)
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
///
/// Piecewise sRGB transfer function. Input is expected in [0, 1]; callers
/// clamp before encoding.
#[inline]
#[must_use]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055f64.mul_add(v.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
///
/// Used when computing WCAG relative luminance from gamma-encoded input.
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
