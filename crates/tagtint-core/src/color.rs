// SPDX-License-Identifier: MIT

//! Output color types — plain numeric sRGB plus the derivation result.
//!
//! Deliberately free of any UI-toolkit coupling: embedders bind the
//! channels to whatever platform color object they use and re-invoke the
//! derivation themselves when the system appearance changes.

use std::fmt;

use crate::convert::linear_to_srgb;

/// A gamma-encoded sRGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Pure white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Encode a linear sRGB triple: clamp each channel into [0, 1], then
    /// apply the sRGB transfer function.
    ///
    /// Clamping-then-encoding is the pipeline's last line of defense for
    /// colors the gamut mapper accepted marginally out of range.
    #[must_use]
    pub fn encode_linear((r, g, b): (f64, f64, f64)) -> Self {
        Self {
            r: linear_to_srgb(r.clamp(0.0, 1.0)),
            g: linear_to_srgb(g.clamp(0.0, 1.0)),
            b: linear_to_srgb(b.clamp(0.0, 1.0)),
        }
    }

    /// Convert to 8-bit channels with round-half-up quantization.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let quantize = |v: f64| -> u8 {
            // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
            v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
        };
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Format as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// The result of deriving an identity color from a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedColor {
    /// The background color, gamma-encoded sRGB in [0, 1] per channel.
    pub color: Srgb,

    /// Whether white text contrasts better than black on `color`.
    /// Ties favor white.
    pub prefer_white_text: bool,

    /// The achieved contrast ratio against the preferred text color.
    ///
    /// Usually >= 4.5; the derivation is best-effort, so callers that need
    /// a hard guarantee can inspect this for near-misses.
    pub contrast: f64,
}

impl DerivedColor {
    /// The preferred foreground for text rendered over this color.
    #[must_use]
    pub const fn text_color(&self) -> Srgb {
        if self.prefer_white_text {
            Srgb::WHITE
        } else {
            Srgb::BLACK
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
