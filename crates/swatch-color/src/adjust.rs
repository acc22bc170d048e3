// SPDX-License-Identifier: MIT
//
// Component adjustments — the two ways a color gets derived from another.
//
//   Multiplier  scales each component ("70% as saturated")
//   Override    replaces components outright ("brightness = 0.24")
//
// Both are plain data with builder-style setters. Applying them is
// `ColorComponents::multiply` / `ColorComponents::set`, which clamp.

// ─── Multiplier ──────────────────────────────────────────────────────────────

/// Per-component scale factors. Unset factors are `1.0`.
///
/// ```
/// use swatch_color::Multiplier;
///
/// let dim = Multiplier::new().brightness(0.5).opacity(0.8);
/// assert!(!dim.is_identity());
/// assert!(Multiplier::new().is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiplier {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub opacity: f64,
}

impl Multiplier {
    /// Leaves every component untouched.
    pub const IDENTITY: Self = Self {
        hue: 1.0,
        saturation: 1.0,
        brightness: 1.0,
        opacity: 1.0,
    };

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    #[inline]
    #[must_use]
    pub const fn hue(self, hue: f64) -> Self {
        Self { hue, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self, saturation: f64) -> Self {
        Self { saturation, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn brightness(self, brightness: f64) -> Self {
        Self { brightness, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Compose two multipliers: applying the result equals applying `self`
    /// then `other` (before clamping).
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Self {
            hue: self.hue * other.hue,
            saturation: self.saturation * other.saturation,
            brightness: self.brightness * other.brightness,
            opacity: self.opacity * other.opacity,
        }
    }

    /// Whether applying this multiplier is a no-op.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ─── Override ────────────────────────────────────────────────────────────────

/// Absolute component replacements. `None` keeps the existing value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Override {
    pub hue: Option<f64>,
    pub saturation: Option<f64>,
    pub brightness: Option<f64>,
    pub opacity: Option<f64>,
}

impl Override {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hue: None,
            saturation: None,
            brightness: None,
            opacity: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn hue(self, hue: f64) -> Self {
        Self {
            hue: Some(hue),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self, saturation: f64) -> Self {
        Self {
            saturation: Some(saturation),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn brightness(self, brightness: f64) -> Self {
        Self {
            brightness: Some(brightness),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn opacity(self, opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..self
        }
    }

    /// Whether this override replaces nothing.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.hue.is_none()
            && self.saturation.is_none()
            && self.brightness.is_none()
            && self.opacity.is_none()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
