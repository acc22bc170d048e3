// SPDX-License-Identifier: MIT
//
// swatch color components — HSB with opacity, always inside the unit cube.
//
// Every design token in swatch starts life as one of these. The variant
// engine overrides and scales brightness/saturation; a UI layer converts
// the result back to sRGB (or hex) and paints with it.
//
// Conversion pipeline:
//
//   hex ↔ 8-bit sRGB ↔ sRGB (0.0–1.0) ↔ HSB
//
// Every component is clamped to [0, 1] on construction and after every
// operation, so out-of-range input is never an error. NaN clamps to 0.

use std::fmt;
use std::str::FromStr;

use crate::adjust::{Multiplier, Override};
use crate::error::HexError;

// ─── ColorComponents ─────────────────────────────────────────────────────────

/// An immutable HSB color with opacity.
///
/// Hue, saturation, brightness and opacity all lie in `[0, 1]`. Hue is a
/// fraction of the color wheel: 0.0 is red, 1/3 green, 2/3 blue, and 1.0
/// wraps back to red.
///
/// # Examples
///
/// ```
/// use swatch_color::{ColorComponents, Multiplier, Override};
///
/// // Construct from HSB, 8-bit RGB, or hex
/// let gray = ColorComponents::hsb(0.5, 0.0, 0.43);
/// let orange = ColorComponents::rgb8(255, 128, 0);
/// let blue = ColorComponents::hex("#3b6ea5");
///
/// // Scale or replace components; results are always clamped
/// let dimmer = orange.multiply(Multiplier::new().brightness(0.8));
/// let text = gray.set(Override::new().brightness(0.24).saturation(0.95));
///
/// assert!(!gray.is_saturated());
/// assert!(blue.is_saturated());
/// assert_eq!(text.brightness(), 0.24);
/// assert!(dimmer.brightness() < orange.brightness());
/// ```
#[derive(Clone, Copy)]
pub struct ColorComponents {
    hue: f64,
    saturation: f64,
    brightness: f64,
    opacity: f64,
}

impl ColorComponents {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from HSB values (each clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::hsba(hue, saturation, brightness, 1.0)
    }

    /// Create a color from HSB values with opacity (each clamped to 0.0–1.0).
    #[must_use]
    pub fn hsba(hue: f64, saturation: f64, brightness: f64, opacity: f64) -> Self {
        Self {
            hue: unit(hue),
            saturation: unit(saturation),
            brightness: unit(brightness),
            opacity: unit(opacity),
        }
    }

    /// Create an opaque color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB values with opacity.
    #[must_use]
    pub fn srgba(r: f64, g: f64, b: f64, opacity: f64) -> Self {
        let (hue, saturation, brightness) = srgb_to_hsb(unit(r), unit(g), unit(b));
        Self::hsba(hue, saturation, brightness, opacity)
    }

    /// Create an opaque color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit sRGB values with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::srgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Create a color from a hex string, never failing.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without
    /// `#`, surrounding whitespace ignored). Short forms duplicate each
    /// digit; a missing alpha is fully opaque.
    ///
    /// Malformed input degrades instead of erroring:
    ///
    /// - an unsupported digit count (including none) gives opaque black;
    /// - a non-hex digit in a supported length gives [`Self::TRANSPARENT`].
    ///
    /// Use `str::parse` when the caller needs to know what went wrong.
    #[must_use]
    pub fn hex(s: &str) -> Self {
        match parse_hex(s) {
            Ok(color) => color,
            Err(HexError::Empty | HexError::InvalidLength { .. }) => Self::BLACK,
            Err(HexError::InvalidDigit { .. }) => Self::TRANSPARENT,
        }
    }

    /// Opaque black.
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        opacity: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
        opacity: 1.0,
    };

    /// Fully transparent black, `(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        opacity: 0.0,
    };

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.saturation
    }

    #[inline]
    #[must_use]
    pub const fn brightness(self) -> f64 {
        self.brightness
    }

    #[inline]
    #[must_use]
    pub const fn opacity(self) -> f64 {
        self.opacity
    }

    /// Whether the color carries any saturation at all.
    ///
    /// Every variant curve branches on this: grays and tinted colors get
    /// different brightness targets.
    #[inline]
    #[must_use]
    pub fn is_saturated(self) -> bool {
        self.saturation > 0.0
    }

    /// Whether the color is fully opaque.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.opacity >= 1.0
    }

    // ─── Derivation ──────────────────────────────────────────────────────

    /// Scale each component by the matching factor, then clamp.
    #[must_use]
    pub fn multiply(self, by: Multiplier) -> Self {
        Self::hsba(
            self.hue * by.hue,
            self.saturation * by.saturation,
            self.brightness * by.brightness,
            self.opacity * by.opacity,
        )
    }

    /// Replace the components the override sets, then clamp.
    #[must_use]
    pub fn set(self, to: Override) -> Self {
        Self::hsba(
            to.hue.unwrap_or(self.hue),
            to.saturation.unwrap_or(self.saturation),
            to.brightness.unwrap_or(self.brightness),
            to.opacity.unwrap_or(self.opacity),
        )
    }

    /// Return a copy with the given opacity (clamped).
    #[inline]
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            opacity: unit(opacity),
            ..self
        }
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB, returning `(r, g, b, a)` in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64, f64) {
        let (r, g, b) = hsb_to_srgb(self.hue, self.saturation, self.brightness);
        (r, g, b, self.opacity)
    }

    /// Convert to 8-bit sRGBA.
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let (r, g, b, a) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if not opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

// ─── Trait Implementations ───────────────────────────────────────────────────

impl fmt::Debug for ColorComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColorComponents::hsba({:.4}, {:.4}, {:.4}, {:.4})",
            self.hue, self.saturation, self.brightness, self.opacity
        )
    }
}

impl fmt::Display for ColorComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for ColorComponents {
    /// Perceptual equality.
    ///
    /// Components match within a small epsilon. Hue is compared around the
    /// wheel and ignored for unsaturated colors; saturation is ignored for
    /// black, where neither is visible.
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-6;

        if (self.opacity - other.opacity).abs() >= EPS
            || (self.brightness - other.brightness).abs() >= EPS
        {
            return false;
        }
        if self.brightness < EPS {
            return true;
        }
        if (self.saturation - other.saturation).abs() >= EPS {
            return false;
        }
        self.saturation < EPS || hue_diff(self.hue, other.hue) < EPS
    }
}

impl Default for ColorComponents {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for ColorComponents {
    type Err = HexError;

    /// Strict hex parsing. Same formats as [`ColorComponents::hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────

/// Clamp to [0, 1], sending NaN to 0.
#[inline]
fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Shortest distance between two hues on the unit wheel (0.0–0.5).
#[inline]
fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 1.0;
    d.min(1.0 - d)
}

/// Convert sRGB (0.0–1.0) → HSB.
///
/// `v = max(r, g, b)`, `x = min(r, g, b)`. Grays (`v == x`) get hue and
/// saturation 0; otherwise hue is picked from the sector of the largest
/// channel.
// Exact comparison is intended: `v` is one of the three inputs.
#[allow(clippy::float_cmp)]
fn srgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g).max(b);
    let x = r.min(g).min(b);
    let delta = v - x;

    if delta <= 0.0 {
        return (0.0, 0.0, v);
    }

    let sector = if r == v {
        (g - b) / delta
    } else if g == v {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let hue = (sector / 6.0).rem_euclid(1.0);
    (hue, delta / v, v)
}

/// Convert HSB → sRGB (0.0–1.0) with the six-sector formula.
// Sector index is floor(h * 6) in 0..6, so the casts cannot truncate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsb_to_srgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }

    let h6 = (h * 6.0).rem_euclid(6.0);
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into components.
fn parse_hex(s: &str) -> Result<ColorComponents, HexError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.is_empty() {
        return Err(HexError::Empty);
    }

    let len = digits.chars().count();
    if !matches!(len, 3 | 4 | 6 | 8) {
        return Err(HexError::InvalidLength { len });
    }

    if let Some((position, digit)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(HexError::InvalidDigit { digit, position });
    }

    // All ASCII from here on, so bytes and chars line up.
    let b = digits.as_bytes();
    let color = match len {
        // #RGB
        3 => ColorComponents::rgb8(short(b[0]), short(b[1]), short(b[2])),
        // #RGBA
        4 => ColorComponents::rgba8(short(b[0]), short(b[1]), short(b[2]), short(b[3])),
        // #RRGGBB
        6 => ColorComponents::rgb8(byte(b[0], b[1]), byte(b[2], b[3]), byte(b[4], b[5])),
        // #RRGGBBAA
        _ => ColorComponents::rgba8(
            byte(b[0], b[1]),
            byte(b[2], b[3]),
            byte(b[4], b[5]),
            byte(b[6], b[7]),
        ),
    };
    Ok(color)
}

/// Value of one validated ASCII hex digit.
#[inline]
const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// A short-form digit expanded to a full byte (`a` → `aa`).
#[inline]
const fn short(c: u8) -> u8 {
    let n = nibble(c);
    n << 4 | n
}

#[inline]
const fn byte(hi: u8, lo: u8) -> u8 {
    nibble(hi) << 4 | nibble(lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
