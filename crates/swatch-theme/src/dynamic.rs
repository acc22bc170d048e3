//! Dynamic colors — one set of components per color scheme.
//!
//! A `DynamicColor` is what a theme token stores: the seed for light, dark
//! and both accessible appearances, plus optional blend-mode and scheme-pin
//! metadata. It is immutable; every adjustment returns a modified copy with
//! the change applied to each scheme slot independently.

use swatch_color::{ColorComponents, Multiplier};

use crate::blend::BlendMode;
use crate::scheme::ColorScheme;

/// Components for each of the four color schemes.
///
/// ```
/// use swatch_color::ColorComponents;
/// use swatch_theme::{ColorScheme, DynamicColor};
///
/// let ink = DynamicColor::new(
///     ColorComponents::hsb(0.6, 0.5, 0.3),
///     ColorComponents::hsb(0.6, 0.2, 0.9),
/// );
///
/// // Accessible slots default to their base scheme.
/// assert_eq!(
///     ink.components(ColorScheme::DarkAccessible),
///     ink.components(ColorScheme::Dark),
/// );
///
/// // A pinned color ignores the ambient scheme.
/// let pinned = ink.color_scheme(ColorScheme::Dark);
/// assert_eq!(pinned.resolve(ColorScheme::Light), ink.components(ColorScheme::Dark));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicColor {
    light: ColorComponents,
    dark: ColorComponents,
    light_accessible: ColorComponents,
    dark_accessible: ColorComponents,
    blend_mode: Option<BlendMode>,
    pinned: Option<ColorScheme>,
}

impl DynamicColor {
    /// Create a dynamic color; accessible slots copy their base scheme.
    #[must_use]
    pub const fn new(light: ColorComponents, dark: ColorComponents) -> Self {
        Self {
            light,
            dark,
            light_accessible: light,
            dark_accessible: dark,
            blend_mode: None,
            pinned: None,
        }
    }

    /// The same components in every scheme.
    #[must_use]
    pub const fn uniform(color: ColorComponents) -> Self {
        Self::new(color, color)
    }

    /// Build every slot from a function of the scheme.
    #[must_use]
    pub fn from_fn(f: impl Fn(ColorScheme) -> ColorComponents) -> Self {
        Self {
            light: f(ColorScheme::Light),
            dark: f(ColorScheme::Dark),
            light_accessible: f(ColorScheme::LightAccessible),
            dark_accessible: f(ColorScheme::DarkAccessible),
            blend_mode: None,
            pinned: None,
        }
    }

    #[must_use]
    pub const fn with_light_accessible(self, color: ColorComponents) -> Self {
        Self {
            light_accessible: color,
            ..self
        }
    }

    #[must_use]
    pub const fn with_dark_accessible(self, color: ColorComponents) -> Self {
        Self {
            dark_accessible: color,
            ..self
        }
    }

    /// Attach a blend mode for the UI layer to composite with.
    #[must_use]
    pub const fn with_blend_mode(self, mode: BlendMode) -> Self {
        Self {
            blend_mode: Some(mode),
            ..self
        }
    }

    /// Pin resolution to `scheme`, whatever the ambient scheme is.
    #[must_use]
    pub const fn color_scheme(self, scheme: ColorScheme) -> Self {
        Self {
            pinned: Some(scheme),
            ..self
        }
    }

    /// Drop any scheme pin.
    #[must_use]
    pub const fn unpinned(self) -> Self {
        Self {
            pinned: None,
            ..self
        }
    }

    // ── Lookup ────────────────────────────────────────────────

    /// The components stored for `scheme`, ignoring any pin.
    #[must_use]
    pub const fn components(&self, scheme: ColorScheme) -> ColorComponents {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
            ColorScheme::LightAccessible => self.light_accessible,
            ColorScheme::DarkAccessible => self.dark_accessible,
        }
    }

    /// The scheme resolution actually uses: the pin if any, else `ambient`.
    #[must_use]
    pub fn scheme_for(&self, ambient: ColorScheme) -> ColorScheme {
        self.pinned.unwrap_or(ambient)
    }

    /// Components for the ambient scheme, honoring the pin.
    #[must_use]
    pub fn resolve(&self, ambient: ColorScheme) -> ColorComponents {
        self.components(self.scheme_for(ambient))
    }

    #[must_use]
    pub const fn blend_mode(&self) -> Option<BlendMode> {
        self.blend_mode
    }

    #[must_use]
    pub const fn pinned(&self) -> Option<ColorScheme> {
        self.pinned
    }

    // ── Adjustments ───────────────────────────────────────────

    /// Transform every slot with knowledge of its scheme. Blend mode and
    /// pin are kept.
    #[must_use]
    pub fn map_schemes(&self, f: impl Fn(ColorScheme, ColorComponents) -> ColorComponents) -> Self {
        Self {
            blend_mode: self.blend_mode,
            pinned: self.pinned,
            ..Self::from_fn(|scheme| f(scheme, self.components(scheme)))
        }
    }

    /// Transform every slot independently.
    #[must_use]
    pub fn map(&self, f: impl Fn(ColorComponents) -> ColorComponents) -> Self {
        self.map_schemes(|_, c| f(c))
    }

    /// Multiply every slot by `by`.
    #[must_use]
    pub fn multiply(&self, by: Multiplier) -> Self {
        self.map(|c| c.multiply(by))
    }

    #[must_use]
    pub fn opacity(&self, factor: f64) -> Self {
        self.multiply(Multiplier::new().opacity(factor))
    }

    #[must_use]
    pub fn hue(&self, factor: f64) -> Self {
        self.multiply(Multiplier::new().hue(factor))
    }

    #[must_use]
    pub fn saturation(&self, factor: f64) -> Self {
        self.multiply(Multiplier::new().saturation(factor))
    }

    #[must_use]
    pub fn brightness(&self, factor: f64) -> Self {
        self.multiply(Multiplier::new().brightness(factor))
    }
}

impl From<ColorComponents> for DynamicColor {
    fn from(color: ColorComponents) -> Self {
        Self::uniform(color)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
