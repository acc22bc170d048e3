//! Variant engine — one seed color, fifteen named roles.
//!
//! Each [`VariantName`] maps to a [`Variant`]: a light-family curve and a
//! dark-family curve over the seed's components. Curves override brightness
//! (picking the unsaturated or saturated target via
//! [`ColorComponents::is_saturated`]) and saturation, and pass hue and
//! opacity through untouched.
//!
//! Subtle/prominent tiers of fill, border, solid and text are *derived*:
//! they resolve their parent variant for the same seed and scheme first,
//! then scale that result. `borderProminent` is "the resolved `border`,
//! 90% as bright" in light schemes, not a curve over the raw seed.
//!
//! Accessible schemes reuse the light/dark curves. A [`Modifier`] can carry
//! distinct accessible curves, but none of the builtin variants do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::{ColorComponents, Multiplier, Override};

use crate::dynamic::DynamicColor;
use crate::error::ParseNameError;
use crate::scheme::{ColorScheme, normalize};

/// A pure transform of one color's components.
pub type Curve = fn(ColorComponents) -> ColorComponents;

// ---------------------------------------------------------------------------
// VariantName
// ---------------------------------------------------------------------------

/// The fifteen roles a seed color is expanded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantName {
    // ── Backgrounds ───────────────────────────────────────────
    BackgroundSubtle,
    Background,
    BackgroundProminent,

    // ── Fills ─────────────────────────────────────────────────
    FillSubtle,
    Fill,
    FillProminent,

    // ── Borders ───────────────────────────────────────────────
    BorderSubtle,
    Border,
    BorderProminent,

    // ── Solids (the seed itself) ──────────────────────────────
    SolidSubtle,
    Solid,
    SolidProminent,

    // ── Text ──────────────────────────────────────────────────
    TextSubtle,
    Text,
    TextProminent,
}

impl VariantName {
    /// Every variant, subtle to prominent within each family.
    pub const ALL: [Self; 15] = [
        Self::BackgroundSubtle,
        Self::Background,
        Self::BackgroundProminent,
        Self::FillSubtle,
        Self::Fill,
        Self::FillProminent,
        Self::BorderSubtle,
        Self::Border,
        Self::BorderProminent,
        Self::SolidSubtle,
        Self::Solid,
        Self::SolidProminent,
        Self::TextSubtle,
        Self::Text,
        Self::TextProminent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BackgroundSubtle => "backgroundSubtle",
            Self::Background => "background",
            Self::BackgroundProminent => "backgroundProminent",
            Self::FillSubtle => "fillSubtle",
            Self::Fill => "fill",
            Self::FillProminent => "fillProminent",
            Self::BorderSubtle => "borderSubtle",
            Self::Border => "border",
            Self::BorderProminent => "borderProminent",
            Self::SolidSubtle => "solidSubtle",
            Self::Solid => "solid",
            Self::SolidProminent => "solidProminent",
            Self::TextSubtle => "textSubtle",
            Self::Text => "text",
            Self::TextProminent => "textProminent",
        }
    }

    /// Position in [`VariantName::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The builtin variant for this name.
    #[must_use]
    pub fn variant(self) -> &'static Variant {
        &BUILTIN[self.index()]
    }
}

impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantName {
    type Err = ParseNameError;

    /// Accepts camelCase (`fillProminent`), kebab-case and snake_case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|name| normalize(name.as_str()) == key)
            .ok_or_else(|| ParseNameError::Variant(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Modifier / Variant
// ---------------------------------------------------------------------------

/// How a variant computes its components.
#[derive(Debug, Clone, Copy)]
pub enum Modifier {
    /// Curves over the seed. Accessible schemes fall back to the curve of
    /// their family when `None`.
    Components {
        light: Curve,
        dark: Curve,
        light_accessible: Option<Curve>,
        dark_accessible: Option<Curve>,
    },

    /// Resolve `parent` for the same seed and scheme, then apply the
    /// family curve to that result.
    Derived {
        parent: VariantName,
        light: Curve,
        dark: Curve,
    },

    /// Ignore the seed: resolve this independent color in the scheme.
    Color(DynamicColor),
}

/// A named transform from a seed to one visual role.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    modifier: Modifier,
}

impl Variant {
    #[must_use]
    pub const fn new(modifier: Modifier) -> Self {
        Self { modifier }
    }

    /// Light-family and dark-family curves over the seed.
    #[must_use]
    pub const fn curves(light: Curve, dark: Curve) -> Self {
        Self::new(Modifier::Components {
            light,
            dark,
            light_accessible: None,
            dark_accessible: None,
        })
    }

    /// Curves applied to the resolved `parent` variant.
    #[must_use]
    pub const fn derived(parent: VariantName, light: Curve, dark: Curve) -> Self {
        Self::new(Modifier::Derived {
            parent,
            light,
            dark,
        })
    }

    /// A variant that does not track the seed at all.
    #[must_use]
    pub const fn from_color(color: DynamicColor) -> Self {
        Self::new(Modifier::Color(color))
    }

    #[must_use]
    pub const fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    /// Resolve this variant for `seed` in `scheme`.
    #[must_use]
    pub fn apply(&self, seed: ColorComponents, scheme: ColorScheme) -> ColorComponents {
        match self.modifier {
            Modifier::Components {
                light,
                dark,
                light_accessible,
                dark_accessible,
            } => {
                let curve = match scheme {
                    ColorScheme::Light => light,
                    ColorScheme::Dark => dark,
                    ColorScheme::LightAccessible => light_accessible.unwrap_or(light),
                    ColorScheme::DarkAccessible => dark_accessible.unwrap_or(dark),
                };
                curve(seed)
            }
            Modifier::Derived {
                parent,
                light,
                dark,
            } => {
                let base = parent.variant().apply(seed, scheme);
                if scheme.is_dark() { dark(base) } else { light(base) }
            }
            Modifier::Color(color) => color.resolve(scheme),
        }
    }

    /// Apply this variant to every scheme slot of `color`.
    ///
    /// Each slot's seed is transformed in its own scheme. Blend mode and
    /// scheme pin carry over.
    #[must_use]
    pub fn apply_dynamic(&self, color: &DynamicColor) -> DynamicColor {
        color.map_schemes(|scheme, seed| self.apply(seed, scheme))
    }
}

// ---------------------------------------------------------------------------
// Curve helpers
// ---------------------------------------------------------------------------

/// Override brightness (unsaturated / saturated target) and saturation.
#[inline]
fn tone(c: ColorComponents, unsaturated: f64, saturated: f64, saturation: f64) -> ColorComponents {
    let brightness = if c.is_saturated() { saturated } else { unsaturated };
    c.set(Override::new().brightness(brightness).saturation(saturation))
}

/// Scale brightness and saturation.
#[inline]
fn scale(c: ColorComponents, brightness: f64, saturation: f64) -> ColorComponents {
    c.multiply(Multiplier::new().brightness(brightness).saturation(saturation))
}

#[inline]
const fn identity(c: ColorComponents) -> ColorComponents {
    c
}

// ---------------------------------------------------------------------------
// Builtin table
// ---------------------------------------------------------------------------

// Indexed by `VariantName::index`, so the order must match `VariantName::ALL`.
static BUILTIN: [Variant; 15] = [
    // backgroundSubtle
    Variant::curves(|c| tone(c, 0.99, 0.99, 0.01), |c| tone(c, 0.05, 0.07, 0.4)),
    // background
    Variant::curves(|c| tone(c, 0.98, 0.99, 0.02), |c| tone(c, 0.08, 0.11, 0.4)),
    // backgroundProminent
    Variant::curves(|c| tone(c, 0.97, 0.99, 0.04), |c| tone(c, 0.11, 0.14, 0.4)),
    // fillSubtle
    Variant::derived(VariantName::Fill, |c| scale(c, 1.05, 0.7), |c| scale(c, 0.75, 0.8)),
    // fill
    Variant::curves(|c| tone(c, 0.8, 0.94, 0.35), |c| tone(c, 0.38, 0.49, 0.6)),
    // fillProminent
    Variant::derived(VariantName::Fill, |c| scale(c, 0.92, 1.25), |c| scale(c, 1.3, 1.2)),
    // borderSubtle
    Variant::derived(VariantName::Border, |c| scale(c, 1.07, 0.5), |c| scale(c, 0.82, 0.9)),
    // border
    Variant::curves(|c| tone(c, 0.86, 0.9, 0.1), |c| tone(c, 0.2, 0.22, 0.2)),
    // borderProminent
    Variant::derived(VariantName::Border, |c| scale(c, 0.9, 1.2), |c| scale(c, 1.5, 1.0)),
    // solidSubtle
    Variant::derived(VariantName::Solid, |c| scale(c, 1.14, 0.9), |c| scale(c, 0.8, 1.05)),
    // solid
    Variant::curves(identity, identity),
    // solidProminent
    Variant::derived(VariantName::Solid, |c| scale(c, 0.86, 0.98), |c| scale(c, 1.2, 0.94)),
    // textSubtle
    Variant::curves(|c| tone(c, 0.6, 0.65, 0.3), |c| tone(c, 0.6, 0.6, 0.35)),
    // text
    Variant::curves(|c| tone(c, 0.24, 0.5, 0.95), |c| tone(c, 0.92, 0.95, 0.2)),
    // textProminent
    Variant::derived(VariantName::Text, |c| scale(c, 0.5, 1.0), |c| scale(c, 1.2, 1.0)),
];

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Resolve the builtin variant `name` for `seed` in `scheme`.
///
/// ```
/// use swatch_color::ColorComponents;
/// use swatch_theme::{ColorScheme, VariantName, resolve_variant};
///
/// let primary = ColorComponents::hsb(0.5, 0.0, 0.43);
/// let text = resolve_variant(primary, VariantName::Text, ColorScheme::Light);
/// assert_eq!(text, ColorComponents::hsb(0.5, 0.95, 0.24));
/// ```
#[must_use]
pub fn resolve_variant(
    seed: ColorComponents,
    name: VariantName,
    scheme: ColorScheme,
) -> ColorComponents {
    name.variant().apply(seed, scheme)
}

/// Resolve a dynamic seed in `scheme`, honoring its pin.
#[must_use]
pub fn resolve_color(color: &DynamicColor, scheme: ColorScheme) -> ColorComponents {
    color.resolve(scheme)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
