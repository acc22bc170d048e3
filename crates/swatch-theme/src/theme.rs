//! Theme assembly — named dynamic colors and their resolution.
//!
//! A [`Theme`] maps token names (`"primary"`, `"accent"`, …) to
//! [`DynamicColor`] seeds. Looking a name up yields a [`ThemeColor`], the
//! builder a UI layer decorates with a variant, scalar overrides and a
//! scheme pin before resolving it against the ambient scheme.

use std::collections::BTreeMap;

use swatch_color::{ColorComponents, Multiplier};

use crate::blend::BlendMode;
use crate::dynamic::DynamicColor;
use crate::scheme::ColorScheme;
use crate::variant::{Variant, VariantName};

// ---------------------------------------------------------------------------
// ThemeColor
// ---------------------------------------------------------------------------

/// A theme seed plus everything layered on top of it at use site.
///
/// Resolution order:
///
/// 1. pick the scheme: this color's pin, else the seed's pin, else ambient;
/// 2. apply the active variant to the seed's components in that scheme
///    (no variant means the seed as is);
/// 3. multiply in the scalar overrides, if any are not identity.
///
/// Overrides come last so they scale the visual outcome of a variant
/// ("half-opacity fill"), while the variant curves always see the raw seed.
///
/// ```
/// use swatch_color::ColorComponents;
/// use swatch_theme::{ColorScheme, DynamicColor, ThemeColor, VariantName};
///
/// let primary = DynamicColor::uniform(ColorComponents::hsb(0.5, 0.0, 0.43));
/// let faded_fill = ThemeColor::new(primary)
///     .variant(VariantName::Fill)
///     .opacity(0.5);
///
/// let c = faded_fill.resolve(ColorScheme::Light);
/// assert!((c.brightness() - 0.8).abs() < 1e-9);
/// assert!((c.opacity() - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThemeColor {
    color: DynamicColor,
    variant: Option<Variant>,
    adjust: Multiplier,
    pinned: Option<ColorScheme>,
}

impl ThemeColor {
    #[must_use]
    pub const fn new(color: DynamicColor) -> Self {
        Self {
            color,
            variant: None,
            adjust: Multiplier::IDENTITY,
            pinned: None,
        }
    }

    /// Activate a builtin variant, replacing any active one.
    #[must_use]
    pub fn variant(self, name: VariantName) -> Self {
        self.with_variant(*name.variant())
    }

    /// Activate a custom variant, replacing any active one.
    #[must_use]
    pub const fn with_variant(self, variant: Variant) -> Self {
        Self {
            variant: Some(variant),
            ..self
        }
    }

    /// Layer another multiplier over the existing overrides.
    #[must_use]
    pub fn adjust(self, by: Multiplier) -> Self {
        Self {
            adjust: self.adjust.then(by),
            ..self
        }
    }

    #[must_use]
    pub fn opacity(self, factor: f64) -> Self {
        self.adjust(Multiplier::new().opacity(factor))
    }

    #[must_use]
    pub fn hue(self, factor: f64) -> Self {
        self.adjust(Multiplier::new().hue(factor))
    }

    #[must_use]
    pub fn saturation(self, factor: f64) -> Self {
        self.adjust(Multiplier::new().saturation(factor))
    }

    #[must_use]
    pub fn brightness(self, factor: f64) -> Self {
        self.adjust(Multiplier::new().brightness(factor))
    }

    /// Pin resolution to `scheme`.
    #[must_use]
    pub const fn color_scheme(self, scheme: ColorScheme) -> Self {
        Self {
            pinned: Some(scheme),
            ..self
        }
    }

    // ── Inspection ────────────────────────────────────────────

    #[must_use]
    pub const fn seed(&self) -> &DynamicColor {
        &self.color
    }

    #[must_use]
    pub const fn active_variant(&self) -> Option<&Variant> {
        self.variant.as_ref()
    }

    #[must_use]
    pub const fn overrides(&self) -> Multiplier {
        self.adjust
    }

    #[must_use]
    pub const fn blend_mode(&self) -> Option<BlendMode> {
        self.color.blend_mode()
    }

    /// The scheme resolution uses for `ambient`.
    #[must_use]
    pub fn scheme_for(&self, ambient: ColorScheme) -> ColorScheme {
        self.pinned
            .unwrap_or_else(|| self.color.scheme_for(ambient))
    }

    // ── Resolution ────────────────────────────────────────────

    #[must_use]
    pub fn resolve(&self, ambient: ColorScheme) -> ColorComponents {
        let scheme = self.scheme_for(ambient);
        let seed = self.color.components(scheme);
        let base = self
            .variant
            .as_ref()
            .map_or(seed, |variant| variant.apply(seed, scheme));

        if self.adjust.is_identity() {
            base
        } else {
            base.multiply(self.adjust)
        }
    }

    /// Resolve in every scheme, as a new dynamic color.
    ///
    /// The result carries the seed's blend mode but no pin: each slot
    /// already holds what resolution in that ambient scheme yields.
    #[must_use]
    pub fn to_dynamic(&self) -> DynamicColor {
        let resolved = DynamicColor::from_fn(|scheme| self.resolve(scheme));
        match self.color.blend_mode() {
            Some(mode) => resolved.with_blend_mode(mode),
            None => resolved,
        }
    }
}

impl From<DynamicColor> for ThemeColor {
    fn from(color: DynamicColor) -> Self {
        Self::new(color)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A named set of dynamic color seeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Name of this theme (e.g., "default").
    pub name: String,
    colors: BTreeMap<String, DynamicColor>,
}

impl Theme {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
        }
    }

    /// Builder form of [`Theme::insert`].
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, color: impl Into<DynamicColor>) -> Self {
        self.insert(name, color);
        self
    }

    /// Add or replace a color, returning the previous seed if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        color: impl Into<DynamicColor>,
    ) -> Option<DynamicColor> {
        self.colors.insert(name.into(), color.into())
    }

    /// The raw seed stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DynamicColor> {
        self.colors.get(name)
    }

    /// A [`ThemeColor`] for `name`, ready for variants and overrides.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<ThemeColor> {
        self.get(name).copied().map(ThemeColor::new)
    }

    /// Color names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynamicColor)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
