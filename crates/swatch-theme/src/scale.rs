//! Full scales — every variant of a seed, in every scheme, at once.

use swatch_color::ColorComponents;

use crate::dynamic::DynamicColor;
use crate::scheme::ColorScheme;
use crate::variant::VariantName;

/// All fifteen variants of one seed, each as a [`DynamicColor`].
#[derive(Debug, Clone, PartialEq)]
pub struct VariantColorSet {
    colors: [DynamicColor; 15],
}

impl VariantColorSet {
    /// Derive every builtin variant from a dynamic seed. Each scheme slot is
    /// derived from the seed's own slot for that scheme.
    #[must_use]
    pub fn from_dynamic(seed: &DynamicColor) -> Self {
        Self {
            colors: VariantName::ALL.map(|name| name.variant().apply_dynamic(seed)),
        }
    }

    #[must_use]
    pub const fn get(&self, name: VariantName) -> DynamicColor {
        self.colors[name.index()]
    }

    /// Components of `name` in `scheme` (pins honored).
    #[must_use]
    pub fn resolve(&self, name: VariantName, scheme: ColorScheme) -> ColorComponents {
        self.get(name).resolve(scheme)
    }

    /// Variants in [`VariantName::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (VariantName, DynamicColor)> + '_ {
        VariantName::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

/// Derive the full scale of a single seed used in every scheme.
///
/// ```
/// use swatch_color::ColorComponents;
/// use swatch_theme::{ColorScheme, VariantName, derive_scale};
///
/// let scale = derive_scale(ColorComponents::hex("#3b6ea5"));
/// let border = scale.resolve(VariantName::Border, ColorScheme::Dark);
/// assert!((border.brightness() - 0.22).abs() < 1e-9);
/// ```
#[must_use]
pub fn derive_scale(seed: ColorComponents) -> VariantColorSet {
    VariantColorSet::from_dynamic(&DynamicColor::uniform(seed))
}
