//! Named preset themes — ready-to-use seed sets.

use swatch_color::ColorComponents;

use crate::dynamic::DynamicColor;
use crate::theme::Theme;

/// The library's default `primary` seed: a neutral gray.
#[must_use]
pub fn primary() -> DynamicColor {
    DynamicColor::uniform(ColorComponents::hsb(0.5, 0.0, 0.43))
}

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    let theme = match name {
        "default" => Theme::new("default").with_color("primary", primary()),
        _ => {
            tracing::debug!(event = "theme.builtin.unknown", name);
            return None;
        }
    };
    tracing::debug!(event = "theme.builtin.loaded", name, colors = theme.len());
    Some(theme)
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ColorScheme;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            let theme = builtin_theme(name);
            assert!(theme.is_some(), "Builtin '{name}' failed to load");
            assert_eq!(theme.unwrap().name, *name);
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("nonexistent").is_none());
    }

    #[test]
    fn default_primary_is_neutral_gray() {
        let theme = builtin_theme("default").unwrap();
        let primary = theme.color("primary").unwrap().resolve(ColorScheme::Light);
        assert!(!primary.is_saturated());
        assert!((primary.brightness() - 0.43).abs() < 1e-9);
        assert!((primary.hue() - 0.5).abs() < 1e-9);
    }
}
