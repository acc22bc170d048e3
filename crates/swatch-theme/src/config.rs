//! Theme files — TOML definitions of named dynamic colors.
//!
//! ```toml
//! name = "ocean"
//!
//! [colors]
//! accent = "#ff8800"                  # one color for every scheme
//!
//! [colors.primary]
//! light = "#3b6ea5"
//! dark = { hue = 0.58, saturation = 0.5, brightness = 0.8 }
//! dark-accessible = "#a0c4ff"         # optional, defaults to `dark`
//! blend-mode = "multiply"             # optional
//! scheme = "dark"                     # optional pin
//! ```
//!
//! Hex strings are parsed strictly here: a typo in a theme file is an
//! error, not a silently black token. HSB tables clamp like everywhere else.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use swatch_color::ColorComponents;

use crate::blend::BlendMode;
use crate::dynamic::DynamicColor;
use crate::error::ThemeError;
use crate::scheme::ColorScheme;
use crate::theme::Theme;

/// Theme name used when neither the file nor its path supplies one.
const FALLBACK_NAME: &str = "custom";

// ---------------------------------------------------------------------------
// File schema
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    name: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, ColorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorEntry {
    Uniform(ColorValue),
    Schemes(SchemeTable),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Hex(String),
    Hsb(HsbTable),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HsbTable {
    hue: f64,
    saturation: f64,
    brightness: f64,
    #[serde(default = "opaque")]
    opacity: f64,
}

const fn opaque() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct SchemeTable {
    light: ColorValue,
    dark: ColorValue,
    light_accessible: Option<ColorValue>,
    dark_accessible: Option<ColorValue>,
    blend_mode: Option<BlendMode>,
    scheme: Option<ColorScheme>,
}

impl ColorValue {
    fn to_components(&self, name: &str) -> Result<ColorComponents, ThemeError> {
        match self {
            Self::Hex(hex) => hex.parse().map_err(|source| ThemeError::InvalidColor {
                name: name.to_string(),
                color: hex.clone(),
                source,
            }),
            Self::Hsb(t) => Ok(ColorComponents::hsba(
                t.hue,
                t.saturation,
                t.brightness,
                t.opacity,
            )),
        }
    }
}

impl ColorEntry {
    fn to_dynamic(&self, name: &str) -> Result<DynamicColor, ThemeError> {
        let table = match self {
            Self::Uniform(value) => return Ok(DynamicColor::uniform(value.to_components(name)?)),
            Self::Schemes(table) => table,
        };

        let mut color = DynamicColor::new(
            table.light.to_components(name)?,
            table.dark.to_components(name)?,
        );
        if let Some(value) = &table.light_accessible {
            color = color.with_light_accessible(value.to_components(name)?);
        }
        if let Some(value) = &table.dark_accessible {
            color = color.with_dark_accessible(value.to_components(name)?);
        }
        if let Some(mode) = table.blend_mode {
            color = color.with_blend_mode(mode);
        }
        if let Some(scheme) = table.scheme {
            color = color.color_scheme(scheme);
        }
        Ok(color)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn parse(origin: &str, source: &str, default_name: &str) -> Result<Theme, ThemeError> {
    let file: ThemeFile = toml::from_str(source).map_err(|e| ThemeError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let mut theme = Theme::new(file.name.unwrap_or_else(|| default_name.to_string()));
    for (name, entry) in &file.colors {
        theme.insert(name.as_str(), entry.to_dynamic(name)?);
    }
    Ok(theme)
}

impl Theme {
    /// Parse a theme from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed TOML or unknown keys, and
    /// [`ThemeError::InvalidColor`] for hex strings that do not parse.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        parse("<inline>", source, FALLBACK_NAME)
    }

    /// Load a theme file. Without a `name` key, the file stem names it.
    ///
    /// # Errors
    ///
    /// As [`Theme::from_toml_str`], plus [`ThemeError::Io`] when the file
    /// cannot be read.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let source = fs::read_to_string(path).map_err(|source| {
            tracing::debug!(
                event = "theme.config.read_failed",
                path = %path.display(),
                error = %source
            );
            ThemeError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let default_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(FALLBACK_NAME);
        let theme = parse(&format!("'{}'", path.display()), &source, default_name)?;

        tracing::debug!(
            event = "theme.config.loaded",
            path = %path.display(),
            name = %theme.name,
            colors = theme.len()
        );
        Ok(theme)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use swatch_color::HexError;

    const OCEAN: &str = r##"
name = "ocean"

[colors]
accent = "#ff8800"
mist = { hue = 0.55, saturation = 0.1, brightness = 0.9, opacity = 0.5 }

[colors.primary]
light = "#3b6ea5"
dark = { hue = 0.58, saturation = 0.5, brightness = 0.8 }
dark-accessible = "#a0c4ff"
blend-mode = "multiply"
scheme = "dark"
"##;

    #[test]
    fn parses_all_entry_forms() {
        let theme = Theme::from_toml_str(OCEAN).unwrap();
        assert_eq!(theme.name, "ocean");
        assert_eq!(theme.names().collect::<Vec<_>>(), vec!["accent", "mist", "primary"]);

        let accent = theme.get("accent").unwrap();
        assert_eq!(accent.components(ColorScheme::Dark), ColorComponents::hex("#ff8800"));

        let mist = theme.get("mist").unwrap();
        assert_eq!(
            mist.components(ColorScheme::LightAccessible),
            ColorComponents::hsba(0.55, 0.1, 0.9, 0.5)
        );

        let primary = theme.get("primary").unwrap();
        assert_eq!(primary.components(ColorScheme::Light), ColorComponents::hex("#3b6ea5"));
        assert_eq!(
            primary.components(ColorScheme::Dark),
            ColorComponents::hsb(0.58, 0.5, 0.8)
        );
        assert_eq!(
            primary.components(ColorScheme::LightAccessible),
            primary.components(ColorScheme::Light)
        );
        assert_eq!(
            primary.components(ColorScheme::DarkAccessible),
            ColorComponents::hex("#a0c4ff")
        );
        assert_eq!(primary.blend_mode(), Some(BlendMode::Multiply));
        assert_eq!(primary.pinned(), Some(ColorScheme::Dark));
    }

    #[test]
    fn hsb_values_clamp() {
        let theme = Theme::from_toml_str(
            "[colors]\nloud = { hue = 2.0, saturation = -1.0, brightness = 1 }\n",
        )
        .unwrap();
        assert_eq!(
            *theme.get("loud").unwrap(),
            DynamicColor::uniform(ColorComponents::hsb(1.0, 0.0, 1.0))
        );
    }

    #[test]
    fn missing_name_falls_back() {
        let theme = Theme::from_toml_str("[colors]\na = \"#000\"\n").unwrap();
        assert_eq!(theme.name, FALLBACK_NAME);
    }

    #[test]
    fn empty_file_is_empty_theme() {
        let theme = Theme::from_toml_str("").unwrap();
        assert!(theme.is_empty());
    }

    #[test]
    fn bad_hex_is_an_error() {
        let err = Theme::from_toml_str("[colors]\nbroken = \"#12345\"\n").unwrap_err();
        match err {
            ThemeError::InvalidColor {
                name,
                color,
                source,
            } => {
                assert_eq!(name, "broken");
                assert_eq!(color, "#12345");
                assert_eq!(source, HexError::InvalidLength { len: 5 });
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Theme::from_toml_str("title = \"x\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }), "{err:?}");

        let err = Theme::from_toml_str(
            "[colors.primary]\nlight = \"#fff\"\ndark = \"#000\"\nshade = \"#111\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let err = Theme::from_toml_str(
            "[colors.primary]\nlight = \"#fff\"\ndark = \"#000\"\nscheme = \"sepia\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn load_from_file_uses_stem_as_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harbor.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[colors]\nprimary = \"#6e6e6e\"").unwrap();
        drop(file);

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.name, "harbor");
        assert!(theme.color("primary").is_some());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Theme::load(&path).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }), "{err:?}");
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn parse_error_names_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "colors = [").unwrap();
        let err = Theme::load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"), "{err}");
    }
}
