//! Color schemes — the four appearances a dynamic color stores values for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// One of the four discrete appearances.
///
/// Accessible schemes are high-contrast twins of light and dark. They are
/// independent slots in a [`DynamicColor`](crate::DynamicColor), but the
/// builtin variant curves treat them like their base scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    LightAccessible,
    DarkAccessible,
}

impl ColorScheme {
    /// Every scheme, in slot order.
    pub const ALL: [Self; 4] = [
        Self::Light,
        Self::Dark,
        Self::LightAccessible,
        Self::DarkAccessible,
    ];

    /// Whether this scheme belongs to the dark family.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::DarkAccessible)
    }

    #[must_use]
    pub const fn is_accessible(self) -> bool {
        matches!(self, Self::LightAccessible | Self::DarkAccessible)
    }

    /// The non-accessible scheme of the same family.
    #[must_use]
    pub const fn base(self) -> Self {
        if self.is_dark() { Self::Dark } else { Self::Light }
    }

    /// The accessible scheme of the same family.
    #[must_use]
    pub const fn accessible(self) -> Self {
        if self.is_dark() {
            Self::DarkAccessible
        } else {
            Self::LightAccessible
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::LightAccessible => "light-accessible",
            Self::DarkAccessible => "dark-accessible",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseNameError;

    /// Accepts kebab-case (`dark-accessible`), snake_case and camelCase
    /// (`darkAccessible`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|scheme| normalize(scheme.as_str()) == key)
            .ok_or_else(|| ParseNameError::Scheme(s.to_string()))
    }
}

/// Lowercase with separators removed, for lenient name matching.
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
