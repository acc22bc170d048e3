//! Error types for name parsing and theme loading.
//!
//! The color engine itself is total; only user-supplied text (scheme and
//! variant names, theme files) can fail.

use std::path::PathBuf;

use swatch_color::HexError;

/// A scheme, variant or blend-mode name that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNameError {
    #[error(
        "unknown color scheme '{0}' (expected light, dark, light-accessible or dark-accessible)"
    )]
    Scheme(String),

    #[error("unknown variant '{0}'")]
    Variant(String),

    #[error("unknown blend mode '{0}'")]
    BlendMode(String),
}

/// Failure to load a theme definition.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid color '{color}' for '{name}': {source}")]
    InvalidColor {
        name: String,
        color: String,
        #[source]
        source: HexError,
    },
}
