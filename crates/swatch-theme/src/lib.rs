//! # swatch-theme — variant color engine
//!
//! Expands a single seed color into a full set of UI roles (background,
//! fill, border, solid and text at subtle/regular/prominent levels) for
//! light, dark and accessible appearances.
//!
//! # Architecture
//!
//! ```text
//! ColorComponents seed (swatch-color)
//!     │
//!     ▼
//! dynamic.rs:  DynamicColor — one seed per ColorScheme, blend mode, pin
//!     │
//!     ▼
//! variant.rs:  VariantName → Variant curves (override / derived / color)
//!     │
//!     ├──▶ scale.rs:  derive_scale — all 15 variants × 4 schemes
//!     │
//!     ▼
//! theme.rs:    ThemeColor — variant + scalar overrides, resolved against
//!              the ambient scheme; Theme — named seeds
//!     │
//!     ▼
//! builtin.rs / config.rs: preset themes and TOML theme files
//! ```
//!
//! Everything below the loading layer is pure and total: no I/O, no
//! errors, no shared state. Every output is clamped to `[0, 1]`.

// Mathematical code uses short variable names for color components.
#![allow(clippy::many_single_char_names)]

pub mod blend;
pub mod builtin;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod scale;
pub mod scheme;
pub mod theme;
pub mod variant;

pub use blend::BlendMode;
pub use builtin::{builtin_names, builtin_theme};
pub use dynamic::DynamicColor;
pub use error::{ParseNameError, ThemeError};
pub use scale::{VariantColorSet, derive_scale};
pub use scheme::ColorScheme;
pub use theme::{Theme, ThemeColor};
pub use variant::{Curve, Modifier, Variant, VariantName, resolve_color, resolve_variant};
