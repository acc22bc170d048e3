// SPDX-License-Identifier: MIT
//
// swatch-color — the value type underneath every swatch token.
//
// A `ColorComponents` is HSB plus opacity, clamped to the unit cube and
// never mutated. Two kinds of derivation produce new colors from old ones:
// `multiply` (scale components) and `set` (replace them). Conversions to
// and from 8-bit sRGB and hex let a UI layer paint the result.
//
// This crate knows nothing about schemes, variants or themes; those live
// in swatch-theme.

// Single-char math variables (r, g, b, h, s, v, p, q, t) are standard in
// color conversion formulas.
#![allow(clippy::many_single_char_names)]

pub mod adjust;
pub mod color;
pub mod error;

pub use adjust::{Multiplier, Override};
pub use color::ColorComponents;
pub use error::HexError;
