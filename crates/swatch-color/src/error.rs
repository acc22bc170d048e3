// SPDX-License-Identifier: MIT
//
// Errors from strict hex parsing. The permissive constructor
// `ColorComponents::hex` never surfaces these; it maps them to a
// fallback color instead.

/// Why a hex color string was rejected by [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("empty hex color")]
    Empty,

    #[error("hex color must have 3, 4, 6 or 8 digits, found {len}")]
    InvalidLength { len: usize },

    #[error("invalid hex digit '{digit}' at position {position}")]
    InvalidDigit { digit: char, position: usize },
}
