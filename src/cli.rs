// SPDX-License-Identifier: MIT
//
// Command-line surface. Parsing only; handlers live in commands.rs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swatch_color::ColorComponents;
use swatch_theme::{ColorScheme, VariantName};

#[derive(Debug, Parser)]
#[command(
    name = "swatch",
    version,
    about = "Derive light, dark and accessible color scales from a single seed color"
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every variant of a seed color
    Scale {
        /// Seed color as hex (#rgb, #rgba, #rrggbb or #rrggbbaa)
        seed: ColorComponents,

        /// Only this scheme (default: all four)
        #[arg(long)]
        scheme: Option<ColorScheme>,
    },

    /// Print one variant of a seed color
    Resolve {
        /// Seed color as hex
        seed: ColorComponents,

        /// Variant name, e.g. fillProminent or fill-prominent
        variant: VariantName,

        #[arg(long, default_value_t = ColorScheme::Light)]
        scheme: ColorScheme,
    },

    /// Print every color of a builtin or file theme
    Theme {
        /// Builtin theme name
        #[arg(default_value = "default", conflicts_with = "file")]
        name: String,

        /// Load the theme from a TOML file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Only this scheme (default: all four)
        #[arg(long)]
        scheme: Option<ColorScheme>,

        /// Apply this variant to every color
        #[arg(long)]
        variant: Option<VariantName>,
    },

    /// List builtin themes, variants and schemes
    List,
}
