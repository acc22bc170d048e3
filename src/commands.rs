// SPDX-License-Identifier: MIT
//
// Command handlers. Each writes plain text rows to the given writer:
//
//   name                 #rrggbb   h=0.500 s=0.950 b=0.240 o=1.000

use std::io::{self, Write};

use swatch_color::ColorComponents;
use swatch_theme::{
    ColorScheme, Theme, ThemeColor, ThemeError, VariantName, builtin_names, builtin_theme,
    derive_scale, resolve_variant,
};

use crate::cli::Command;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown theme '{name}'. Builtin themes: {}", builtin_names().join(", "))]
    UnknownTheme { name: String },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Run one parsed command.
pub fn run(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Scale { seed, scheme } => scale(*seed, *scheme, out),
        Command::Resolve {
            seed,
            variant,
            scheme,
        } => {
            let color = resolve_variant(*seed, *variant, *scheme);
            writeln!(out, "{}", row(variant.as_str(), color))?;
            Ok(())
        }
        Command::Theme {
            name,
            file,
            scheme,
            variant,
        } => {
            let theme = match file {
                Some(path) => Theme::load(path)?,
                None => builtin_theme(name).ok_or_else(|| CliError::UnknownTheme {
                    name: name.clone(),
                })?,
            };
            theme_colors(&theme, *scheme, *variant, out)
        }
        Command::List => list(out),
    }
}

fn schemes(only: Option<ColorScheme>) -> Vec<ColorScheme> {
    only.map_or_else(|| ColorScheme::ALL.to_vec(), |scheme| vec![scheme])
}

fn row(name: &str, c: ColorComponents) -> String {
    format!(
        "{name:<20} {:<9} h={:.3} s={:.3} b={:.3} o={:.3}",
        c.to_hex(),
        c.hue(),
        c.saturation(),
        c.brightness(),
        c.opacity()
    )
}

fn scale(
    seed: ColorComponents,
    only: Option<ColorScheme>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    tracing::debug!(event = "cli.scale.started", seed = %seed);
    let set = derive_scale(seed);
    for scheme in schemes(only) {
        writeln!(out, "[{scheme}]")?;
        for (name, color) in set.iter() {
            writeln!(out, "{}", row(name.as_str(), color.resolve(scheme)))?;
        }
    }
    Ok(())
}

fn theme_colors(
    theme: &Theme,
    only: Option<ColorScheme>,
    variant: Option<VariantName>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    tracing::debug!(
        event = "cli.theme.started",
        theme = %theme.name,
        colors = theme.len(),
        variant = ?variant
    );
    writeln!(out, "# {}", theme.name)?;
    for scheme in schemes(only) {
        writeln!(out, "[{scheme}]")?;
        for (name, seed) in theme.iter() {
            let color = ThemeColor::new(*seed);
            let color = match variant {
                Some(v) => color.variant(v),
                None => color,
            };
            writeln!(out, "{}", row(name, color.resolve(scheme)))?;
        }
    }
    Ok(())
}

fn list(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "themes:   {}", builtin_names().join(", "))?;
    let variants: Vec<_> = VariantName::ALL.into_iter().map(VariantName::as_str).collect();
    writeln!(out, "variants: {}", variants.join(", "))?;
    let schemes: Vec<_> = ColorScheme::ALL.into_iter().map(ColorScheme::as_str).collect();
    writeln!(out, "schemes:  {}", schemes.join(", "))?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
