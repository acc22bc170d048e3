//! End-to-end properties of the public color API.

use pretty_assertions::assert_eq;
use swatch_color::{ColorComponents, Multiplier, Override};
use swatch_theme::{
    ColorScheme, DynamicColor, ThemeColor, Variant, VariantName, builtin_theme, derive_scale,
    resolve_variant,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn in_unit(c: ColorComponents) -> bool {
    [c.hue(), c.saturation(), c.brightness(), c.opacity()]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
}

/// A spread of seeds: grays, tints, extremes, translucent.
fn seeds() -> Vec<ColorComponents> {
    let mut out = vec![
        ColorComponents::BLACK,
        ColorComponents::WHITE,
        ColorComponents::TRANSPARENT,
        ColorComponents::hsb(0.5, 0.0, 0.43),
    ];
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        out.push(ColorComponents::hsba(t, t, 1.0 - t, 0.25 + t * 0.75));
        out.push(ColorComponents::hsb(1.0 - t, 0.0, t));
    }
    out
}

// ── Clamping ─────────────────────────────────────────────────────────────────

#[test]
fn every_variant_output_is_in_range() {
    for seed in seeds() {
        for name in VariantName::ALL {
            for scheme in ColorScheme::ALL {
                let c = resolve_variant(seed, name, scheme);
                assert!(in_unit(c), "{name}/{scheme} of {seed:?} gave {c:?}");
            }
        }
    }
}

#[test]
fn wild_overrides_stay_in_range() {
    let color = ThemeColor::new(DynamicColor::uniform(ColorComponents::hsb(0.3, 0.6, 0.6)))
        .variant(VariantName::FillProminent)
        .adjust(Multiplier {
            hue: 40.0,
            saturation: -3.0,
            brightness: f64::INFINITY,
            opacity: f64::NAN,
        });
    for scheme in ColorScheme::ALL {
        assert!(in_unit(color.resolve(scheme)));
    }
}

// ── Round trips ──────────────────────────────────────────────────────────────

#[test]
fn rgb8_roundtrip_within_one_step() {
    for r in (0..=255u8).step_by(7) {
        for g in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(7) {
                let (rr, rg, rb, ra) = ColorComponents::rgb8(r, g, b).to_rgba8();
                assert!(
                    r.abs_diff(rr) <= 1 && g.abs_diff(rg) <= 1 && b.abs_diff(rb) <= 1,
                    "({r}, {g}, {b}) came back as ({rr}, {rg}, {rb})"
                );
                assert_eq!(ra, 255);
            }
        }
    }
}

#[test]
fn hex_roundtrip_within_one_step() {
    for seed in seeds() {
        let back = ColorComponents::hex(&seed.to_hex());
        let (a, b) = (seed.to_rgba8(), back.to_rgba8());
        assert!(
            a.0.abs_diff(b.0) <= 1
                && a.1.abs_diff(b.1) <= 1
                && a.2.abs_diff(b.2) <= 1
                && a.3.abs_diff(b.3) <= 1,
            "{seed:?}: {a:?} vs {b:?}"
        );
    }
}

// ── Variant semantics ────────────────────────────────────────────────────────

#[test]
fn solid_is_identity() {
    for seed in seeds() {
        for scheme in ColorScheme::ALL {
            assert_eq!(resolve_variant(seed, VariantName::Solid, scheme), seed);
        }
    }
}

#[test]
fn light_backgrounds_descend_for_grays() {
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        let seed = ColorComponents::hsb(t, 0.0, 1.0 - t);
        let subtle = resolve_variant(seed, VariantName::BackgroundSubtle, ColorScheme::Light);
        let regular = resolve_variant(seed, VariantName::Background, ColorScheme::Light);
        let prominent = resolve_variant(seed, VariantName::BackgroundProminent, ColorScheme::Light);
        assert!(subtle.brightness() > regular.brightness());
        assert!(regular.brightness() > prominent.brightness());
    }
}

#[test]
fn saturation_selects_curve_branch() {
    let gray = ColorComponents::hsb(0.5, 0.0, 0.5);
    let tint = ColorComponents::hsb(0.5, 0.5, 0.5);
    let a = resolve_variant(gray, VariantName::Background, ColorScheme::Light);
    let b = resolve_variant(tint, VariantName::Background, ColorScheme::Light);
    assert_ne!(a, b);
    assert!(approx_eq(a.brightness(), 0.98));
    assert!(approx_eq(b.brightness(), 0.99));
}

#[test]
fn border_prominent_chains_off_border() {
    for seed in seeds() {
        let border = resolve_variant(seed, VariantName::Border, ColorScheme::Light);
        let prominent = resolve_variant(seed, VariantName::BorderProminent, ColorScheme::Light);
        assert!(approx_eq(prominent.brightness(), border.brightness() * 0.9));
    }
}

#[test]
fn default_primary_text_in_light() {
    let seed = ColorComponents::hsba(0.5, 0.0, 0.43, 1.0);
    let text = resolve_variant(seed, VariantName::Text, ColorScheme::Light);
    assert!(approx_eq(text.hue(), 0.5));
    assert!(approx_eq(text.saturation(), 0.95));
    assert!(approx_eq(text.brightness(), 0.24));
    assert!(approx_eq(text.opacity(), 1.0));
}

#[test]
fn accessible_schemes_equal_base_schemes() {
    for seed in seeds() {
        let scale = derive_scale(seed);
        for (name, color) in scale.iter() {
            assert_eq!(
                color.components(ColorScheme::LightAccessible),
                color.components(ColorScheme::Light),
                "{name}"
            );
            assert_eq!(
                color.components(ColorScheme::DarkAccessible),
                color.components(ColorScheme::Dark),
                "{name}"
            );
        }
    }
}

// ── Theme resolution ─────────────────────────────────────────────────────────

#[test]
fn builtin_primary_through_theme_color() {
    let theme = builtin_theme("default").unwrap();
    let fill = theme
        .color("primary")
        .unwrap()
        .variant(VariantName::Fill)
        .opacity(0.5);

    let light = fill.resolve(ColorScheme::Light);
    assert!(approx_eq(light.brightness(), 0.8));
    assert!(approx_eq(light.saturation(), 0.35));
    assert!(approx_eq(light.opacity(), 0.5));

    let dark = fill.resolve(ColorScheme::DarkAccessible);
    assert!(approx_eq(dark.brightness(), 0.38));
    assert!(approx_eq(dark.saturation(), 0.6));
}

#[test]
fn variant_from_color_does_not_track_seed() {
    let danger = DynamicColor::new(
        ColorComponents::hsb(0.0, 0.8, 0.8),
        ColorComponents::hsb(0.0, 0.6, 0.9),
    );
    let variant = Variant::from_color(danger);
    for seed in seeds() {
        let color = ThemeColor::new(DynamicColor::uniform(seed)).with_variant(variant);
        assert_eq!(color.resolve(ColorScheme::Dark), danger.components(ColorScheme::Dark));
    }
}

#[test]
fn set_then_variant_ignores_overridden_brightness() {
    // Variants override brightness, so a pre-variant brightness change on
    // the seed only matters through its effect on `is_saturated`.
    let seed = ColorComponents::hsb(0.2, 0.4, 0.5);
    let bright = seed.set(Override::new().brightness(0.9));
    assert_eq!(
        resolve_variant(seed, VariantName::Text, ColorScheme::Dark),
        resolve_variant(bright, VariantName::Text, ColorScheme::Dark)
    );
}

// ── Sharing ──────────────────────────────────────────────────────────────────

#[test]
fn values_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ColorComponents>();
    assert_send_sync::<DynamicColor>();
    assert_send_sync::<Variant>();
    assert_send_sync::<ThemeColor>();

    let seed = ColorComponents::hex("#3b6ea5");
    let expected = derive_scale(seed);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(derive_scale(seed), expected));
        }
    });
}
