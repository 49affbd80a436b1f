use std::sync::Arc;
use std::thread;

use chromix_core::parse_hex;
use chromix_mix::{
    describe_mix_expression, ColorSpace, ComputedStyleReader, MixRatio, MixRequest, Mixer,
    PresetCatalog, Precision, Tone,
};
use pretty_assertions::assert_eq;

const BUILTIN_TOML: &str = r##"
[[presets]]
id = "brand"
color_a = "#2448A6"
color_b = "#F5B841"

[[presets]]
id = "sunset"
color_a = "#FF6B6B"
color_b = "#FFA500"

[[presets]]
id = "ocean"
color_a = "#0077BE"
color_b = "#00CED1"

[[presets]]
id = "forest"
color_a = "#228B22"
color_b = "#90EE90"

[[examples]]
id = "pastel"
color_a = "#6B8CFF"
color_b = "#FFFFFF"
ratio = 30

[[examples]]
id = "deep"
color_a = "#1A5490"
color_b = "#000000"
ratio = 70
color_space = "srgb"

[[examples]]
id = "glass"
color_a = "#6B8CFF"
color_b = "#FFFFFF"
ratio = 40

[[examples]]
id = "gradient"
color_a = "#2448A6"
color_b = "#F5B841"
ratio = 50
color_space = "oklch"

[[examples]]
id = "complementary"
color_a = "#6B8CFF"
color_b = "#FF8C6B"
ratio = 50
color_space = "oklch"

[[examples]]
id = "monochromatic"
color_a = "#2448A6"
color_b = "#FFFFFF"
ratio = 60
color_space = "hsl"
"##;

#[test]
fn describes_the_oklch_brand_mix() {
    let request = MixRequest::new(
        parse_hex("#2448A6").unwrap(),
        parse_hex("#F5B841").unwrap(),
        MixRatio::new(50).unwrap(),
        "oklch".parse::<ColorSpace>().unwrap(),
    );
    assert_eq!(
        describe_mix_expression(&request),
        "color-mix(in oklch, #2448a6 50%, #f5b841 50%)"
    );
}

#[test]
fn builtin_catalog_matches_its_toml_form() {
    let loaded = PresetCatalog::from_toml_str(BUILTIN_TOML).unwrap();
    assert_eq!(loaded, PresetCatalog::builtin());
}

#[test]
fn user_catalog_overrides_and_extends_builtin() {
    let mut catalog = PresetCatalog::builtin();
    let user = PresetCatalog::from_toml_str(
        r##"
[[presets]]
id = "ocean"
color_a = "#003366"
color_b = "#66CCFF"

[[presets]]
id = "mono"
color_a = "#000000"
color_b = "#FFFFFF"
"##,
    )
    .unwrap();
    catalog.extend(user);

    assert_eq!(catalog.presets().len(), 5);
    assert_eq!(catalog.pair("ocean").unwrap().color_a.to_hex(), "#003366");
    assert_eq!(catalog.pair("mono").unwrap().color_b.to_hex(), "#ffffff");
    assert_eq!(catalog.examples().len(), 6);
}

#[test]
fn computed_style_engine_gives_exact_results() {
    let engine = ComputedStyleReader::new(|expression: &str| {
        expression
            .contains("in oklch")
            .then(|| "rgb(130, 121, 140)".to_string())
    });
    let mixer = Mixer::with_evaluator(engine);

    let gradient = PresetCatalog::builtin()
        .example("gradient")
        .unwrap()
        .request();
    let exact = mixer.mix(&gradient);
    assert_eq!(exact.precision, Precision::Exact);
    assert_eq!(exact.readout().rgb, "rgb(130, 121, 140)");

    // The engine only answers oklch here, so srgb falls back
    let approx = mixer.mix(&gradient.with_space(ColorSpace::Srgb));
    assert_eq!(approx.precision, Precision::Approximate);
    assert_eq!(approx.readout().hex, "#8D8074");
}

#[test]
fn tones_follow_the_request_space() {
    let request = PresetCatalog::builtin()
        .example("monochromatic")
        .unwrap()
        .request();
    assert_eq!(
        Tone::Hover.expression(request.color_space, request.color_a),
        "color-mix(in hsl, #2448a6 80%, white)"
    );
}

#[test]
fn mixer_is_shareable_across_threads() {
    let mixer = Arc::new(Mixer::approximate());
    let handles: Vec<_> = [MixRatio::NONE, MixRatio::HALF, MixRatio::FULL]
        .into_iter()
        .map(|ratio| {
            let mixer = Arc::clone(&mixer);
            thread::spawn(move || mixer.mix(&MixRequest::default().with_ratio(ratio)).color)
        })
        .collect();

    let colors: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().to_hex())
        .collect();
    assert_eq!(colors, vec!["#f5b841", "#8d8074", "#2448a6"]);
}
