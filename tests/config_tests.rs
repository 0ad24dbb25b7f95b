//! Config tests - serde round-trips and the appearance rules pieces follow

use stackfall::core::{ConfigError, Glyphs, Piece, PieceConfig, RandomAlgorithm};
use stackfall::types::{Color, PieceKind, Rgb};

#[test]
fn test_default_config_round_trips_through_json() {
    let config = PieceConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: PieceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_json_uses_integer_selector_and_glyph_strings() {
    let value = serde_json::to_value(PieceConfig::default()).unwrap();
    assert_eq!(value["random_algorithm"], 1);
    assert_eq!(value["glyphs"][0], "[]");
}

#[test]
fn test_partial_json_overrides() {
    let json = r###"{
        "has_colors": false,
        "glyphs": ["##", "##", "##", "##", "##", "##", "##"],
        "random_algorithm": 0
    }"###;
    let config: PieceConfig = serde_json::from_str(json).unwrap();

    assert!(!config.has_colors);
    assert_eq!(config.random_algorithm, RandomAlgorithm::Uniform);

    let piece = Piece::new(PieceKind::T, &config);
    assert_eq!(piece.glyphs(), Glyphs(['#', '#']));
    assert_eq!(piece.color(), config.no_color);
}

#[test]
fn test_bad_glyphs_rejected() {
    let json = r#"{ "glyphs": ["[]", "[", "[]", "[]", "[]", "[]", "[]"] }"#;
    let err = serde_json::from_str::<PieceConfig>(json).unwrap_err();
    assert!(err.to_string().contains("two characters"));
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::UnknownRandomAlgorithm(3).to_string(),
        "unknown random algorithm selector 3 (expected 0 = uniform or 1 = fair bag)"
    );
    assert_eq!(
        RandomAlgorithm::try_from(9),
        Err(ConfigError::UnknownRandomAlgorithm(9))
    );
}

#[test]
fn test_custom_pivot_color() {
    let pivot = Color::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), true);
    let config = PieceConfig {
        show_pivot: true,
        pivot_color: pivot,
        ..PieceConfig::default()
    };

    for kind in PieceKind::ALL {
        let piece = Piece::new(kind, &config);
        let marked = piece.blocks().iter().filter(|b| b.color == pivot).count();
        let expected = if kind == PieceKind::O { 0 } else { 1 };
        assert_eq!(marked, expected, "{:?}", kind);
    }
}
