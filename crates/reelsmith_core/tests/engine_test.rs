//! Tests for engine parsing.

use reelsmith_core::Engine;

#[test]
fn test_engine_parse_canonical_names() {
    assert_eq!("google_veo_3".parse::<Engine>().unwrap(), Engine::GoogleVeo3);
    assert_eq!("canva".parse::<Engine>().unwrap(), Engine::Canva);
}

#[test]
fn test_engine_parse_is_lenient_about_case_and_separators() {
    assert_eq!("CANVA".parse::<Engine>().unwrap(), Engine::Canva);
    assert_eq!("Google Veo 3".parse::<Engine>().unwrap(), Engine::GoogleVeo3);
    assert_eq!("google-veo-3".parse::<Engine>().unwrap(), Engine::GoogleVeo3);
}

#[test]
fn test_engine_parse_unknown_names_value_and_valid_set() {
    let err = "unknown_engine".parse::<Engine>().unwrap_err();
    assert_eq!(err.value, "unknown_engine");
    assert_eq!(err.valid, vec!["google_veo_3".to_string(), "canva".to_string()]);
}

#[test]
fn test_engine_serde_uses_wire_names() {
    let json = serde_json::to_string(&Engine::GoogleVeo3).unwrap();
    assert_eq!(json, r#""google_veo_3""#);

    let engine: Engine = serde_json::from_str(r#""canva""#).unwrap();
    assert_eq!(engine, Engine::Canva);
}

#[test]
fn test_engine_display_matches_as_str() {
    for name in Engine::names() {
        let engine: Engine = name.parse().unwrap();
        assert_eq!(engine.to_string(), name);
    }
}
