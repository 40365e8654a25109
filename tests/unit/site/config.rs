use super::*;

#[test]
fn defaults_match_the_site() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.base_path, "/");
    assert_eq!(cfg.mobile_breakpoint_px, 768);
    assert_eq!(cfg.fps, Fps::default());
    assert_eq!(cfg.asset_url("hero.png"), "/hero.png");
}

#[test]
fn asset_urls_join_with_one_slash() {
    let cfg = SiteConfig {
        base_path: "/voidblossom/".to_string(),
        ..SiteConfig::default()
    };
    assert_eq!(cfg.asset_url("/hero.png"), "/voidblossom/hero.png");
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = SiteConfig::from_reader(r#"{"base_path": "/cdn"}"#.as_bytes()).unwrap();
    assert_eq!(cfg.base_path, "/cdn");
    assert_eq!(cfg.brand, "VOIDBLOSSOM");
}

#[test]
fn invalid_json_is_a_validation_error() {
    let err = SiteConfig::from_reader("{".as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    let err = SiteConfig::from_reader(r#"{"fps": {"num": 0, "den": 1}}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, SiteError::Validation(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = SiteConfig::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn breakpoint_follows_config() {
    let cfg = SiteConfig {
        mobile_breakpoint_px: 1024,
        ..SiteConfig::default()
    };
    let tablet = Viewport::new(900, 1200).unwrap();
    assert!(cfg.is_mobile(tablet));
    assert!(!SiteConfig::default().is_mobile(tablet));
}
