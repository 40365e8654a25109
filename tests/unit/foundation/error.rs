use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SiteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SiteError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        SiteError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(SiteError::routing("x").to_string().contains("routing error:"));
    assert!(SiteError::unsupported("x").to_string().contains("unsupported:"));
    assert!(
        SiteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SiteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_convert_to_serde_variant() {
    let err: SiteError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SiteError::Serde(_)));
}
