use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GlowError::render("x").to_string().contains("render error:"));
    assert!(GlowError::config("x").to_string().contains("config error:"));
    assert!(
        GlowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
