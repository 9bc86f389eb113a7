use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MorphError::layout("x").to_string().contains("layout error:"));
    assert!(
        MorphError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(MorphError::busy("x").to_string().contains("surface busy:"));
    assert!(MorphError::font("x").to_string().contains("font error:"));
    assert!(
        MorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: MorphError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, MorphError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
