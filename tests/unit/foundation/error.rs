use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(FlowError::config("x").to_string().contains("config error:"));
    assert!(FlowError::layout("x").to_string().contains("layout error:"));
    assert!(
        FlowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
