use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GlyphError::encode("x").to_string().contains("encode error:"));
    assert!(
        GlyphError::degenerate("x")
            .to_string()
            .contains("degenerate field:")
    );
    assert!(
        GlyphError::input("sdf/A_happy.png", "missing")
            .to_string()
            .contains("input error: 'sdf/A_happy.png'")
    );
}

#[test]
fn dimension_mismatch_reports_both_sizes() {
    let err = GlyphError::dimension_mismatch(Size::new(4, 4), Size::new(4, 5));
    let msg = err.to_string();
    assert!(msg.contains("4x4"));
    assert!(msg.contains("4x5"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
