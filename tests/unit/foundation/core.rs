use super::*;

#[test]
fn size_of_reads_image_dimensions() {
    let img = image::GrayImage::new(3, 5);
    assert_eq!(Size::of(&img), Size::new(3, 5));
    assert_eq!(Size::of(&img).area(), 15);
    assert_eq!(Size::new(3, 5).to_string(), "3x5");
}

#[test]
fn ensure_same_size_rejects_mismatch() {
    ensure_same_size(Size::new(4, 4), Size::new(4, 4)).unwrap();
    let err = ensure_same_size(Size::new(4, 4), Size::new(8, 4)).unwrap_err();
    assert!(matches!(err, GlyphError::DimensionMismatch { .. }));
}

#[test]
fn ratio_validation() {
    assert!(Ratio::new(0.0).is_ok());
    assert!(Ratio::new(1.0).is_ok());
    assert!(Ratio::new(-0.01).is_err());
    assert!(Ratio::new(1.01).is_err());
    assert!(Ratio::new(f32::NAN).is_err());
}

#[test]
fn ratio_step_hits_both_endpoints() {
    assert_eq!(Ratio::step(0, 24).unwrap().get(), 0.0);
    assert_eq!(Ratio::step(23, 24).unwrap().get(), 1.0);
    assert_eq!(Ratio::step(1, 3).unwrap().get(), 0.5);
}

#[test]
fn ratio_step_rejects_single_interval() {
    assert!(Ratio::step(0, 1).is_err());
    assert!(Ratio::step(3, 3).is_err());
}

#[test]
fn fps_must_be_positive() {
    assert!(Fps::new(0).is_err());
    assert_eq!(Fps::new(30).unwrap().get(), 30);
    assert_eq!(Fps::default().get(), 24);
}
