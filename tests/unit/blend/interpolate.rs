use super::*;

fn gray(w: u32, h: u32, data: Vec<u8>) -> GrayImage {
    GrayImage::from_raw(w, h, data).unwrap()
}

fn sdf(w: u32, h: u32, data: Vec<u8>) -> SdfImage {
    SdfImage::from_image(gray(w, h, data))
}

#[test]
fn endpoints_reproduce_each_input() {
    let a = sdf(4, 1, vec![0, 100, 200, 255]);
    let b = sdf(4, 1, vec![255, 200, 100, 0]);
    let p = WarpExponent::SEQUENCE;

    assert_eq!(
        interpolate_sdf(&a, &b, Ratio::ZERO, p).unwrap(),
        binarize_sdf(&a)
    );
    assert_eq!(
        interpolate_sdf(&a, &b, Ratio::ONE, p).unwrap(),
        binarize_sdf(&b)
    );
}

#[test]
fn sign_test_splits_at_the_storage_midpoint() {
    let a = sdf(2, 1, vec![127, 128]);
    assert_eq!(binarize_sdf(&a).as_image().as_raw(), &vec![0, 255]);
}

#[test]
fn mismatched_dimensions_fail() {
    let a = sdf(4, 4, vec![0; 16]);
    let b = sdf(4, 2, vec![0; 8]);
    let err = interpolate_sdf(&a, &b, Ratio::new(0.5).unwrap(), WarpExponent::SEQUENCE)
        .unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::GlyphError::DimensionMismatch { .. }
    ));

    let err = blend_linear(a.as_image(), b.as_image(), Ratio::new(0.5).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::GlyphError::DimensionMismatch { .. }
    ));
}

#[test]
fn linear_blend_threshold_is_strict() {
    let a = gray(1, 1, vec![0]);
    let b = gray(1, 1, vec![255]);
    let half = blend_linear(&a, &b, Ratio::new(0.5).unwrap()).unwrap();
    assert!(!half.is_foreground(0, 0));
    let more = blend_linear(&a, &b, Ratio::new(0.6).unwrap()).unwrap();
    assert!(more.is_foreground(0, 0));
}

#[test]
fn variants_diverge_where_the_warp_matters() {
    let a = gray(1, 1, vec![0]);
    let b = gray(1, 1, vec![255]);
    let r = Ratio::new(0.55).unwrap();

    let linear = blend(BlendVariant::Linear, &a, &b, r).unwrap();
    let warped = blend(BlendVariant::WarpedSdf(WarpExponent::SEQUENCE), &a, &b, r).unwrap();
    assert!(linear.is_foreground(0, 0));
    assert!(!warped.is_foreground(0, 0));
}

#[test]
fn warped_dispatch_matches_interpolate_sdf() {
    let a = sdf(3, 1, vec![10, 130, 250]);
    let b = sdf(3, 1, vec![240, 90, 20]);
    let r = Ratio::new(0.3).unwrap();
    let p = WarpExponent::WEIGHTED;
    assert_eq!(
        blend(BlendVariant::WarpedSdf(p), a.as_image(), b.as_image(), r).unwrap(),
        interpolate_sdf(&a, &b, r, p).unwrap()
    );
}
