use super::*;

fn seq(frames: Vec<RgbImage>) -> FrameSequence {
    FrameSequence {
        size: Size::new(2, 2),
        frames,
    }
}

#[test]
fn write_sequence_pushes_every_frame_in_order() {
    let a = RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]));
    let b = RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
    let mut sink = InMemorySink::new();
    write_sequence(&mut sink, &seq(vec![a.clone(), b.clone(), b.clone()]), Fps::DEFAULT).unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.frames(), &[a, b.clone(), b]);
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            size: Size::new(2, 2),
            fps: Fps::DEFAULT
        })
    );
}

#[test]
fn empty_sequence_never_begins() {
    let mut sink = InMemorySink::new();
    assert!(write_sequence(&mut sink, &seq(vec![]), Fps::DEFAULT).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn inconsistent_frame_shape_aborts() {
    let ok = RgbImage::new(2, 2);
    let bad = RgbImage::new(3, 2);
    let mut sink = InMemorySink::new();
    let err = write_sequence(&mut sink, &seq(vec![ok, bad]), Fps::DEFAULT).unwrap_err();
    assert!(matches!(err, GlyphError::DimensionMismatch { .. }));
    assert_eq!(sink.frames().len(), 1);
    assert!(!sink.is_finished());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(0, &RgbImage::new(2, 2)).is_err());
}
