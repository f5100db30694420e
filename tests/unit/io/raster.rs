use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("raster_unit");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn write_then_read_preserves_samples() {
    let path = scratch("roundtrip.png");
    let img = GrayImage::from_raw(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();
    write_gray(&path, &img).unwrap();
    assert_eq!(read_gray(&path).unwrap(), img);
}

#[test]
fn color_inputs_are_converted_to_gray() {
    let path = scratch("color.png");
    image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]))
        .save(&path)
        .unwrap();
    let gray = read_gray(&path).unwrap();
    assert_eq!(gray.dimensions(), (2, 2));
    assert!(gray.pixels().all(|p| p[0] == 255));
}

#[test]
fn missing_file_is_an_input_error() {
    let err = read_gray(Path::new("target/raster_unit/does_not_exist.png")).unwrap_err();
    assert!(matches!(err, GlyphError::Input { .. }));
}

#[test]
fn garbage_file_is_an_input_error() {
    let path = scratch("garbage.png");
    std::fs::write(&path, b"not a png").unwrap();
    assert!(matches!(
        read_gray(&path).unwrap_err(),
        GlyphError::Input { .. }
    ));
}
