use super::*;

#[test]
fn stems_follow_both_conventions() {
    let key = GlyphKey::new('H', Emotion::Happy).unwrap();
    assert_eq!(key.file_stem(), "H_happy");
    assert_eq!(key.source_stem(), "H 高兴");
    assert_eq!(key.to_string(), "H_happy");
}

#[test]
fn parse_stem_accepts_both_conventions() {
    assert_eq!(
        GlyphKey::parse_stem("A_surprised").unwrap(),
        GlyphKey::new('A', Emotion::Surprised).unwrap()
    );
    assert_eq!(
        GlyphKey::parse_stem("H 惊恐").unwrap(),
        GlyphKey::new('H', Emotion::Fearful).unwrap()
    );
    assert_eq!(
        GlyphKey::parse_stem("B sad").unwrap(),
        GlyphKey::new('B', Emotion::Sad).unwrap()
    );
}

#[test]
fn parse_stem_rejects_malformed_names() {
    assert!(GlyphKey::parse_stem("Ahappy").is_err());
    assert!(GlyphKey::parse_stem("AB_happy").is_err());
    assert!(GlyphKey::parse_stem("A_bored").is_err());
    assert!(GlyphKey::parse_stem("?_happy").is_err());
}

#[test]
fn layout_builds_stage_paths() {
    let layout = Layout {
        origin_dir: PathBuf::from("origin"),
        sdf_dir: PathBuf::from("sdf"),
        video_dir: PathBuf::from("out"),
    };
    let key = GlyphKey::new('H', Emotion::Sad).unwrap();
    assert_eq!(
        layout.source_path(key),
        PathBuf::from("origin").join("H").join("H 伤心.png")
    );
    assert_eq!(layout.sdf_path(key), PathBuf::from("sdf").join("H_sad.png"));
    assert_eq!(
        layout.video_path('H'),
        PathBuf::from("out").join("output_H.mp4")
    );
}

#[test]
fn raster_extension_filter() {
    assert!(is_raster_file(Path::new("sdf/A_happy.png")));
    assert!(is_raster_file(Path::new("sdf/A_happy.JPG")));
    assert!(!is_raster_file(Path::new("sdf/notes.txt")));
    assert!(!is_raster_file(Path::new("sdf/README")));
}
