use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = PipelineConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.letters.len(), 26);
    assert_eq!(cfg.fps.get(), 24);
    assert_eq!(cfg.sequence(), SequenceParams { intervals: 24, pause: 12 });
    assert_eq!(cfg.emotions.first(), Some(&Emotion::Neutral));
    assert_eq!(cfg.emotions.last(), Some(&Emotion::Neutral));
    assert_eq!(cfg.warp_exponent, WarpExponent::SEQUENCE);
    assert_eq!(cfg.mix_warp_exponent, WarpExponent::WEIGHTED);
    assert_eq!(cfg.threshold, 127);
    assert_eq!(cfg.resize, 512);
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg: PipelineConfig = serde_json::from_str(
        r#"{ "letters": ["H"], "emotions": ["happy", "sad"], "intervals": 4, "pause": 0 }"#,
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.letters, vec!['H']);
    assert_eq!(cfg.emotions, vec![Emotion::Happy, Emotion::Sad]);
    assert_eq!(cfg.fps, Fps::DEFAULT);
    assert_eq!(cfg.sdf_dir, PathBuf::from("sdf"));
}

#[test]
fn out_of_range_values_are_rejected_at_parse_time() {
    assert!(serde_json::from_str::<PipelineConfig>(r#"{ "fps": 0 }"#).is_err());
    assert!(serde_json::from_str::<PipelineConfig>(r#"{ "warp_exponent": 0.9 }"#).is_err());
    assert!(serde_json::from_str::<PipelineConfig>(r#"{ "mix_warp_exponent": 0.5 }"#).is_err());
    assert!(serde_json::from_str::<PipelineConfig>(r#"{ "unknown": 1 }"#).is_err());
}

#[test]
fn validate_catches_bad_values() {
    let mut cfg = PipelineConfig::default();
    cfg.intervals = 1;
    assert!(cfg.validate().is_err());

    let mut cfg = PipelineConfig::default();
    cfg.emotions = vec![Emotion::Happy];
    assert!(cfg.validate().is_err());

    let mut cfg = PipelineConfig::default();
    cfg.letters = vec!['-'];
    assert!(cfg.validate().is_err());

    let mut cfg = PipelineConfig::default();
    cfg.threading.threads = Some(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn load_reads_json_files() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("glyphs.json");
    std::fs::write(&path, r#"{ "letters": ["A", "B"], "video_dir": "videos" }"#).unwrap();

    let cfg = PipelineConfig::load(&path).unwrap();
    assert_eq!(cfg.letters, vec!['A', 'B']);
    assert_eq!(cfg.layout().video_path('A'), PathBuf::from("videos").join("output_A.mp4"));

    assert!(PipelineConfig::load(&dir.join("missing.json")).is_err());
}
