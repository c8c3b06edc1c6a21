//! Integration tests for the BackdropBuilder API

use starfall::{
    BackdropBuilder, StarfallError,
    config::{AnimationConfig, AppConfig, PageConfig, SceneConfig},
    geometry::Size,
};

fn seeded(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.scene_mut().set_seed(Some(seed));
    config
}

#[test]
fn test_render_svg_is_complete_document() {
    let svg = BackdropBuilder::new(seeded(1))
        .render_svg()
        .expect("render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("FALLEN FURS"));
}

#[test]
fn test_seed_reproduces_output() {
    let a = BackdropBuilder::new(seeded(99)).render_svg().expect("render");
    let b = BackdropBuilder::new(seeded(99)).render_svg().expect("render");
    let c = BackdropBuilder::new(seeded(100)).render_svg().expect("render");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_render_frames_count() {
    let mut config = seeded(5);
    config.animation_mut().set_frames(4);

    let frames = BackdropBuilder::new(config)
        .render_frames()
        .expect("render");
    assert_eq!(frames.len(), 4);
    // The galaxy keeps turning, so consecutive frames differ
    assert_ne!(frames[0], frames[1]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = AppConfig::new(
        SceneConfig::default(),
        AnimationConfig::new(16.0, 0),
        PageConfig::default(),
    );
    assert!(matches!(
        BackdropBuilder::new(config).render_svg(),
        Err(StarfallError::Config(_))
    ));

    let mut config = seeded(1);
    config.scene_mut().set_viewport(Size::new(0.0, 600.0));
    assert!(matches!(
        BackdropBuilder::new(config).render_frames(),
        Err(StarfallError::Viewport(_))
    ));
}

#[test]
fn test_huge_frame_interval_is_config_error() {
    let config = AppConfig::new(
        SceneConfig::default(),
        AnimationConfig::new(1.0e30, 2),
        PageConfig::default(),
    );
    let builder = BackdropBuilder::new(config);

    assert!(matches!(
        builder.render_frames(),
        Err(StarfallError::Config(_))
    ));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sky.svg");
    assert!(matches!(
        builder.export(&path),
        Err(StarfallError::Config(_))
    ));
    assert!(!dir.path().join("sky_0000.svg").exists());
}

#[test]
fn test_export_single_frame_to_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sky.svg");

    let written = BackdropBuilder::new(seeded(3))
        .export(&path)
        .expect("export");

    assert_eq!(written, vec![path.clone()]);
    let content = std::fs::read_to_string(&path).expect("read back");
    assert!(content.contains("<svg"));
}

#[test]
fn test_export_numbers_multiple_frames() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut config = seeded(4);
    config.animation_mut().set_frames(3);

    let written = BackdropBuilder::new(config)
        .export(dir.path().join("sky.svg"))
        .expect("export");

    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["sky_0000.svg", "sky_0001.svg", "sky_0002.svg"]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = BackdropBuilder::new(seeded(6)).export(dir.path().join("nope").join("sky.svg"));
    assert!(matches!(result, Err(StarfallError::Export(_))));
}
