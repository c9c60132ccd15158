// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Integration tests for the pose overlay renderer.

use image::{DynamicImage, Rgb, RgbImage};
use pose_render::{KEYPOINT_COUNT, Color, PoseFile, Poses, RenderConfig, RenderError, render_pose};

const BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);

fn blank(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, BACKGROUND))
}

/// 17 keypoints clustered at one location, as (x, y) pairs.
fn clustered_keypoints(cx: f32, cy: f32) -> Vec<f32> {
    let mut flat = Vec::with_capacity(KEYPOINT_COUNT * 2);
    for _ in 0..KEYPOINT_COUNT {
        flat.push(cx);
        flat.push(cy);
    }
    flat
}

#[test]
fn test_zero_people_output_is_pixel_identical() {
    let image = blank(100, 100);
    let poses = Poses::from_flat(&[], &[], 0).unwrap();
    let out = render_pose(&image, &poses, &RenderConfig::default()).unwrap();
    assert_eq!(out.to_rgb8().as_raw(), image.to_rgb8().as_raw());
}

#[test]
fn test_output_dimensions_equal_input() {
    let image = blank(317, 211);
    let poses = Poses::from_flat(
        &clustered_keypoints(150.0, 100.0),
        &[20.0, 20.0, 100.0, 150.0],
        1,
    )
    .unwrap();
    let out = render_pose(&image, &poses, &RenderConfig::default()).unwrap();
    assert_eq!((out.width(), out.height()), (image.width(), image.height()));
}

#[test]
fn test_rendering_twice_is_identical() {
    let image = blank(90, 90);
    let poses =
        Poses::from_flat(&clustered_keypoints(45.0, 45.0), &[10.0, 10.0, 60.0, 60.0], 1).unwrap();
    let config = RenderConfig::default();

    let first = render_pose(&image, &poses, &config).unwrap();
    let second = render_pose(&image, &poses, &config).unwrap();
    assert_eq!(first.to_rgb8().as_raw(), second.to_rgb8().as_raw());
}

#[test]
fn test_short_keypoint_buffer_is_invalid_argument() {
    let keypoints = vec![0.0; KEYPOINT_COUNT * 2]; // one person's worth
    let boxes = vec![0.0; 8]; // two boxes
    let err = Poses::from_flat(&keypoints, &boxes, 2).unwrap_err();
    assert!(matches!(err, RenderError::InvalidArgument(_)));
}

#[test]
fn test_short_box_buffer_is_invalid_argument() {
    let keypoints = vec![0.0; 2 * KEYPOINT_COUNT * 2];
    let boxes = vec![0.0; 4]; // one box for two people
    let err = Poses::from_flat(&keypoints, &boxes, 2).unwrap_err();
    assert!(matches!(err, RenderError::InvalidArgument(_)));
}

#[test]
fn test_single_person_annotations_land_where_expected() {
    let image = blank(100, 100);
    let poses =
        Poses::from_flat(&clustered_keypoints(35.0, 55.0), &[10.0, 10.0, 50.0, 80.0], 1).unwrap();
    let out = render_pose(&image, &poses, &RenderConfig::default()).unwrap();
    let out = out.to_rgb8();

    // Box outline along (10,10)-(60,90)
    assert_ne!(out.get_pixel(10, 10), &BACKGROUND);
    assert_ne!(out.get_pixel(60, 90), &BACKGROUND);
    assert_ne!(out.get_pixel(30, 10), &BACKGROUND);

    // Joint markers at the keypoint cluster
    assert_ne!(out.get_pixel(35, 55), &BACKGROUND);

    // Pixels away from all annotations are untouched
    assert_eq!(out.get_pixel(99, 0), &BACKGROUND);
    assert_eq!(out.get_pixel(0, 99), &BACKGROUND);
    assert_eq!(out.get_pixel(99, 99), &BACKGROUND);
}

#[test]
fn test_two_people_render_independently() {
    let image = blank(200, 100);
    let mut keypoints = clustered_keypoints(30.0, 50.0);
    keypoints.extend(clustered_keypoints(160.0, 50.0));
    let boxes = [10.0, 20.0, 40.0, 60.0, 140.0, 20.0, 40.0, 60.0];

    let poses = Poses::from_flat(&keypoints, &boxes, 2).unwrap();
    let out = render_pose(&image, &poses, &RenderConfig::default()).unwrap();
    let out = out.to_rgb8();

    // Both boxes drawn
    assert_ne!(out.get_pixel(10, 20), &BACKGROUND);
    assert_ne!(out.get_pixel(140, 20), &BACKGROUND);
    // Both keypoint clusters drawn
    assert_ne!(out.get_pixel(30, 50), &BACKGROUND);
    assert_ne!(out.get_pixel(160, 50), &BACKGROUND);
    // The gap between the two people is untouched
    assert_eq!(out.get_pixel(100, 50), &BACKGROUND);
}

#[test]
fn test_confidence_filtering_end_to_end() {
    let image = blank(80, 80);

    // (x, y, conf) triples: half confident, half not
    let mut flat = Vec::new();
    for k in 0..KEYPOINT_COUNT {
        let conf = if k % 2 == 0 { 0.9 } else { 0.1 };
        flat.extend_from_slice(&[40.0, 40.0, conf]);
    }
    let poses = Poses::from_flat(&flat, &[5.0, 5.0, 70.0, 70.0], 1).unwrap();

    // With the default 0.5 threshold the cluster still draws (even keypoints
    // pass); raising it above 0.9 must suppress every marker and limb.
    let config = RenderConfig::default().with_boxes(false);
    let drawn = render_pose(&image, &poses, &config).unwrap();
    assert_ne!(drawn.to_rgb8().get_pixel(40, 40), &BACKGROUND);

    let config = config.with_kpt_conf(0.95);
    let suppressed = render_pose(&image, &poses, &config).unwrap();
    assert_eq!(suppressed.to_rgb8().as_raw(), image.to_rgb8().as_raw());
}

#[test]
fn test_pose_file_to_annotated_image() {
    let mut rows = Vec::new();
    for _ in 0..KEYPOINT_COUNT {
        rows.push("[25.0, 25.0, 0.9]".to_string());
    }
    let json = format!(
        r#"{{"people": [{{"box": [5, 5, 40, 40], "score": 0.88, "keypoints": [{}]}}]}}"#,
        rows.join(", ")
    );

    let poses = PoseFile::from_json(&json).unwrap().to_poses().unwrap();
    let image = blank(64, 64);
    let out = render_pose(&image, &poses, &RenderConfig::default()).unwrap();

    assert_ne!(out.to_rgb8().get_pixel(5, 5), &BACKGROUND);
    assert_ne!(out.to_rgb8().get_pixel(25, 25), &BACKGROUND);
}

#[test]
fn test_solid_overrides_apply_everywhere() {
    let image = blank(60, 60);
    let poses =
        Poses::from_flat(&clustered_keypoints(30.0, 30.0), &[5.0, 5.0, 50.0, 50.0], 1).unwrap();
    let config = RenderConfig::default()
        .with_box_color(Color::WHITE)
        .with_kpt_color(Color::RED)
        .with_limbs(false);

    let out = render_pose(&image, &poses, &config).unwrap();
    let out = out.to_rgb8();
    assert_eq!(out.get_pixel(5, 5), &Rgb([255, 255, 255]));
    assert_eq!(out.get_pixel(30, 30), &Rgb([255, 0, 0]));
}
