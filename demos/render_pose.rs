// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Example script demonstrating the pose overlay renderer.
//!
//! This example covers:
//! 1. Building poses from the flat buffers an estimator produces.
//! 2. Rendering onto an image loaded from disk and saving the result.

use std::path::Path;

use pose_render::{Poses, RenderConfig, Result, render_pose};

fn main() -> Result<()> {
    // 1. Flat buffers, exactly as an upstream estimator hands them over:
    // 17 (x, y) keypoints per person and one (x, y, w, h) box per person.
    let keypoints: Vec<f32> = vec![
        330.0, 100.0, // nose
        340.0, 90.0, // left eye
        320.0, 90.0, // right eye
        355.0, 95.0, // left ear
        305.0, 95.0, // right ear
        380.0, 160.0, // left shoulder
        280.0, 160.0, // right shoulder
        400.0, 240.0, // left elbow
        260.0, 240.0, // right elbow
        410.0, 310.0, // left wrist
        250.0, 310.0, // right wrist
        365.0, 320.0, // left hip
        295.0, 320.0, // right hip
        370.0, 430.0, // left knee
        290.0, 430.0, // right knee
        375.0, 540.0, // left ankle
        285.0, 540.0, // right ankle
    ];
    let boxes: Vec<f32> = vec![240.0, 70.0, 180.0, 500.0];

    let poses = Poses::from_flat(&keypoints, &boxes, 1)?;

    // 2. Render onto an image and save
    let image_path = "person.jpg";
    if Path::new(image_path).exists() {
        println!("Processing {image_path}...");
        let image = pose_render::io::load_image(image_path)?;

        let config = RenderConfig::new().with_limb_width(3).with_kpt_radius(5);
        let annotated = render_pose(&image, &poses, &config)?;

        annotated.save("person_annotated.jpg")?;
        println!("Saved annotated image to ./person_annotated.jpg");
    } else {
        println!("Skipping: '{image_path}' not found.");
    }

    Ok(())
}
