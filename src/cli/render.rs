// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

use std::path::Path;
use std::process;
use std::time::Instant;

use crate::cli::args::RenderArgs;
use crate::cli::logging::set_verbose;
use crate::io::{PoseFile, find_next_run_dir, load_image};
use crate::{RenderConfig, error, render_pose, success, verbose, warn};

/// Run the render command: load an image and a pose file, draw the overlay,
/// and save the result.
pub fn run_render(args: &RenderArgs) {
    set_verbose(args.verbose);

    let image = match load_image(&args.source) {
        Ok(img) => img,
        Err(e) => {
            error!("Failed to load image '{}': {e}", args.source);
            process::exit(1);
        }
    };

    let poses = match PoseFile::load(&args.poses).and_then(|f| f.to_poses()) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to load poses '{}': {e}", args.poses);
            process::exit(1);
        }
    };

    let config = RenderConfig::new()
        .with_kpt_radius(args.kpt_radius)
        .with_limb_width(args.limb_width)
        .with_box_thickness(args.box_thickness)
        .with_kpt_conf(args.conf)
        .with_labels(args.labels);

    let start = Instant::now();
    let annotated = match render_pose(&image, &poses, &config) {
        Ok(img) => img,
        Err(e) => {
            error!("Render failed: {e}");
            process::exit(1);
        }
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    verbose!(
        "image {}x{}: {}{elapsed_ms:.1}ms",
        image.width(),
        image.height(),
        poses.verbose()
    );

    let save_path = if let Some(output) = &args.output {
        output.clone()
    } else {
        if !args.save {
            warn!("'output' argument is missing. Saving to runs/render.");
        }
        let run_dir = find_next_run_dir("runs", "render");
        if let Err(e) = std::fs::create_dir_all(&run_dir) {
            error!("Failed to create '{run_dir}': {e}");
            process::exit(1);
        }
        let filename = Path::new(&args.source)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Path::new(&run_dir)
            .join(filename)
            .to_string_lossy()
            .to_string()
    };

    if let Err(e) = annotated.save(&save_path) {
        error!("Failed to save '{save_path}': {e}");
        process::exit(1);
    }

    success!("Saved annotated image to {save_path}");
}
