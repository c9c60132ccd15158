// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

#![allow(clippy::multiple_crate_versions)]

//! # Pose Render
//!
//! Human-pose overlay renderer written in Rust: draw COCO skeletons, joint
//! markers, and bounding boxes produced by an upstream pose estimator onto
//! images.
//!
//! This crate is the visualization half of a pose pipeline. It does not run
//! models; it takes the flat keypoint/box buffers a detector hands back,
//! validates them, and composites the annotations onto a copy of the image.
//!
//! ## Features
//!
//! - **Length-checked inputs** - flat `float` buffers are validated against
//!   the COCO-17 schema instead of trusted blindly
//! - **Pure transform** - the input image is borrowed, never mutated; the
//!   annotated image is a new allocation
//! - **COCO-Pose palette** - per-limb and per-keypoint colors matching the
//!   standard pose plotting convention, with solid-color overrides
//! - **Confidence filtering** - keypoints carrying `(x, y, conf)` triples are
//!   thresholded; plain `(x, y)` pairs are drawn as-is
//! - **Score labels** - optional per-person labels rendered with a cached
//!   TTF font (feature `labels`)
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pose-render = "0.1"
//! ```
//!
//! Or install the CLI tool:
//!
//! ```bash
//! cargo install pose-render
//! ```
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use pose_render::{Poses, RenderConfig, render_pose};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let image = image::open("frame.jpg")?;
//!
//!     // Flat buffers from an upstream estimator:
//!     // 17 keypoints per person as (x, y) pairs, boxes as (x, y, w, h)
//!     let keypoints: Vec<f32> = vec![0.0; 17 * 2];
//!     let boxes: Vec<f32> = vec![10.0, 10.0, 50.0, 80.0];
//!
//!     let poses = Poses::from_flat(&keypoints, &boxes, 1)?;
//!     let annotated = render_pose(&image, &poses, &RenderConfig::default())?;
//!     annotated.save("annotated.jpg")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Render a pose file onto an image
//! pose-render render --source image.jpg --poses poses.json --output out.jpg
//!
//! # Save into runs/render[N]/ with custom strokes
//! pose-render render -s image.jpg -p poses.json --save --limb-width 3
//! ```
//!
//! **CLI Options:**
//!
//! | Option | Short | Description | Default |
//! |--------|-------|-------------|---------|
//! | `--source` | `-s` | Input image | required |
//! | `--poses` | `-p` | Pose file (JSON) | required |
//! | `--output` | `-o` | Output image path | `runs/render[N]/` |
//! | `--save` | | Save into `runs/render[N]/` | `false` |
//! | `--kpt-radius` | | Joint marker radius | `4` |
//! | `--limb-width` | | Skeleton line width | `2` |
//! | `--box-thickness` | | Box outline thickness | `2` |
//! | `--conf` | | Keypoint confidence threshold | `0.5` |
//! | `--labels` | | Draw per-person score labels | `false` |
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | The overlay renderer ([`render_pose`]) |
//! | [`pose`] | Input containers ([`Poses`], [`Keypoints`], [`Boxes`]) |
//! | [`config`] | [`RenderConfig`] builder for stroke/marker/threshold settings |
//! | [`skeleton`] | COCO-17 keypoint schema and limb topology |
//! | [`color`] | [`Color`] type and drawing palettes |
//! | [`io`] | Image loading and the JSON pose-file format |
//! | [`error`] | Error types ([`RenderError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `labels` | Per-person score labels with font download/cache (default) |
//!
//! ## License
//!
//! AGPL-3.0; see the repository LICENSE file.

// Modules
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
#[cfg(feature = "labels")]
pub mod font;
pub mod io;
pub mod pose;
pub mod render;
pub mod skeleton;
pub mod utils;

// Re-export main types for convenience
pub use color::Color;
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use io::{PersonEntry, PoseFile};
pub use pose::{Boxes, Keypoints, Poses};
pub use render::render_pose;
pub use skeleton::{KEYPOINT_COUNT, SKELETON};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
