// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! I/O utilities: image loading, output directories, and the pose-file
//! format consumed by the CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::pose::Poses;
use crate::skeleton::KEYPOINT_COUNT;

/// Find the next available run directory (render, render2, render3, etc.)
pub fn find_next_run_dir(base: &str, prefix: &str) -> String {
    let base_path = Path::new(base);

    // First try without number
    let first = base_path.join(prefix);
    if !first.exists() {
        return first.to_string_lossy().to_string();
    }

    // Try with incrementing numbers
    for i in 2.. {
        let numbered = base_path.join(format!("{prefix}{i}"));
        if !numbered.exists() {
            return numbered.to_string_lossy().to_string();
        }
    }

    // Fallback (should never reach here)
    base_path.join(prefix).to_string_lossy().to_string()
}

/// Load image helper to bypass zune-jpeg stride issues
pub fn load_image(path: &str) -> image::ImageResult<DynamicImage> {
    let path_obj = Path::new(path);
    let ext = path_obj
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    if let Some("jpg") | Some("jpeg") = ext.as_deref() {
        if let Ok(file) = File::open(path) {
            let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
            if let Ok(pixels) = decoder.decode() {
                if let Some(metadata) = decoder.info() {
                    let width = u32::from(metadata.width);
                    let height = u32::from(metadata.height);
                    match metadata.pixel_format {
                        jpeg_decoder::PixelFormat::RGB24 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageRgb8(buffer));
                            }
                        }
                        jpeg_decoder::PixelFormat::L8 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageLuma8(buffer));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    // Fallback
    image::open(path)
}

/// One detected person in a pose file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    /// Bounding box as `[x, y, w, h]`, pixel coordinates.
    #[serde(rename = "box")]
    pub bbox: [f32; 4],
    /// Optional detection score for the person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    /// Keypoint rows, each `[x, y]` or `[x, y, conf]`, in COCO order.
    pub keypoints: Vec<Vec<f32>>,
}

/// On-disk pose file: the output of an upstream estimator, serialized as JSON.
///
/// ```json
/// {
///   "people": [
///     {"box": [10, 10, 50, 80], "score": 0.93,
///      "keypoints": [[35.0, 20.0, 0.98], ...]}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseFile {
    /// Detected people.
    pub people: Vec<PersonEntry>,
}

impl PoseFile {
    /// Parse a pose file from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `PoseFileError` on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::PoseFileError(e.to_string()))
    }

    /// Read and parse a pose file from disk.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file cannot be read and `PoseFileError` on
    /// malformed JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Flatten into validated [`Poses`].
    ///
    /// All people must use the same keypoint stride, carry exactly
    /// [`KEYPOINT_COUNT`] keypoints, and either all or none may have scores.
    ///
    /// # Errors
    ///
    /// Returns `PoseFileError` for schema violations and `InvalidArgument`
    /// when the flattened buffers fail validation.
    pub fn to_poses(&self) -> Result<Poses> {
        let people = self.people.len();

        let stride = self
            .people
            .first()
            .and_then(|p| p.keypoints.first())
            .map_or(2, Vec::len);

        let with_scores = self.people.iter().filter(|p| p.score.is_some()).count();
        if with_scores != 0 && with_scores != people {
            return Err(RenderError::PoseFileError(format!(
                "scores present for {with_scores} of {people} people; use all or none"
            )));
        }

        let mut kpts = Vec::with_capacity(people * KEYPOINT_COUNT * stride);
        let box_cols = if with_scores == people && people > 0 {
            5
        } else {
            4
        };
        let mut boxes = Vec::with_capacity(people * box_cols);

        for (i, person) in self.people.iter().enumerate() {
            if person.keypoints.len() != KEYPOINT_COUNT {
                return Err(RenderError::PoseFileError(format!(
                    "person {i} has {} keypoints, expected {KEYPOINT_COUNT}",
                    person.keypoints.len()
                )));
            }
            for (k, row) in person.keypoints.iter().enumerate() {
                if row.len() != stride {
                    return Err(RenderError::PoseFileError(format!(
                        "person {i} keypoint {k} has {} values, expected {stride}",
                        row.len()
                    )));
                }
                kpts.extend_from_slice(row);
            }

            boxes.extend_from_slice(&person.bbox);
            if box_cols == 5 {
                // Checked above: every person has a score in this branch
                boxes.push(person.score.unwrap_or_default());
            }
        }

        Poses::from_flat(&kpts, &boxes, people)
    }
}
