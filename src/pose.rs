// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Pose data containers.
//!
//! Upstream estimators hand over detections as flat float buffers sized by a
//! person count. The types here replace that raw convention with owned,
//! length-checked arrays: construction validates every buffer against the
//! [`crate::skeleton::KEYPOINT_COUNT`] schema and fails with
//! [`RenderError::InvalidArgument`] instead of reading out of bounds.
//!
//! All coordinates are pixels in the source image's space, origin top-left.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2, s};

use crate::error::{RenderError, Result};
use crate::skeleton::KEYPOINT_COUNT;

/// Per-person joint coordinates.
///
/// Backed by an array of shape `(people, K, 2)` for plain `(x, y)` keypoints
/// or `(people, K, 3)` when a per-keypoint confidence is present.
#[derive(Debug, Clone)]
pub struct Keypoints {
    /// Raw keypoint data with shape (N, K, 2) or (N, K, 3) if confidence included.
    pub data: Array3<f32>,
    /// Whether confidence values are included.
    has_visible: bool,
}

impl Keypoints {
    /// Create a new Keypoints instance from an array.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the innermost dimension is not 2 or 3.
    pub fn new(data: Array3<f32>) -> Result<Self> {
        let stride = data.shape()[2];
        if stride != 2 && stride != 3 {
            return Err(RenderError::InvalidArgument(format!(
                "keypoint stride must be 2 (x, y) or 3 (x, y, conf), got {stride}"
            )));
        }
        let has_visible = stride == 3;
        Ok(Self { data, has_visible })
    }

    /// Build keypoints from a flat buffer grouped per person.
    ///
    /// The stride is detected from the buffer length: `people * K * 2` floats
    /// means `(x, y)` pairs, `people * K * 3` means `(x, y, conf)` triples.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the length matches neither stride.
    pub fn from_flat(flat: &[f32], people: usize) -> Result<Self> {
        let stride = if flat.len() == people * KEYPOINT_COUNT * 2 {
            2
        } else if flat.len() == people * KEYPOINT_COUNT * 3 {
            3
        } else {
            return Err(RenderError::InvalidArgument(format!(
                "keypoint buffer has {} floats; expected {} (xy) or {} (xy+conf) for {} people",
                flat.len(),
                people * KEYPOINT_COUNT * 2,
                people * KEYPOINT_COUNT * 3,
                people
            )));
        };

        let data = Array3::from_shape_vec((people, KEYPOINT_COUNT, stride), flat.to_vec())
            .map_err(|e| RenderError::InvalidArgument(e.to_string()))?;
        Self::new(data)
    }

    /// Get the number of people with keypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.shape()[0]
    }

    /// Check if there are no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of keypoints per person.
    #[must_use]
    pub fn keypoints_per_person(&self) -> usize {
        self.data.shape()[1]
    }

    /// Get xy coordinates with shape (N, K, 2).
    #[must_use]
    pub fn xy(&self) -> Array3<f32> {
        self.data.slice(s![.., .., 0..2]).to_owned()
    }

    /// Get xy coordinates normalized by image size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn xyn(&self, width: u32, height: u32) -> Array3<f32> {
        let mut xyn = self.xy();
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        for mut kpt in xyn.rows_mut() {
            kpt[0] /= w;
            kpt[1] /= h;
        }
        xyn
    }

    /// Get per-keypoint confidence values (if present).
    #[must_use]
    pub fn conf(&self) -> Option<Array2<f32>> {
        if self.has_visible {
            Some(self.data.slice(s![.., .., 2]).to_owned())
        } else {
            None
        }
    }

    /// Whether per-keypoint confidence values are present.
    #[must_use]
    pub const fn has_visible(&self) -> bool {
        self.has_visible
    }
}

/// Per-person bounding boxes in `(x, y, w, h)` layout, `(x, y)` top-left.
///
/// Backed by an array of shape `(people, 4)`, or `(people, 5)` when a
/// trailing per-person detection score is present.
#[derive(Debug, Clone)]
pub struct Boxes {
    /// Raw box data with shape (N, 4) containing [x, y, w, h].
    /// Or shape (N, 5) with a trailing score.
    pub data: Array2<f32>,
    /// Whether detection scores are present.
    has_score: bool,
}

impl Boxes {
    /// Create a new Boxes instance from an array.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if rows are not 4 or 5 floats wide.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        let cols = data.shape()[1];
        if cols != 4 && cols != 5 {
            return Err(RenderError::InvalidArgument(format!(
                "box rows must be [x, y, w, h] or [x, y, w, h, score], got {cols} columns"
            )));
        }
        let has_score = cols == 5;
        Ok(Self { data, has_score })
    }

    /// Build boxes from a flat buffer of 4 (or 5, with score) floats per person.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the length matches neither layout.
    pub fn from_flat(flat: &[f32], people: usize) -> Result<Self> {
        let cols = if flat.len() == people * 4 {
            4
        } else if flat.len() == people * 5 {
            5
        } else {
            return Err(RenderError::InvalidArgument(format!(
                "box buffer has {} floats; expected {} for {} people",
                flat.len(),
                people * 4,
                people
            )));
        };

        let data = Array2::from_shape_vec((people, cols), flat.to_vec())
            .map_err(|e| RenderError::InvalidArgument(e.to_string()))?;
        Self::new(data)
    }

    /// Get the number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Check if there are no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get boxes in xywh layout [x, y, w, h].
    #[must_use]
    pub fn xywh(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., 0..4])
    }

    /// Get boxes converted to corner layout [x1, y1, x2, y2].
    #[must_use]
    pub fn xyxy(&self) -> Array2<f32> {
        let xywh = self.xywh();
        let n = xywh.nrows();
        let mut xyxy = Array2::zeros((n, 4));

        for i in 0..n {
            let x = xywh[[i, 0]];
            let y = xywh[[i, 1]];
            let w = xywh[[i, 2]];
            let h = xywh[[i, 3]];

            xyxy[[i, 0]] = x;
            xyxy[[i, 1]] = y;
            xyxy[[i, 2]] = x + w;
            xyxy[[i, 3]] = y + h;
        }

        xyxy
    }

    /// Get boxes in corner layout normalized by image size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn xyxyn(&self, width: u32, height: u32) -> Array2<f32> {
        let mut xyxyn = self.xyxy();
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);

        for mut row in xyxyn.rows_mut() {
            row[0] /= w;
            row[1] /= h;
            row[2] /= w;
            row[3] /= h;
        }

        xyxyn
    }

    /// Get per-person detection scores (if present).
    #[must_use]
    pub fn score(&self) -> Option<ArrayView1<'_, f32>> {
        if self.has_score {
            Some(self.data.slice(s![.., 4]))
        } else {
            None
        }
    }

    /// Whether detection scores are present.
    #[must_use]
    pub const fn has_score(&self) -> bool {
        self.has_score
    }
}

/// A validated set of detected people: keypoints plus bounding boxes.
///
/// Both sides are guaranteed to agree on the person count.
#[derive(Debug, Clone)]
pub struct Poses {
    /// Joint coordinates for each person.
    pub keypoints: Keypoints,
    /// Bounding box for each person.
    pub boxes: Boxes,
}

impl Poses {
    /// Create a new Poses instance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the keypoint and box person counts differ.
    pub fn new(keypoints: Keypoints, boxes: Boxes) -> Result<Self> {
        if keypoints.len() != boxes.len() {
            return Err(RenderError::InvalidArgument(format!(
                "keypoints describe {} people but boxes describe {}",
                keypoints.len(),
                boxes.len()
            )));
        }
        Ok(Self { keypoints, boxes })
    }

    /// Build poses from the flat buffers produced by an upstream estimator.
    ///
    /// `keypoints` holds `people * 17 * 2` floats (or `* 3` with per-keypoint
    /// confidence); `boxes` holds 4 floats per person, `[x, y, w, h]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when either buffer length is inconsistent
    /// with `people`.
    pub fn from_flat(keypoints: &[f32], boxes: &[f32], people: usize) -> Result<Self> {
        Self::new(
            Keypoints::from_flat(keypoints, people)?,
            Boxes::from_flat(boxes, people)?,
        )
    }

    /// Get the number of detected people.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Check if no people were detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate a log string describing the poses (e.g., "2 persons, ").
    #[must_use]
    pub fn verbose(&self) -> String {
        match self.len() {
            0 => "(no people), ".to_string(),
            1 => "1 person, ".to_string(),
            n => format!("{n} persons, "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn flat_kpts(people: usize, stride: usize) -> Vec<f32> {
        (0..people * KEYPOINT_COUNT * stride)
            .map(|i| i as f32)
            .collect()
    }

    #[test]
    fn test_keypoints_from_flat_xy() {
        let kpts = Keypoints::from_flat(&flat_kpts(2, 2), 2).unwrap();
        assert_eq!(kpts.len(), 2);
        assert!(!kpts.has_visible());
        assert!(kpts.conf().is_none());
        assert_eq!(kpts.data.shape(), &[2, KEYPOINT_COUNT, 2]);
    }

    #[test]
    fn test_keypoints_from_flat_with_conf() {
        let kpts = Keypoints::from_flat(&flat_kpts(1, 3), 1).unwrap();
        assert!(kpts.has_visible());
        let conf = kpts.conf().unwrap();
        assert_eq!(conf.shape(), &[1, KEYPOINT_COUNT]);
        // Third component of the first triple
        assert!((conf[[0, 0]] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_keypoints_bad_length() {
        let err = Keypoints::from_flat(&[0.0; 5], 1).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
    }

    #[test]
    fn test_boxes_xyxy_conversion() {
        let boxes = Boxes::from_flat(&[10.0, 10.0, 50.0, 80.0], 1).unwrap();
        let xyxy = boxes.xyxy();
        assert!((xyxy[[0, 2]] - 60.0).abs() < 1e-6);
        assert!((xyxy[[0, 3]] - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_boxes_normalized() {
        let boxes = Boxes::from_flat(&[0.0, 0.0, 320.0, 240.0], 1).unwrap();
        let xyxyn = boxes.xyxyn(640, 480);
        assert!((xyxyn[[0, 2]] - 0.5).abs() < 1e-6);
        assert!((xyxyn[[0, 3]] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_boxes_with_scores() {
        let boxes = Boxes::from_flat(&[0.0, 0.0, 10.0, 10.0, 0.9], 1).unwrap();
        assert!(boxes.has_score());
        assert!((boxes.score().unwrap()[0] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_boxes_bad_width() {
        let err = Boxes::new(array![[1.0, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
    }

    #[test]
    fn test_poses_count_mismatch() {
        let kpts = Keypoints::from_flat(&flat_kpts(2, 2), 2).unwrap();
        let boxes = Boxes::from_flat(&[0.0; 4], 1).unwrap();
        let err = Poses::new(kpts, boxes).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
    }

    #[test]
    fn test_poses_verbose() {
        let poses = Poses::from_flat(&flat_kpts(2, 2), &[0.0; 8], 2).unwrap();
        assert_eq!(poses.verbose(), "2 persons, ");

        let empty = Poses::from_flat(&[], &[], 0).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.verbose(), "(no people), ");
    }
}
