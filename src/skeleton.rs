// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! COCO-Pose keypoint schema and skeleton topology.
//!
//! The flat buffers accepted by [`crate::pose::Poses`] carry no schema of
//! their own, so the per-person keypoint count and the limb connectivity are
//! fixed here as explicit constants. The schema is the 17-keypoint COCO
//! ordering used by the upstream top-down estimators this crate renders for.

/// Number of keypoints per person.
pub const KEYPOINT_COUNT: usize = 17;

/// Keypoint names in COCO order.
pub const KEYPOINT_NAMES: [&str; KEYPOINT_COUNT] = [
    "nose",
    "left_eye",
    "right_eye",
    "left_ear",
    "right_ear",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
];

/// COCO-Pose skeleton structure (pairs of keypoint indices).
/// Defines which keypoints connect to form the pose skeleton.
pub const SKELETON: [[usize; 2]; 19] = [
    [15, 13], // left ankle to left knee
    [13, 11], // left knee to left hip
    [16, 14], // right ankle to right knee
    [14, 12], // right knee to right hip
    [11, 12], // left hip to right hip
    [5, 11],  // left shoulder to left hip
    [6, 12],  // right shoulder to right hip
    [5, 6],   // left shoulder to right shoulder
    [5, 7],   // left shoulder to left elbow
    [6, 8],   // right shoulder to right elbow
    [7, 9],   // left elbow to left wrist
    [8, 10],  // right elbow to right wrist
    [1, 2],   // left eye to right eye
    [0, 1],   // nose to left eye
    [0, 2],   // nose to right eye
    [1, 3],   // left eye to left ear
    [2, 4],   // right eye to right ear
    [3, 5],   // left ear to left shoulder
    [4, 6],   // right ear to right shoulder
];

/// Limb color indices mapping into the pose palette.
/// Mapping: legs=orange, arms/torso=blue, face=green.
pub const LIMB_COLOR_INDICES: [usize; 19] = [
    0, 0, 0, 0, 7, 7, 7, 9, 9, 9, 9, 9, 16, 16, 16, 16, 16, 16, 16,
];

/// Keypoint color indices mapping into the pose palette.
/// Mapping: face=green, arms=blue, legs=orange.
pub const KPT_COLOR_INDICES: [usize; KEYPOINT_COUNT] =
    [16, 16, 16, 16, 16, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0];

/// Get the COCO name of a keypoint index, or "keypoint" when out of range.
#[must_use]
pub fn keypoint_name(index: usize) -> &'static str {
    KEYPOINT_NAMES.get(index).copied().unwrap_or("keypoint")
}
