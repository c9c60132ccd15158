// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Render configuration.
//!
//! This module defines the [`RenderConfig`] struct, which controls stroke
//! widths, marker sizes, keypoint confidence filtering, and which annotation
//! layers are drawn.

use crate::color::Color;

/// Configuration for pose overlay rendering.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_render::RenderConfig;
///
/// let config = RenderConfig::new()
///     .with_limb_width(3)
///     .with_kpt_radius(5)
///     .with_kpt_conf(0.25);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stroke width of skeleton limb lines, in pixels.
    pub limb_width: u32,
    /// Radius of the filled joint markers, in pixels.
    pub kpt_radius: i32,
    /// Outline thickness of bounding boxes, in pixels.
    pub box_thickness: i32,
    /// Minimum per-keypoint confidence for a joint (and its limbs) to be
    /// drawn. Only applies when the keypoint data carries confidence values;
    /// plain `(x, y)` keypoints are always drawn.
    pub kpt_conf_threshold: f32,
    /// Whether to draw bounding-box outlines.
    pub draw_boxes: bool,
    /// Whether to draw skeleton limb lines.
    pub draw_limbs: bool,
    /// Whether to draw joint markers.
    pub draw_keypoints: bool,
    /// Whether to draw per-person score labels (requires the `labels`
    /// feature and boxes that carry scores).
    pub draw_labels: bool,
    /// Solid override for box color. `None` picks a per-person palette color.
    pub box_color: Option<Color>,
    /// Solid override for limb color. `None` uses the pose palette tables.
    pub limb_color: Option<Color>,
    /// Solid override for joint marker color. `None` uses the palette tables.
    pub kpt_color: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            limb_width: 2,
            kpt_radius: 4,
            box_thickness: 2,
            kpt_conf_threshold: 0.5,
            draw_boxes: true,
            draw_limbs: true,
            draw_keypoints: true,
            draw_labels: false,
            box_color: None,
            limb_color: None,
            kpt_color: None,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skeleton limb stroke width in pixels.
    #[must_use]
    pub const fn with_limb_width(mut self, width: u32) -> Self {
        self.limb_width = width;
        self
    }

    /// Set the joint marker radius in pixels.
    #[must_use]
    pub const fn with_kpt_radius(mut self, radius: i32) -> Self {
        self.kpt_radius = radius;
        self
    }

    /// Set the bounding-box outline thickness in pixels.
    #[must_use]
    pub const fn with_box_thickness(mut self, thickness: i32) -> Self {
        self.box_thickness = thickness;
        self
    }

    /// Set the per-keypoint confidence threshold.
    ///
    /// Keypoints scoring below this are skipped, along with any limb touching
    /// them. Ignored for keypoint data without confidence values.
    #[must_use]
    pub const fn with_kpt_conf(mut self, threshold: f32) -> Self {
        self.kpt_conf_threshold = threshold;
        self
    }

    /// Enable or disable bounding-box outlines.
    #[must_use]
    pub const fn with_boxes(mut self, draw: bool) -> Self {
        self.draw_boxes = draw;
        self
    }

    /// Enable or disable skeleton limb lines.
    #[must_use]
    pub const fn with_limbs(mut self, draw: bool) -> Self {
        self.draw_limbs = draw;
        self
    }

    /// Enable or disable joint markers.
    #[must_use]
    pub const fn with_keypoints(mut self, draw: bool) -> Self {
        self.draw_keypoints = draw;
        self
    }

    /// Enable or disable per-person score labels.
    #[must_use]
    pub const fn with_labels(mut self, draw: bool) -> Self {
        self.draw_labels = draw;
        self
    }

    /// Use a single solid color for all bounding boxes.
    #[must_use]
    pub const fn with_box_color(mut self, color: Color) -> Self {
        self.box_color = Some(color);
        self
    }

    /// Use a single solid color for all limb lines.
    #[must_use]
    pub const fn with_limb_color(mut self, color: Color) -> Self {
        self.limb_color = Some(color);
        self
    }

    /// Use a single solid color for all joint markers.
    #[must_use]
    pub const fn with_kpt_color(mut self, color: Color) -> Self {
        self.kpt_color = Some(color);
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for non-positive marker radius or box thickness.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.kpt_radius <= 0 {
            return Err(crate::error::RenderError::ConfigError(format!(
                "keypoint radius must be positive, got {}",
                self.kpt_radius
            )));
        }
        if self.box_thickness <= 0 {
            return Err(crate::error::RenderError::ConfigError(format!(
                "box thickness must be positive, got {}",
                self.box_thickness
            )));
        }
        Ok(())
    }
}
