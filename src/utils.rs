// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Pixel-space geometry helpers.

/// Convert an `[x, y, w, h]` box to integer corners, ordered and clamped to
/// an image of the given dimensions.
///
/// Returns `None` when the clamped box is degenerate (zero area) or the image
/// itself has no pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn box_corners(xywh: [f32; 4], width: u32, height: u32) -> Option<(i32, i32, i32, i32)> {
    if width == 0 || height == 0 {
        return None;
    }

    let mut x1 = xywh[0].round() as i32;
    let mut y1 = xywh[1].round() as i32;
    let mut x2 = (xywh[0] + xywh[2]).round() as i32;
    let mut y2 = (xywh[1] + xywh[3]).round() as i32;

    // Ensure x1 < x2 and y1 < y2 (negative width/height inputs)
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
    }
    if y1 > y2 {
        std::mem::swap(&mut y1, &mut y2);
    }

    // Clamp to image bounds
    x1 = x1.clamp(0, width as i32 - 1);
    y1 = y1.clamp(0, height as i32 - 1);
    x2 = x2.clamp(0, width as i32 - 1);
    y2 = y2.clamp(0, height as i32 - 1);

    if x2 <= x1 || y2 <= y1 {
        return None;
    }

    Some((x1, y1, x2, y2))
}

/// Check whether a point lies inside an image of the given dimensions.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn in_bounds(x: f32, y: f32, width: u32, height: u32) -> bool {
    x.is_finite()
        && y.is_finite()
        && x >= 0.0
        && y >= 0.0
        && x < width as f32
        && y < height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_corners() {
        let corners = box_corners([10.0, 10.0, 50.0, 80.0], 100, 100);
        assert_eq!(corners, Some((10, 10, 60, 90)));
    }

    #[test]
    fn test_box_corners_clamped() {
        // Extends past the right/bottom edges
        let corners = box_corners([90.0, 90.0, 50.0, 50.0], 100, 100);
        assert_eq!(corners, Some((90, 90, 99, 99)));
    }

    #[test]
    fn test_box_corners_negative_extent() {
        // Negative width flips the corners rather than failing
        let corners = box_corners([60.0, 10.0, -50.0, 30.0], 100, 100);
        assert_eq!(corners, Some((10, 10, 60, 40)));
    }

    #[test]
    fn test_box_corners_degenerate() {
        assert_eq!(box_corners([10.0, 10.0, 0.0, 0.0], 100, 100), None);
        assert_eq!(box_corners([200.0, 200.0, 10.0, 10.0], 100, 100), None);
        assert_eq!(box_corners([10.0, 10.0, 5.0, 5.0], 0, 0), None);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0.0, 0.0, 100, 100));
        assert!(in_bounds(99.9, 99.9, 100, 100));
        assert!(!in_bounds(-1.0, 0.0, 100, 100));
        assert!(!in_bounds(0.0, 100.0, 100, 100));
        assert!(!in_bounds(f32::NAN, 0.0, 100, 100));
    }
}
