// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! The pose overlay renderer.
//!
//! [`render_pose`] is a pure transformation: it copies the input image and
//! composites bounding-box outlines, skeleton limb lines, joint markers, and
//! (optionally) score labels for every detected person. The caller's image is
//! never mutated.

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::pose::Poses;
use crate::skeleton::{KPT_COLOR_INDICES, LIMB_COLOR_INDICES, SKELETON};
use crate::utils::{box_corners, in_bounds};

#[cfg(feature = "labels")]
use ab_glyph::{FontRef, PxScale};
#[cfg(feature = "labels")]
use imageproc::drawing::draw_text_mut;

/// Render pose annotations onto a copy of `image`.
///
/// Draws, for each person: the bounding-box outline, a line segment per
/// skeleton limb, and a filled marker per joint. When the keypoint data
/// carries confidence values, joints scoring below
/// [`RenderConfig::kpt_conf_threshold`] are skipped along with their limbs;
/// plain `(x, y)` keypoints are all drawn.
///
/// With zero people, or an image without pixels, the copy is returned
/// unchanged.
///
/// # Errors
///
/// Returns `ConfigError` when the configuration is invalid. Malformed pose
/// buffers cannot reach this function; [`Poses`] construction rejects them.
pub fn render_pose(
    image: &DynamicImage,
    poses: &Poses,
    config: &RenderConfig,
) -> Result<DynamicImage> {
    config.validate()?;

    let mut img = image.to_rgb8();
    let (width, height) = img.dimensions();

    if poses.is_empty() || width == 0 || height == 0 {
        return Ok(DynamicImage::ImageRgb8(img));
    }

    #[cfg(feature = "labels")]
    let font_data = if config.draw_labels {
        crate::font::load_font_bytes()
    } else {
        None
    };
    #[cfg(feature = "labels")]
    let font = font_data
        .as_ref()
        .and_then(|data| FontRef::try_from_slice(data).ok());

    let xywh = poses.boxes.xywh();
    let kpt_conf = poses.keypoints.conf();
    let kpts_per_person = poses.keypoints.keypoints_per_person();

    for person in 0..poses.len() {
        let corners = box_corners(
            [
                xywh[[person, 0]],
                xywh[[person, 1]],
                xywh[[person, 2]],
                xywh[[person, 3]],
            ],
            width,
            height,
        );

        if config.draw_boxes {
            if let Some((x1, y1, x2, y2)) = corners {
                let color = config
                    .box_color
                    .unwrap_or_else(|| Color::from_index(person));
                draw_box(&mut img, x1, y1, x2, y2, config.box_thickness, color.into());
            }
        }

        // A joint participates in drawing only when its confidence clears the
        // threshold (always true for confidence-free keypoint data).
        let visible = |kpt: usize| {
            kpt_conf
                .as_ref()
                .is_none_or(|conf| conf[[person, kpt]] >= config.kpt_conf_threshold)
        };
        let point = |kpt: usize| {
            (
                poses.keypoints.data[[person, kpt, 0]],
                poses.keypoints.data[[person, kpt, 1]],
            )
        };

        if config.draw_limbs {
            for (limb, &[a, b]) in SKELETON.iter().enumerate() {
                if a >= kpts_per_person || b >= kpts_per_person {
                    continue;
                }
                if !visible(a) || !visible(b) {
                    continue;
                }

                let (ax, ay) = point(a);
                let (bx, by) = point(b);
                if !(ax.is_finite() && ay.is_finite() && bx.is_finite() && by.is_finite()) {
                    continue;
                }

                let color = config
                    .limb_color
                    .unwrap_or_else(|| Color::from_pose_index(LIMB_COLOR_INDICES[limb]));
                draw_limb(&mut img, (ax, ay), (bx, by), config.limb_width, color.into());
            }
        }

        if config.draw_keypoints {
            for kpt in 0..kpts_per_person {
                if !visible(kpt) {
                    continue;
                }
                let (x, y) = point(kpt);
                if !in_bounds(x, y, width, height) {
                    continue;
                }

                let color = config.kpt_color.unwrap_or_else(|| {
                    Color::from_pose_index(
                        KPT_COLOR_INDICES.get(kpt).copied().unwrap_or(kpt),
                    )
                });
                #[allow(clippy::cast_possible_truncation)]
                draw_filled_circle_mut(
                    &mut img,
                    (x.round() as i32, y.round() as i32),
                    config.kpt_radius,
                    color.into(),
                );
            }
        }

        #[cfg(feature = "labels")]
        if config.draw_labels {
            if let (Some(f), Some(scores), Some((x1, y1, _, y2))) =
                (font.as_ref(), poses.boxes.score(), corners)
            {
                let label = format!("person {:.2}", scores[person]);
                let color = config
                    .box_color
                    .unwrap_or_else(|| Color::from_index(person));
                draw_label(&mut img, &label, x1, y1, y2, width, height, f, color.into());
            }
        }
    }

    Ok(DynamicImage::ImageRgb8(img))
}

/// Draw a hollow rectangle with the given outline thickness, insetting one
/// pixel per ring so thick outlines grow inward.
fn draw_box(img: &mut RgbImage, x1: i32, y1: i32, x2: i32, y2: i32, thickness: i32, color: Rgb<u8>) {
    for t in 0..thickness {
        let tx1 = (x1 + t).min(x2);
        let ty1 = (y1 + t).min(y2);
        let tx2 = (x2 - t).max(tx1);
        let ty2 = (y2 - t).max(ty1);
        if tx2 > tx1 && ty2 > ty1 {
            #[allow(clippy::cast_sign_loss)]
            let rect = Rect::at(tx1, ty1).of_size((tx2 - tx1) as u32, (ty2 - ty1) as u32);
            draw_hollow_rect_mut(img, rect, color);
        }
    }
}

/// Draw a limb line with the given stroke width.
///
/// Widths above one are built from parallel one-pixel segments offset along
/// the axis perpendicular to the limb's dominant direction.
#[allow(clippy::cast_precision_loss)]
fn draw_limb(img: &mut RgbImage, from: (f32, f32), to: (f32, f32), width: u32, color: Rgb<u8>) {
    let steep = (to.1 - from.1).abs() > (to.0 - from.0).abs();
    let half = width.max(1) as f32 / 2.0;

    for i in 0..width.max(1) {
        let offset = i as f32 - half + 0.5;
        let (a, b) = if steep {
            // Mostly vertical limb: fan out horizontally
            ((from.0 + offset, from.1), (to.0 + offset, to.1))
        } else {
            ((from.0, from.1 + offset), (to.0, to.1 + offset))
        };
        draw_line_segment_mut(img, a, b, color);
    }
}

/// Draw a label above the box when there is room, otherwise below it.
#[cfg(feature = "labels")]
#[allow(clippy::too_many_arguments, clippy::cast_possible_wrap)]
fn draw_label(
    img: &mut RgbImage,
    label: &str,
    x1: i32,
    y1: i32,
    y2: i32,
    width: u32,
    height: u32,
    font: &FontRef<'_>,
    color: Rgb<u8>,
) {
    let scale = PxScale::from(16.0);
    let text_y = if y1 > 20 { y1 - 20 } else { y2 + 5 };
    let text_x = x1.max(0);
    if text_x < width as i32 && text_y >= 0 && text_y < height as i32 {
        draw_text_mut(img, color, text_x, text_y, scale, font, label);
    }
}
