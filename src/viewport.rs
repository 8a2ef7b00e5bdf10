//! Fitting a point path into a fixed pixel box.

use bevy_math::Rect;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::interpreter::PointSequence;

/// Margin kept free on every side of the viewport by the generation pipeline.
pub const DEFAULT_PADDING: f32 = 12.0;

/// Target drawing area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Margin on each side.
    pub padding: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: DEFAULT_PADDING,
        }
    }
}

impl Viewport {
    /// A `width` x `height` viewport with [`DEFAULT_PADDING`].
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding: DEFAULT_PADDING,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Drawable size inside the padding. Never smaller than one pixel per axis.
    pub fn available(&self) -> Vec2 {
        Vec2::new(
            (self.width - 2.0 * self.padding).max(1.0),
            (self.height - 2.0 * self.padding).max(1.0),
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// See [`normalize`].
    pub fn fit(&self, points: &[Vec2]) -> PointSequence {
        let Some(bounds) = bounding_box(points) else {
            return Vec::new();
        };

        let extent = Vec2::new(
            non_degenerate(bounds.width()),
            non_degenerate(bounds.height()),
        );
        let scale = (self.available() / extent).min_element();
        let source_center = bounds.center();
        let target_center = self.center();

        points
            .iter()
            .map(|&p| target_center + (p - source_center) * scale)
            .collect()
    }
}

/// Uniformly rescales and recenters `points` into a `width` x `height` box with `padding`.
///
/// The bounding-box center maps to the viewport center and both axes share one scale, so
/// the shape is never stretched. A zero-width or zero-height box is treated as one unit
/// wide on that axis. Output has the same length and order as the input; an empty input
/// yields an empty output.
pub fn normalize(points: &[Vec2], width: f32, height: f32, padding: f32) -> PointSequence {
    Viewport {
        width,
        height,
        padding,
    }
    .fit(points)
}

/// Axis-aligned bounds of `points`, or `None` when there are none.
pub fn bounding_box(points: &[Vec2]) -> Option<Rect> {
    let (&first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_corners(first, first), |rect, &p| rect.union_point(p)),
    )
}

// Also catches NaN.
fn non_degenerate(extent: f32) -> f32 {
    if extent > 0.0 { extent } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert!(normalize(&[], 800.0, 600.0, 12.0).is_empty());
    }

    #[test]
    fn single_point_lands_in_center() {
        let out = normalize(&[Vec2::new(5.0, -3.0)], 800.0, 600.0, 12.0);
        assert_eq!(out, vec![Vec2::new(400.0, 300.0)]);
    }

    #[test]
    fn horizontal_segment_fills_width() {
        let out = normalize(&[Vec2::ZERO, Vec2::new(8.0, 0.0)], 800.0, 600.0, 12.0);
        assert!((out[0] - Vec2::new(12.0, 300.0)).length() < 1e-3);
        assert!((out[1] - Vec2::new(788.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn oversized_padding_clamps_to_one_pixel() {
        let out = normalize(&[Vec2::ZERO, Vec2::new(10.0, 10.0)], 20.0, 20.0, 50.0);
        assert!(((out[1] - out[0]).x - 1.0).abs() < 1e-5);
    }
}
