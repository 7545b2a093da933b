//! Viewport geometry: where the track and the thumbs sit inside the slider.

use glam::Vec2;

use crate::{ValueMapper, geometry::Rect};

/// Share of the slider height removed above and below the track band.
const TRACK_INSET_RATIO: f32 = 0.333;

/// Layout pass input supplied by the renderer.
///
/// The slider is `thumb_diameter` tall; each thumb is a square of that side.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width of the slider in pixels.
    pub width: f32,
    /// Side of a thumb, which is also the slider height.
    pub thumb_diameter: f32,
}

impl Viewport {
    /// Creates a viewport. Negative or non-finite extents saturate to 0.
    pub fn new(width: f32, thumb_diameter: f32) -> Self {
        Self {
            width: saturate_extent(width),
            thumb_diameter: saturate_extent(thumb_diameter),
        }
    }

    /// Half a thumb.
    pub fn thumb_radius(&self) -> f32 {
        self.thumb_diameter * 0.5
    }

    /// The slider's own bounds.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.thumb_diameter)
    }
}

fn saturate_extent(extent: f32) -> f32 {
    if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}

/// Resolved frames for one layout pass.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// The slider bounds.
    pub bounds: Rect,
    /// The track band, a third of the slider height, full width.
    pub track: Rect,
    /// Frame of the lower thumb.
    pub lower_thumb: Rect,
    /// Frame of the upper thumb.
    pub upper_thumb: Rect,
}

impl SliderLayout {
    /// Lays out the slider for `lower`/`upper` using `mapper`'s projection.
    pub fn compute(viewport: Viewport, mapper: &ValueMapper, lower: f32, upper: f32) -> Self {
        let bounds = viewport.bounds();
        Self {
            bounds,
            track: bounds.inset(0.0, bounds.height() * TRACK_INSET_RATIO),
            lower_thumb: thumb_frame(viewport, mapper.pixel_position(lower, false)),
            upper_thumb: thumb_frame(viewport, mapper.pixel_position(upper, false)),
        }
    }
}

/// Thumb square centered horizontally on `center_x`, top-aligned with the
/// slider bounds.
pub fn thumb_frame(viewport: Viewport, center_x: f32) -> Rect {
    let side = viewport.thumb_diameter;
    Rect::centered_square(Vec2::new(center_x, viewport.thumb_radius()), side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliderMode;

    #[test]
    fn test_viewport_saturates() {
        assert_eq!(Viewport::new(-10.0, 20.0), Viewport::new(0.0, 20.0));
        assert_eq!(Viewport::new(f32::NAN, f32::INFINITY), Viewport::default());
    }

    #[test]
    fn test_layout_frames() {
        let viewport = Viewport::new(200.0, 20.0);
        let mapper = ValueMapper::new(0.0, 100.0, viewport, SliderMode::FullRange);
        let layout = SliderLayout::compute(viewport, &mapper, 20.0, 80.0);

        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 200.0, 20.0));
        assert_eq!(layout.lower_thumb, Rect::new(30.0, 0.0, 20.0, 20.0));
        assert_eq!(layout.upper_thumb, Rect::new(150.0, 0.0, 20.0, 20.0));

        assert_eq!(layout.track.width(), 200.0);
        assert!((layout.track.min_y() - 6.66).abs() < 1e-4);
        assert!((layout.track.height() - 6.68).abs() < 1e-4);
    }
}
