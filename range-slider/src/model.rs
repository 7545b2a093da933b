//! Render models: read-only projections of the slider state for renderers.
//!
//! The controller rebuilds these after every mutation. Renderers only read
//! them; changing a copy has no effect on the slider.

use derive_setters::Setters;

use crate::{color::Color, geometry::Rect};

/// Inset between a thumb frame and the drawn thumb.
const THUMB_DRAW_INSET: f32 = 2.0;

/// Colors and shape parameters of the track and thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SliderStyle {
    /// Color of the unselected track.
    pub track_tint: Color,
    /// Color of the selected sub-range.
    pub track_highlight_tint: Color,
    /// Track roundness from 0 (square ends) to 1 (capsule).
    pub curvaceousness: f32,
    /// Thumb fill.
    pub thumb_fill: Color,
    /// Thumb outline.
    pub thumb_stroke: Color,
    /// Thumb outline width.
    pub thumb_line_width: f32,
    /// Overlay painted on a thumb while it is dragged.
    pub thumb_highlight_mask: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_tint: Color::from_white(1.0, 0.2),
            track_highlight_tint: Color::BLUE,
            curvaceousness: 1.0,
            thumb_fill: Color::WHITE,
            thumb_stroke: Color::GRAY,
            thumb_line_width: 0.5,
            thumb_highlight_mask: Color::from_white(0.0, 0.1),
        }
    }
}

/// Track projection: normalized bounds of the selection plus its colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRenderModel {
    /// Normalized position of the lower value.
    pub lower: f32,
    /// Normalized position of the upper value.
    pub upper: f32,
    /// Roundness, always within `[0, 1]`.
    pub curvaceousness: f32,
    /// Color of the whole track.
    pub tint: Color,
    /// Color of the selected span.
    pub highlight_tint: Color,
}

impl Default for TrackRenderModel {
    fn default() -> Self {
        Self::new(0.0, 0.0, &SliderStyle::default())
    }
}

impl TrackRenderModel {
    /// Builds the track projection for normalized bounds.
    pub fn new(lower: f32, upper: f32, style: &SliderStyle) -> Self {
        let curvaceousness = if style.curvaceousness.is_nan() {
            0.0
        } else {
            style.curvaceousness.clamp(0.0, 1.0)
        };
        Self {
            lower,
            upper,
            curvaceousness,
            tint: style.track_tint,
            highlight_tint: style.track_highlight_tint,
        }
    }

    /// Corner radius for a track band of the given frame.
    pub fn corner_radius(&self, track: Rect) -> f32 {
        track.height() * self.curvaceousness * 0.5
    }

    /// The highlighted part of `track`, from `lower` to `upper`.
    pub fn highlight_span(&self, track: Rect) -> Rect {
        let start = track.width() * self.lower;
        let end = track.width() * self.upper;
        Rect::new(
            track.min_x() + start,
            track.min_y(),
            (end - start).max(0.0),
            track.height(),
        )
    }
}

/// Thumb projection: whether the thumb is being dragged plus its colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbRenderModel {
    /// Set while this thumb is the active drag target.
    pub highlighted: bool,
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
    /// Outline width.
    pub line_width: f32,
    /// Overlay shown while highlighted.
    pub highlight_mask: Color,
}

impl Default for ThumbRenderModel {
    fn default() -> Self {
        Self::new(false, &SliderStyle::default())
    }
}

impl ThumbRenderModel {
    /// Builds the thumb projection.
    pub fn new(highlighted: bool, style: &SliderStyle) -> Self {
        Self {
            highlighted,
            fill: style.thumb_fill,
            stroke: style.thumb_stroke,
            line_width: style.thumb_line_width.max(0.0),
            highlight_mask: style.thumb_highlight_mask,
        }
    }

    /// The drawn thumb: `frame` inset by a small border.
    pub fn drawn_frame(&self, frame: Rect) -> Rect {
        frame.inset(THUMB_DRAW_INSET, THUMB_DRAW_INSET)
    }

    /// Capsule radius of the drawn thumb.
    pub fn corner_radius(&self, frame: Rect) -> f32 {
        self.drawn_frame(frame).height() * 0.5
    }

    /// The overlay to paint, present only while highlighted.
    pub fn mask(&self) -> Option<Color> {
        self.highlighted.then_some(self.highlight_mask)
    }
}
