//! Conversions between domain values and track positions.
//!
//! Every division guards its denominator: a degenerate domain
//! (`maximum <= minimum`), a domain too wide to measure in `f32`, or a
//! viewport no wider than a thumb yields 0 rather than `NaN` or infinity.

use crate::{SliderMode, layout::Viewport};

/// Pure value/position conversions for one snapshot of slider state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    minimum: f32,
    maximum: f32,
    viewport: Viewport,
    mode: SliderMode,
}

impl ValueMapper {
    /// Creates a mapper over `[minimum, maximum]` for the given viewport.
    pub fn new(minimum: f32, maximum: f32, viewport: Viewport, mode: SliderMode) -> Self {
        Self {
            minimum,
            maximum,
            viewport,
            mode,
        }
    }

    /// Width of the domain, `maximum - minimum`.
    pub fn full_range(&self) -> f32 {
        self.maximum - self.minimum
    }

    /// The domain width when it is positive and finite, otherwise 0.
    fn span(&self) -> f32 {
        let range = self.full_range();
        if range.is_finite() && range > 0.0 { range } else { 0.0 }
    }

    /// `value` rescaled against the domain, 0 for an empty domain.
    ///
    /// ```
    /// use range_slider::{SliderMode, Viewport, ValueMapper};
    ///
    /// let mapper = ValueMapper::new(0.0, 100.0, Viewport::new(200.0, 20.0), SliderMode::FullRange);
    /// assert_eq!(mapper.normalized_ratio(25.0), 0.25);
    ///
    /// let empty = ValueMapper::new(50.0, 50.0, Viewport::new(200.0, 20.0), SliderMode::FullRange);
    /// assert_eq!(empty.normalized_ratio(50.0), 0.0);
    /// ```
    pub fn normalized_ratio(&self, value: f32) -> f32 {
        let range = self.span();
        if range > 0.0 {
            (value - self.minimum) / range
        } else {
            0.0
        }
    }

    /// Horizontal pixel position of `value` along the viewport.
    ///
    /// With `for_thumb` set, the thumb radius is subtracted so the result is
    /// the left edge of a thumb frame centered on the value.
    pub fn pixel_position(&self, value: f32, for_thumb: bool) -> f32 {
        if self.span() == 0.0 {
            return 0.0;
        }
        let position = self.viewport.width * self.normalized_ratio(value);
        if for_thumb {
            position - self.viewport.thumb_radius()
        } else {
            position
        }
    }

    /// Value-space reserved at each end of the track in full range mode.
    ///
    /// Equals `thumb_radius * full_range / width`, capped at half the domain
    /// so the lower and upper limits never invert. Single-thumb modes reserve
    /// nothing.
    pub fn disabled_margin(&self) -> f32 {
        if self.mode != SliderMode::FullRange || self.viewport.width <= 0.0 {
            return 0.0;
        }
        let range = self.span();
        (self.viewport.thumb_radius() * range / self.viewport.width).min(range * 0.5)
    }

    /// Converts a horizontal pointer movement into a value delta.
    ///
    /// The travel of a thumb is the viewport width minus one thumb diameter.
    pub fn value_delta(&self, movement: f32) -> f32 {
        let travel = self.viewport.width - self.viewport.thumb_diameter;
        if travel > 0.0 {
            self.span() * movement / travel
        } else {
            0.0
        }
    }
}
