//! The range slider controller: values, modes, dragging and projection.
//!
//! ## Usage
//!
//! Create a [`RangeSliderController`] from [`RangeSliderArgs`], attach a
//! [`Renderer`], then forward pointer presses, moves and releases to
//! [`begin_drag`](RangeSliderController::begin_drag),
//! [`continue_drag`](RangeSliderController::continue_drag) and
//! [`end_drag`](RangeSliderController::end_drag).
//!
//! Every public mutator clamps the values and then runs a single recompute
//! step that rebuilds the render models and pushes one [`RenderBatch`].

use derive_setters::Setters;
use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::{
    ValueMapper,
    layout::{SliderLayout, Viewport},
    model::{SliderStyle, ThumbRenderModel, TrackRenderModel},
    prop::CallbackWith,
    render::{RenderBatch, Renderer, ThumbRender, ThumbSide},
};

/// Which thumbs a slider shows and how its values are pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderMode {
    /// Two thumbs selecting a sub-range.
    #[default]
    FullRange,
    /// Only the upper thumb; the lower value is pinned to the minimum.
    SingleMax,
    /// Only the lower thumb; the upper value is pinned to the maximum.
    SingleMin,
}

impl SliderMode {
    /// Whether this mode shows the lower thumb.
    pub fn has_lower_thumb(self) -> bool {
        self != SliderMode::SingleMax
    }

    /// Whether this mode shows the upper thumb.
    pub fn has_upper_thumb(self) -> bool {
        self != SliderMode::SingleMin
    }

    /// Whether `side` is shown in this mode.
    pub fn shows(self, side: ThumbSide) -> bool {
        match side {
            ThumbSide::Lower => self.has_lower_thumb(),
            ThumbSide::Upper => self.has_upper_thumb(),
        }
    }
}

/// The thumb currently captured by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveThumb {
    /// No drag in progress.
    #[default]
    None,
    /// Dragging the lower thumb.
    Lower,
    /// Dragging the upper thumb.
    Upper,
}

impl ActiveThumb {
    /// The dragged thumb, if any.
    pub fn side(self) -> Option<ThumbSide> {
        match self {
            ActiveThumb::None => None,
            ActiveThumb::Lower => Some(ThumbSide::Lower),
            ActiveThumb::Upper => Some(ThumbSide::Upper),
        }
    }
}

/// Drag bookkeeping.
///
/// `last_pointer` survives the end of a gesture: a press that misses every
/// thumb in a single-thumb mode nudges the thumb by the movement since the
/// previous pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// The captured thumb.
    pub active_thumb: ActiveThumb,
    /// The last pointer position seen by the controller.
    pub last_pointer: Vec2,
}

/// Domain bounds, selected values and mode.
///
/// After every controller operation
/// `minimum <= lower <= upper <= maximum` holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    /// Lower end of the domain.
    pub minimum: f32,
    /// Upper end of the domain.
    pub maximum: f32,
    /// Selected lower value.
    pub lower: f32,
    /// Selected upper value.
    pub upper: f32,
    /// Display and interaction mode.
    pub mode: SliderMode,
}

/// Arguments for [`RangeSliderController::new`].
#[derive(Clone, PartialEq, Setters)]
pub struct RangeSliderArgs {
    /// Lower end of the domain.
    pub minimum: f32,
    /// Upper end of the domain.
    pub maximum: f32,
    /// Initial lower value.
    pub lower: f32,
    /// Initial upper value.
    pub upper: f32,
    /// Display and interaction mode.
    pub mode: SliderMode,
    /// Initial viewport; renderers usually update it on layout.
    pub viewport: Viewport,
    /// Colors and shape.
    pub style: SliderStyle,
    /// Called with `(lower, upper)` on every drag movement.
    #[setters(skip)]
    pub on_change: CallbackWith<(f32, f32)>,
}

impl RangeSliderArgs {
    /// Set the value change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn((f32, f32)) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Set the value change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<(f32, f32)>>) -> Self {
        self.on_change = on_change.into();
        self
    }
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            lower: 0.2,
            upper: 0.8,
            mode: SliderMode::FullRange,
            viewport: Viewport::default(),
            style: SliderStyle::default(),
            on_change: CallbackWith::default(),
        }
    }
}

/// Owns the slider state and turns pointer input into value changes.
pub struct RangeSliderController {
    state: SliderState,
    drag: DragState,
    viewport: Viewport,
    style: SliderStyle,
    track: TrackRenderModel,
    lower_thumb: ThumbRenderModel,
    upper_thumb: ThumbRenderModel,
    renderer: Option<Box<dyn Renderer>>,
    on_change: CallbackWith<(f32, f32)>,
}

impl Default for RangeSliderController {
    fn default() -> Self {
        Self::new(RangeSliderArgs::default())
    }
}

impl std::fmt::Debug for RangeSliderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSliderController")
            .field("state", &self.state)
            .field("drag", &self.drag)
            .field("viewport", &self.viewport)
            .field("has_renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

impl RangeSliderController {
    /// Creates a controller. Non-finite arguments, or bounds too far apart to
    /// measure, fall back to the defaults and the values are clamped into the
    /// domain immediately.
    pub fn new(args: RangeSliderArgs) -> Self {
        let defaults = RangeSliderArgs::default();
        let (minimum, maximum) = match domain(args.minimum, args.maximum) {
            Some(bounds) => bounds,
            None => {
                warn!(
                    minimum = args.minimum,
                    maximum = args.maximum,
                    "unusable slider bounds, using defaults"
                );
                (defaults.minimum, defaults.maximum)
            }
        };
        let mut controller = Self {
            state: SliderState {
                minimum,
                maximum,
                lower: finite_or(args.lower, minimum),
                upper: finite_or(args.upper, maximum),
                mode: args.mode,
            },
            drag: DragState::default(),
            viewport: Viewport::new(args.viewport.width, args.viewport.thumb_diameter),
            style: args.style,
            track: TrackRenderModel::default(),
            lower_thumb: ThumbRenderModel::default(),
            upper_thumb: ThumbRenderModel::default(),
            renderer: None,
            on_change: args.on_change,
        };
        controller.clamp_in_place();
        controller.recompute();
        controller
    }

    /// Attaches a renderer and immediately pushes the current batch to it.
    pub fn set_renderer(&mut self, renderer: impl Renderer + 'static) {
        self.renderer = Some(Box::new(renderer));
        self.push_batch(&self.render_batch_snapshot());
    }

    /// Detaches the renderer, if any.
    pub fn take_renderer(&mut self) -> Option<Box<dyn Renderer>> {
        self.renderer.take()
    }

    /// Replaces the value change handler.
    pub fn set_on_change(&mut self, on_change: impl Into<CallbackWith<(f32, f32)>>) {
        self.on_change = on_change.into();
    }

    /// Current state snapshot.
    pub fn state(&self) -> SliderState {
        self.state
    }

    /// Lower end of the domain.
    pub fn minimum(&self) -> f32 {
        self.state.minimum
    }

    /// Upper end of the domain.
    pub fn maximum(&self) -> f32 {
        self.state.maximum
    }

    /// Selected lower value.
    pub fn lower(&self) -> f32 {
        self.state.lower
    }

    /// Selected upper value.
    pub fn upper(&self) -> f32 {
        self.state.upper
    }

    /// Current mode.
    pub fn mode(&self) -> SliderMode {
        self.state.mode
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current style.
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Current drag bookkeeping.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The captured thumb.
    pub fn active_thumb(&self) -> ActiveThumb {
        self.drag.active_thumb
    }

    /// Whether a thumb is captured.
    pub fn is_dragging(&self) -> bool {
        self.drag.active_thumb != ActiveThumb::None
    }

    /// Mapper over the current state and viewport.
    pub fn mapper(&self) -> ValueMapper {
        ValueMapper::new(
            self.state.minimum,
            self.state.maximum,
            self.viewport,
            self.state.mode,
        )
    }

    /// Value-space kept clear at the track ends and between the thumbs.
    pub fn disabled_margin(&self) -> f32 {
        self.mapper().disabled_margin()
    }

    /// Frames for the current state.
    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(
            self.viewport,
            &self.mapper(),
            self.state.lower,
            self.state.upper,
        )
    }

    /// The batch a renderer would receive for the current state.
    pub fn render_batch(&self) -> RenderBatch {
        self.render_batch_snapshot()
    }

    /// Switches mode, re-pins the values and re-renders.
    ///
    /// A drag on a thumb the new mode hides is released.
    pub fn set_mode(&mut self, mode: SliderMode) {
        self.state.mode = mode;
        if let Some(side) = self.drag.active_thumb.side()
            && !mode.shows(side)
        {
            self.drag.active_thumb = ActiveThumb::None;
        }
        self.clamp_in_place();
        self.recompute();
    }

    /// Replaces the domain. A maximum below the minimum collapses the domain
    /// to the minimum. Non-finite bounds, or bounds whose distance overflows
    /// `f32`, are ignored.
    pub fn set_bounds(&mut self, minimum: f32, maximum: f32) {
        let Some((minimum, maximum)) = domain(minimum, maximum) else {
            warn!(minimum, maximum, "ignoring unusable slider bounds");
            return;
        };
        self.state.minimum = minimum;
        self.state.maximum = maximum;
        self.clamp_in_place();
        self.recompute();
    }

    /// Sets both values, clamped like a drag. Non-finite values are ignored.
    pub fn set_values(&mut self, lower: f32, upper: f32) {
        if !lower.is_finite() || !upper.is_finite() {
            warn!(lower, upper, "ignoring non-finite slider values");
            return;
        }
        self.state.lower = lower;
        self.state.upper = upper;
        self.clamp_in_place();
        self.recompute();
    }

    /// Updates the layout input and re-clamps, since the disabled margin
    /// depends on the width.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Viewport::new(viewport.width, viewport.thumb_diameter);
        self.clamp_in_place();
        self.recompute();
    }

    /// Replaces the style and re-renders.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.recompute();
    }

    /// Re-applies the value bounds. Calling it again has no further effect.
    pub fn clamp_values(&mut self) {
        self.clamp_in_place();
        self.recompute();
    }

    /// Starts a gesture at `pointer`.
    ///
    /// The lower thumb is hit tested before the upper one. A press that misses
    /// both in a single-thumb mode moves that thumb by the horizontal distance
    /// from the previous pointer position. Returns whether a thumb is now
    /// captured.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if !pointer.is_finite() {
            warn!(x = pointer.x, y = pointer.y, "ignoring non-finite press");
            return false;
        }
        let mapper = self.mapper();
        let delta = mapper.value_delta(pointer.x - self.drag.last_pointer.x);
        self.drag.last_pointer = pointer;

        let layout = self.layout();
        let mode = self.state.mode;
        let active = if mode.has_lower_thumb() && layout.lower_thumb.contains(pointer) {
            ActiveThumb::Lower
        } else if mode.has_upper_thumb() && layout.upper_thumb.contains(pointer) {
            ActiveThumb::Upper
        } else {
            match mode {
                SliderMode::SingleMin => self.move_thumb(ThumbSide::Lower, delta),
                SliderMode::SingleMax => self.move_thumb(ThumbSide::Upper, delta),
                SliderMode::FullRange => {}
            }
            ActiveThumb::None
        };
        self.drag.active_thumb = active;
        trace!(
            x = pointer.x,
            y = pointer.y,
            active = ?self.drag.active_thumb,
            "begin drag"
        );

        self.recompute();
        self.is_dragging()
    }

    /// Moves the captured thumb by the pointer's horizontal movement and
    /// reports the new values. Does nothing without a captured thumb or for a
    /// non-finite pointer.
    pub fn continue_drag(&mut self, pointer: Vec2) {
        let Some(side) = self.drag.active_thumb.side() else {
            return;
        };
        if !pointer.is_finite() {
            warn!(x = pointer.x, y = pointer.y, "ignoring non-finite drag");
            return;
        }
        let delta = self
            .mapper()
            .value_delta(pointer.x - self.drag.last_pointer.x);
        self.drag.last_pointer = pointer;

        self.move_thumb(side, delta);
        self.recompute();
        self.on_change.call((self.state.lower, self.state.upper));
    }

    /// Releases the captured thumb. Safe to call without an active drag.
    pub fn end_drag(&mut self) {
        if self.drag.active_thumb == ActiveThumb::None {
            return;
        }
        self.drag.active_thumb = ActiveThumb::None;
        trace!("end drag");
        self.recompute();
    }

    fn move_thumb(&mut self, side: ThumbSide, delta: f32) {
        let margin = self.disabled_margin();
        let state = &mut self.state;
        match side {
            ThumbSide::Lower => {
                state.lower = bound_value(state.lower + delta, state.minimum, state.upper - margin);
            }
            ThumbSide::Upper => {
                state.upper = bound_value(state.upper + delta, state.lower + margin, state.maximum);
            }
        }
        self.clamp_in_place();
    }

    fn clamp_in_place(&mut self) {
        let margin = self.disabled_margin();
        let state = &mut self.state;
        state.lower = bound_value(state.lower, state.minimum, state.maximum - margin);
        state.upper = bound_value(state.upper, state.minimum + margin, state.maximum);
        match state.mode {
            SliderMode::SingleMin => state.upper = state.maximum,
            SliderMode::SingleMax => state.lower = state.minimum,
            SliderMode::FullRange => {}
        }
        state.lower = state.lower.min(state.upper - margin).max(state.minimum);
    }

    fn recompute(&mut self) {
        let mapper = self.mapper();
        self.track = TrackRenderModel::new(
            mapper.normalized_ratio(self.state.lower),
            mapper.normalized_ratio(self.state.upper),
            &self.style,
        );
        let active = self.drag.active_thumb;
        self.lower_thumb = ThumbRenderModel::new(active == ActiveThumb::Lower, &self.style);
        self.upper_thumb = ThumbRenderModel::new(active == ActiveThumb::Upper, &self.style);

        debug!(
            minimum = self.state.minimum,
            maximum = self.state.maximum,
            lower = self.state.lower,
            upper = self.state.upper,
            mode = ?self.state.mode,
            "slider state updated"
        );

        let batch = self.render_batch_snapshot();
        trace!(
            track = ?batch.track_frame,
            lower_thumb = ?batch.lower_thumb.map(|thumb| thumb.frame),
            upper_thumb = ?batch.upper_thumb.map(|thumb| thumb.frame),
            "slider layout"
        );
        self.push_batch(&batch);
    }

    fn render_batch_snapshot(&self) -> RenderBatch {
        let layout = self.layout();
        let mode = self.state.mode;
        RenderBatch {
            bounds: layout.bounds,
            track_frame: layout.track,
            track: self.track,
            lower_thumb: mode.has_lower_thumb().then_some(ThumbRender {
                side: ThumbSide::Lower,
                model: self.lower_thumb,
                frame: layout.lower_thumb,
            }),
            upper_thumb: mode.has_upper_thumb().then_some(ThumbRender {
                side: ThumbSide::Upper,
                model: self.upper_thumb,
                frame: layout.upper_thumb,
            }),
        }
    }

    fn push_batch(&mut self, batch: &RenderBatch) {
        if let Some(renderer) = self.renderer.as_mut()
            && let Err(err) = renderer.render(batch)
        {
            warn!(error = %err, "slider renderer failed");
        }
    }
}

/// `value` limited to `[lower, upper]`. Unlike [`f32::clamp`] this never
/// panics: an inverted interval yields `upper`.
fn bound_value(value: f32, lower: f32, upper: f32) -> f32 {
    value.max(lower).min(upper)
}

/// `(minimum, maximum)` with an inverted maximum collapsed onto the minimum,
/// or `None` when either bound is non-finite or their distance overflows.
fn domain(minimum: f32, maximum: f32) -> Option<(f32, f32)> {
    if !minimum.is_finite() || !maximum.is_finite() {
        return None;
    }
    let maximum = maximum.max(minimum);
    (maximum - minimum).is_finite().then_some((minimum, maximum))
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::testing::RecordingRenderer;

    fn controller(lower: f32, upper: f32) -> RangeSliderController {
        RangeSliderController::new(
            RangeSliderArgs::default()
                .minimum(0.0)
                .maximum(100.0)
                .lower(lower)
                .upper(upper)
                .viewport(Viewport::new(200.0, 20.0)),
        )
    }

    #[test]
    fn test_defaults() {
        let slider = RangeSliderController::default();
        assert_eq!(slider.minimum(), 0.0);
        assert_eq!(slider.maximum(), 1.0);
        assert_eq!(slider.lower(), 0.2);
        assert_eq!(slider.upper(), 0.8);
        assert_eq!(slider.mode(), SliderMode::FullRange);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_bound_value_handles_inverted_interval() {
        assert_eq!(bound_value(5.0, 0.0, 10.0), 5.0);
        assert_eq!(bound_value(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(bound_value(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_single_min_pins_upper() {
        let mut slider = controller(20.0, 80.0);
        slider.set_mode(SliderMode::SingleMin);
        assert_eq!(slider.upper(), 100.0);
        assert_eq!(slider.lower(), 20.0);
        assert_eq!(slider.disabled_margin(), 0.0);
    }

    #[test]
    fn test_single_max_pins_lower() {
        let mut slider = controller(20.0, 80.0);
        slider.set_mode(SliderMode::SingleMax);
        assert_eq!(slider.lower(), 0.0);
        assert_eq!(slider.upper(), 80.0);
    }

    #[test]
    fn test_inverted_bounds_collapse() {
        let mut slider = controller(20.0, 80.0);
        slider.set_bounds(60.0, 10.0);
        assert_eq!(slider.minimum(), 60.0);
        assert_eq!(slider.maximum(), 60.0);
        assert_eq!(slider.lower(), 60.0);
        assert_eq!(slider.upper(), 60.0);
        assert_eq!(slider.mapper().normalized_ratio(60.0), 0.0);
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut slider = controller(20.0, 80.0);
        slider.set_values(f32::NAN, 50.0);
        slider.set_bounds(0.0, f32::INFINITY);
        assert_eq!(slider.state().lower, 20.0);
        assert_eq!(slider.state().upper, 80.0);
        assert_eq!(slider.maximum(), 100.0);
    }

    #[test]
    fn test_overflowing_bounds_are_ignored() {
        let mut slider = controller(20.0, 80.0);
        slider.set_bounds(-3.0e38, 3.0e38);
        assert_eq!(slider.minimum(), 0.0);
        assert_eq!(slider.maximum(), 100.0);

        let batch = slider.render_batch();
        assert_eq!(batch.track.upper, 0.8);
        assert!(batch.upper_thumb.is_some_and(|thumb| thumb.frame.min_x() == 150.0));

        let fallback = RangeSliderController::new(
            RangeSliderArgs::default().minimum(-3.0e38).maximum(3.0e38),
        );
        assert_eq!(fallback.minimum(), 0.0);
        assert_eq!(fallback.maximum(), 1.0);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let mut slider = controller(20.0, 80.0);
        assert!(!slider.begin_drag(Vec2::new(f32::NAN, 10.0)));
        assert_eq!(slider.drag_state(), DragState::default());

        assert!(slider.begin_drag(Vec2::new(40.0, 10.0)));
        slider.continue_drag(Vec2::new(f32::NAN, 10.0));
        slider.continue_drag(Vec2::new(f32::INFINITY, 10.0));
        assert_eq!(slider.lower(), 20.0);
        assert_eq!(slider.drag_state().last_pointer, Vec2::new(40.0, 10.0));

        slider.continue_drag(Vec2::new(58.0, 10.0));
        assert_eq!(slider.lower(), 30.0);
        assert_eq!(slider.active_thumb(), ActiveThumb::Lower);
    }

    #[test]
    fn test_set_values_keeps_order() {
        let mut slider = controller(20.0, 80.0);
        slider.set_values(90.0, 10.0);
        assert_eq!(slider.upper(), 10.0);
        assert_eq!(slider.lower(), 5.0);
    }

    #[test]
    fn test_set_values_respects_margin_at_ends() {
        let mut slider = controller(20.0, 80.0);
        slider.set_values(100.0, 100.0);
        assert_eq!(slider.lower(), 95.0);
        assert_eq!(slider.upper(), 100.0);
    }

    #[test]
    fn test_begin_drag_captures_lower_thumb() {
        let mut slider = controller(20.0, 80.0);
        assert!(slider.begin_drag(Vec2::new(40.0, 10.0)));
        assert_eq!(slider.active_thumb(), ActiveThumb::Lower);
        assert!(slider.render_batch().lower_thumb.is_some_and(|t| t.model.highlighted));
    }

    #[test]
    fn test_begin_drag_captures_upper_thumb() {
        let mut slider = controller(20.0, 80.0);
        assert!(slider.begin_drag(Vec2::new(165.0, 5.0)));
        assert_eq!(slider.active_thumb(), ActiveThumb::Upper);
    }

    #[test]
    fn test_begin_drag_miss_in_full_range() {
        let mut slider = controller(20.0, 80.0);
        assert!(!slider.begin_drag(Vec2::new(100.0, 10.0)));
        assert_eq!(slider.lower(), 20.0);
        assert_eq!(slider.upper(), 80.0);
    }

    #[test]
    fn test_begin_drag_nudges_single_min_thumb() {
        let mut slider = controller(20.0, 80.0);
        slider.set_mode(SliderMode::SingleMin);
        // The first press measures movement from the origin.
        assert!(!slider.begin_drag(Vec2::new(90.0, 10.0)));
        assert_eq!(slider.active_thumb(), ActiveThumb::None);
        assert_eq!(slider.lower(), 70.0);
        assert_eq!(slider.drag_state().last_pointer, Vec2::new(90.0, 10.0));
    }

    #[test]
    fn test_begin_drag_nudges_single_max_thumb() {
        let mut slider = controller(20.0, 80.0);
        slider.set_mode(SliderMode::SingleMax);
        assert!(!slider.begin_drag(Vec2::new(18.0, 10.0)));
        assert_eq!(slider.upper(), 90.0);
    }

    #[test]
    fn test_hidden_thumb_is_not_hit() {
        let mut slider = controller(20.0, 80.0);
        slider.set_mode(SliderMode::SingleMax);
        // The lower thumb would sit at x = 0 but is hidden.
        assert!(!slider.begin_drag(Vec2::new(5.0, 10.0)));
        assert_eq!(slider.active_thumb(), ActiveThumb::None);
    }

    #[test]
    fn test_continue_drag_clamps_against_other_thumb() {
        let mut slider = controller(20.0, 80.0);
        slider.begin_drag(Vec2::new(40.0, 10.0));
        slider.continue_drag(Vec2::new(202.0, 10.0));
        assert_eq!(slider.lower(), 75.0);

        slider.continue_drag(Vec2::new(-300.0, 10.0));
        assert_eq!(slider.lower(), 0.0);
    }

    #[test]
    fn test_continue_drag_notifies_every_move() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut slider = controller(20.0, 80.0);
        slider.set_on_change(move |values: (f32, f32)| sink.lock().push(values));

        slider.begin_drag(Vec2::new(160.0, 10.0));
        slider.continue_drag(Vec2::new(178.0, 10.0));
        slider.continue_drag(Vec2::new(400.0, 10.0));
        slider.continue_drag(Vec2::new(400.0, 10.0));

        let seen = seen.lock();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (20.0, 90.0));
        assert_eq!(seen[1], (20.0, 100.0));
        assert_eq!(seen[2], (20.0, 100.0));
    }

    #[test]
    fn test_continue_without_capture_is_noop() {
        let seen = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&seen);
        let mut slider = controller(20.0, 80.0);
        slider.set_on_change(move |_: (f32, f32)| *sink.lock() += 1);

        slider.continue_drag(Vec2::new(150.0, 10.0));
        assert_eq!(*seen.lock(), 0);
        assert_eq!(slider.drag_state(), DragState::default());
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut slider = controller(20.0, 80.0);
        slider.end_drag();
        slider.begin_drag(Vec2::new(40.0, 10.0));
        slider.end_drag();
        slider.end_drag();
        assert_eq!(slider.active_thumb(), ActiveThumb::None);
        assert!(slider.render_batch().highlighted_thumb().is_none());
    }

    #[test]
    fn test_mode_switch_releases_hidden_thumb() {
        let mut slider = controller(20.0, 80.0);
        slider.begin_drag(Vec2::new(160.0, 10.0));
        assert_eq!(slider.active_thumb(), ActiveThumb::Upper);
        slider.set_mode(SliderMode::SingleMin);
        assert_eq!(slider.active_thumb(), ActiveThumb::None);
        assert!(slider.render_batch().upper_thumb.is_none());
    }

    #[test]
    fn test_shared_callback_serves_two_sliders() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = CallbackWith::new(move |values: (f32, f32)| sink.lock().push(values));

        let args = RangeSliderArgs::default()
            .minimum(0.0)
            .maximum(100.0)
            .viewport(Viewport::new(200.0, 20.0))
            .on_change_shared(callback.clone());
        assert_eq!(args.on_change, callback);
        let mut first = RangeSliderController::new(args.clone().lower(20.0).upper(80.0));
        let mut second = RangeSliderController::new(args.lower(40.0).upper(60.0));

        first.begin_drag(Vec2::new(40.0, 10.0));
        first.continue_drag(Vec2::new(58.0, 10.0));
        second.begin_drag(Vec2::new(120.0, 10.0));
        second.continue_drag(Vec2::new(138.0, 10.0));

        assert_eq!(*seen.lock(), vec![(30.0, 80.0), (40.0, 70.0)]);
    }

    #[test]
    fn test_take_renderer_detaches() {
        let recorder = RecordingRenderer::new();
        let mut slider = controller(20.0, 80.0);
        slider.set_renderer(recorder.clone());
        assert_eq!(recorder.len(), 1);

        let renderer = slider.take_renderer();
        assert!(renderer.is_some());
        slider.set_values(30.0, 70.0);
        assert_eq!(recorder.len(), 1);

        recorder.clear();
        assert!(recorder.is_empty());
        if let Some(renderer) = renderer {
            slider.set_renderer(renderer);
        }
        assert_eq!(recorder.last(), Some(slider.render_batch()));
    }

    #[test]
    fn test_set_style_rerenders() {
        let recorder = RecordingRenderer::new();
        let mut slider = controller(20.0, 80.0);
        slider.set_renderer(recorder.clone());

        slider.set_style(SliderStyle::default().curvaceousness(0.5).thumb_line_width(2.0));
        assert_eq!(slider.style().curvaceousness, 0.5);
        assert_eq!(recorder.len(), 2);
        let batch = recorder.last();
        assert!(batch.is_some_and(|batch| batch.track.curvaceousness == 0.5));
        let thumb = batch.and_then(|batch| batch.lower_thumb);
        assert!(thumb.is_some_and(|thumb| thumb.model.line_width == 2.0));
    }

    #[test]
    fn test_narrowing_viewport_reclamps() {
        let mut slider = controller(0.0, 100.0);
        assert_eq!(slider.lower(), 0.0);
        assert_eq!(slider.upper(), 100.0);
        slider.set_viewport(Viewport::new(100.0, 20.0));
        assert_eq!(slider.disabled_margin(), 10.0);
        assert_eq!(slider.lower(), 0.0);
        assert_eq!(slider.upper(), 100.0);
        slider.set_values(100.0, 0.0);
        assert_eq!(slider.upper(), 10.0);
        assert_eq!(slider.lower(), 0.0);
    }
}
