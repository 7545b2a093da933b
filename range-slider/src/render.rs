//! The renderer seam.
//!
//! A [`Renderer`] receives one [`RenderBatch`] per logical state change. The
//! batch carries the track, both thumbs and their frames built from the same
//! snapshot, so a renderer never mixes models from different states.

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    geometry::Rect,
    model::{ThumbRenderModel, TrackRenderModel},
};

/// Errors a renderer may report back to the controller.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the render target failed.
    #[error("render target I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The render target cannot draw right now.
    #[error("render target unavailable: {0}")]
    Unavailable(String),
}

/// Which thumb a [`ThumbRender`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbSide {
    /// The thumb tracking the lower value.
    Lower,
    /// The thumb tracking the upper value.
    Upper,
}

/// A visible thumb with its resolved frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbRender {
    /// Which thumb this is.
    pub side: ThumbSide,
    /// The thumb model.
    pub model: ThumbRenderModel,
    /// Frame in slider-local pixels.
    pub frame: Rect,
}

/// Atomic snapshot pushed to a renderer after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderBatch {
    /// The slider bounds.
    pub bounds: Rect,
    /// The track band.
    pub track_frame: Rect,
    /// The track model.
    pub track: TrackRenderModel,
    /// The lower thumb, absent in single-max mode.
    pub lower_thumb: Option<ThumbRender>,
    /// The upper thumb, absent in single-min mode.
    pub upper_thumb: Option<ThumbRender>,
}

impl RenderBatch {
    /// Visible thumbs in paint order, lower first.
    pub fn thumbs(&self) -> SmallVec<[&ThumbRender; 2]> {
        self.lower_thumb
            .iter()
            .chain(self.upper_thumb.iter())
            .collect()
    }

    /// The thumb currently highlighted, if any.
    pub fn highlighted_thumb(&self) -> Option<ThumbSide> {
        self.thumbs()
            .into_iter()
            .find(|thumb| thumb.model.highlighted)
            .map(|thumb| thumb.side)
    }

    /// The selected span of the track in slider-local pixels.
    pub fn highlight_span(&self) -> Rect {
        self.track.highlight_span(self.track_frame)
    }
}

/// Draws render batches. Implemented by the host toolkit.
pub trait Renderer {
    /// Draws `batch`. Called once per logical state change.
    fn render(&mut self, batch: &RenderBatch) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, batch: &RenderBatch) -> Result<(), RenderError> {
        (**self).render(batch)
    }
}
