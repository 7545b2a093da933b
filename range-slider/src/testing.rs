//! Test helpers for code that drives a slider.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::render::{RenderBatch, RenderError, Renderer};

/// A renderer that keeps every batch it receives.
///
/// Clones share the same log, so a test can keep one handle while the
/// controller owns the other.
///
/// ```
/// use range_slider::{RangeSliderController, testing::RecordingRenderer};
///
/// let recorder = RecordingRenderer::new();
/// let mut slider = RangeSliderController::default();
/// slider.set_renderer(recorder.clone());
/// slider.set_values(0.3, 0.6);
/// assert_eq!(recorder.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    batches: Arc<Mutex<Vec<RenderBatch>>>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All batches received so far.
    pub fn batches(&self) -> Vec<RenderBatch> {
        self.batches.lock().clone()
    }

    /// The most recent batch.
    pub fn last(&self) -> Option<RenderBatch> {
        self.batches.lock().last().copied()
    }

    /// Number of batches received.
    pub fn len(&self) -> usize {
        self.batches.lock().len()
    }

    /// Whether nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.batches.lock().is_empty()
    }

    /// Forgets the recorded batches.
    pub fn clear(&self) {
        self.batches.lock().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, batch: &RenderBatch) -> Result<(), RenderError> {
        self.batches.lock().push(*batch);
        Ok(())
    }
}
