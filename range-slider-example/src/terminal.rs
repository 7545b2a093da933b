//! A text renderer that draws each batch as one line of characters.

use std::io::Write;

use range_slider::{RenderBatch, RenderError, Renderer, ThumbSide};

const TRACK: char = '-';
const SELECTED: char = '=';
const THUMB: char = 'o';
const THUMB_ACTIVE: char = '@';

/// Draws the slider as `columns` characters per batch.
pub struct TerminalRenderer<W: Write> {
    out: W,
    columns: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, columns: usize) -> Self {
        Self {
            out,
            columns: columns.max(1),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn column(&self, batch: &RenderBatch, x: f32) -> usize {
        let width = batch.bounds.width();
        if width <= 0.0 {
            return 0;
        }
        let ratio = (x / width).clamp(0.0, 1.0);
        ((ratio * self.columns as f32) as usize).min(self.columns - 1)
    }

    /// One line of characters for `batch`.
    pub fn draw_line(&self, batch: &RenderBatch) -> String {
        let mut cells = vec![TRACK; self.columns];

        let span = batch.highlight_span();
        if span.width() > 0.0 {
            let start = self.column(batch, span.min_x());
            let end = self.column(batch, span.max_x());
            for cell in &mut cells[start..=end] {
                *cell = SELECTED;
            }
        }

        for thumb in batch.thumbs() {
            let glyph = if thumb.model.highlighted {
                THUMB_ACTIVE
            } else {
                THUMB
            };
            cells[self.column(batch, thumb.frame.center().x)] = glyph;
        }

        cells.into_iter().collect()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, batch: &RenderBatch) -> Result<(), RenderError> {
        let line = self.draw_line(batch);
        let active = match batch.highlighted_thumb() {
            Some(ThumbSide::Lower) => " lower",
            Some(ThumbSide::Upper) => " upper",
            None => "",
        };
        writeln!(self.out, "[{line}]{active}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use range_slider::{RangeSliderArgs, RangeSliderController, SliderMode, Viewport, glam::Vec2};

    use super::*;

    fn slider(mode: SliderMode) -> RangeSliderController {
        RangeSliderController::new(
            RangeSliderArgs::default()
                .minimum(0.0)
                .maximum(100.0)
                .lower(25.0)
                .upper(75.0)
                .mode(mode)
                .viewport(Viewport::new(200.0, 20.0)),
        )
    }

    #[test]
    fn test_draw_full_range() {
        let renderer = TerminalRenderer::new(Vec::new(), 20);
        let line = renderer.draw_line(&slider(SliderMode::FullRange).render_batch());
        assert_eq!(line, "-----o=========o----");
    }

    #[test]
    fn test_draw_single_min() {
        let renderer = TerminalRenderer::new(Vec::new(), 20);
        let line = renderer.draw_line(&slider(SliderMode::SingleMin).render_batch());
        assert_eq!(line, "-----o==============");
    }

    #[test]
    fn test_render_writes_lines() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 20);
        let mut slider = slider(SliderMode::FullRange);
        slider.begin_drag(Vec2::new(150.0, 10.0));
        renderer
            .render(&slider.render_batch())
            .expect("writing to a Vec cannot fail");

        let text = String::from_utf8(renderer.into_inner()).expect("renderer writes UTF-8");
        assert_eq!(text, "[-----o=========@----] upper\n");
    }
}
