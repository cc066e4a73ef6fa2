//! Flowing text frame: a vertical cursor over a `PdfCanvas` that breaks pages automatically.
//!
//! Paragraph spacing collapses at the top of a page, so a heading that lands first on a
//! new page does not start with a gap. A line is moved to the next page when its leading
//! would cross the bottom margin; paragraphs may therefore split across pages.

use crate::layout::{wrap_spans, Line, PageGeometry, Span};
use crate::render::canvas::PdfCanvas;
use crate::render::style::{Align, TextStyle};
use crate::render::RenderError;

/// Minimum horizontal gap between a left-hand header and a right-aligned date.
const SPLIT_LINE_GAP_PT: f32 = 12.0;
/// Fraction of the font size that sits below the baseline inside a line's leading box.
const DESCENT_RATIO: f32 = 0.22;

pub struct Flow {
    canvas: PdfCanvas,
    geometry: PageGeometry,
    /// Y of the top of the next line.
    cursor: f32,
    at_page_top: bool,
}

impl Flow {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            canvas: PdfCanvas::new(geometry),
            geometry,
            cursor: geometry.frame_top(),
            at_page_top: true,
        }
    }

    #[cfg(test)]
    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Vertical gap; ignored at the top of a page.
    pub fn space(&mut self, points: f32) {
        if !self.at_page_top {
            self.cursor -= points;
        }
    }

    /// Wraps and draws a paragraph in the given style.
    pub fn paragraph(&mut self, spans: &[Span], style: &TextStyle) {
        self.space(style.space_before_pt);

        let rest_width = self.geometry.text_width() - style.left_indent_pt;
        let first_width = rest_width - style.first_line_indent_pt;
        let lines = wrap_spans(spans, style.size_pt, first_width, rest_width);

        for (i, line) in lines.iter().enumerate() {
            let indent = if i == 0 {
                style.left_indent_pt + style.first_line_indent_pt
            } else {
                style.left_indent_pt
            };
            self.emit_line(line, style, indent);
        }

        self.space(style.space_after_pt);
    }

    /// Left-hand text with an optional right-aligned companion on the same baseline.
    ///
    /// When the two would collide, the right-hand text drops to its own line below.
    pub fn split_line(
        &mut self,
        left: &[Span],
        left_style: &TextStyle,
        right: &str,
        right_style: &TextStyle,
    ) {
        if right.is_empty() {
            self.paragraph(left, left_style);
            return;
        }

        self.space(left_style.space_before_pt);

        let text_width = self.geometry.text_width();
        let lines = wrap_spans(left, left_style.size_pt, text_width, text_width);
        let right_line = Line {
            spans: vec![Span::new(right, right_style.font)],
            width: right_style.font.text_width(right, right_style.size_pt),
        };

        let fits_beside = lines
            .first()
            .is_some_and(|first| first.width + SPLIT_LINE_GAP_PT + right_line.width <= text_width);

        if fits_beside {
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    self.ensure_room(left_style.leading_pt);
                    let baseline = self.baseline(left_style);
                    self.draw(line, left_style, 0.0, baseline);
                    self.draw(&right_line, &right_style.aligned(Align::Right), 0.0, baseline);
                    self.advance(left_style.leading_pt);
                } else {
                    self.emit_line(line, left_style, 0.0);
                }
            }
            self.space(left_style.space_after_pt);
        } else {
            for line in &lines {
                self.emit_line(line, left_style, 0.0);
            }
            self.space(left_style.space_after_pt);
            self.paragraph(
                &[Span::new(right, right_style.font)],
                &right_style.aligned(Align::Right),
            );
        }
    }

    pub fn finish(self, title: &str) -> Result<Vec<u8>, RenderError> {
        self.canvas.finish(title)
    }

    fn emit_line(&mut self, line: &Line, style: &TextStyle, indent: f32) {
        self.ensure_room(style.leading_pt);
        let baseline = self.baseline(style);
        self.draw(line, style, indent, baseline);
        self.advance(style.leading_pt);
    }

    fn draw(&mut self, line: &Line, style: &TextStyle, indent: f32, baseline: f32) {
        let available = self.geometry.text_width() - indent;
        let offset = match style.align {
            Align::Left => 0.0,
            Align::Center => ((available - line.width) / 2.0).max(0.0),
            Align::Right => (available - line.width).max(0.0),
        };
        let x = self.geometry.margin_left_pt + indent + offset;
        self.canvas
            .draw_line(x, baseline, style.size_pt, style.color, line);
    }

    fn baseline(&self, style: &TextStyle) -> f32 {
        self.cursor - style.leading_pt + style.size_pt * DESCENT_RATIO
    }

    fn advance(&mut self, leading: f32) {
        self.cursor -= leading;
        self.at_page_top = false;
    }

    /// Starts a new page if a line of `leading` would cross the bottom margin.
    fn ensure_room(&mut self, leading: f32) {
        if !self.at_page_top && self.cursor - leading < self.geometry.frame_bottom() {
            self.canvas.add_page();
            self.cursor = self.geometry.frame_top();
            self.at_page_top = true;
        }
    }
}

impl TextStyle {
    fn aligned(&self, align: Align) -> TextStyle {
        TextStyle { align, ..*self }
    }
}
