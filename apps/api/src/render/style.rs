//! Paragraph styles shared by the resume and profile composers.

use crate::layout::Font;

/// Fill colour, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const NAVY: Rgb = Rgb::new(0.0, 0.0, 0.502);
    pub const DARK_BLUE: Rgb = Rgb::new(0.0, 0.0, 0.545);
    pub const DARK_GREY: Rgb = Rgb::new(0.663, 0.663, 0.663);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How one paragraph is set. Lengths are in points.
///
/// `left_indent_pt` applies to every line; `first_line_indent_pt` is added on top of it for
/// the first line only, so a negative value gives a hanging indent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size_pt: f32,
    pub leading_pt: f32,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    pub left_indent_pt: f32,
    pub first_line_indent_pt: f32,
    pub color: Rgb,
    pub align: Align,
}

impl TextStyle {
    /// Plain left-aligned black text with no paragraph spacing.
    pub const fn plain(font: Font, size_pt: f32, leading_pt: f32) -> Self {
        Self {
            font,
            size_pt,
            leading_pt,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            left_indent_pt: 0.0,
            first_line_indent_pt: 0.0,
            color: Rgb::BLACK,
            align: Align::Left,
        }
    }
}
