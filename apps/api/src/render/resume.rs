//! Composer for classified resume text: one styled paragraph per `Block`.

use crate::layout::{resume_page, Font, Span};
use crate::render::flow::Flow;
use crate::render::style::{Align, Rgb, TextStyle};
use crate::render::RenderError;
use crate::resume::{Block, ResumeDocument};

const CONTACT_SEPARATOR: &str = " | ";
const BULLET_GLYPH: &str = "•";

const TITLE: TextStyle = TextStyle {
    space_after_pt: 12.0,
    align: Align::Center,
    ..TextStyle::plain(Font::HelveticaBold, 18.0, 22.0)
};

const CONTACT: TextStyle = TextStyle {
    space_after_pt: 10.0,
    align: Align::Center,
    ..TextStyle::plain(Font::Helvetica, 10.0, 12.0)
};

const SECTION: TextStyle = TextStyle {
    space_before_pt: 12.0,
    space_after_pt: 6.0,
    color: Rgb::NAVY,
    ..TextStyle::plain(Font::HelveticaBold, 14.0, 16.0)
};

const SUBSECTION: TextStyle = TextStyle {
    space_before_pt: 6.0,
    space_after_pt: 2.0,
    ..TextStyle::plain(Font::HelveticaBold, 12.0, 14.0)
};

const DATE: TextStyle = TextStyle {
    space_after_pt: 2.0,
    color: Rgb::DARK_GREY,
    align: Align::Right,
    ..TextStyle::plain(Font::HelveticaOblique, 10.0, 12.0)
};

const BODY: TextStyle = TextStyle {
    space_after_pt: 4.0,
    ..TextStyle::plain(Font::Helvetica, 11.0, 14.0)
};

/// Glyph sits 5pt in; the text and every wrapped line hang at 20pt.
const BULLET: TextStyle = TextStyle {
    space_after_pt: 2.0,
    left_indent_pt: 20.0,
    first_line_indent_pt: -15.0,
    ..TextStyle::plain(Font::Helvetica, 11.0, 14.0)
};

const FALLBACK_TITLE: &str = "Resume";

/// Renders a classified resume into a paginated US-letter PDF.
pub fn render_resume(doc: &ResumeDocument) -> Result<Vec<u8>, RenderError> {
    let mut flow = Flow::new(resume_page());

    for block in doc.blocks() {
        match block {
            Block::Title { text } => flow.paragraph(&[Span::new(text, TITLE.font)], &TITLE),
            Block::Contact { items } => flow.paragraph(
                &[Span::new(items.join(CONTACT_SEPARATOR), CONTACT.font)],
                &CONTACT,
            ),
            Block::SectionHeading { text } => {
                flow.paragraph(&[Span::new(text, SECTION.font)], &SECTION)
            }
            Block::SubsectionHeader { left, right } => flow.split_line(
                &[Span::new(left, SUBSECTION.font)],
                &SUBSECTION,
                right,
                &DATE,
            ),
            Block::Bullet { text } => flow.paragraph(
                &[Span::new(format!("{BULLET_GLYPH} {text}"), BULLET.font)],
                &BULLET,
            ),
            Block::Paragraph { text } => flow.paragraph(&[Span::new(text, BODY.font)], &BODY),
        }
    }

    let title = doc
        .title()
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE);
    flow.finish(title)
}
