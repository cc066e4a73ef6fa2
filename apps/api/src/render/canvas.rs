//! Low-level PDF page writer on top of `lopdf`.
//!
//! Collects one content stream per page and serialises the whole document in `finish`.
//! Fonts are the base-14 Helvetica faces with WinAnsiEncoding, so no font program is embedded
//! and every string is encoded to single bytes by `encode_win_ansi`.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::layout::{Font, Line, PageGeometry};
use crate::render::style::Rgb;
use crate::render::RenderError;

const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

pub struct PdfCanvas {
    geometry: PageGeometry,
    pages: Vec<Vec<Operation>>,
}

impl PdfCanvas {
    /// Starts a document with one empty page.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Vec::new()],
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    #[cfg(test)]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Draws one wrapped line with its left edge at `x` and baseline at `baseline`.
    pub fn draw_line(&mut self, x: f32, baseline: f32, size_pt: f32, color: Rgb, line: &Line) {
        if line.spans.is_empty() {
            return;
        }
        let Some(ops) = self.pages.last_mut() else {
            return;
        };

        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "rg",
            vec![color.r.into(), color.g.into(), color.b.into()],
        ));
        ops.push(Operation::new("Td", vec![x.into(), baseline.into()]));
        for span in &line.spans {
            ops.push(Operation::new(
                "Tf",
                vec![span.font.resource_name().into(), size_pt.into()],
            ));
            ops.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&span.text))],
            ));
        }
        ops.push(Operation::new("ET", vec![]));
    }

    /// Serialises all pages into a single PDF byte buffer.
    pub fn finish(self, title: &str) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in Font::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            self.geometry.width_pt.into(),
            self.geometry.height_pt.into(),
        ];

        // Resources and MediaBox are set on each page as well as on the page tree root.
        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => media_box.clone(),
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let created = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(encode_win_ansi(title)),
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(created),
        });
        doc.trailer.set("Info", info_id);

        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Encodes text for a WinAnsiEncoding font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        '\t' => b' ',
        _ => b'?',
    }
}
