// Resume text model: free-form resume text segmented into typed layout blocks.
// The classifier is pure and total; rendering lives in `crate::render`.

pub mod classifier;

pub use classifier::classify;

/// One semantic zone of a resume, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// The person's name or headline. Always the first block of a non-empty document.
    Title { text: String },
    /// Up to three consecutive contact lines, kept as separate items.
    Contact { items: Vec<String> },
    SectionHeading { text: String },
    /// Role/organisation line; `right` is the part after the first `" - "` (often a date range).
    SubsectionHeader { left: String, right: String },
    Bullet { text: String },
    Paragraph { text: String },
}

/// Classified resume, built once per render request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDocument {
    blocks: Vec<Block>,
}

impl ResumeDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of the leading `Title` block, if the document has one.
    pub fn title(&self) -> Option<&str> {
        match self.blocks.first() {
            Some(Block::Title { text }) => Some(text),
            _ => None,
        }
    }
}
