//! Line classifier: segments resume text into `Block`s in a single left-to-right pass.
//!
//! # Rule order (first match wins)
//! 1. First line → `Title`, unconditionally.
//! 2. Up to 3 following lines carrying a contact marker → one `Contact`.
//! 3. Every remaining line, trimmed:
//!    - blank → ends a bullet run, emits nothing
//!    - heading (ALL CAPS, trailing `:`, `**bold**`, leading `*`) → `SectionHeading`
//!    - contains `" - "`, not a dash line, not inside a bullet run → `SubsectionHeader`
//!      when it carries a date marker or sits under a dated section, else `Paragraph`
//!    - leading `-` / `•` → `Bullet`
//!    - anything else → `Paragraph`
//!
//! The heuristics overlap and the order above resolves them:
//! `"SKILLS - TECHNICAL"` is a heading, never a subsection.

use crate::resume::{Block, ResumeDocument};

const MAX_CONTACT_LINES: usize = 3;

const CONTACT_MARKERS: [&str; 8] = [
    "@", "phone", "tel", "email", "linkedin", "github", "http", ".com",
];

const DATE_MARKERS: [&str; 15] = [
    "present", "20", "19", "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct",
    "nov", "dec",
];

/// Sections whose `x - y` lines are always role/date headers.
const DATED_SECTIONS: [&str; 3] = ["EXPERIENCE", "EDUCATION", "WORK EXPERIENCE"];

const SUBSECTION_SEPARATOR: &str = " - ";

/// Classifies raw resume text. Never fails; empty input yields an empty document.
pub fn classify(text: &str) -> ResumeDocument {
    let mut lines = text.lines();
    let mut blocks = Vec::new();

    let Some(first) = lines.next() else {
        return ResumeDocument::default();
    };
    blocks.push(Block::Title {
        text: first.trim().to_string(),
    });

    let rest: Vec<&str> = lines.collect();

    let contact = scan_contact(&rest);
    let consumed = contact.len();
    if !contact.is_empty() {
        blocks.push(Block::Contact { items: contact });
    }

    let mut state = LineState::default();
    blocks.extend(rest[consumed..].iter().filter_map(|line| state.classify(line)));

    ResumeDocument::new(blocks)
}

/// Collects the leading run of contact lines (at most `MAX_CONTACT_LINES`).
fn scan_contact(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .take(MAX_CONTACT_LINES)
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty() && is_contact_line(line))
        .map(str::to_string)
        .collect()
}

/// Fold state carried from one body line to the next.
#[derive(Debug, Default)]
struct LineState {
    /// Text of the most recent `SectionHeading`.
    current_section: Option<String>,
    in_bullet_run: bool,
}

impl LineState {
    fn classify(&mut self, raw: &str) -> Option<Block> {
        let line = raw.trim();

        if line.is_empty() {
            self.in_bullet_run = false;
            return None;
        }

        if is_section_heading(line) {
            let text = heading_text(line);
            self.current_section = Some(text.clone());
            self.in_bullet_run = false;
            return Some(Block::SectionHeading { text });
        }

        if line.contains(SUBSECTION_SEPARATOR) && !line.starts_with('-') && !self.in_bullet_run {
            let block = if has_date_marker(line) || self.in_dated_section() {
                match line.split_once(SUBSECTION_SEPARATOR) {
                    Some((left, right)) => Block::SubsectionHeader {
                        left: left.trim().to_string(),
                        right: right.trim().to_string(),
                    },
                    None => paragraph(line),
                }
            } else {
                paragraph(line)
            };
            self.in_bullet_run = false;
            return Some(block);
        }

        if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('•')) {
            self.in_bullet_run = true;
            return Some(Block::Bullet {
                text: rest.trim().to_string(),
            });
        }

        self.in_bullet_run = false;
        Some(paragraph(line))
    }

    fn in_dated_section(&self) -> bool {
        self.current_section
            .as_deref()
            .is_some_and(|section| DATED_SECTIONS.contains(&section))
    }
}

fn paragraph(line: &str) -> Block {
    Block::Paragraph {
        text: line.to_string(),
    }
}

fn is_contact_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    CONTACT_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn has_date_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    DATE_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn is_section_heading(line: &str) -> bool {
    is_all_caps(line)
        || line.ends_with(':')
        || (line.starts_with("**") && line.ends_with("**"))
        || line.starts_with('*')
}

/// True when the line has at least one cased character and none of them is lower-case.
fn is_all_caps(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn heading_text(line: &str) -> String {
    line.trim_end_matches(':')
        .trim_matches('*')
        .trim()
        .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
