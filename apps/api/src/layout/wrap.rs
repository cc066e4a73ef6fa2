//! Greedy word wrap over mixed-font text.
//!
//! Input is a sequence of `Span`s (text + font). Words are split on whitespace; a word may
//! straddle two spans when there is no whitespace at the boundary (`"**Acme**, 2020"`), in
//! which case it stays glued together. Each output line is re-joined with single spaces and
//! coalesced into as few spans as possible.
//!
//! A word wider than the available width is broken by character so that nothing overflows.

use crate::layout::font_metrics::Font;

/// A run of text in one font.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub font: Font,
}

impl Span {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// One wrapped line, ready to be drawn left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
    /// Rendered width in points.
    pub width: f32,
}

#[cfg(test)]
impl Line {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A whitespace-delimited word; usually one fragment, more when it crosses a font change.
#[derive(Debug, Clone, Default)]
struct Word {
    fragments: Vec<Span>,
}

impl Word {
    fn width(&self, size_pt: f32) -> f32 {
        self.fragments
            .iter()
            .map(|f| f.font.text_width(&f.text, size_pt))
            .sum()
    }

    /// Width of the space that precedes this word on a line.
    fn leading_space(&self, size_pt: f32) -> f32 {
        self.fragments
            .first()
            .map(|f| f.font.metrics().space_width * size_pt)
            .unwrap_or(0.0)
    }
}

/// Wraps `spans` at `size_pt`. The first line may have a different width from the rest
/// (hanging indents). Empty or whitespace-only input produces no lines.
pub fn wrap_spans(spans: &[Span], size_pt: f32, first_width: f32, rest_width: f32) -> Vec<Line> {
    let mut lines: Vec<Vec<Word>> = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut current_width = 0.0_f32;

    let max_for = |line_index: usize| {
        if line_index == 0 {
            first_width
        } else {
            rest_width
        }
    };

    for word in tokenize(spans) {
        let max_width = max_for(lines.len());
        let word_w = word.width(size_pt);
        let space_w = if current.is_empty() {
            0.0
        } else {
            word.leading_space(size_pt)
        };

        if current_width + space_w + word_w <= max_width {
            current_width += space_w + word_w;
            current.push(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        // The word starts a fresh line; break it up if even that is too narrow.
        let max_width = max_for(lines.len());
        if word_w <= max_width {
            current_width = word_w;
            current.push(word);
            continue;
        }

        let mut pieces = split_word(&word, size_pt, max_width, rest_width).into_iter();
        if let Some(last) = pieces.next_back() {
            for piece in pieces {
                lines.push(vec![piece]);
            }
            current_width = last.width(size_pt);
            current.push(last);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .map(|words| assemble_line(words, size_pt))
        .collect()
}

fn tokenize(spans: &[Span]) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    // True when the next fragment continues the previous word (no whitespace in between).
    let mut glued = false;

    for span in spans {
        for (i, piece) in span.text.split(char::is_whitespace).enumerate() {
            if i > 0 {
                glued = false;
            }
            if piece.is_empty() {
                continue;
            }
            let fragment = Span::new(piece, span.font);
            match words.last_mut() {
                Some(word) if glued => word.fragments.push(fragment),
                _ => words.push(Word {
                    fragments: vec![fragment],
                }),
            }
            glued = true;
        }
    }

    words
}

/// Breaks an over-long word into pieces no wider than the available widths.
fn split_word(word: &Word, size_pt: f32, first_width: f32, rest_width: f32) -> Vec<Word> {
    let mut pieces: Vec<Word> = Vec::new();
    let mut current = Word::default();
    let mut current_width = 0.0_f32;

    for fragment in &word.fragments {
        for c in fragment.text.chars() {
            let char_w = fragment.font.metrics().char_width(c) * size_pt;
            let max_width = if pieces.is_empty() {
                first_width
            } else {
                rest_width
            };
            if current_width + char_w > max_width && !current.fragments.is_empty() {
                pieces.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            push_char(&mut current, c, fragment.font);
            current_width += char_w;
        }
    }

    if !current.fragments.is_empty() {
        pieces.push(current);
    }
    pieces
}

fn push_char(word: &mut Word, c: char, font: Font) {
    match word.fragments.last_mut() {
        Some(last) if last.font == font => last.text.push(c),
        _ => word.fragments.push(Span::new(c.to_string(), font)),
    }
}

fn assemble_line(words: Vec<Word>, size_pt: f32) -> Line {
    let mut spans: Vec<Span> = Vec::new();
    let mut width = 0.0_f32;

    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            width += word.leading_space(size_pt);
            if let Some(first) = word.fragments.first() {
                append(&mut spans, " ", first.font);
            }
        }
        width += word.width(size_pt);
        for fragment in word.fragments {
            append(&mut spans, &fragment.text, fragment.font);
        }
    }

    Line { spans, width }
}

fn append(spans: &mut Vec<Span>, text: &str, font: Font) {
    match spans.last_mut() {
        Some(last) if last.font == font => last.text.push_str(text),
        _ => spans.push(Span::new(text, font)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_text(text: &str, font: Font, size_pt: f32, max_width: f32) -> Vec<Line> {
        wrap_spans(&[Span::new(text, font)], size_pt, max_width, max_width)
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap_text("", Font::Helvetica, 11.0, 468.0).is_empty());
        assert!(wrap_text("   ", Font::Helvetica, 11.0, 468.0).is_empty());
    }

    #[test]
    fn test_short_text_is_one_line() {
        let lines = wrap_text("Built X", Font::Helvetica, 11.0, 468.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Built X");
        assert!(lines[0].width < 468.0);
    }

    #[test]
    fn test_whitespace_is_normalised() {
        let lines = wrap_text("  Built \t  X  ", Font::Helvetica, 11.0, 468.0);
        assert_eq!(lines[0].text(), "Built X");
    }

    #[test]
    fn test_long_text_wraps_without_overflow() {
        let text = "word ".repeat(100);
        let lines = wrap_text(&text, Font::Helvetica, 11.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= 200.0 + 1e-3, "line overflowed: {}", line.width);
        }
        let words: usize = lines.iter().map(|l| l.text().split(' ').count()).sum();
        assert_eq!(words, 100);
    }

    #[test]
    fn test_hanging_indent_widths() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";
        let lines = wrap_spans(&[Span::new(text, Font::Helvetica)], 11.0, 60.0, 120.0);
        assert!(lines[0].width <= 60.0);
        for line in &lines[1..] {
            assert!(line.width <= 120.0);
        }
    }

    #[test]
    fn test_overlong_word_is_broken_by_character() {
        let url = "https://example.com/".to_string() + &"a".repeat(200);
        let lines = wrap_text(&url, Font::Helvetica, 11.0, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= 100.0 + 1e-3);
        }
        let rejoined: String = lines.iter().map(|l| l.text()).collect();
        assert_eq!(rejoined, url);
    }

    #[test]
    fn test_glued_fragments_stay_one_word() {
        let spans = [
            Span::new("Acme", Font::HelveticaBold),
            Span::new(", 2020", Font::Helvetica),
        ];
        let lines = wrap_spans(&spans, 11.0, 468.0, 468.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Acme, 2020");
        assert_eq!(
            lines[0].spans,
            vec![
                Span::new("Acme", Font::HelveticaBold),
                Span::new(", 2020", Font::Helvetica),
            ]
        );
    }

    #[test]
    fn test_space_between_spans_is_kept() {
        let spans = [
            Span::new("Engineer", Font::HelveticaBold),
            Span::new(" at Acme", Font::Helvetica),
        ];
        let lines = wrap_spans(&spans, 11.0, 468.0, 468.0);
        assert_eq!(lines[0].text(), "Engineer at Acme");
    }
}
