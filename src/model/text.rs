//! Paragraph and run structure for text-bearing shapes

use crate::theme::Rgb;
use crate::types::Pt;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Alignment after applying a slide-level right-to-left override.
    pub fn rtl(self, rtl: bool) -> Align {
        if rtl { Align::Right } else { self }
    }
}

/// One styled paragraph of text.
///
/// A `\n` inside `text` is a line break within the paragraph, not a new
/// paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub size: Pt,
    pub bold: bool,
    pub color: Rgb,
    pub align: Align,
    pub space_after: Option<Pt>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, size: Pt, color: Rgb) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            color,
            align: Align::Left,
            space_after: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn space_after(mut self, space: Pt) -> Self {
        self.space_after = Some(space);
        self
    }

    /// Lines separated by explicit breaks (`\n` or vertical tab).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(['\n', '\u{b}'])
    }
}

/// An ordered, never-empty sequence of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    paragraphs: Vec<TextRun>,
}

impl TextBody {
    pub fn new(first: TextRun) -> Self {
        Self { paragraphs: vec![first] }
    }

    /// Collect paragraphs in order. An empty input yields the single blank
    /// paragraph every text container must hold, styled like `blank`.
    pub fn collect(runs: impl IntoIterator<Item = TextRun>, blank: TextRun) -> Self {
        let paragraphs: Vec<TextRun> = runs.into_iter().collect();
        if paragraphs.is_empty() {
            Self::new(TextRun { text: String::new(), ..blank })
        } else {
            Self { paragraphs }
        }
    }

    /// Append a paragraph at the tail.
    pub fn push(&mut self, run: TextRun) -> &mut Self {
        self.paragraphs.push(run);
        self
    }

    pub fn with(mut self, run: TextRun) -> Self {
        self.push(run);
        self
    }

    pub fn paragraphs(&self) -> &[TextRun] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Concatenated plain text, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> TextRun {
        TextRun::new(text, Pt(12.0), Rgb(0, 0, 0))
    }

    #[test]
    fn push_appends_in_order() {
        let mut body = TextBody::new(run("a"));
        body.push(run("b")).push(run("c"));
        let texts: Vec<_> = body.paragraphs().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn collect_empty_yields_one_blank_paragraph() {
        let body = TextBody::collect(Vec::new(), run("ignored").bold());
        assert_eq!(body.len(), 1);
        assert_eq!(body.paragraphs()[0].text, "");
        assert!(body.paragraphs()[0].bold);
        assert!(!body.is_empty());
    }

    #[test]
    fn collect_keeps_every_run() {
        let body = TextBody::collect(["x", "y"].map(run), run(""));
        assert_eq!(body.plain_text(), "x\ny");
    }

    #[test]
    fn rtl_overrides_alignment() {
        assert_eq!(Align::Center.rtl(true), Align::Right);
        assert_eq!(Align::Center.rtl(false), Align::Center);
        assert_eq!(Align::Left.rtl(false), Align::Left);
    }

    #[test]
    fn lines_split_on_breaks() {
        let r = run("Presentation Layer\nواجهة المستخدم");
        assert_eq!(r.lines().count(), 2);
        let r = run("a\u{b}b\nc");
        assert_eq!(r.lines().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
