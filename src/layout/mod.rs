//! Template builders: structured content in, positioned shapes out
//!
//! Each template is a content struct implementing [`Template`]. The
//! [`SlideContent`] enum is the registry: it maps every [`TemplateKind`] to
//! its builder through `enum_dispatch`. Builders are pure; the same content,
//! canvas and theme always give the same slide.
//!
//! - `defaults`: layout constants

pub mod architecture;
pub mod bullets;
pub mod defaults;
pub mod flow;
pub mod scores;
pub mod section;
pub mod table;
pub mod title;
pub mod two_column;

use enum_dispatch::enum_dispatch;

use crate::errors::{DeckError, GeometryError};
use crate::model::{
    Align, Canvas, RectangleShape, ShapeStyle, Slide, TextBody, TextBoxShape, TextRun,
};
use crate::theme::{Rgb, Theme};
use crate::types::Pt;

pub use architecture::{ArchitectureSlide, Layer};
pub use bullets::BulletSlide;
pub use flow::{FlowSlide, FlowStep};
pub use scores::{ScoreBand, ScoreSlide};
pub use section::SectionSlide;
pub use table::TableSlide;
pub use title::TitleSlide;
pub use two_column::{Column, TwoColumnSlide};

use defaults::{BULLET, HEADER_HEIGHT, HEADER_TITLE, HEADER_TITLE_SIZE, Slot};

/// The eight slide templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Title,
    Section,
    Content,
    TwoColumn,
    Table,
    Architecture,
    Flow,
    ScoreInterpretation,
}

impl TemplateKind {
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Title => "title",
            TemplateKind::Section => "section",
            TemplateKind::Content => "content",
            TemplateKind::TwoColumn => "two-column",
            TemplateKind::Table => "table",
            TemplateKind::Architecture => "architecture",
            TemplateKind::Flow => "flow",
            TemplateKind::ScoreInterpretation => "score-interpretation",
        }
    }
}

/// What a builder reads besides its content
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub canvas: Canvas,
    pub theme: &'a Theme,
}

impl<'a> LayoutContext<'a> {
    pub fn new(canvas: Canvas, theme: &'a Theme) -> Self {
        Self { canvas, theme }
    }

    /// A fresh slide with the full-width header bar and the title on it.
    pub(crate) fn header_slide(&self, title: &str, rtl: bool) -> Result<Slide, GeometryError> {
        let mut slide = Slide::new();
        let bar = RectangleShape::try_new(0.0, 0.0, self.canvas.width.raw(), HEADER_HEIGHT.raw())?
            .with_style(ShapeStyle::solid(self.theme.primary));
        let title = TextRun::new(title, HEADER_TITLE_SIZE, self.theme.white)
            .bold()
            .align(Align::Left.rtl(rtl));
        slide
            .push(bar)
            .push(TextBoxShape::new(HEADER_TITLE.rect()?, TextBody::new(title)));
        Ok(slide)
    }

    /// A single-paragraph text box.
    pub(crate) fn label(&self, slot: Slot, run: TextRun) -> Result<TextBoxShape, GeometryError> {
        Ok(TextBoxShape::new(slot.rect()?, TextBody::new(run)))
    }
}

/// Bulleted paragraphs, one per item, in input order.
pub(crate) fn bullet_body<S: AsRef<str>>(
    items: &[S],
    size: Pt,
    space_after: Pt,
    color: Rgb,
    align: Align,
) -> TextBody {
    let style = TextRun::new("", size, color).align(align).space_after(space_after);
    let runs = items.iter().map(|item| TextRun {
        text: format!("{BULLET}{}", item.as_ref()),
        ..style.clone()
    });
    TextBody::collect(runs, style.clone())
}

/// A slide template: content that knows how to lay itself out
#[enum_dispatch]
pub trait Template {
    fn kind(&self) -> TemplateKind;

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError>;
}

/// Template registry: one variant per [`TemplateKind`]
#[enum_dispatch(Template)]
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Title(TitleSlide),
    Section(SectionSlide),
    Bullets(BulletSlide),
    TwoColumn(TwoColumnSlide),
    Table(TableSlide),
    Architecture(ArchitectureSlide),
    Flow(FlowSlide),
    Scores(ScoreSlide),
}


#[cfg(test)]
mod tests {
    use super::test_support::build;
    use super::*;
    use crate::model::{Shape, ShapeKind};

    #[test]
    fn header_bar_spans_canvas_width() {
        let slide = build(BulletSlide::new("Overview", ["one"]));
        let bar = &slide.shapes()[0];
        assert_eq!(bar.kind(), ShapeKind::Rectangle);
        assert_eq!(bar.frame().width(), Canvas::WIDESCREEN.width);
        assert_eq!(bar.frame().height(), HEADER_HEIGHT);
        assert!(!bar.style().outline);
    }

    #[test]
    fn bullet_body_prefixes_each_item() {
        let body = bullet_body(&["a", "b"], Pt(20.0), Pt(8.0), Rgb(0, 0, 0), Align::Left);
        let texts: Vec<_> = body.paragraphs().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["• a", "• b"]);
        assert!(body.paragraphs().iter().all(|p| p.space_after == Some(Pt(8.0))));
    }

    #[test]
    fn bullet_body_empty_is_blank_not_bullet() {
        let items: [&str; 0] = [];
        let body = bullet_body(&items, Pt(20.0), Pt(8.0), Rgb(0, 0, 0), Align::Left);
        assert_eq!(body.len(), 1);
        assert!(!body.paragraphs()[0].text.starts_with(BULLET));
    }

    #[test]
    fn content_kind_matches_variant() {
        let contents: Vec<SlideContent> = vec![
            TitleSlide::new("t").into(),
            SectionSlide::new("s").into(),
            BulletSlide::new("b", ["x"]).into(),
        ];
        let kinds: Vec<_> = contents.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, [TemplateKind::Title, TemplateKind::Section, TemplateKind::Content]);
    }
}
