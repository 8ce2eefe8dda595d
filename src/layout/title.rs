//! Title slide: dark full-bleed background, centered title and subtitle

use crate::errors::DeckError;
use crate::model::{Align, RectangleShape, ShapeStyle, Slide, TextRun};

use super::defaults::{SUBTITLE_SIZE, SUBTITLE_TEXT, TITLE_SIZE, TITLE_TEXT};
use super::{LayoutContext, Template, TemplateKind};

#[derive(Debug, Clone, PartialEq)]
pub struct TitleSlide {
    pub title: String,
    /// Omitted when `None` or empty
    pub subtitle: Option<String>,
}

impl TitleSlide {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), subtitle: None }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl Template for TitleSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Title
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let theme = ctx.theme;
        let mut slide = Slide::new();

        slide.push(RectangleShape::new(ctx.canvas.rect()).with_style(ShapeStyle::solid(theme.dark)));
        slide.push(ctx.label(
            TITLE_TEXT,
            TextRun::new(&self.title, TITLE_SIZE, theme.white).bold().align(Align::Center),
        )?);

        if let Some(subtitle) = self.subtitle.as_deref().filter(|s| !s.is_empty()) {
            slide.push(ctx.label(
                SUBTITLE_TEXT,
                TextRun::new(subtitle, SUBTITLE_SIZE, theme.primary).align(Align::Center),
            )?);
        }

        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::{aligns, build};
    use crate::model::{Canvas, Shape, ShapeKind};
    use crate::theme::Theme;

    #[test]
    fn background_covers_canvas() {
        let slide = build(TitleSlide::new("Khuta"));
        let bg = &slide.shapes()[0];
        assert_eq!(bg.kind(), ShapeKind::Rectangle);
        assert_eq!(*bg.frame(), Canvas::WIDESCREEN.rect());
        assert_eq!(bg.style().fill, Some(Theme::default().dark));
    }

    #[test]
    fn subtitle_is_optional() {
        assert_eq!(build(TitleSlide::new("a")).len(), 2);
        assert_eq!(build(TitleSlide::new("a").subtitle("")).len(), 2);
        let slide = build(TitleSlide::new("a").subtitle("b\nc"));
        assert_eq!(slide.len(), 3);
        let sub = slide.shapes()[2].body().unwrap();
        assert_eq!(sub.paragraphs()[0].color, Theme::default().primary);
        assert_eq!(sub.len(), 1);
    }

    #[test]
    fn text_is_centered() {
        let slide = build(TitleSlide::new("a").subtitle("b"));
        assert_eq!(aligns(&slide), [Align::Center, Align::Center]);
        assert!(slide.shapes()[1].body().unwrap().paragraphs()[0].bold);
    }
}
