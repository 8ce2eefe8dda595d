//! Section divider: left accent bar and a large title, no header bar

use crate::errors::DeckError;
use crate::model::{RectangleShape, ShapeStyle, Slide, TextRun};

use super::defaults::{ACCENT_BAR_WIDTH, SECTION_SIZE, SECTION_TEXT};
use super::{LayoutContext, Template, TemplateKind};

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSlide {
    pub title: String,
}

impl SectionSlide {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Template for SectionSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Section
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let theme = ctx.theme;
        let bar = RectangleShape::try_new(0.0, 0.0, ACCENT_BAR_WIDTH.raw(), ctx.canvas.height.raw())?
            .with_style(ShapeStyle::solid(theme.primary));

        let mut slide = Slide::new();
        slide
            .push(bar)
            .push(ctx.label(SECTION_TEXT, TextRun::new(&self.title, SECTION_SIZE, theme.dark).bold())?);
        Ok(slide)
    }
}
