//! Two side-by-side bulleted columns, each with an optional heading

use crate::errors::DeckError;
use crate::model::{Align, Slide, TextBoxShape, TextRun};

use super::defaults::{
    COLUMN_BODY, COLUMN_HEADING, COLUMN_HEADING_SIZE, COLUMN_LEFT_X, COLUMN_RIGHT_X, COLUMN_SIZE,
    COLUMN_SPACE_AFTER,
};
use super::{LayoutContext, Template, TemplateKind, bullet_body};

/// One column: an optional heading over bulleted items
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    /// Omitted when `None` or empty
    pub heading: Option<String>,
    pub items: Vec<String>,
}

impl Column {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self { heading: None, items: items.into_iter().map(Into::into).collect() }
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TwoColumnSlide {
    pub title: String,
    pub left: Column,
    pub right: Column,
    pub rtl: bool,
}

impl TwoColumnSlide {
    pub fn new(title: impl Into<String>, left: Column, right: Column) -> Self {
        Self { title: title.into(), left, right, rtl: false }
    }

    pub fn rtl(mut self) -> Self {
        self.rtl = true;
        self
    }

    fn column(
        &self,
        ctx: &LayoutContext<'_>,
        slide: &mut Slide,
        column: &Column,
        x: f64,
    ) -> Result<(), DeckError> {
        let theme = ctx.theme;
        let align = Align::Left.rtl(self.rtl);

        if let Some(heading) = column.heading.as_deref().filter(|h| !h.is_empty()) {
            let run = TextRun::new(heading, COLUMN_HEADING_SIZE, theme.primary)
                .bold()
                .align(align);
            slide.push(ctx.label(COLUMN_HEADING.at_x(x), run)?);
        }

        let body = bullet_body(&column.items, COLUMN_SIZE, COLUMN_SPACE_AFTER, theme.dark, align);
        slide.push(TextBoxShape::new(COLUMN_BODY.at_x(x).rect()?, body).wrapped());
        Ok(())
    }
}

impl Template for TwoColumnSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::TwoColumn
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let mut slide = ctx.header_slide(&self.title, self.rtl)?;
        // Left then right, regardless of reading direction
        self.column(ctx, &mut slide, &self.left, COLUMN_LEFT_X)?;
        self.column(ctx, &mut slide, &self.right, COLUMN_RIGHT_X)?;
        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::{aligns, build, count};
    use crate::model::{Shape, ShapeKind};

    #[test]
    fn headings_are_optional() {
        let bare = build(TwoColumnSlide::new("t", Column::new(["a"]), Column::new(["b"])));
        assert_eq!(bare.len(), 4);

        let one = build(TwoColumnSlide::new("t", Column::new(["a"]).heading("Left"), Column::new(["b"])));
        assert_eq!(one.len(), 5);

        let both = build(TwoColumnSlide::new(
            "t",
            Column::new(["a"]).heading("Left"),
            Column::new(["b"]).heading("Right"),
        ));
        assert_eq!(both.len(), 6);
        assert_eq!(count(&both, ShapeKind::TextBox), 5);

        let empty = build(TwoColumnSlide::new("t", Column::new(["a"]).heading(""), Column::new(["b"])));
        assert_eq!(empty.len(), 4);
    }

    #[test]
    fn columns_keep_position_and_order() {
        let slide = build(TwoColumnSlide::new(
            "t",
            Column::new(["l1", "l2"]),
            Column::new(["r1", "r2", "r3"]),
        ));
        let left = &slide.shapes()[2];
        let right = &slide.shapes()[3];
        assert_eq!(left.frame().x().raw(), COLUMN_LEFT_X);
        assert_eq!(right.frame().x().raw(), COLUMN_RIGHT_X);
        assert_eq!(left.body().unwrap().plain_text(), "• l1\n• l2");
        assert_eq!(right.body().unwrap().len(), 3);
    }

    #[test]
    fn heading_sits_above_body() {
        let slide = build(TwoColumnSlide::new("t", Column::new(["a"]).heading("H"), Column::default()));
        let heading = &slide.shapes()[2];
        let body = &slide.shapes()[3];
        assert!(heading.frame().bottom() <= body.frame().y());
        let run = &heading.body().unwrap().paragraphs()[0];
        assert!(run.bold);
        assert_eq!(run.size, COLUMN_HEADING_SIZE);
    }

    #[test]
    fn rtl_covers_headings() {
        let slide = build(
            TwoColumnSlide::new("t", Column::new(["a"]).heading("H"), Column::new(["b"]).heading("K")).rtl(),
        );
        let all = aligns(&slide);
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|a| *a == Align::Right));
    }
}
