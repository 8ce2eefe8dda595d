//! Bulleted content slide

use crate::errors::DeckError;
use crate::model::{Align, Slide, TextBoxShape};

use super::defaults::{BULLET_BODY, BULLET_SIZE, BULLET_SPACE_AFTER};
use super::{LayoutContext, Template, TemplateKind, bullet_body};

#[derive(Debug, Clone, PartialEq)]
pub struct BulletSlide {
    pub title: String,
    pub items: Vec<String>,
    pub rtl: bool,
}

impl BulletSlide {
    pub fn new<I>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
            rtl: false,
        }
    }

    /// Right-align the title and every bullet.
    pub fn rtl(mut self) -> Self {
        self.rtl = true;
        self
    }
}

impl Template for BulletSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Content
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let mut slide = ctx.header_slide(&self.title, self.rtl)?;
        let body = bullet_body(
            &self.items,
            BULLET_SIZE,
            BULLET_SPACE_AFTER,
            ctx.theme.dark,
            Align::Left.rtl(self.rtl),
        );
        slide.push(TextBoxShape::new(BULLET_BODY.rect()?, body).wrapped());
        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::{aligns, build, count};
    use crate::model::{Shape, ShapeEnum, ShapeKind};

    fn body(slide: &Slide) -> &TextBoxShape {
        match slide.shapes().last() {
            Some(ShapeEnum::TextBox(tb)) => tb,
            other => panic!("expected a text box, got {other:?}"),
        }
    }

    #[test]
    fn one_paragraph_per_item_in_order() {
        let slide = build(BulletSlide::new("Goals", ["first", "second", "third"]));
        assert_eq!(slide.len(), 3);
        assert_eq!(count(&slide, ShapeKind::TextBox), 2);
        let texts: Vec<_> = body(&slide).body.paragraphs().iter().map(|p| p.text.clone()).collect();
        assert_eq!(texts, ["• first", "• second", "• third"]);
    }

    #[test]
    fn body_wraps_and_spaces_paragraphs() {
        let slide = build(BulletSlide::new("Goals", ["a", "b"]));
        let tb = body(&slide);
        assert!(tb.wrap);
        for p in tb.body.paragraphs() {
            assert_eq!(p.size, BULLET_SIZE);
            assert_eq!(p.space_after, Some(BULLET_SPACE_AFTER));
        }
    }

    #[test]
    fn empty_items_leave_one_blank_paragraph() {
        let slide = build(BulletSlide::new("Empty", Vec::<String>::new()));
        assert_eq!(slide.len(), 3);
        let paragraphs = body(&slide).body.paragraphs();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "");
    }

    #[test]
    fn rtl_right_aligns_title_and_bullets() {
        let slide = build(BulletSlide::new("الأهداف", ["أ", "ب"]).rtl());
        assert!(aligns(&slide).iter().all(|a| *a == Align::Right));

        let ltr = build(BulletSlide::new("Goals", ["a"]));
        assert!(aligns(&ltr).iter().all(|a| *a == Align::Left));
    }

    #[test]
    fn title_sits_on_header_bar() {
        let slide = build(BulletSlide::new("Goals", ["a"]));
        let title = &slide.shapes()[1];
        let bar = slide.shapes()[0].frame();
        assert!(title.frame().is_within(bar));
        assert!(title.body().unwrap().paragraphs()[0].bold);
    }
}
