//! Presentation assembly: slides appended in call order, then written out once

use std::path::Path;

use crate::errors::DeckError;
use crate::layout::{LayoutContext, SlideContent, Template};
use crate::log::{debug, info, warn};
use crate::model::{Canvas, Slide};
use crate::pptx::{self, PptxWriter, Serializer};
use crate::theme::Theme;

/// An ordered deck of slides sharing one canvas and one theme.
///
/// Slides are never reordered, deduplicated or validated on the way in.
/// Shapes that leave the canvas are reported with a warning and kept.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    canvas: Canvas,
    theme: Theme,
    slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(canvas: Canvas, theme: Theme) -> Self {
        Self { canvas, theme, slides: Vec::new() }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The canvas and theme templates are built against.
    pub fn context(&self) -> LayoutContext<'_> {
        LayoutContext::new(self.canvas, &self.theme)
    }

    /// Build `content` with this deck's canvas and theme and append it.
    pub fn add(&mut self, content: impl Into<SlideContent>) -> Result<&mut Self, DeckError> {
        let content = content.into();
        let slide = content.build(&self.context())?;
        debug!(
            template = content.kind().name(),
            shapes = slide.len(),
            "built slide {}",
            self.slides.len() + 1
        );
        Ok(self.append(slide))
    }

    /// Append a pre-built slide at the tail.
    pub fn append(&mut self, slide: Slide) -> &mut Self {
        let number = self.slides.len() + 1;
        for index in slide.out_of_bounds(&self.canvas) {
            warn!(slide = number, shape = index, "shape extends past the canvas");
        }
        self.slides.push(slide);
        self
    }

    /// Write the deck to `path` as PPTX, replacing any existing file.
    pub fn finalize(&self, path: impl AsRef<Path>) -> Result<(), DeckError> {
        self.finalize_with(path, &PptxWriter::new())
    }

    /// Write the deck to `path` with `serializer`.
    ///
    /// The output is staged in a temporary file beside `path` and moved into
    /// place only once it is complete.
    pub fn finalize_with<S: Serializer>(
        &self,
        path: impl AsRef<Path>,
        serializer: &S,
    ) -> Result<(), DeckError> {
        let path = path.as_ref();
        pptx::save(serializer, self, path)?;
        info!(slides = self.len(), "presentation saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BulletSlide, SectionSlide, TitleSlide};
    use crate::model::{RectangleShape, Shape};

    #[test]
    fn slides_keep_call_order() {
        let mut deck = Presentation::default();
        deck.add(TitleSlide::new("Deck")).unwrap();
        deck.add(SectionSlide::new("Part 1")).unwrap();
        deck.add(BulletSlide::new("Points", ["a", "b"])).unwrap();
        assert_eq!(deck.len(), 3);

        let first_texts: Vec<_> = deck
            .slides()
            .iter()
            .map(|s| s.text_bodies().next().unwrap().plain_text())
            .collect();
        assert_eq!(first_texts, ["Deck", "Part 1", "Points"]);
    }

    #[test]
    fn append_keeps_out_of_bounds_shapes() {
        let mut deck = Presentation::default();
        let mut slide = Slide::new();
        slide.push(RectangleShape::try_new(12.0, 7.0, 3.0, 3.0).unwrap());
        deck.append(slide);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].shapes()[0].frame().x().raw(), 12.0);
    }

    #[test]
    fn add_uses_the_deck_theme() {
        let theme = Theme { primary: crate::theme::Rgb(1, 2, 3), ..Theme::default() };
        let mut deck = Presentation::new(Canvas::WIDESCREEN, theme);
        deck.add(SectionSlide::new("s")).unwrap();
        let bar = &deck.slides()[0].shapes()[0];
        assert_eq!(bar.style().fill, Some(crate::theme::Rgb(1, 2, 3)));
    }

    #[test]
    fn failed_build_appends_nothing() {
        let mut deck = Presentation::default();
        let bad = crate::layout::TableSlide::new("t", Vec::<String>::new(), Vec::<Vec<String>>::new());
        assert!(deck.add(bad).is_err());
        assert!(deck.is_empty());
    }
}
