//! Layered architecture diagram: a vertical stack of colored boxes with
//! component labels beside them and down-arrows between consecutive layers.

use crate::errors::DeckError;
use crate::model::{
    Align, ArrowDirection, ArrowShape, RoundedRectShape, ShapeStyle, Slide, TextBody, TextRun,
};
use crate::theme::Swatch;

use super::defaults::{
    LAYER_ARROW_GAP, LAYER_ARROW_HEIGHT, LAYER_ARROW_WIDTH, LAYER_BOX, LAYER_LABEL_SIZE,
    LAYER_LABEL_WIDTH, LAYER_LABEL_X, LAYER_PITCH, LAYER_SIZE, Slot,
};
use super::{LayoutContext, Template, TemplateKind};

/// One tier of the stack
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Box text; may contain `\n`
    pub label: String,
    /// Free text shown to the right of the box
    pub components: String,
    pub color: Swatch,
}

impl Layer {
    pub fn new(label: impl Into<String>, components: impl Into<String>, color: Swatch) -> Self {
        Self { label: label.into(), components: components.into(), color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchitectureSlide {
    pub title: String,
    /// Top to bottom
    pub layers: Vec<Layer>,
}

impl ArchitectureSlide {
    pub fn new(title: impl Into<String>, layers: impl IntoIterator<Item = Layer>) -> Self {
        Self { title: title.into(), layers: layers.into_iter().collect() }
    }
}

impl Template for ArchitectureSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Architecture
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let theme = ctx.theme;
        let mut slide = ctx.header_slide(&self.title, false)?;

        let slot = |i: usize| LAYER_BOX.at_y(LAYER_BOX.y + LAYER_PITCH * i as f64);

        // Boxes, then labels, then arrows
        for (i, layer) in self.layers.iter().enumerate() {
            let text = TextRun::new(&layer.label, LAYER_SIZE, theme.white)
                .bold()
                .align(Align::Center);
            slide.push(
                RoundedRectShape::new(slot(i).rect()?)
                    .with_style(ShapeStyle::solid(theme.get(layer.color)))
                    .with_body(TextBody::new(text)),
            );
        }

        for (i, layer) in self.layers.iter().enumerate() {
            let label = Slot::new(LAYER_LABEL_X, slot(i).y, LAYER_LABEL_WIDTH, LAYER_BOX.h);
            slide.push(ctx.label(label, TextRun::new(&layer.components, LAYER_LABEL_SIZE, theme.dark))?);
        }

        // Arrows sit in the gap under every layer but the last
        let arrow_x = LAYER_BOX.x + (LAYER_BOX.w - LAYER_ARROW_WIDTH) / 2.0;
        for i in 0..self.layers.len().saturating_sub(1) {
            let y = LAYER_BOX.y + LAYER_BOX.h + LAYER_ARROW_GAP + LAYER_PITCH * i as f64;
            slide.push(
                ArrowShape::try_new(ArrowDirection::Down, arrow_x, y, LAYER_ARROW_WIDTH, LAYER_ARROW_HEIGHT)?
                    .with_style(ShapeStyle::solid(theme.dark)),
            );
        }

        Ok(slide)
    }
}
