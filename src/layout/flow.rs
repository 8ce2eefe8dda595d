//! Horizontal process flow: step boxes joined by right-arrows.
//!
//! Steps are placed at a fixed pitch from the left edge. A long sequence is
//! allowed to run off the right side of the canvas; the assembler reports it.

use glam::{DVec2, dvec2};

use crate::errors::DeckError;
use crate::model::{
    Align, ArrowDirection, ArrowShape, RoundedRectShape, ShapeStyle, Slide, TextBody, TextRun,
};
use crate::types::Rect;

use super::defaults::{
    FLOW_ARROW_DY, FLOW_ARROW_HEIGHT, FLOW_BOX_HEIGHT, FLOW_BOX_WIDTH, FLOW_GAP, FLOW_PRIMARY_SIZE,
    FLOW_SECONDARY_SIZE, FLOW_X, FLOW_Y,
};
use super::{LayoutContext, Template, TemplateKind};

/// One box: a bold primary line over a smaller secondary line
#[derive(Debug, Clone, PartialEq)]
pub struct FlowStep {
    pub primary: String,
    pub secondary: String,
}

impl FlowStep {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self { primary: primary.into(), secondary: secondary.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowSlide {
    pub title: String,
    pub steps: Vec<FlowStep>,
}

impl FlowSlide {
    pub fn new(title: impl Into<String>, steps: impl IntoIterator<Item = FlowStep>) -> Self {
        Self { title: title.into(), steps: steps.into_iter().collect() }
    }
}

/// Top-left corner of step `index`.
fn step_origin(index: usize) -> DVec2 {
    dvec2(FLOW_X, FLOW_Y) + dvec2((FLOW_BOX_WIDTH + FLOW_GAP) * index as f64, 0.0)
}

fn frame(origin: DVec2, size: DVec2) -> Result<Rect, DeckError> {
    Ok(Rect::try_new(origin.x, origin.y, size.x, size.y)?)
}

impl Template for FlowSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Flow
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let theme = ctx.theme;
        let mut slide = ctx.header_slide(&self.title, false)?;
        let box_size = dvec2(FLOW_BOX_WIDTH, FLOW_BOX_HEIGHT);
        let arrow_size = dvec2(FLOW_GAP, FLOW_ARROW_HEIGHT);

        for (i, step) in self.steps.iter().enumerate() {
            let origin = step_origin(i);
            let fill = if i % 2 == 0 { theme.primary } else { theme.sky };

            let body = TextBody::new(
                TextRun::new(&step.primary, FLOW_PRIMARY_SIZE, theme.white)
                    .bold()
                    .align(Align::Center),
            )
            .with(TextRun::new(&step.secondary, FLOW_SECONDARY_SIZE, theme.white).align(Align::Center));

            slide.push(
                RoundedRectShape::new(frame(origin, box_size)?)
                    .with_style(ShapeStyle::solid(fill))
                    .with_body(body),
            );

            if i + 1 < self.steps.len() {
                let at = origin + dvec2(FLOW_BOX_WIDTH, FLOW_ARROW_DY);
                slide.push(
                    ArrowShape::new(frame(at, arrow_size)?, ArrowDirection::Right)
                        .with_style(ShapeStyle::solid(theme.dark)),
                );
            }
        }

        Ok(slide)
    }
}
