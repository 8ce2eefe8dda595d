//! Score interpretation: one row per band, badge + label + description

use crate::errors::DeckError;
use crate::model::{Align, RoundedRectShape, ShapeStyle, Slide, TextBody, TextRun};
use crate::theme::Swatch;

use super::defaults::{
    SCORE_BADGE, SCORE_BADGE_SIZE, SCORE_DESCRIPTION, SCORE_DESCRIPTION_SIZE, SCORE_LABEL,
    SCORE_LABEL_SIZE, SCORE_PITCH, SCORE_Y,
};
use super::{LayoutContext, Template, TemplateKind};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBand {
    /// Badge text, e.g. `45 - 55`
    pub range: String,
    pub label: String,
    pub color: Swatch,
    pub description: String,
}

impl ScoreBand {
    pub fn new(
        range: impl Into<String>,
        label: impl Into<String>,
        color: Swatch,
        description: impl Into<String>,
    ) -> Self {
        Self {
            range: range.into(),
            label: label.into(),
            color,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSlide {
    pub title: String,
    pub bands: Vec<ScoreBand>,
}

impl ScoreSlide {
    pub fn new(title: impl Into<String>, bands: impl IntoIterator<Item = ScoreBand>) -> Self {
        Self { title: title.into(), bands: bands.into_iter().collect() }
    }
}

impl Template for ScoreSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::ScoreInterpretation
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let theme = ctx.theme;
        let mut slide = ctx.header_slide(&self.title, false)?;

        for (i, band) in self.bands.iter().enumerate() {
            let y = SCORE_Y + SCORE_PITCH * i as f64;
            let color = theme.get(band.color);

            let badge = TextRun::new(&band.range, SCORE_BADGE_SIZE, theme.white)
                .bold()
                .align(Align::Center);
            slide.push(
                RoundedRectShape::new(SCORE_BADGE.at_y(y).rect()?)
                    .with_style(ShapeStyle::solid(color))
                    .with_body(TextBody::new(badge)),
            );
            slide.push(ctx.label(
                SCORE_LABEL.at_y(y),
                TextRun::new(&band.label, SCORE_LABEL_SIZE, theme.dark).bold(),
            )?);
            slide.push(ctx.label(
                SCORE_DESCRIPTION.at_y(y),
                TextRun::new(&band.description, SCORE_DESCRIPTION_SIZE, color),
            )?);
        }

        Ok(slide)
    }
}
