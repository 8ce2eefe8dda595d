//! Table slide: header row over zebra-striped data rows

use crate::errors::DeckError;
use crate::model::{Align, Slide, Table, TableShape, TableStyle};
use crate::types::Rect;

use super::defaults::{TABLE_ROW_HEIGHT, TABLE_WIDTH, TABLE_X, TABLE_Y};
use super::{LayoutContext, Template, TemplateKind};

#[derive(Debug, Clone, PartialEq)]
pub struct TableSlide {
    pub title: String,
    pub headers: Vec<String>,
    /// Rows shorter than `headers` are padded with blank cells
    pub rows: Vec<Vec<String>>,
    pub rtl: bool,
}

impl TableSlide {
    pub fn new<H, R>(title: impl Into<String>, headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<String>,
    {
        Self {
            title: title.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            rtl: false,
        }
    }

    pub fn rtl(mut self) -> Self {
        self.rtl = true;
        self
    }
}

impl Template for TableSlide {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Table
    }

    fn build(&self, ctx: &LayoutContext<'_>) -> Result<Slide, DeckError> {
        let mut slide = ctx.header_slide(&self.title, self.rtl)?;

        let style = TableStyle {
            align: Align::Center.rtl(self.rtl),
            ..TableStyle::from_theme(ctx.theme)
        };
        let table = Table::with_header(&self.headers, &self.rows, TABLE_WIDTH, TABLE_ROW_HEIGHT, &style)?;

        let height = TABLE_ROW_HEIGHT * table.row_count() as f64;
        let frame = Rect::try_new(TABLE_X, TABLE_Y, TABLE_WIDTH.raw(), height.raw())?;
        slide.push(TableShape::new(frame, table));
        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TableError;
    use crate::layout::test_support::build;
    use crate::model::{Canvas, Shape, ShapeKind};
    use crate::theme::Theme;

    fn sample() -> TableSlide {
        TableSlide::new(
            "Dimensions",
            ["Dimension", "Arabic", "Items"],
            [["Depression", "الاكتئاب", "3"], ["Anxiety", "القلق", "4"]],
        )
    }

    fn table(slide: &Slide) -> &Table {
        slide.shapes().last().and_then(|s| s.as_table()).expect("table shape")
    }

    #[test]
    fn header_plus_data_rows() {
        let slide = build(sample());
        assert_eq!(slide.len(), 3);
        assert_eq!(slide.shapes()[2].kind(), ShapeKind::Table);
        let t = table(&slide);
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.column_count(), 3);
        assert_eq!(t.cell(2, 1).unwrap().text.text, "القلق");
    }

    #[test]
    fn frame_height_tracks_rows() {
        let slide = build(sample());
        let frame = slide.shapes()[2].frame();
        assert_eq!(frame.width(), TABLE_WIDTH);
        assert!((frame.height().raw() - 1.5).abs() < 1e-9);
        assert!(frame.is_within(&Canvas::WIDESCREEN.rect()));
    }

    #[test]
    fn cells_centered_unless_rtl() {
        let slide = build(sample());
        let t = table(&slide);
        assert!(t.rows().iter().flatten().all(|c| c.text.align == Align::Center));

        let slide = build(sample().rtl());
        let t = table(&slide);
        assert!(t.rows().iter().flatten().all(|c| c.text.align == Align::Right));
    }

    #[test]
    fn first_data_row_is_striped() {
        let slide = build(sample());
        let t = table(&slide);
        let gray = Theme::default().light_gray;
        assert_eq!(t.cell(1, 0).unwrap().fill, Some(gray));
        assert_eq!(t.cell(2, 0).unwrap().fill, None);
    }

    #[test]
    fn too_wide_row_is_an_error() {
        let content = TableSlide::new("t", ["A"], [["1", "2"]]);
        let theme = Theme::default();
        let ctx = LayoutContext::new(Canvas::WIDESCREEN, &theme);
        let err = content.build(&ctx).unwrap_err();
        assert!(matches!(
            err,
            DeckError::Table(TableError::RowTooWide { row: 1, cells: 2, columns: 1 })
        ));
    }
}
