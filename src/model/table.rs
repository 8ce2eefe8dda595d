//! Table grids: a header row over zebra-striped data rows

use crate::errors::TableError;
use crate::theme::{Rgb, Theme};
use crate::types::{Emu, Length, Pt};

use super::text::{Align, TextRun};

/// One table cell: styled text plus an optional background.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: TextRun,
    pub fill: Option<Rgb>,
}

impl Cell {
    pub fn new(text: TextRun, fill: Option<Rgb>) -> Self {
        Self { text, fill }
    }
}

/// How header and data cells are painted.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub header_fill: Rgb,
    pub header_color: Rgb,
    pub header_size: Pt,
    pub body_color: Rgb,
    pub body_size: Pt,
    /// Background of even data rows (0-based, counted from the first data row)
    pub stripe_fill: Rgb,
    pub align: Align,
}

impl TableStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            header_fill: theme.primary,
            header_color: theme.white,
            header_size: Pt(18.0),
            body_color: theme.dark,
            body_size: Pt(16.0),
            stripe_fill: theme.light_gray,
            align: Align::Center,
        }
    }

    /// Data row `index` (0-based among data rows) gets the stripe iff even.
    pub fn stripe(&self, index: usize) -> Option<Rgb> {
        (index % 2 == 0).then_some(self.stripe_fill)
    }
}

/// A rectangular grid of cells with exact column widths and row heights.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
    column_widths: Vec<Emu>,
    row_heights: Vec<Emu>,
}

impl Table {
    /// Build from a rectangular grid. Column widths split `width` equally
    /// and row heights split `height` equally, in whole EMUs.
    pub fn from_grid(rows: Vec<Vec<Cell>>, width: Length, height: Length) -> Result<Self, TableError> {
        let Some(first) = rows.first() else {
            return Err(TableError::NoRows);
        };
        let columns = first.len();
        if columns == 0 {
            return Err(TableError::NoColumns);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() > columns {
                return Err(TableError::RowTooWide { row, cells: cells.len(), columns });
            }
            if cells.len() < columns {
                return Err(TableError::RowTooShort { row, cells: cells.len(), columns });
            }
        }

        let column_widths = width.to_emu().split(columns);
        let row_heights = height.to_emu().split(rows.len());
        Ok(Self { rows, column_widths, row_heights })
    }

    /// Build a header row over data rows. Short data rows are padded with
    /// blank cells; the header row is always row 0.
    pub fn with_header<H, R, C>(
        headers: &[H],
        data: &[R],
        width: Length,
        row_height: Length,
        style: &TableStyle,
    ) -> Result<Self, TableError>
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let columns = headers.len();
        if columns == 0 {
            return Err(TableError::NoColumns);
        }

        let header = headers
            .iter()
            .map(|h| {
                let text = TextRun::new(h.as_ref(), style.header_size, style.header_color)
                    .bold()
                    .align(style.align);
                Cell::new(text, Some(style.header_fill))
            })
            .collect();

        let mut grid = Vec::with_capacity(data.len() + 1);
        grid.push(header);

        for (index, row) in data.iter().enumerate() {
            let row = row.as_ref();
            if row.len() > columns {
                return Err(TableError::RowTooWide { row: index + 1, cells: row.len(), columns });
            }
            let fill = style.stripe(index);
            let cells = (0..columns)
                .map(|col| {
                    let value = row.get(col).map(|c| c.as_ref()).unwrap_or_default();
                    let text = TextRun::new(value, style.body_size, style.body_color).align(style.align);
                    Cell::new(text, fill)
                })
                .collect();
            grid.push(cells);
        }

        let height = row_height * grid.len() as f64;
        Self::from_grid(grid, width, height)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[Emu] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[Emu] {
        &self.row_heights
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Data rows, i.e. everything below the header.
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        &self.rows[1..]
    }
}
