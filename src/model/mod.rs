//! Abstract slide model: shapes, text and tables on a fixed canvas
//!
//! - `text`: paragraphs and their styling
//! - `table`: header + zebra-striped grids
//! - `shapes`: the `Shape` trait and its variants
//! - `slide`: `Slide` and `Canvas`

pub mod shapes;
pub mod slide;
pub mod table;
pub mod text;

pub use shapes::{
    ArrowDirection, ArrowShape, RectangleShape, RoundedRectShape, Shape, ShapeEnum, ShapeKind,
    ShapeStyle, TableShape, TextBoxShape,
};
pub use slide::{Canvas, Slide};
pub use table::{Cell, Table, TableStyle};
pub use text::{Align, TextBody, TextRun};
