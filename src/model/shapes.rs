//! Shape types placed on a slide
//!
//! Each shape is its own type carrying a frame, a style and (for the
//! text-bearing variants) a `TextBody`. `ShapeEnum` gives uniform storage and
//! dispatches the `Shape` trait to the variant.

use enum_dispatch::enum_dispatch;

use crate::errors::GeometryError;
use crate::theme::Rgb;
use crate::types::Rect;

use super::table::Table;
use super::text::TextBody;

/// Fill and border of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// `None` means transparent
    pub fill: Option<Rgb>,
    /// Whether the outline is drawn
    pub outline: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self { fill: None, outline: true }
    }
}

impl ShapeStyle {
    /// Solid fill with the outline suppressed, the look of every filled template shape.
    pub fn solid(color: Rgb) -> Self {
        Self { fill: Some(color), outline: false }
    }

    /// No fill, no outline.
    pub fn bare() -> Self {
        Self { fill: None, outline: false }
    }
}

/// Direction an arrow shape points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Right,
    Left,
    Up,
    Down,
}

/// Which variant a shape is, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Arrow(ArrowDirection),
    TextBox,
    Table,
}

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    /// Position and size on the canvas
    fn frame(&self) -> &Rect;

    fn style(&self) -> ShapeStyle;

    /// Text carried by the shape, if any
    fn body(&self) -> Option<&TextBody> {
        None
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A plain rectangle, optionally labelled
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub frame: Rect,
    pub style: ShapeStyle,
    pub body: Option<TextBody>,
}

impl RectangleShape {
    pub fn new(frame: Rect) -> Self {
        Self { frame, style: ShapeStyle::default(), body: None }
    }

    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(Rect::try_new(x, y, w, h)?))
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_body(mut self, body: TextBody) -> Self {
        self.body = Some(body);
        self
    }
}

impl Shape for RectangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn frame(&self) -> &Rect {
        &self.frame
    }

    fn style(&self) -> ShapeStyle {
        self.style
    }

    fn body(&self) -> Option<&TextBody> {
        self.body.as_ref()
    }
}

/// A rectangle with rounded corners
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectShape {
    pub frame: Rect,
    pub style: ShapeStyle,
    pub body: Option<TextBody>,
}

impl RoundedRectShape {
    pub fn new(frame: Rect) -> Self {
        Self { frame, style: ShapeStyle::default(), body: None }
    }

    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(Rect::try_new(x, y, w, h)?))
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_body(mut self, body: TextBody) -> Self {
        self.body = Some(body);
        self
    }
}

impl Shape for RoundedRectShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RoundedRectangle
    }

    fn frame(&self) -> &Rect {
        &self.frame
    }

    fn style(&self) -> ShapeStyle {
        self.style
    }

    fn body(&self) -> Option<&TextBody> {
        self.body.as_ref()
    }
}

/// A block arrow filling its frame
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowShape {
    pub frame: Rect,
    pub direction: ArrowDirection,
    pub style: ShapeStyle,
}

impl ArrowShape {
    pub fn new(frame: Rect, direction: ArrowDirection) -> Self {
        Self { frame, direction, style: ShapeStyle::default() }
    }

    pub fn try_new(direction: ArrowDirection, x: f64, y: f64, w: f64, h: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(Rect::try_new(x, y, w, h)?, direction))
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl Shape for ArrowShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Arrow(self.direction)
    }

    fn frame(&self) -> &Rect {
        &self.frame
    }

    fn style(&self) -> ShapeStyle {
        self.style
    }
}

/// A borderless, transparent text container
#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxShape {
    pub frame: Rect,
    pub body: TextBody,
    /// Wrap lines at the frame width instead of growing the box
    pub wrap: bool,
}

impl TextBoxShape {
    pub fn new(frame: Rect, body: TextBody) -> Self {
        Self { frame, body, wrap: false }
    }

    pub fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }
}

impl Shape for TextBoxShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::TextBox
    }

    fn frame(&self) -> &Rect {
        &self.frame
    }

    fn style(&self) -> ShapeStyle {
        ShapeStyle::bare()
    }

    fn body(&self) -> Option<&TextBody> {
        Some(&self.body)
    }
}

/// A table placed in a frame; the grid's own widths and heights fill it
#[derive(Debug, Clone, PartialEq)]
pub struct TableShape {
    pub frame: Rect,
    pub table: Table,
}

impl TableShape {
    pub fn new(frame: Rect, table: Table) -> Self {
        Self { frame, table }
    }
}

impl Shape for TableShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Table
    }

    fn frame(&self) -> &Rect {
        &self.frame
    }

    fn style(&self) -> ShapeStyle {
        ShapeStyle::bare()
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// A shape enum wrapping all shape types
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Rectangle(RectangleShape),
    RoundedRectangle(RoundedRectShape),
    Arrow(ArrowShape),
    TextBox(TextBoxShape),
    Table(TableShape),
}

impl ShapeEnum {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ShapeEnum::Table(t) => Some(&t.table),
            _ => None,
        }
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self, ShapeEnum::Arrow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::text::TextRun;
    use crate::types::Pt;

    #[test]
    fn constructors_reject_bad_geometry() {
        assert!(RectangleShape::try_new(0.0, 0.0, -1.0, 1.0).is_err());
        assert!(RoundedRectShape::try_new(0.0, 0.0, 1.0, 0.0).is_err());
        assert!(ArrowShape::try_new(ArrowDirection::Down, 0.0, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn constructors_do_not_check_canvas_bounds() {
        let r = RectangleShape::try_new(50.0, -3.0, 1.0, 1.0).unwrap();
        assert_eq!(r.frame.x().raw(), 50.0);
    }

    #[test]
    fn dispatch_through_enum() {
        let frame = Rect::try_new(1.0, 1.0, 2.0, 1.0).unwrap();
        let body = TextBody::new(TextRun::new("hi", Pt(12.0), Rgb::WHITE));
        let shapes: Vec<ShapeEnum> = vec![
            RectangleShape::new(frame).with_style(ShapeStyle::solid(Rgb(1, 2, 3))).into(),
            ArrowShape::new(frame, ArrowDirection::Right).into(),
            TextBoxShape::new(frame, body).into(),
        ];
        assert_eq!(shapes[0].kind(), ShapeKind::Rectangle);
        assert_eq!(shapes[0].style().fill, Some(Rgb(1, 2, 3)));
        assert!(!shapes[0].style().outline);
        assert_eq!(shapes[1].kind(), ShapeKind::Arrow(ArrowDirection::Right));
        assert!(shapes[1].is_arrow());
        assert!(shapes[1].body().is_none());
        assert_eq!(shapes[2].body().map(|b| b.plain_text()), Some("hi".to_string()));
        assert_eq!(shapes[2].style(), ShapeStyle::bare());
        assert!(shapes.iter().all(|s| s.frame() == &frame));
    }
}
