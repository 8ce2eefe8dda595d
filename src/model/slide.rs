//! Slides and the canvas they are laid out on

use crate::types::{BBox, Length, Point, Rect, Size};

use super::shapes::{Shape, ShapeEnum};
use super::text::TextBody;

/// The fixed drawing surface every slide shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: Length,
    pub height: Length,
}

impl Canvas {
    /// 16:9 widescreen, 13.333 x 7.5 inches.
    pub const WIDESCREEN: Canvas = Canvas {
        width: Length::inches(13.333),
        height: Length::inches(7.5),
    };

    /// The full-bleed frame.
    pub fn rect(&self) -> Rect {
        Rect {
            origin: Point::new(Length::ZERO, Length::ZERO),
            size: Size { w: self.width, h: self.height },
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

/// One slide: shapes in z-order (first pushed is furthest back).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slide {
    shapes: Vec<ShapeEnum>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<ShapeEnum>) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn shapes(&self) -> &[ShapeEnum] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Every text body on the slide, in z-order.
    pub fn text_bodies(&self) -> impl Iterator<Item = &TextBody> {
        self.shapes.iter().filter_map(|s| s.body())
    }

    /// Union of all shape frames.
    pub fn extent(&self) -> BBox<Length> {
        let mut bb = BBox::new();
        for shape in &self.shapes {
            bb.expand_rect(shape.frame());
        }
        bb
    }

    /// Indices of shapes whose frame leaves the canvas.
    pub fn out_of_bounds(&self, canvas: &Canvas) -> Vec<usize> {
        let bounds = canvas.rect();
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.frame().is_within(&bounds))
            .map(|(i, _)| i)
            .collect()
    }
}
