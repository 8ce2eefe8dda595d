//! Strongly-typed numeric primitives for slide geometry (zero-cost newtypes).
//!
//! - `Length` is the layout unit (inches)
//! - `Emu` is the container unit (914 400 per inch)
//! - `Pt` is the font unit (points)

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use crate::errors::GeometryError;

/// EMUs per inch in the container format.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in inches (layout canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length from inches (const-friendly, unchecked).
    #[inline]
    pub const fn inches(val: f64) -> Length {
        Length(val)
    }

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a strictly positive Length (shape extents)
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Length::try_new(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Convert to EMUs, rounding to the nearest unit.
    #[inline]
    pub fn to_emu(self) -> Emu {
        Emu((self.0 * EMU_PER_INCH).round() as i64)
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Length) -> Length {
        Length(self.0.max(other.0))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}
impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}
impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}in", self.0)
    }
}

/// English Metric Units, the integer unit of the container format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Emu(pub i64);

impl Emu {
    /// Split `self` into `parts` integer shares; the remainder goes to the last share
    /// so the shares always sum back to `self`.
    pub fn split(self, parts: usize) -> Vec<Emu> {
        if parts == 0 {
            return Vec::new();
        }
        let share = self.0 / parts as i64;
        let mut out = vec![Emu(share); parts];
        if let Some(last) = out.last_mut() {
            last.0 += self.0 - share * parts as i64;
        }
        out
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font size / spacing in typographic points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Pt(pub f64);

impl Pt {
    /// Hundredths of a point, the container's unit for sizes and spacing.
    #[inline]
    pub fn centipoints(self) -> u32 {
        (self.0 * 100.0).round().max(0.0) as u32
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

impl Point<Length> {
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x.0, self.y.0)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl Size<Length> {
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.w.0, self.h.0)
    }
}

/// A positioned frame: top-left origin plus a strictly positive size.
///
/// Origins may sit anywhere (including off-canvas); only the extent is
/// validated. Keeping shapes on the canvas is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point<Length>,
    pub size: Size<Length>,
}

impl Rect {
    /// Build a frame from raw inches, rejecting non-finite values and
    /// zero or negative extents.
    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Rect, GeometryError> {
        let x = Length::try_new(x).map_err(|source| GeometryError::NonFinite { what: "x", source })?;
        let y = Length::try_new(y).map_err(|source| GeometryError::NonFinite { what: "y", source })?;
        match (Length::try_positive(w), Length::try_positive(h)) {
            (Ok(w), Ok(h)) => Ok(Rect {
                origin: Point::new(x, y),
                size: Size { w, h },
            }),
            (Err(source), _) | (_, Err(source)) => Err(GeometryError::InvalidSize {
                width: w,
                height: h,
                source,
            }),
        }
    }

    pub fn x(&self) -> Length { self.origin.x }
    pub fn y(&self) -> Length { self.origin.y }
    pub fn width(&self) -> Length { self.size.w }
    pub fn height(&self) -> Length { self.size.h }
    pub fn right(&self) -> Length { self.origin.x + self.size.w }
    pub fn bottom(&self) -> Length { self.origin.y + self.size.h }

    /// Whether this frame lies entirely inside `outer` (edges may touch).
    pub fn is_within(&self, outer: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        let lo = self.origin.to_dvec2();
        let hi = lo + self.size.to_dvec2();
        let outer_lo = outer.origin.to_dvec2() - DVec2::splat(EPS);
        let outer_hi = outer.origin.to_dvec2() + outer.size.to_dvec2() + DVec2::splat(EPS);
        lo.cmpge(outer_lo).all() && hi.cmple(outer_hi).all()
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl BBox<Length> {
    /// Create an empty bounding box (will expand on first rect)
    pub fn new() -> Self {
        BBox {
            min: Point { x: Length(f64::MAX), y: Length(f64::MAX) },
            max: Point { x: Length(f64::MIN), y: Length(f64::MIN) },
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x.0 > self.max.x.0 || self.min.y.0 > self.max.y.0
    }

    pub fn expand_rect(&mut self, r: &Rect) {
        self.min.x = self.min.x.min(r.x());
        self.min.y = self.min.y.min(r.y());
        self.max.x = self.max.x.max(r.right());
        self.max.y = self.max.y.max(r.bottom());
    }

    pub fn width(&self) -> Length { self.max.x - self.min.x }

    pub fn height(&self) -> Length { self.max.y - self.min.y }
}

impl Default for BBox<Length> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Length tests ====================

    #[test]
    fn length_try_new_rejects_nan() {
        assert_eq!(Length::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn length_try_new_rejects_infinity() {
        assert_eq!(Length::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Length::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_try_positive() {
        assert!(Length::try_positive(0.1).is_ok());
        assert_eq!(Length::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Length::try_positive(-2.0), Err(NumericError::Negative));
    }

    #[test]
    fn length_arithmetic() {
        let a = Length(3.0);
        let b = Length(2.0);

        assert_eq!(a + b, Length(5.0));
        assert_eq!(a - b, Length(1.0));
        assert_eq!(a * 2.0, Length(6.0));
        assert_eq!(a / 2.0, Length(1.5));
        assert_eq!(-a, Length(-3.0));
    }

    #[test]
    fn length_to_emu() {
        assert_eq!(Length(1.0).to_emu(), Emu(914_400));
        assert_eq!(Length(12.0).to_emu(), Emu(10_972_800));
        assert_eq!(Length(7.5).to_emu(), Emu(6_858_000));
        assert_eq!(Length(13.333).to_emu(), Emu(12_191_695));
    }

    // ==================== Emu / Pt tests ====================

    #[test]
    fn emu_split_sums_back() {
        let total = Emu(10_972_800);
        for parts in 1..=9 {
            let shares = total.split(parts);
            assert_eq!(shares.len(), parts);
            assert_eq!(shares.iter().map(|e| e.0).sum::<i64>(), total.0);
        }
    }

    #[test]
    fn emu_split_remainder_goes_last() {
        assert_eq!(Emu(10).split(3), vec![Emu(3), Emu(3), Emu(4)]);
        assert!(Emu(10).split(0).is_empty());
    }

    #[test]
    fn pt_centipoints() {
        assert_eq!(Pt(24.0).centipoints(), 2400);
        assert_eq!(Pt(10.5).centipoints(), 1050);
    }

    // ==================== Rect tests ====================

    #[test]
    fn rect_rejects_degenerate_sizes() {
        assert!(matches!(
            Rect::try_new(0.0, 0.0, 0.0, 1.0),
            Err(GeometryError::InvalidSize { source: NumericError::Zero, .. })
        ));
        assert!(matches!(
            Rect::try_new(0.0, 0.0, 1.0, -1.0),
            Err(GeometryError::InvalidSize { source: NumericError::Negative, .. })
        ));
        assert!(matches!(
            Rect::try_new(f64::NAN, 0.0, 1.0, 1.0),
            Err(GeometryError::NonFinite { what: "x", .. })
        ));
    }

    #[test]
    fn rect_allows_any_origin() {
        let r = Rect::try_new(-5.0, 100.0, 1.0, 1.0).unwrap();
        assert_eq!(r.right(), Length(-4.0));
        assert_eq!(r.bottom(), Length(101.0));
    }

    #[test]
    fn rect_is_within() {
        let canvas = Rect::try_new(0.0, 0.0, 13.333, 7.5).unwrap();
        assert!(Rect::try_new(0.0, 0.0, 13.333, 7.5).unwrap().is_within(&canvas));
        assert!(Rect::try_new(1.0, 6.0, 5.0, 1.0).unwrap().is_within(&canvas));
        assert!(!Rect::try_new(12.0, 2.5, 1.4, 1.5).unwrap().is_within(&canvas));
        assert!(!Rect::try_new(-0.1, 0.0, 1.0, 1.0).unwrap().is_within(&canvas));
    }

    // ==================== BBox tests ====================

    #[test]
    fn bbox_new_is_empty() {
        assert!(BBox::<Length>::new().is_empty());
    }

    #[test]
    fn bbox_expand_rect() {
        let mut bb = BBox::<Length>::new();
        bb.expand_rect(&Rect::try_new(1.0, 2.0, 3.0, 1.0).unwrap());
        bb.expand_rect(&Rect::try_new(0.5, 4.0, 1.0, 1.0).unwrap());

        assert!(!bb.is_empty());
        assert_eq!(bb.min.x, Length(0.5));
        assert_eq!(bb.min.y, Length(2.0));
        assert_eq!(bb.max.x, Length(4.0));
        assert_eq!(bb.max.y, Length(5.0));
        assert_eq!(bb.width(), Length(3.5));
        assert_eq!(bb.height(), Length(3.0));
    }
}
