//! # Geometry primitives
//!
//! Screen-space points, sizes and rectangles used for layout, hit testing and
//! the draw list. Every coordinate is a logical pixel stored as `f32`; the
//! host decides how logical pixels map to physical ones.
//!
//! Rectangles are half-open on their maximum edge for hit testing, so two
//! widgets placed edge to edge never both report the pointer as inside.
//!
//! All types are `#[repr(C)]` and [`bytemuck::Pod`], which lets a renderer
//! copy draw commands into vertex buffers without conversion.

use std::ops::{Add, AddAssign, Sub};

use bytemuck::{Pod, Zeroable};

/// Layout axis along which a slider track runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Left to right.
    #[default]
    X,
    /// Top to bottom in screen space.
    Y,
}

impl Axis {
    /// Returns the perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// A position in logical pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate along `axis`.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns a copy with the coordinate along `axis` replaced.
    pub fn with_along(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y),
            Axis::Y => Self::new(self.x, value),
        }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Self::Output {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

/// A width/height pair in logical pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the extent along `axis`.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// # Examples
///
/// ```
/// use duoslide_ui::geometry::{Point, Rect, Size};
///
/// let rect = Rect::from_min_size(Point::new(10.0, 20.0), Size::new(100.0, 19.0));
/// assert_eq!(rect.width(), 100.0);
/// assert!(rect.contains(Point::new(10.0, 20.0)));
/// assert!(!rect.contains(Point::new(110.0, 25.0)));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rect {
    /// Top-left corner.
    pub min: Point,
    /// Bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Creates a rectangle from its corner coordinates.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Creates a rectangle from two corners.
    pub const fn from_points(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from its top-left corner and size.
    pub fn from_min_size(min: Point, size: Size) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        self.max.along(axis) - self.min.along(axis)
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    /// Hit test, inclusive on the minimum edge and exclusive on the maximum edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.y >= self.min.y && point.x < self.max.x && point.y < self.max.y
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_points(self.min.min(other.min), self.max.max(other.max))
    }

    /// Grows (or shrinks, with negative amounts) every edge.
    pub fn expand(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.min.x - dx,
            self.min.y - dy,
            self.max.x + dx,
            self.max.y + dy,
        )
    }

    /// Moves the rectangle by `offset`.
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::from_points(self.min + offset, self.max + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.99, 9.99)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 10.0)));
        assert!(!rect.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn axis_projection() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(p.along(Axis::X), 3.0);
        assert_eq!(p.along(Axis::Y), 7.0);
        assert_eq!(p.with_along(Axis::Y, 1.0), Point::new(3.0, 1.0));
        assert_eq!(Axis::X.cross(), Axis::Y);

        let rect = Rect::new(0.0, 10.0, 40.0, 30.0);
        assert_eq!(rect.extent(Axis::X), 40.0);
        assert_eq!(rect.extent(Axis::Y), 20.0);
    }

    #[test]
    fn union_and_expand() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 20.0, 8.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 20.0, 10.0));
        assert_eq!(a.expand(2.0, 1.0), Rect::new(-2.0, -1.0, 12.0, 11.0));
        assert!(a.expand(-5.0, 0.0).is_empty());
    }

    #[test]
    fn rect_is_pod() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&rect));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
