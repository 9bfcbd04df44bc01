//! Plain geometry types exchanged with the host windowing layer

use std::ops::{Add, Sub};

/// A position in pixels, either window-local or host-global depending on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Width and height of an addressable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Offset of the surface center from its top-left corner.
    pub fn center(&self) -> Point {
        Point::new(self.max_x() / 2, self.max_y() / 2)
    }

    /// Width as a signed coordinate bound.
    pub fn max_x(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Height as a signed coordinate bound.
    pub fn max_y(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(point.x.clamp(0, self.max_x()), point.y.clamp(0, self.max_y()))
    }
}

/// A rectangle in host-global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn top_left(&self) -> Point {
        self.origin
    }

    pub fn center(&self) -> Point {
        self.origin + self.size.center()
    }
}
