//! Plain geometry in logical surface units.
//!
//! Every containment test here uses closed intervals: a point lying exactly on
//! an edge or on a circle's rim counts as inside.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of an unrotated footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uniformly scaled copy.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Size {
        Size { width: self.width * scale, height: self.height * scale }
    }

    /// `true` when either side is zero, negative, or not finite.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub fn centered(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// Square of side `side` centered on `center`.
    #[must_use]
    pub fn square(center: Point, side: f64) -> Self {
        Self { center, size: Size::new(side, side) }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.x - self.size.width / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.center.x + self.size.width / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.center.y - self.size.height / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.y + self.size.height / 2.0
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left() && pt.x <= self.right() && pt.y >= self.top() && pt.y <= self.bottom()
    }
}

/// Circular hit target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let d = pt.delta_from(self.center);
        d.x.hypot(d.y) <= self.radius
    }
}
