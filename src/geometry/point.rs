// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! 2-D point type.

use std::ops::{Add, Sub};

/// A location in the plane, single precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the point seen as a vector.
    pub fn norm(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self - other).norm()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Vertices of a regular `n`-gon of the given radius, centred on the origin.
///
/// Vertex `i` sits at angle `i * 360 / n` degrees.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn regular_polygon(n: usize, radius: f32) -> Vec<Point> {
    assert!(n > 0, "Polygon needs at least one vertex");
    let step = 360.0_f32 / n as f32;
    (0..n)
        .map(|i| {
            let angle = (i as f32 * step).to_radians();
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
