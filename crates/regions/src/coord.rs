//! Normalized planar coordinates and axis-aligned bounds.
//!
//! Coordinates are fractions of the image size, conventionally in [0, 1]. The
//! persisted border of a region is a plain list of these (`[{"x":..,"y":..}]`).

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point in normalized image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Scale to pixel space of a `width × height` image.
    #[inline]
    pub fn to_pixels(self, width: f64, height: f64) -> Vector2<f64> {
        self.to_vector().component_mul(&Vector2::new(width, height))
    }

    /// Inverse of `to_pixels`. A zero-sized image maps everything to the origin.
    pub fn from_pixels(px: f64, py: f64, width: f64, height: f64) -> Self {
        let x = if width != 0.0 { px / width } else { 0.0 };
        let y = if height != 0.0 { py / height } else { 0.0 };
        Self { x, y }
    }

    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        ((self.to_vector() + other.to_vector()) * 0.5).into()
    }
}

impl From<Vector2<f64>> for Coordinate {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Coordinate> for Vector2<f64> {
    #[inline]
    fn from(c: Coordinate) -> Self {
        c.to_vector()
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Closed axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// Smallest box covering `points`; `None` when empty.
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bounds {
            min: *first,
            max: *first,
        };
        for p in rest {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Coordinate {
        self.min.midpoint(self.max)
    }

    /// Inclusive membership with slack `eps` on every side.
    #[inline]
    pub fn contains_eps(&self, p: Coordinate, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    #[inline]
    pub fn contains(&self, p: Coordinate) -> bool {
        self.contains_eps(p, 0.0)
    }
}
