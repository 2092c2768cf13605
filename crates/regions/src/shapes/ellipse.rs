//! Axis-aligned ellipses.
//!
//! Area and membership are exact. Vertices are a tessellation whose density
//! follows the perimeter, so large ellipses come out smooth and small ones
//! stay cheap.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::types::TessCfg;
use super::Shape;
use crate::coord::{Bounds, Coordinate};
use crate::surface::Surface;

/// Ellipse `((x-cx)/rx)² + ((y-cy)/ry)² <= 1`.
///
/// Invariant: radii are finite and `>= 0` (clamped at construction).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEllipse")]
pub struct Ellipse {
    center: Coordinate,
    radius_x: f64,
    radius_y: f64,
}

#[derive(Deserialize)]
struct RawEllipse {
    center: Coordinate,
    radius_x: f64,
    radius_y: f64,
}

impl From<RawEllipse> for Ellipse {
    fn from(raw: RawEllipse) -> Self {
        Ellipse::new(raw.center, raw.radius_x, raw.radius_y)
    }
}

#[inline]
fn clamp_radius(r: f64) -> f64 {
    if r.is_finite() && r > 0.0 {
        r
    } else {
        0.0
    }
}

impl Ellipse {
    /// Negative or non-finite radii become 0.
    pub fn new(center: Coordinate, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x: clamp_radius(radius_x),
            radius_y: clamp_radius(radius_y),
        }
    }

    pub fn circle(center: Coordinate, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Ellipse inscribed in the box spanned by two drag corners.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self::new(
            a.midpoint(b),
            0.5 * (b.x - a.x).abs(),
            0.5 * (b.y - a.y).abs(),
        )
    }

    #[inline]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    #[inline]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    /// Perimeter estimate `2π·sqrt((rx² + ry²) / 2)`.
    pub fn perimeter(&self) -> f64 {
        let (rx, ry) = (self.radius_x, self.radius_y);
        TAU * ((rx * rx + ry * ry) / 2.0).sqrt()
    }

    pub fn sample_count(&self, cfg: TessCfg) -> usize {
        cfg.samples_for(self.perimeter())
    }

    /// Boundary samples uniform in angle, counterclockwise from angle 0.
    pub fn vertices_with(&self, cfg: TessCfg) -> Vec<Coordinate> {
        let n = self.sample_count(cfg);
        let c = self.center.to_vector();
        let r = Vector2::new(self.radius_x, self.radius_y);
        (0..n)
            .map(|k| {
                let th = TAU * (k as f64) / (n as f64);
                (c + Vector2::new(th.cos(), th.sin()).component_mul(&r)).into()
            })
            .collect()
    }
}

impl Shape for Ellipse {
    fn vertices(&self) -> Vec<Coordinate> {
        self.vertices_with(TessCfg::default())
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius_x * self.radius_y
    }

    /// Exact closed test, multiplied through to avoid dividing by the radii.
    fn contains(&self, p: Coordinate) -> bool {
        if self.area() <= 0.0 {
            return false;
        }
        let rx2 = self.radius_x * self.radius_x;
        let ry2 = self.radius_y * self.radius_y;
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        rx2 * ry2 >= dx * dx * ry2 + dy * dy * rx2
    }

    fn center(&self) -> Coordinate {
        self.center
    }

    fn bounds(&self) -> Option<Bounds> {
        let c = self.center;
        Some(Bounds {
            min: Coordinate::new(c.x - self.radius_x, c.y - self.radius_y),
            max: Coordinate::new(c.x + self.radius_x, c.y + self.radius_y),
        })
    }

    fn draw(&self, width: f64, height: f64, surface: &mut dyn Surface) {
        let c = self.center.to_pixels(width, height);
        surface.begin_path();
        surface.ellipse(
            c.x,
            c.y,
            self.radius_x * width,
            self.radius_y * height,
            0.0,
            0.0,
            TAU,
        );
        surface.fill();
        surface.stroke();
    }
}
