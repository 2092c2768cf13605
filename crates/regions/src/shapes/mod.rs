//! Drawable region shapes.
//!
//! Purpose
//! - One `Shape` trait with the operations the annotator needs (vertices,
//!   area, containment, center, bounds, draw) and three variants behind it.
//! - `Region` is the closed sum type the UI holds while a user edits a shape.
//!
//! Conventions
//! - All coordinates are normalized to the image (see `crate::coord`).
//! - Boundaries are closed: points on an edge count as inside. Polygon and
//!   rectangle edges get `EPS` slack; the ellipse test is exact.
//! - Degenerate shapes (zero area) report area 0 and contain no point.
//! - Vertex lists of `Ellipse` and `Rectangle` are counterclockwise in a y-up
//!   frame; `FreePolygon` keeps the caller's order.

mod ellipse;
mod polygon;
mod rect;
mod types;

pub use ellipse::Ellipse;
pub use polygon::FreePolygon;
pub use rect::{Handle, Rectangle};
pub use types::{TessCfg, EPS};

use serde::{Deserialize, Serialize};

use crate::coord::{Bounds, Coordinate};
use crate::surface::Surface;

/// Operations shared by every region shape.
pub trait Shape {
    /// Boundary vertices in traversal order. Approximate for curved shapes.
    fn vertices(&self) -> Vec<Coordinate>;
    /// Unsigned area, always `>= 0`.
    fn area(&self) -> f64;
    /// Closed-boundary membership test.
    fn contains(&self, p: Coordinate) -> bool;
    /// Representative point used for handle placement.
    fn center(&self) -> Coordinate;
    /// Axis-aligned extent; `None` only for an empty polygon.
    fn bounds(&self) -> Option<Bounds>;
    /// Render onto `surface`, scaling normalized coordinates to `width × height` pixels.
    fn draw(&self, width: f64, height: f64, surface: &mut dyn Surface);
}

/// Which variant a `Region` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    FreePolygon,
    Ellipse,
    Rectangle,
}

impl RegionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::FreePolygon => "free_polygon",
            RegionKind::Ellipse => "ellipse",
            RegionKind::Rectangle => "rectangle",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region shape being edited.
///
/// Serialized with a `kind` tag, e.g.
/// `{"kind":"ellipse","center":{"x":0.5,"y":0.5},"radius_x":0.2,"radius_y":0.1}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Region {
    FreePolygon(FreePolygon),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
}

impl Region {
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::FreePolygon(_) => RegionKind::FreePolygon,
            Region::Ellipse(_) => RegionKind::Ellipse,
            Region::Rectangle(_) => RegionKind::Rectangle,
        }
    }

    /// Border in its persisted form: always a vertex list, whatever the variant.
    pub fn border(&self) -> Vec<Coordinate> {
        self.vertices()
    }

    /// Like `border`, with explicit tessellation density for ellipses.
    pub fn border_with(&self, cfg: TessCfg) -> Vec<Coordinate> {
        match self {
            Region::Ellipse(e) => e.vertices_with(cfg),
            other => other.vertices(),
        }
    }

    /// Rebuild a region from a persisted border. The result is always a polygon.
    pub fn from_border(border: Vec<Coordinate>) -> Region {
        Region::FreePolygon(FreePolygon::new(border))
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            Region::FreePolygon(p) => p,
            Region::Ellipse(e) => e,
            Region::Rectangle(r) => r,
        }
    }
}

impl Shape for Region {
    fn vertices(&self) -> Vec<Coordinate> {
        self.as_shape().vertices()
    }
    fn area(&self) -> f64 {
        self.as_shape().area()
    }
    fn contains(&self, p: Coordinate) -> bool {
        self.as_shape().contains(p)
    }
    fn center(&self) -> Coordinate {
        self.as_shape().center()
    }
    fn bounds(&self) -> Option<Bounds> {
        self.as_shape().bounds()
    }
    fn draw(&self, width: f64, height: f64, surface: &mut dyn Surface) {
        self.as_shape().draw(width, height, surface)
    }
}

impl From<FreePolygon> for Region {
    fn from(p: FreePolygon) -> Self {
        Region::FreePolygon(p)
    }
}

impl From<Ellipse> for Region {
    fn from(e: Ellipse) -> Self {
        Region::Ellipse(e)
    }
}

impl From<Rectangle> for Region {
    fn from(r: Rectangle) -> Self {
        Region::Rectangle(r)
    }
}

#[cfg(test)]
mod tests;
