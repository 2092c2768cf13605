//! Freeform polygon regions.
//!
//! The vertex list is an implicitly closed ring (last connects to first) and
//! need not be convex. Derived data (bounds, signed area, edge list) lives in
//! a lazy cache that every mutation drops; the next query rebuilds it.
//!
//! Self-intersecting rings (a lasso that crosses itself) are classified by the
//! even-odd rule: each loop is inside, and `area()` reports the net shoelace
//! area, which can be 0 for a figure-8.

use std::cell::OnceCell;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::types::EPS;
use super::Shape;
use crate::coord::{Bounds, Coordinate};
use crate::surface::{trace_closed_path, Surface};

/// Simple polygon over an ordered vertex list.
///
/// Invariants:
/// - `cache` is either empty or derived from the current `vertices`.
/// - Fewer than 3 vertices, or all vertices on one line, means no interior.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FreePolygon {
    vertices: Vec<Coordinate>,
    #[serde(skip)]
    cache: OnceCell<Ring>,
}

/// Derived view of the ring.
#[derive(Clone, Debug)]
struct Ring {
    bounds: Option<Bounds>,
    /// Shoelace sum halved; positive for counterclockwise order.
    signed_area: f64,
    /// Closed edge list, `edges[i]` runs from vertex `i` to vertex `i + 1`.
    edges: Vec<Edge>,
    collinear: bool,
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    a: Vector2<f64>,
    b: Vector2<f64>,
}

impl Edge {
    fn distance(&self, p: Vector2<f64>) -> f64 {
        let ab = self.b - self.a;
        let len2 = ab.norm_squared();
        if len2 == 0.0 {
            return (p - self.a).norm();
        }
        let t = ((p - self.a).dot(&ab) / len2).clamp(0.0, 1.0);
        (p - (self.a + ab * t)).norm()
    }

    /// Does a ray from `p` toward +x cross this edge? Half-open in y so a
    /// vertex shared by two edges is counted once.
    fn crosses_ray(&self, p: Vector2<f64>) -> bool {
        let (a, b) = (self.a, self.b);
        if (a.y > p.y) == (b.y > p.y) {
            return false;
        }
        p.x < a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y)
    }
}

impl Ring {
    fn build(vertices: &[Coordinate]) -> Self {
        let n = vertices.len();
        let edges: Vec<Edge> = (0..n)
            .map(|i| Edge {
                a: vertices[i].to_vector(),
                b: vertices[(i + 1) % n].to_vector(),
            })
            .collect();
        Ring {
            bounds: Bounds::from_points(vertices),
            signed_area: shoelace(vertices),
            collinear: all_collinear(vertices),
            edges,
        }
    }
}

impl FreePolygon {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self {
            vertices,
            cache: OnceCell::new(),
        }
    }

    /// Borrow the ring without copying.
    #[inline]
    pub fn points(&self) -> &[Coordinate] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Replace the whole vertex list (one drag update).
    pub fn set_vertices(&mut self, vertices: Vec<Coordinate>) {
        self.vertices = vertices;
        self.cache = OnceCell::new();
    }

    /// Append a vertex while the user traces the outline.
    pub fn push(&mut self, p: Coordinate) {
        self.vertices.push(p);
        self.cache = OnceCell::new();
    }

    /// Shoelace area with sign: positive when counterclockwise (y-up).
    pub fn signed_area(&self) -> f64 {
        self.ring().signed_area
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    fn ring(&self) -> &Ring {
        self.cache.get_or_init(|| Ring::build(&self.vertices))
    }
}

impl PartialEq for FreePolygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl From<Vec<Coordinate>> for FreePolygon {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self::new(vertices)
    }
}

impl Shape for FreePolygon {
    fn vertices(&self) -> Vec<Coordinate> {
        self.vertices.clone()
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Closed boundary: points within `EPS` of an edge are inside. Interior
    /// points are classified by even-odd ray casting toward +x.
    fn contains(&self, p: Coordinate) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let ring = self.ring();
        if ring.collinear {
            return false;
        }
        match ring.bounds {
            Some(b) if b.contains_eps(p, EPS) => {}
            _ => return false,
        }
        let p = p.to_vector();
        if ring.edges.iter().any(|e| e.distance(p) <= EPS) {
            return true;
        }
        ring.edges.iter().filter(|e| e.crosses_ray(p)).count() % 2 == 1
    }

    /// Bounding-box midpoint (not the centroid). The origin for an empty polygon.
    fn center(&self) -> Coordinate {
        self.ring()
            .bounds
            .map(|b| b.center())
            .unwrap_or_default()
    }

    fn bounds(&self) -> Option<Bounds> {
        self.ring().bounds
    }

    fn draw(&self, width: f64, height: f64, surface: &mut dyn Surface) {
        let px: Vec<_> = self
            .vertices
            .iter()
            .map(|v| v.to_pixels(width, height))
            .collect();
        trace_closed_path(&px, surface);
    }
}

/// Half the signed shoelace sum over the closed ring; 0 below three vertices.
pub(crate) fn shoelace(vertices: &[Coordinate]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// True when every vertex lies within `EPS` of the line through the first
/// vertex and the vertex farthest from it (or all vertices coincide).
fn all_collinear(vertices: &[Coordinate]) -> bool {
    let Some(first) = vertices.first() else {
        return true;
    };
    let o = first.to_vector();
    let far = vertices
        .iter()
        .map(|v| v.to_vector())
        .max_by(|a, b| {
            (a - o)
                .norm_squared()
                .partial_cmp(&(b - o).norm_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(o);
    let dir = far - o;
    let len = dir.norm();
    if len <= EPS {
        return true;
    }
    vertices.iter().all(|v| {
        let d = v.to_vector() - o;
        (dir.x * d.y - dir.y * d.x).abs() / len <= EPS
    })
}
