//! Axis-aligned rectangles with resize handles.
//!
//! A rectangle is four edges. Edges may come in any order (a drag can cross
//! over), `normalized()` gives the canonical copy.

use serde::{Deserialize, Serialize};

use super::types::EPS;
use super::Shape;
use crate::coord::{Bounds, Coordinate};
use crate::surface::{trace_closed_path, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

/// The eight salient points an interactive resize can grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    BottomLeft,
    BottomMid,
    BottomRight,
    RightMid,
    TopRight,
    TopMid,
    TopLeft,
    LeftMid,
}

impl Handle {
    /// Counterclockwise from the bottom-left corner.
    pub const ALL: [Handle; 8] = [
        Handle::BottomLeft,
        Handle::BottomMid,
        Handle::BottomRight,
        Handle::RightMid,
        Handle::TopRight,
        Handle::TopMid,
        Handle::TopLeft,
        Handle::LeftMid,
    ];
}

impl Rectangle {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Normalized rectangle spanned by two opposite corners.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self::new(a.x, b.x, a.y, b.y).normalized()
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }

    /// Copy with `left <= right` and `bottom <= top`.
    pub fn normalized(&self) -> Rectangle {
        Rectangle {
            left: self.left.min(self.right),
            right: self.left.max(self.right),
            bottom: self.bottom.min(self.top),
            top: self.bottom.max(self.top),
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.left <= self.right && self.bottom <= self.top
    }

    pub fn bottom_left(&self) -> Coordinate {
        Coordinate::new(self.left, self.bottom)
    }
    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.right, self.bottom)
    }
    pub fn top_right(&self) -> Coordinate {
        Coordinate::new(self.right, self.top)
    }
    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.left, self.top)
    }
    pub fn bottom_mid(&self) -> Coordinate {
        self.bottom_left().midpoint(self.bottom_right())
    }
    pub fn right_mid(&self) -> Coordinate {
        self.bottom_right().midpoint(self.top_right())
    }
    pub fn top_mid(&self) -> Coordinate {
        self.top_left().midpoint(self.top_right())
    }
    pub fn left_mid(&self) -> Coordinate {
        self.bottom_left().midpoint(self.top_left())
    }

    pub fn point(&self, handle: Handle) -> Coordinate {
        match handle {
            Handle::BottomLeft => self.bottom_left(),
            Handle::BottomMid => self.bottom_mid(),
            Handle::BottomRight => self.bottom_right(),
            Handle::RightMid => self.right_mid(),
            Handle::TopRight => self.top_right(),
            Handle::TopMid => self.top_mid(),
            Handle::TopLeft => self.top_left(),
            Handle::LeftMid => self.left_mid(),
        }
    }

    pub fn handles(&self) -> [(Handle, Coordinate); 8] {
        Handle::ALL.map(|h| (h, self.point(h)))
    }

    /// Handle under `p` (within `radius`, first match in `Handle::ALL` order).
    pub fn handle_at(&self, p: Coordinate, radius: f64) -> Option<Handle> {
        Handle::ALL
            .into_iter()
            .find(|&h| (self.point(h).to_vector() - p.to_vector()).norm() <= radius)
    }

    /// Drag `handle` to `p`. Corners move two edges, midpoints one.
    /// The result is not normalized, so a drag may cross the opposite edge.
    pub fn with_handle_moved(&self, handle: Handle, p: Coordinate) -> Rectangle {
        let mut r = *self;
        match handle {
            Handle::BottomLeft => {
                r.left = p.x;
                r.bottom = p.y;
            }
            Handle::BottomMid => r.bottom = p.y,
            Handle::BottomRight => {
                r.right = p.x;
                r.bottom = p.y;
            }
            Handle::RightMid => r.right = p.x,
            Handle::TopRight => {
                r.right = p.x;
                r.top = p.y;
            }
            Handle::TopMid => r.top = p.y,
            Handle::TopLeft => {
                r.left = p.x;
                r.top = p.y;
            }
            Handle::LeftMid => r.left = p.x,
        }
        r
    }

    fn corners(&self) -> [Coordinate; 4] {
        let n = self.normalized();
        [
            n.bottom_left(),
            n.bottom_right(),
            n.top_right(),
            n.top_left(),
        ]
    }
}

impl Shape for Rectangle {
    /// Four corners of the normalized rectangle, counterclockwise from bottom-left.
    fn vertices(&self) -> Vec<Coordinate> {
        self.corners().to_vec()
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Normalizes first, so edge order does not matter. Boundary is closed.
    fn contains(&self, p: Coordinate) -> bool {
        if self.area() <= 0.0 {
            return false;
        }
        let n = self.normalized();
        Bounds {
            min: n.bottom_left(),
            max: n.top_right(),
        }
        .contains_eps(p, EPS)
    }

    fn center(&self) -> Coordinate {
        Coordinate::new(
            0.5 * (self.left + self.right),
            0.5 * (self.bottom + self.top),
        )
    }

    fn bounds(&self) -> Option<Bounds> {
        let n = self.normalized();
        Some(Bounds {
            min: n.bottom_left(),
            max: n.top_right(),
        })
    }

    fn draw(&self, width: f64, height: f64, surface: &mut dyn Surface) {
        let px = self.corners().map(|c| c.to_pixels(width, height));
        trace_closed_path(&px, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, Recorder};

    fn sample() -> Rectangle {
        Rectangle::new(0.2, 0.8, 0.1, 0.9)
    }

    #[test]
    fn area_ignores_edge_order() {
        assert!((sample().area() - 0.48).abs() < 1e-12);
        let swapped = Rectangle::new(0.8, 0.2, 0.1, 0.9);
        assert!((swapped.area() - 0.48).abs() < 1e-12);
        let flipped = Rectangle::new(0.8, 0.2, 0.9, 0.1);
        assert!((flipped.area() - 0.48).abs() < 1e-12);
    }

    #[test]
    fn normalized_leaves_original_untouched() {
        let r = Rectangle::new(0.8, 0.2, 0.9, 0.1);
        let n = r.normalized();
        assert_eq!(n, sample());
        assert!(n.is_normalized());
        assert!(!r.is_normalized());
        assert_eq!(r.left(), 0.8);
        assert_eq!(r.top(), 0.1);
    }

    #[test]
    fn membership_is_independent_of_edge_order() {
        let r = Rectangle::new(0.8, 0.2, 0.9, 0.1);
        assert!(r.contains(Coordinate::new(0.5, 0.5)));
        assert!(r.contains(Coordinate::new(0.2, 0.1)));
        assert!(!r.contains(Coordinate::new(0.1, 0.5)));
        assert!(!r.contains(Coordinate::new(0.5, 0.95)));
    }

    #[test]
    fn flat_rectangle_contains_nothing() {
        let r = Rectangle::new(0.2, 0.2, 0.1, 0.9);
        assert_eq!(r.area(), 0.0);
        assert!(!r.contains(Coordinate::new(0.2, 0.5)));
    }

    #[test]
    fn derived_points() {
        let r = sample();
        assert_eq!(r.bottom_left(), Coordinate::new(0.2, 0.1));
        assert_eq!(r.top_right(), Coordinate::new(0.8, 0.9));
        assert_eq!(r.point(Handle::TopMid), Coordinate::new(0.5, 0.9));
        assert_eq!(r.point(Handle::LeftMid), Coordinate::new(0.2, 0.5));
        assert_eq!(r.center(), Coordinate::new(0.5, 0.5));
        let hs = r.handles();
        assert_eq!(hs.len(), 8);
        assert_eq!(hs[4], (Handle::TopRight, r.top_right()));
    }

    #[test]
    fn vertices_are_ccw_corners() {
        let vs = Rectangle::new(0.8, 0.2, 0.9, 0.1).vertices();
        assert_eq!(
            vs,
            vec![
                Coordinate::new(0.2, 0.1),
                Coordinate::new(0.8, 0.1),
                Coordinate::new(0.8, 0.9),
                Coordinate::new(0.2, 0.9),
            ]
        );
    }

    #[test]
    fn dragging_handles_moves_bound_edges() {
        let r = sample();
        let corner = r.with_handle_moved(Handle::TopRight, Coordinate::new(0.7, 0.6));
        assert_eq!(corner, Rectangle::new(0.2, 0.7, 0.1, 0.6));
        let mid = r.with_handle_moved(Handle::LeftMid, Coordinate::new(0.9, 0.0));
        assert_eq!(mid, Rectangle::new(0.9, 0.8, 0.1, 0.9));
        assert!(!mid.is_normalized());
        assert_eq!(r, sample());
    }

    #[test]
    fn handle_hit_test() {
        let r = sample();
        assert_eq!(
            r.handle_at(Coordinate::new(0.801, 0.899), 0.01),
            Some(Handle::TopRight)
        );
        assert_eq!(r.handle_at(Coordinate::new(0.5, 0.5), 0.01), None);
    }

    #[test]
    fn draw_traces_four_corners() {
        let mut rec = Recorder::new();
        Rectangle::new(0.0, 1.0, 0.0, 0.5).draw(100.0, 200.0, &mut rec);
        assert_eq!(
            rec.cmds,
            vec![
                DrawCmd::BeginPath,
                DrawCmd::MoveTo { x: 0.0, y: 100.0 },
                DrawCmd::LineTo { x: 0.0, y: 0.0 },
                DrawCmd::LineTo { x: 100.0, y: 0.0 },
                DrawCmd::LineTo { x: 100.0, y: 100.0 },
                DrawCmd::LineTo { x: 0.0, y: 100.0 },
                DrawCmd::ClosePath,
                DrawCmd::Fill,
                DrawCmd::Stroke,
            ]
        );
    }
}
