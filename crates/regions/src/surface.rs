//! Drawing surface capability.
//!
//! The engine never owns a canvas. Callers pass anything implementing
//! `Surface` (a browser canvas bridge, a software rasterizer, or `Recorder`
//! in tests) and shapes issue path commands in pixel space.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Primitive 2D path operations, modeled after an HTML canvas context.
pub trait Surface {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Elliptical arc around `(x, y)`, rotated by `rotation`, from
    /// `start_angle` to `end_angle` (radians).
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    BeginPath,
    ClosePath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Ellipse {
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Fill,
    Stroke,
}

/// `Surface` that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub cmds: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }
}

impl Surface for Recorder {
    fn begin_path(&mut self) {
        self.cmds.push(DrawCmd::BeginPath);
    }
    fn close_path(&mut self) {
        self.cmds.push(DrawCmd::ClosePath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.cmds.push(DrawCmd::MoveTo { x, y });
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.cmds.push(DrawCmd::LineTo { x, y });
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        self.cmds.push(DrawCmd::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        });
    }
    fn fill(&mut self) {
        self.cmds.push(DrawCmd::Fill);
    }
    fn stroke(&mut self) {
        self.cmds.push(DrawCmd::Stroke);
    }
}

/// Trace a closed polyline through pixel-space `points`, then fill and stroke.
///
/// The pen starts at the last point, so the first `line_to` already draws the
/// closing edge. Nothing is issued for an empty slice.
pub(crate) fn trace_closed_path<S: Surface + ?Sized>(points: &[Vector2<f64>], surface: &mut S) {
    let Some(last) = points.last() else {
        return;
    };
    surface.begin_path();
    surface.move_to(last.x, last.y);
    for p in points {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
    surface.fill();
    surface.stroke();
}
