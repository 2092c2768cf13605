//! Shape geometry for image region annotation.
//!
//! Regions are drawn over an image in normalized coordinates (fractions of the
//! image width/height), so every shape here is resolution-independent. The
//! engine measures shapes (area, center, bounds), tests point containment and
//! tessellates curved outlines into the vertex lists that get persisted.
//!
//! Layout
//! - `coord`: `Coordinate` value type and `Bounds`.
//! - `shapes`: the `Shape` trait, the three variants and the `Region` sum type.
//! - `surface`: injected 2D drawing surface plus a recording implementation.
//! - `rand`: seeded random regions for tests and benches.
//!
//! API Policy
//! - The annotation UI is the only consumer. Breaking changes are fine when
//!   they make the geometry clearer.

pub mod coord;
pub mod rand;
pub mod shapes;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use coord::{Bounds, Coordinate};
pub use shapes::{Ellipse, FreePolygon, Handle, Rectangle, Region, RegionKind, Shape, TessCfg};
pub use surface::{DrawCmd, Recorder, Surface};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coord::{Bounds, Coordinate};
    pub use crate::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::shapes::{
        Ellipse, FreePolygon, Handle, Rectangle, Region, RegionKind, Shape, TessCfg,
    };
    pub use crate::surface::{DrawCmd, Recorder, Surface};
    pub use nalgebra::Vector2 as Vec2;
}
