//! Random regions inside the unit square (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic shape samplers for property tests and benches. Every draw
//!   is indexed by a `ReplayToken`, so a failing case can be replayed alone.
//!
//! Model
//! - Polygons: `n` equally spaced angles around a center, bounded angular and
//!   radial jitter, vertices kept in angle order. The ring is star-shaped
//!   around the center and therefore simple, in counterclockwise order.
//! - Ellipses and rectangles: center and extents drawn so the shape stays in
//!   [0, 1]².

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coord::Coordinate;
use crate::shapes::{Ellipse, FreePolygon, Rectangle, Region};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Coordinate,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 5, max: 24 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 0.3,
            center: Coordinate::new(0.5, 0.5),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped simple polygon around `cfg.center`.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> FreePolygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    // Jitter stays below half a step, so the angles keep their order.
    let c = cfg.center.to_vector();
    let vertices = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            (c + Vector2::new(th.cos(), th.sin()) * r).into()
        })
        .collect();
    FreePolygon::new(vertices)
}

/// Ellipse fully inside the unit square.
pub fn draw_ellipse(tok: ReplayToken) -> Ellipse {
    let mut rng = tok.to_std_rng();
    let rx = rng.gen_range(0.01..0.4);
    let ry = rng.gen_range(0.01..0.4);
    let cx = rng.gen_range(rx..=1.0 - rx);
    let cy = rng.gen_range(ry..=1.0 - ry);
    Ellipse::new(Coordinate::new(cx, cy), rx, ry)
}

/// Rectangle inside the unit square; edges may come in either order.
pub fn draw_rectangle(tok: ReplayToken) -> Rectangle {
    let mut rng = tok.to_std_rng();
    let a = Coordinate::new(rng.gen(), rng.gen());
    let b = Coordinate::new(rng.gen(), rng.gen());
    Rectangle::new(a.x, b.x, a.y, b.y)
}

/// Cycle through the variants by `tok.index`.
pub fn draw_region(tok: ReplayToken) -> Region {
    match tok.index % 3 {
        0 => draw_polygon_radial(RadialCfg::default(), tok).into(),
        1 => draw_ellipse(tok).into(),
        _ => draw_rectangle(tok).into(),
    }
}
