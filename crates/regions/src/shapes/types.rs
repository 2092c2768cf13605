//! Tolerances and tessellation settings.

use serde::Serialize;

/// Boundary slack for polygon and rectangle membership (normalized units).
pub const EPS: f64 = 1e-9;

/// Ellipse tessellation density.
///
/// The sample count follows the perimeter: `ceil(perimeter / max_chord)`,
/// clamped to `[min_samples, max_samples]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TessCfg {
    /// Longest allowed chord between consecutive samples.
    pub max_chord: f64,
    pub min_samples: usize,
    pub max_samples: usize,
}

impl Default for TessCfg {
    fn default() -> Self {
        Self {
            max_chord: 1e-2,
            min_samples: 4,
            max_samples: 1 << 16,
        }
    }
}

impl TessCfg {
    pub fn with_max_chord(max_chord: f64) -> Self {
        Self {
            max_chord,
            ..Self::default()
        }
    }

    /// Number of samples for a curve of length `perimeter`.
    pub(crate) fn samples_for(&self, perimeter: f64) -> usize {
        let lo = self.min_samples.max(1);
        let hi = self.max_samples.max(lo);
        let n = (perimeter / self.max_chord).ceil();
        if !(n.is_finite()) || n <= 0.0 {
            return lo;
        }
        // `as` saturates for floats beyond usize range.
        (n as usize).clamp(lo, hi)
    }
}
