// Coordinate grid construction
//
// The simulation domain is a square patch of the equatorial plane,
// centered on the singularity. Both coordinate arrays are dense 2D
// arrays so the field synthesis can stay purely elementwise.

use ndarray::{Array1, Array2};

use crate::error::VizError;

// A Cartesian product grid over [-half_extent, +half_extent]^2
//
// Invariants:
// - x and y always share one (samples x samples) shape
// - x varies along columns, y varies along rows (row i of y holds the
//   i-th sample value everywhere, matching a numpy-style meshgrid)
// - samples are evenly spaced and include both endpoints
#[derive(Debug, Clone)]
pub struct CoordinateGrid {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
}

impl CoordinateGrid {
    // Build a square grid centered on the origin
    //
    // half_extent is in meters; the driver passes 5 * Rs so the domain
    // covers the full visible extent of the disk.
    pub fn centered(half_extent: f64, samples: usize) -> Result<Self, VizError> {
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return Err(VizError::InvalidGrid(format!(
                "half extent must be finite and > 0, got {half_extent}"
            )));
        }
        if samples < 2 {
            return Err(VizError::InvalidGrid(format!(
                "need at least 2 samples per axis, got {samples}"
            )));
        }

        let axis = Array1::linspace(-half_extent, half_extent, samples);

        // Cartesian product of the axis with itself
        let x = Array2::from_shape_fn((samples, samples), |(_, j)| axis[j]);
        let y = Array2::from_shape_fn((samples, samples), |(i, _)| axis[i]);

        Ok(Self { x, y })
    }

    // Grid shape as (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        let s = self.x.dim();
        (s.0, s.1)
    }
}
