// Accretion disk brightness model

use ndarray::{Array2, Zip};

use crate::error::VizError;

// ============================================================================
// SYNTHETIC DISK EMISSION
// ============================================================================

// Largest exponent fed to exp(). For any nonnegative radius the exponent
// is at most 3, but disk_value is public and f64::exp overflows a little
// past 709, so a hostile negative radius saturates instead of producing
// an infinite cell.
const MAX_EXPONENT: f64 = 700.0;

// Evaluate the disk brightness at a single radius from the center
//
// Physics (illustrative, not a radiative transfer model):
//
// brightness = exp((3*Rs - r) / Rs)   exponential decay away from the
//                                     inner disk region around 3*Rs
// color      = clamp(1 - r/(5*Rs), 0, 1)   linear fade to black at the
//                                          outer edge of the domain
//
// The product suppresses everything beyond 5*Rs no matter how large the
// exponential term is, and equals exactly e^3 at the center.
#[inline]
pub fn disk_value(r: f64, rs: f64) -> f64 {
    let exponent = ((3.0 * rs - r) / rs).min(MAX_EXPONENT);
    let brightness = exponent.exp();
    let color = (1.0 - r / (5.0 * rs)).clamp(0.0, 1.0);
    brightness * color
}

// Synthesize the brightness field over a coordinate grid
//
// x and y must share one shape (any shape, not just the driver's
// 400x400); rs must be finite and strictly positive. The result has the
// same shape as the inputs, each cell a pure function of the radius
// sqrt(x^2 + y^2) of the corresponding coordinate pair, so the field is
// radially symmetric and deterministic.
pub fn accretion_disk(
    x: &Array2<f64>,
    y: &Array2<f64>,
    rs: f64,
) -> Result<Array2<f64>, VizError> {
    if !rs.is_finite() || rs <= 0.0 {
        return Err(VizError::InvalidRadius(rs));
    }
    if x.dim() != y.dim() {
        return Err(VizError::ShapeMismatch {
            left: x.dim(),
            right: y.dim(),
        });
    }

    let mut field = Array2::zeros(x.raw_dim());
    Zip::from(&mut field)
        .and(x)
        .and(y)
        .for_each(|value, &xi, &yi| {
            let r = (xi * xi + yi * yi).sqrt();
            *value = disk_value(r, rs);
        });

    Ok(field)
}
