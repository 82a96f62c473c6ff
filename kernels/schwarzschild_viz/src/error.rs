// Error taxonomy for the visualization pipeline
//
// Every failure here is fatal: this is a one-shot batch render, so we
// report the error and exit rather than retry.

use std::fmt;

#[derive(Debug)]
pub enum VizError {
    // Mass must be a finite, strictly positive number of solar masses.
    // Rejected before any grid construction so a negative or NaN radius
    // never reaches the downstream pipeline.
    InvalidMass(f64),

    // Schwarzschild radius handed to the field synthesizer or renderer
    // must be finite and strictly positive
    InvalidRadius(f64),

    // Grid or image construction parameters out of range
    InvalidGrid(String),

    // The x and y coordinate arrays must share one shape
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    // Failed to write the output file (permissions, disk space, ...)
    Io(std::io::Error),

    // PNG encoding failure
    Image(image::ImageError),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMass(m) => {
                write!(f, "invalid mass: {m} solar masses (must be finite and > 0)")
            }
            Self::InvalidRadius(rs) => {
                write!(f, "invalid Schwarzschild radius: {rs} m (must be finite and > 0)")
            }
            Self::InvalidGrid(msg) => write!(f, "invalid grid: {msg}"),
            Self::ShapeMismatch { left, right } => write!(
                f,
                "coordinate arrays have mismatched shapes: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::Io(e) => write!(f, "output write failure: {e}"),
            Self::Image(e) => write!(f, "image encoding failure: {e}"),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for VizError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_value() {
        let msg = VizError::InvalidMass(-3.0).to_string();
        assert!(msg.contains("-3"), "message should echo the bad mass: {msg}");

        let msg = VizError::InvalidRadius(f64::NAN).to_string();
        assert!(msg.contains("NaN"), "message should echo the bad radius: {msg}");
    }

    #[test]
    fn test_shape_mismatch_reports_both_shapes() {
        let msg = VizError::ShapeMismatch {
            left: (400, 400),
            right: (400, 399),
        }
        .to_string();
        assert!(msg.contains("400x400"));
        assert!(msg.contains("400x399"));
    }
}
