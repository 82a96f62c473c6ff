// Heat-map color lookup
//
// The brightness field is mapped through a sampled inferno-style ramp
// (black -> purple -> orange -> near-white). Like the flux table in the
// disk model, the ramp is a small anchor LUT with linear interpolation
// between samples rather than an analytic fit.

use ndarray::Array2;

// ============================================================================
// INFERNO RAMP
// ============================================================================

// Anchor colors sampled at 11 evenly spaced points of the inferno ramp
const INFERNO_ANCHORS: [[u8; 3]; 11] = [
    [0, 0, 4],       // t = 0.0
    [22, 11, 57],    // t = 0.1
    [66, 10, 104],   // t = 0.2
    [106, 23, 110],  // t = 0.3
    [147, 38, 103],  // t = 0.4
    [188, 55, 84],   // t = 0.5
    [221, 81, 58],   // t = 0.6
    [243, 120, 25],  // t = 0.7
    [252, 165, 10],  // t = 0.8
    [246, 215, 70],  // t = 0.9
    [252, 255, 164], // t = 1.0
];

// Map a normalized intensity t in [0, 1] to an RGB color
//
// Values outside [0, 1] are clamped; NaN maps to the low end.
pub fn inferno(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    // Position within the anchor table
    let scaled = t * (INFERNO_ANCHORS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(INFERNO_ANCHORS.len() - 1);
    let frac = scaled - lo as f64;

    let a = INFERNO_ANCHORS[lo];
    let b = INFERNO_ANCHORS[hi];

    let mut rgb = [0u8; 3];
    for c in 0..3 {
        let v = a[c] as f64 + (b[c] as f64 - a[c] as f64) * frac;
        rgb[c] = v.round() as u8;
    }
    rgb
}

// ============================================================================
// FIELD NORMALIZATION
// ============================================================================

// Rescale a field to [0, 1] by its own min/max
//
// Matches the default behavior of a heat-map display: the darkest cell
// maps to the bottom of the ramp, the brightest to the top. A constant
// field has no contrast to show and maps to all zeros.
pub fn normalize(field: &Array2<f64>) -> Array2<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in field.iter() {
        min = min.min(v);
        max = max.max(v);
    }

    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Array2::zeros(field.raw_dim());
    }

    field.mapv(|v| (v - min) / span)
}
