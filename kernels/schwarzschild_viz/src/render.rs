// Heat-map rasterization and PNG output

use std::path::Path;

use image::RgbaImage;
use ndarray::Array2;

use crate::annotate::{draw_annotations, Viewport};
use crate::colormap::{inferno, normalize};
use crate::error::VizError;

// ============================================================================
// RENDER CONFIGURATION
// ============================================================================

// Output image properties
//
// The reference output is a 10 inch canvas at 600 DPI, i.e. a 6000 px
// square with the data filling the full frame (tight bounding box, zero
// padding).
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    // Image edge in pixels (square output)
    pub size: u32,

    // Grid half-extent in units of Rs; needed to place the overlay in
    // world coordinates. The driver's default domain is [-5 Rs, 5 Rs].
    pub extent_rs: f64,

    // Draw the static annotation overlay
    pub annotate: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 6000,
            extent_rs: 5.0,
            annotate: true,
        }
    }
}

// ============================================================================
// RASTERIZATION
// ============================================================================

// Sample a field at fractional indices with bilinear interpolation
//
// gx runs along columns, gy along rows; both are pre-clamped by the
// caller to [0, ncols-1] x [0, nrows-1].
#[inline]
fn sample_bilinear(field: &Array2<f64>, gx: f64, gy: f64) -> f64 {
    let (nrows, ncols) = field.dim();

    let x0 = gx.floor() as usize;
    let y0 = gy.floor() as usize;
    let x1 = (x0 + 1).min(ncols - 1);
    let y1 = (y0 + 1).min(nrows - 1);
    let fx = gx - x0 as f64;
    let fy = gy - y0 as f64;

    let top = field[[y0, x0]] * (1.0 - fx) + field[[y0, x1]] * fx;
    let bottom = field[[y1, x0]] * (1.0 - fx) + field[[y1, x1]] * fx;
    top * (1.0 - fy) + bottom * fy
}

// Render the brightness field to an RGBA heat map
//
// This is the narrow presentation interface: it accepts a field and a
// radius and produces image bytes, nothing else. The field is
// normalized to its own range, sampled bilinearly at every output
// pixel, and pushed through the inferno ramp. Row 0 of the field is the
// bottom of the image (world y points up).
//
// on_row is invoked after each completed output row so the caller can
// report progress.
pub fn render_image<F>(
    field: &Array2<f64>,
    rs: f64,
    config: &RenderConfig,
    mut on_row: F,
) -> Result<RgbaImage, VizError>
where
    F: FnMut(u32),
{
    if !rs.is_finite() || rs <= 0.0 {
        return Err(VizError::InvalidRadius(rs));
    }
    let (nrows, ncols) = field.dim();
    if nrows < 2 || ncols < 2 {
        return Err(VizError::InvalidGrid(format!(
            "field must be at least 2x2, got {nrows}x{ncols}"
        )));
    }
    if config.size < 2 {
        return Err(VizError::InvalidGrid(format!(
            "image size must be at least 2 px, got {}",
            config.size
        )));
    }
    if !config.extent_rs.is_finite() || config.extent_rs <= 0.0 {
        return Err(VizError::InvalidGrid(format!(
            "extent must be finite and > 0, got {} Rs",
            config.extent_rs
        )));
    }

    let norm = normalize(field);
    let mut img = RgbaImage::new(config.size, config.size);

    let edge = (config.size - 1) as f64;
    for py in 0..config.size {
        // Flip vertically: image row 0 shows the top of the domain,
        // which is the last field row
        let gy = (1.0 - py as f64 / edge) * (nrows - 1) as f64;
        for px in 0..config.size {
            let gx = px as f64 / edge * (ncols - 1) as f64;
            let t = sample_bilinear(&norm, gx, gy);
            let [r, g, b] = inferno(t);
            img.put_pixel(px, py, image::Rgba([r, g, b, 255]));
        }
        on_row(py);
    }

    if config.annotate {
        let viewport = Viewport {
            half_extent: config.extent_rs * rs,
            size: config.size,
        };
        draw_annotations(&mut img, &viewport, rs);
    }

    Ok(img)
}

// Write the rendered image as a PNG
//
// The file handle is scoped entirely inside the encoder; any
// permission or disk-space failure surfaces as a VizError.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), VizError> {
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc_model::accretion_disk;
    use crate::grid::CoordinateGrid;

    const RS: f64 = 29_500.0;

    fn small_field() -> Array2<f64> {
        let grid = CoordinateGrid::centered(5.0 * RS, 16).unwrap();
        accretion_disk(&grid.x, &grid.y, RS).unwrap()
    }

    fn plain_config(size: u32) -> RenderConfig {
        RenderConfig {
            size,
            extent_rs: 5.0,
            annotate: false,
        }
    }

    #[test]
    fn test_output_dimensions() {
        let field = small_field();
        let img = render_image(&field, RS, &plain_config(48), |_| {}).unwrap();
        assert_eq!(img.dimensions(), (48, 48));
    }

    #[test]
    fn test_row_callback_covers_every_row() {
        let field = small_field();
        let mut rows = Vec::new();
        render_image(&field, RS, &plain_config(32), |r| rows.push(r)).unwrap();
        assert_eq!(rows, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_center_is_brightest() {
        // The field peaks at the origin, so the center pixel must sit at
        // the top of the ramp and the corners at the bottom
        let field = small_field();
        let img = render_image(&field, RS, &plain_config(33), |_| {}).unwrap();

        let center = *img.get_pixel(16, 16);
        let corner = *img.get_pixel(0, 0);
        assert_eq!(center, image::Rgba([252, 255, 164, 255]));
        assert_eq!(corner.0[3], 255);
        let corner_lum: u32 = corner.0[..3].iter().map(|&c| c as u32).sum();
        assert!(corner_lum < 30, "corner should be near-black, got {corner:?}");
    }

    #[test]
    fn test_render_deterministic() {
        let field = small_field();
        let a = render_image(&field, RS, &plain_config(40), |_| {}).unwrap();
        let b = render_image(&field, RS, &plain_config(40), |_| {}).unwrap();
        assert_eq!(a.as_raw(), b.as_raw(), "two renders must be bit-identical");
    }

    #[test]
    fn test_annotated_render_differs_from_plain() {
        let field = small_field();
        let plain = render_image(&field, RS, &plain_config(64), |_| {}).unwrap();
        let mut config = plain_config(64);
        config.annotate = true;
        let annotated = render_image(&field, RS, &config, |_| {}).unwrap();
        assert_ne!(plain.as_raw(), annotated.as_raw());
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let field = small_field();
        assert!(matches!(
            render_image(&field, -1.0, &plain_config(32), |_| {}),
            Err(VizError::InvalidRadius(_))
        ));
        assert!(matches!(
            render_image(&field, RS, &plain_config(1), |_| {}),
            Err(VizError::InvalidGrid(_))
        ));
        let tiny = Array2::zeros((1, 1));
        assert!(matches!(
            render_image(&tiny, RS, &plain_config(32), |_| {}),
            Err(VizError::InvalidGrid(_))
        ));
        let mut config = plain_config(32);
        config.extent_rs = 0.0;
        assert!(matches!(
            render_image(&field, RS, &config, |_| {}),
            Err(VizError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_save_png_round_trip() {
        let field = small_field();
        let img = render_image(&field, RS, &plain_config(24), |_| {}).unwrap();

        let path = std::env::temp_dir().join("schwarzschild_viz_render_test.png");
        save_png(&img, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), img.dimensions());
        assert_eq!(loaded.as_raw(), img.as_raw());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_png_reports_write_failure() {
        let field = small_field();
        let img = render_image(&field, RS, &plain_config(8), |_| {}).unwrap();

        let path = std::env::temp_dir()
            .join("schwarzschild_viz_no_such_dir")
            .join("out.png");
        let result = save_png(&img, &path);
        assert!(result.is_err(), "writing into a missing directory must fail");
    }
}
