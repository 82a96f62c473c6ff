// Schwarzschild Black Hole Visualization Core
//
// This library turns a black hole mass into a static illustrative image:
// mass -> Schwarzschild radius -> coordinate grid -> brightness field ->
// annotated heat map. All physics is closed form and all computation uses
// f64; the pipeline is a one-way data flow with no hidden state, so a
// given mass always produces the same field and the same image.

pub mod annotate;
pub mod colormap;
pub mod disc_model;
pub mod error;
pub mod grid;
pub mod render;
pub mod schwarzschild;

pub use disc_model::accretion_disk;
pub use error::VizError;
pub use grid::CoordinateGrid;
pub use render::{render_image, save_png, RenderConfig};
pub use schwarzschild::schwarzschild_radius;

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end determinism: running the numeric pipeline twice with the
    // same mass must produce bit-identical fields
    #[test]
    fn test_pipeline_idempotent() {
        let run = || {
            let rs = schwarzschild_radius(10.0).unwrap();
            let grid = CoordinateGrid::centered(5.0 * rs, 64).unwrap();
            accretion_disk(&grid.x, &grid.y, rs).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_pipeline_default_shape() {
        let rs = schwarzschild_radius(10.0).unwrap();
        let grid = CoordinateGrid::centered(5.0 * rs, 400).unwrap();
        assert_eq!(grid.shape(), (400, 400));
        let field = accretion_disk(&grid.x, &grid.y, rs).unwrap();
        assert_eq!(field.dim(), (400, 400));
    }
}
