// Black Hole Visualization Generator CLI
//
// One-shot batch tool: compute the Schwarzschild radius, synthesize the
// accretion disk brightness field, rasterize the annotated heat map and
// write a single PNG (plus an optional JSON manifest of the run).

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use schwarzschild_viz::{
    accretion_disk, render_image, save_png, schwarzschild_radius, CoordinateGrid, RenderConfig,
};

/// CLI arguments for the visualization generator
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Render an annotated Schwarzschild black hole visualization", long_about = None)]
struct Args {
    /// Black hole mass in solar masses
    #[arg(short, long, default_value_t = 10.0)]
    mass: f64,

    /// Grid resolution per axis
    #[arg(short, long, default_value_t = 400)]
    samples: usize,

    /// Grid half-extent in units of the Schwarzschild radius
    #[arg(short, long, default_value_t = 5.0)]
    extent: f64,

    /// Output image edge in pixels (10 inch canvas at 600 DPI by default)
    #[arg(short = 'S', long, default_value_t = 6000)]
    size: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "Black_hole_visualization_HR.png")]
    output: PathBuf,

    /// Skip the static annotation overlay (heat map only)
    #[arg(long, default_value_t = false)]
    no_annotations: bool,

    /// Also write a <output>.manifest.json with the run parameters
    #[arg(long, default_value_t = false)]
    manifest: bool,
}

/// Run metadata written beside the image when --manifest is set
#[derive(Serialize)]
struct Manifest {
    mass_solar: f64,
    schwarzschild_radius_m: f64,
    samples: usize,
    extent_rs: f64,
    image_size: u32,
    annotated: bool,
    field_peak: f64,
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Radius first: invalid mass is rejected before any grid is built
    let rs = schwarzschild_radius(args.mass)?;
    log::info!("Schwarzschild radius for {} Msun: {:.1} m", args.mass, rs);

    println!("\nSchwarzschild Black Hole Visualization");
    println!("=======================================");
    println!("  Mass: {} solar masses", args.mass);
    println!("  Schwarzschild radius: {:.1} m", rs);
    println!("  Grid: {0}x{0} over [-{1} Rs, {1} Rs]", args.samples, args.extent);
    println!("  Image: {0}x{0} px", args.size);
    println!("  Annotations: {}", !args.no_annotations);
    println!("=======================================\n");

    let grid = CoordinateGrid::centered(args.extent * rs, args.samples)?;
    let field = accretion_disk(&grid.x, &grid.y, rs)?;
    let field_peak = field.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    log::debug!("field peak value: {field_peak:.4}");

    let config = RenderConfig {
        size: args.size,
        extent_rs: args.extent,
        annotate: !args.no_annotations,
    };

    println!("Rasterizing heat map...");
    let pb = ProgressBar::new(args.size as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%)")?
            .progress_chars("█▓▒░ "),
    );

    let img = render_image(&field, rs, &config, |row| {
        pb.set_position(row as u64 + 1);
    })?;
    pb.finish_with_message("rasterization complete");

    println!("\nWriting files...");
    save_png(&img, &args.output)?;
    println!("  ✓ Wrote image: {}", args.output.display());

    if args.manifest {
        let manifest = Manifest {
            mass_solar: args.mass,
            schwarzschild_radius_m: rs,
            samples: args.samples,
            extent_rs: args.extent,
            image_size: args.size,
            annotated: !args.no_annotations,
            field_peak,
            output: args.output.display().to_string(),
        };
        let mut manifest_path = args.output.clone();
        manifest_path.set_extension("manifest.json");
        std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
        println!("  ✓ Wrote manifest: {}", manifest_path.display());
    }

    println!("\nDone.\n");
    Ok(())
}
