//! Computes the model-view-projection matrix of one animation frame and prints
//! it as the JSON array a WebGL driver would upload.
//!
//! ```sh
//! cargo run --example frame_matrix -- 1.5 1280 720
//! ```
//!
//! Arguments are the time in seconds and the viewport size.

use glmat::chain::FrameParams3D;
use glmat::math::{Vec3, geometry};

// "F" letter, front face only
const POSITIONS: [f64; 54] = [
    0.0, 0.0, 0.0, 30.0, 0.0, 0.0, 0.0, 150.0, 0.0, //
    0.0, 150.0, 0.0, 30.0, 0.0, 0.0, 30.0, 150.0, 0.0, //
    30.0, 0.0, 0.0, 100.0, 0.0, 0.0, 30.0, 30.0, 0.0, //
    30.0, 30.0, 0.0, 100.0, 0.0, 0.0, 100.0, 30.0, 0.0, //
    30.0, 60.0, 0.0, 67.0, 60.0, 0.0, 30.0, 90.0, 0.0, //
    30.0, 90.0, 0.0, 67.0, 60.0, 0.0, 67.0, 90.0, 0.0,
];

fn arg_or(args: &[String], index: usize, default: f64) -> Result<f64, Box<dyn std::error::Error>> {
    match args.get(index) {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let seconds = arg_or(&args, 1, 1.0)?;
    let width = arg_or(&args, 2, 800.0)?;
    let height = arg_or(&args, 3, 600.0)?;

    let center = Vec3::from_slice(&geometry::bounds_center(&POSITIONS, 3)?)?;
    let shape_width = geometry::max_coordinate(&POSITIONS, 3, 0)?.unwrap_or(0.0);

    // slide right and wrap around, spin around Z, pulse the width
    let travel = (width - shape_width).max(1.0);
    let params = FrameParams3D {
        anchor: center,
        scale: Vec3::new(2.0 * seconds.sin(), 1.0, 1.0),
        rotation: Vec3::new(30.0, 30.0, seconds * 90.0),
        translation: Vec3::new(((seconds * width - shape_width) / 3.0) % travel, 200.0, 0.0),
        ..FrameParams3D::new(width, height)
    };

    let matrix = params.matrix()?;
    println!("{}", serde_json::to_string(&params)?);
    println!("{}", serde_json::to_string(&matrix)?);
    Ok(())
}
