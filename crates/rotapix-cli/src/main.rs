//! Command-line driver: read the fixed input raster, rotate it by the
//! requested angle, write the result, and report what happened.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use rotapix_core::codec::{read_pgm, write_pgm};
use rotapix_core::transform::{rotate, rotated_bounds};

/// Fixed input image, looked up in the working directory.
const INPUT_FILE: &str = "im.pgm";

/// Rotate a plain PGM image by an arbitrary angle.
#[derive(Debug, Parser)]
#[command(name = "rotapix")]
struct Args {
    /// Rotation angle in degrees, any sign and magnitude
    angle: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let requested_info = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if requested_info {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let angle_degrees = parse_angle(&args.angle);
    let start = Instant::now();

    let original = read_pgm(INPUT_FILE).with_context(|| format!("reading {INPUT_FILE}"))?;
    println!(
        "Original Image Dimensions: {} x {}",
        original.width, original.height
    );

    debug!("rotating by {angle_degrees} degrees");
    let rotated = rotate(&original, angle_degrees);

    let (rotated_width, rotated_height) =
        rotated_bounds(original.width, original.height, angle_degrees);
    println!("Rotated Image Dimensions: {rotated_width} x {rotated_height}");

    let output_file = output_file_name(angle_degrees);
    println!("Output Filename: {output_file}");

    write_pgm(&output_file, &rotated).with_context(|| format!("writing {output_file}"))?;

    println!(
        "Total Execution Time: {:.6} seconds",
        start.elapsed().as_secs_f64()
    );
    println!("Rotated image successfully generated and saved as: {output_file}");

    Ok(())
}

/// strtod-style leniency: an argument that does not parse as a number
/// rotates by zero instead of failing.
fn parse_angle(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

/// Output name embeds the angle rounded to the nearest integer.
fn output_file_name(angle_degrees: f64) -> String {
    format!("rotate-image{{{}}}.pgm", angle_degrees.round() as i64)
}
