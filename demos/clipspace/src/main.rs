//! Clipspace demo — maps a pixel through a placement chain into clip space.
//!
//! The point is scaled, rotated, translated and finally projected from a
//! top-left-origin pixel canvas into `[-1, 1]` clip space. The inverse matrix
//! is then used to map the clip-space result back to the original pixel.

mod config;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use affine_math::{distance, transform_point, try_inverse};
use config::CanvasConfig;

#[derive(Parser)]
#[command(name = "clipspace", about = "Map a pixel into clip space and back")]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 400.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 300.0)]
    height: f64,

    /// Pixel x coordinate of the input point
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Pixel y coordinate of the input point
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Translation in x, applied after rotation
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    translate_x: f64,

    /// Translation in y, applied after rotation
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    translate_y: f64,

    /// Rotation in degrees
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    angle: f64,

    /// Scale in x, applied first
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    scale_x: f64,

    /// Scale in y, applied first
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    scale_y: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("clipspace=info".parse()?))
        .init();

    let args = Args::parse();

    let config = CanvasConfig::new(args.width, args.height)
        .with_translation(args.translate_x, args.translate_y)
        .with_angle_degrees(args.angle)
        .with_scale(args.scale_x, args.scale_y);
    config.validate()?;
    info!(width = config.width, height = config.height, "canvas configured");

    let m = config.matrix();
    let pixel = [args.x, args.y];
    let clip = transform_point(&m, pixel);
    info!(x = pixel[0], y = pixel[1], clip_x = clip[0], clip_y = clip[1], "projected");

    // A zero scale collapses the chain and leaves nothing to invert.
    let inv = try_inverse(&m)?;
    let back = transform_point(&inv, clip);
    let error = distance(pixel[0], pixel[1], back[0], back[1]);
    if error > 1e-6 {
        warn!(error, "round trip drifted");
    }
    info!(x = back[0], y = back[1], "unprojected");

    println!("pixel  ({}, {})", pixel[0], pixel[1]);
    println!("clip   ({:.6}, {:.6})", clip[0], clip[1]);
    println!("back   ({:.6}, {:.6})", back[0], back[1]);

    Ok(())
}
