use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, Rgb, RgbImage};

use hc_harris::{detect, Corner, HarrisConfig, DEFAULT_THRESHOLD};
use hc_matrix::Matrix;

/// Arm length and thickness of the corner marker, in pixels.
const MARK_ARM: i64 = 10;

#[derive(Parser, Debug)]
#[command(name = "hc_detect")]
#[command(about = "Detect Harris corners in an image and mark them on a copy")]
struct Cli {
    /// Path to the input raster image.
    input: PathBuf,

    /// Path to the annotated output image.
    #[arg(short = 'o', long = "output", default_value = "new.jpg")]
    output: PathBuf,

    /// Corner-response cutoff; only responses strictly above it survive.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let img = image::open(&cli.input)
        .with_context(|| format!("opening input image {}", cli.input.display()))?;
    let gray = img.to_luma8();
    let mut annotated = img.to_rgb8();

    let intensity = intensity_matrix(&gray);
    let cfg = HarrisConfig {
        threshold: cli.threshold,
        ..HarrisConfig::default()
    };
    let corners = detect(&intensity, &cfg).context("running the corner detector")?;

    for c in &corners {
        draw_cross(&mut annotated, c);
    }

    annotated
        .save(&cli.output)
        .with_context(|| format!("writing output image {}", cli.output.display()))?;

    Ok(())
}

/// Builds the intensity matrix with the detector's coordinate convention:
/// matrix row index = image x, matrix column index = image y.
fn intensity_matrix(gray: &GrayImage) -> Matrix {
    let (w, h) = gray.dimensions();
    Matrix::from_fn(w as usize, h as usize, |x, y| {
        gray.get_pixel(x as u32, y as u32)[0] as f64
    })
}

/// Draws a fully opaque red cross centered on the corner: horizontal and
/// vertical arms of `MARK_ARM` pixels each way, two pixels thick with the
/// second pixel offset +1 in the perpendicular axis. Out-of-bounds pixels
/// are skipped.
fn draw_cross(img: &mut RgbImage, corner: &Corner) {
    let red = Rgb([255u8, 0, 0]);
    let (cx, cy) = (corner.x as i64, corner.y as i64);

    for x in cx - MARK_ARM..=cx + MARK_ARM {
        put_pixel_checked(img, x, cy, red);
        put_pixel_checked(img, x, cy + 1, red);
    }
    for y in cy - MARK_ARM..=cy + MARK_ARM {
        put_pixel_checked(img, cx, y, red);
        put_pixel_checked(img, cx + 1, y, red);
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (ux, uy) = (x as u32, y as u32);
    if ux >= img.width() || uy >= img.height() {
        return;
    }
    img.put_pixel(ux, uy, color);
}
