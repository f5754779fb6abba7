//! Harris corner detection over a dense intensity matrix.
//!
//! ## Coordinate convention
//! The intensity matrix is built so that the first index (`i`, the matrix
//! row) corresponds to image x and the second index (`j`, the matrix column)
//! to image y. Detected [`Corner`] coordinates follow the same convention and
//! can be used directly as marker centers on the source image.
//!
//! ## Pipeline
//! The detector is a straight-line sequence: 3x3 box smoothing, directional
//! gradients, Gaussian-smoothed structure tensor, corner response, strict
//! threshold, in-place non-maximum suppression, row-major extraction. The
//! first failing stage aborts the run; there is no retry or partial output.

mod response;
mod suppress;

pub use response::{apply_threshold, corner_response, gradients, structure_tensor};
pub use suppress::{collect_corners, suppress_non_maxima};

use hc_conv::{filter, kernels};
use hc_matrix::{Error, Matrix};

/// Harris sensitivity constant in the `det - k * trace^2` response.
pub const HARRIS_K: f64 = 0.04;

/// Corner-response cutoff used by the reference tool.
pub const DEFAULT_THRESHOLD: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HarrisConfig {
    pub k: f64,
    pub threshold: f64,
}

impl Default for HarrisConfig {
    fn default() -> Self {
        Self {
            k: HARRIS_K,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Detected corner location, `(x, y)` in the convention described in the
/// crate docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub x: usize,
    pub y: usize,
}

/// Runs the full Harris pipeline on a per-pixel intensity matrix.
///
/// `intensity` holds the 0-255 luminance channel as real values. Returns the
/// surviving corners in row-major scan order.
pub fn detect(intensity: &Matrix, cfg: &HarrisConfig) -> Result<Vec<Corner>, Error> {
    let smoothed = filter(intensity, &kernels::smooth3x3())?;
    let (ix, iy) = gradients(&smoothed)?;
    let (sxx, syy, sxy) = structure_tensor(&ix, &iy)?;
    let r = corner_response(&sxx, &syy, &sxy, cfg.k)?;

    let mut mask = apply_threshold(&r, cfg.threshold)?;
    suppress_non_maxima(&mut mask);
    Ok(collect_corners(&mask))
}
