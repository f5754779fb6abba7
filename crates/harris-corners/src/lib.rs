//! Umbrella crate for the `harris-corners` workspace.
//!
//! Re-exports the matrix primitives, the convolution engine and the Harris
//! detector so applications can depend on a single crate.

pub use hc_conv::{filter, kernels};
pub use hc_harris::{
    apply_threshold, collect_corners, corner_response, detect, gradients, structure_tensor,
    suppress_non_maxima, Corner, HarrisConfig, DEFAULT_THRESHOLD, HARRIS_K,
};
pub use hc_matrix::{Comparison, Error, Matrix};
