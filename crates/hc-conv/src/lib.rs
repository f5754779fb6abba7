//! 2D convolution for the Harris pipeline.
//!
//! Convolution runs in valid mode: only cells whose full kernel window fits
//! inside the input are recomputed, and border cells keep their input value.
//!
//! Interior evaluation is data-parallel. Each worker owns a disjoint output
//! row and reads only the immutable input, so no cell-level locking is
//! needed; the engine joins all workers before returning and surfaces the
//! first error.

pub mod conv2d;
pub mod kernels;

pub use conv2d::filter;
