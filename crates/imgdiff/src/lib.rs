//! Per-pixel difference between two images of the same size.
//!
//! [`compare::diff_images`] walks both rasters in row-major order and
//! produces a diff image plus counters. Decoding and encoding stay outside
//! this crate's library surface; see the `imgdiff` binary for that.

pub mod compare;
pub mod raster;

pub use compare::{DiffError, DiffOptions, DiffOutput, DiffStatistics, HighlightColor};
pub use raster::{Bounds, Raster};
