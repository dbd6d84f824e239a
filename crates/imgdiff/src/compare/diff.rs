use image::RgbaImage;
use thiserror::Error;
use tracing::debug;

use super::DiffOptions;
use super::pixel::diff_pixel;
use crate::raster::{Bounds, Raster};

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("different image sizes: {left} vs {right}")]
    BoundsMismatch { left: Bounds, right: Bounds },
}

/// Pixel counters gathered during one diff pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStatistics {
    /// Number of pixels visited.
    pub total_pixels: u64,
    /// Number of pixels with a non-zero diff channel.
    pub diff_pixels: u64,
}

impl DiffStatistics {
    /// Integer percentage of differing pixels, rounded down. 0 for an empty image.
    pub fn diff_percentage(&self) -> u64 {
        if self.total_pixels == 0 {
            return 0;
        }
        self.diff_pixels * 100 / self.total_pixels
    }

    pub fn has_differences(&self) -> bool {
        self.diff_pixels > 0
    }

    fn record(&mut self, differs: bool) {
        self.total_pixels += 1;
        if differs {
            self.diff_pixels += 1;
        }
    }
}

pub struct DiffOutput {
    /// Zero-origin diff image, same size as the inputs.
    pub image: RgbaImage,
    pub stats: DiffStatistics,
}

/// Diff two rasters with identical bounds.
///
/// Fails before touching any pixel when the bounds differ, origin included.
/// The output is always anchored at (0, 0).
pub fn diff_images<L, R>(
    left: &L,
    right: &R,
    options: &DiffOptions,
) -> Result<DiffOutput, DiffError>
where
    L: Raster + ?Sized,
    R: Raster + ?Sized,
{
    let bounds = left.bounds();
    let right_bounds = right.bounds();
    debug!(left = %bounds, right = %right_bounds, "bounds");
    if bounds != right_bounds {
        return Err(DiffError::BoundsMismatch {
            left: bounds,
            right: right_bounds,
        });
    }

    let output = bounds.normalized();
    let mut image = RgbaImage::new(output.width, output.height);
    let mut stats = DiffStatistics::default();

    for ((x, y), (ox, oy)) in bounds.coordinates().zip(output.coordinates()) {
        let diff = diff_pixel(left.pixel(x, y), right.pixel(x, y), options);
        stats.record(diff.differs);
        image.put_pixel(ox as u32, oy as u32, diff.color);
    }

    debug!(
        total = stats.total_pixels,
        diff = stats.diff_pixels,
        "diff pass complete"
    );
    Ok(DiffOutput { image, stats })
}
