use anyhow::Result;
use imgdiff::DiffStatistics;
use imgdiff::compare::diff_images;
use tracing::debug;

use crate::config::ResolvedRunConfig;
use crate::store;

/// `imgdiff <left> <right>`: decode both, diff, write the PNG.
///
/// The output file is only written once the whole pass has succeeded.
pub fn diff(config: &ResolvedRunConfig) -> Result<DiffStatistics> {
    debug!(
        left = %config.left.display(),
        right = %config.right.display(),
        output = %config.output.display(),
        options = ?config.options,
        "starting diff"
    );

    let left = store::read_image(&config.left)?;
    let right = store::read_image(&config.right)?;

    let output = diff_images(&left, &right, &config.options)?;
    store::write_png(&output.image, &config.output)?;

    Ok(output.stats)
}
