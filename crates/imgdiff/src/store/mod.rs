use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

/// Decode an image, sniffing the format from its content, as 8-bit RGBA.
pub fn read_image(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let format = reader.format();
    let image = reader
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    debug!(
        path = %path.display(),
        format = ?format,
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(image.to_rgba8())
}

/// Encode as PNG whatever the extension says.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), "wrote diff image");
    Ok(())
}
