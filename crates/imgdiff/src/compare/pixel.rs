use image::Rgba;

use super::channel::diff_channel;
use super::{DiffOptions, HighlightColor};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Output of [`diff_pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDiff {
    pub color: Rgba<u8>,
    /// Whether any color channel of the diff is non-zero.
    pub differs: bool,
}

/// Diff two pixels channel by channel.
///
/// Alpha is not compared: the output is always fully opaque. In highlight
/// mode differing pixels become red and the rest become white, or black
/// when `reverse` is set.
pub fn diff_pixel(left: Rgba<u8>, right: Rgba<u8>, options: &DiffOptions) -> PixelDiff {
    let Rgba([r1, g1, b1, _]) = left;
    let Rgba([r2, g2, b2, _]) = right;

    let r3 = diff_channel(r1, r2, options);
    let g3 = diff_channel(g1, g2, options);
    let b3 = diff_channel(b1, b2, options);

    let differs = r3 != 0 || g3 != 0 || b3 != 0;

    let color = match &options.highlight {
        Some(HighlightColor::Red) if differs => RED,
        Some(_) if options.reverse => BLACK,
        Some(_) => WHITE,
        None => Rgba([r3, g3, b3, 255]),
    };

    PixelDiff { color, differs }
}
