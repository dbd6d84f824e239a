pub mod channel;
pub mod diff;
pub mod pixel;

use std::fmt;
use std::str::FromStr;

pub use self::channel::diff_channel;
pub use self::diff::{DiffError, DiffOutput, DiffStatistics, diff_images};
pub use self::pixel::{PixelDiff, diff_pixel};

/// Marker color for differing pixels in highlight mode.
///
/// Any name is accepted, but only `red` renders a marker. Unrecognized names
/// leave every pixel in the background color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HighlightColor {
    #[default]
    Red,
    Unrecognized(String),
}

impl HighlightColor {
    pub const DEFAULT_NAME: &'static str = "red";

    pub fn name(&self) -> &str {
        match self {
            Self::Red => Self::DEFAULT_NAME,
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for HighlightColor {
    fn from(name: &str) -> Self {
        match name {
            Self::DEFAULT_NAME => Self::Red,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl FromStr for HighlightColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for a single diff pass. Read-only for the whole traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Subtract left from right instead of right from left.
    pub reverse: bool,
    /// Collapse every differing channel to an extreme value.
    pub amplify: bool,
    /// `Some` enables highlight mode.
    pub highlight: Option<HighlightColor>,
    /// Value that "no difference" renders as. 0 means black.
    ///
    /// Any non-zero output channel counts as a difference, so with a base
    /// set even identical pixels are counted.
    pub base: u8,
}
