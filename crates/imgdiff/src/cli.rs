use std::path::PathBuf;

use clap::Parser;

use crate::config;
use crate::config::CliOverrides;

fn parse_base(s: &str) -> Result<u8, String> {
    let v: i64 = s.parse().map_err(|e| format!("{e}"))?;
    config::validate_base(v)
}

const EXAMPLES: &str = "\
Examples:
  imgdiff golden.png current.png -o diff.png --reverse --base 128
  imgdiff golden.png current.png --amplify
  imgdiff golden.png current.png --color

Exit status: 0 = identical, 2 = differences found, 1 = error.";

#[derive(Debug, Parser)]
#[command(
    name = "imgdiff",
    version,
    about = "Check differences between two images of the same size",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Reference image (PNG, GIF or JPEG)
    pub left: PathBuf,

    /// Image compared against the reference
    pub right: PathBuf,

    /// Diff image path, always PNG-encoded [default: output.png]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Subtract the left image from the right one instead
    #[arg(long)]
    pub reverse: bool,

    /// Render every differing channel at full intensity
    #[arg(long)]
    pub amplify: bool,

    /// Paint differing pixels in COLOR over a white background (black with
    /// --reverse). Only "red" is supported
    #[arg(
        long,
        visible_alias = "highlight",
        value_name = "COLOR",
        num_args = 0..=1,
        default_missing_value = "red"
    )]
    pub color: Option<String>,

    /// Base color to diff against (0-255) [default: 0]
    #[arg(long, value_parser = parse_base)]
    pub base: Option<u8>,

    /// TOML config file [default: imgdiff.toml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output: self.output.clone(),
            reverse: self.reverse,
            amplify: self.amplify,
            color: self.color.clone(),
            base: self.base,
            config: self.config.clone(),
        }
    }
}
