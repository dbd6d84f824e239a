use std::path::PathBuf;

use anyhow::{Context, Result};
use imgdiff::{DiffOptions, HighlightColor};

use super::{Config, DEFAULT_OUTPUT, load_or_default, validate_base};

/// Values extracted from the CLI that participate in the merge.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub reverse: bool,
    pub amplify: bool,
    pub color: Option<String>,
    pub base: Option<u8>,
    pub config: Option<PathBuf>,
}

/// `IMGDIFF_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub base: Option<u8>,
    pub output: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self> {
        let base = std::env::var("IMGDIFF_BASE")
            .ok()
            .map(|v| v.trim().parse::<i64>())
            .transpose()
            .context("IMGDIFF_BASE must be an integer")?
            .map(validate_base)
            .transpose()
            .map_err(|e| anyhow::anyhow!("IMGDIFF_BASE: {e}"))?;
        let output = std::env::var_os("IMGDIFF_OUTPUT").map(PathBuf::from);
        Ok(Self { base, output })
    }
}

/// Fully resolved run after CLI > env > file > defaults merge.
#[derive(Debug, Clone)]
pub struct ResolvedRunConfig {
    pub left: PathBuf,
    pub right: PathBuf,
    pub output: PathBuf,
    pub options: DiffOptions,
}

impl ResolvedRunConfig {
    pub fn new(left: PathBuf, right: PathBuf, cli: CliOverrides) -> Result<Self> {
        // 1. File layer
        let file_config = load_or_default(cli.config.as_deref())?;

        // 2. Env layer
        let env = EnvOverrides::from_env()?;

        Ok(Self::merge(left, right, cli, env, file_config))
    }

    /// CLI > env > file > defaults (highest priority first). Flags can only
    /// switch a mode on.
    pub fn merge(
        left: PathBuf,
        right: PathBuf,
        cli: CliOverrides,
        env: EnvOverrides,
        file: Config,
    ) -> Self {
        let base = cli.base.or(env.base).or(file.base()).unwrap_or(0);

        let output = cli
            .output
            .or(env.output)
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let highlight = cli
            .color
            .or(file.diff.color)
            .map(|name| HighlightColor::from(name.as_str()));

        let options = DiffOptions {
            reverse: cli.reverse || file.diff.reverse,
            amplify: cli.amplify || file.diff.amplify,
            highlight,
            base,
        };

        Self {
            left,
            right,
            output,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;
    use std::path::Path;

    fn merge(cli: CliOverrides, env: EnvOverrides, file: &str) -> ResolvedRunConfig {
        let file = parse(file, Path::new("test.toml")).unwrap();
        ResolvedRunConfig::merge("a.png".into(), "b.png".into(), cli, env, file)
    }

    #[test]
    fn defaults() {
        let resolved = merge(CliOverrides::default(), EnvOverrides::default(), "");
        assert_eq!(resolved.left, PathBuf::from("a.png"));
        assert_eq!(resolved.right, PathBuf::from("b.png"));
        assert_eq!(resolved.output, PathBuf::from("output.png"));
        assert_eq!(resolved.options, DiffOptions::default());
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = "output = \"file.png\"\n[diff]\nbase = 1\n";
        let env = EnvOverrides {
            base: Some(2),
            output: Some("env.png".into()),
        };
        let cli = CliOverrides {
            base: Some(3),
            output: Some("cli.png".into()),
            ..CliOverrides::default()
        };

        let resolved = merge(cli, env.clone(), file);
        assert_eq!(resolved.options.base, 3);
        assert_eq!(resolved.output, PathBuf::from("cli.png"));

        let resolved = merge(CliOverrides::default(), env, file);
        assert_eq!(resolved.options.base, 2);
        assert_eq!(resolved.output, PathBuf::from("env.png"));

        let resolved = merge(CliOverrides::default(), EnvOverrides::default(), file);
        assert_eq!(resolved.options.base, 1);
        assert_eq!(resolved.output, PathBuf::from("file.png"));
    }

    #[test]
    fn file_enables_modes() {
        let resolved = merge(
            CliOverrides::default(),
            EnvOverrides::default(),
            "[diff]\nreverse = true\namplify = true\ncolor = \"red\"\n",
        );
        assert!(resolved.options.reverse);
        assert!(resolved.options.amplify);
        assert_eq!(resolved.options.highlight, Some(HighlightColor::Red));
    }

    #[test]
    fn cli_flags_enable_modes() {
        let cli = CliOverrides {
            reverse: true,
            color: Some("blue".into()),
            ..CliOverrides::default()
        };
        let resolved = merge(cli, EnvOverrides::default(), "[diff]\ncolor = \"red\"\n");
        assert!(resolved.options.reverse);
        assert!(!resolved.options.amplify);
        assert_eq!(
            resolved.options.highlight,
            Some(HighlightColor::Unrecognized("blue".into()))
        );
    }
}
