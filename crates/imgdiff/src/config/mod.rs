pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

pub use self::resolve::{CliOverrides, ResolvedRunConfig};

pub(crate) const CONFIG_FILE: &str = "imgdiff.toml";
pub(crate) const DEFAULT_OUTPUT: &str = "output.png";

/// `[diff]` section. Every field is optional; absent means "use default".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiffConfig {
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub amplify: bool,
    /// Highlight color. Setting it enables highlight mode.
    #[serde(default)]
    pub color: Option<String>,
    /// Kept wide so out-of-range values get a readable error.
    #[serde(default)]
    pub base: Option<i64>,
}

pub fn validate_base(v: i64) -> Result<u8, String> {
    u8::try_from(v).map_err(|_| format!("base must be between 0 and 255, got {v}"))
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub diff: DiffConfig,
}

impl Config {
    fn validate(&self) -> Result<()> {
        if let Some(base) = self.diff.base {
            validate_base(base).map_err(|e| anyhow::anyhow!("diff.{e}"))?;
        }
        Ok(())
    }

    pub fn base(&self) -> Option<u8> {
        // validate() ran at load time
        self.diff.base.and_then(|b| u8::try_from(b).ok())
    }
}

pub fn parse(content: &str, origin: &Path) -> Result<Config> {
    let config: Config =
        toml::from_str(content).with_context(|| format!("Failed to parse {}", origin.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", origin.display()))?;
    Ok(config)
}

pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse(&content, path)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Load `explicit` if given, else `imgdiff.toml` in the working directory
/// when it exists. A missing default file is not an error.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load(path)
    } else {
        Ok(Config::default())
    }
}
