//! Pipeline configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_DB_PATH, DEFAULT_EXPORT_PATH, DEFAULT_VENDOR_DIR,
};
use crate::errors::ConfigError;

/// Resolved glyphdex configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GLYPHDEX_*`)
/// 3. Project config (`glyphdex.toml` in the working directory, or an
///    explicit `--config` path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphdexConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Directory holding the vendored icon packages (a node_modules root).
    pub vendor_dir: PathBuf,
    /// Minimum similarity score for a cross-library match to be accepted.
    pub confidence_threshold: u8,
    /// Destination for the exported mappings interchange file.
    pub export_path: PathBuf,
}

impl Default for GlyphdexConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            vendor_dir: PathBuf::from(DEFAULT_VENDOR_DIR),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

/// Partial config parsed from a TOML file. Unknown keys are silently
/// ignored (forward-compatible).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    db_path: Option<PathBuf>,
    vendor_dir: Option<PathBuf>,
    confidence_threshold: Option<u8>,
    export_path: Option<PathBuf>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<PathBuf>,
    pub vendor_dir: Option<PathBuf>,
    pub confidence_threshold: Option<u8>,
    pub export_path: Option<PathBuf>,
}

impl GlyphdexConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit_config` replaces the default `<root>/glyphdex.toml`
    /// lookup; a missing explicit file is an error, a missing default
    /// file is not.
    pub fn load(
        root: &Path,
        explicit_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match explicit_config {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let default_path = root.join("glyphdex.toml");
                if default_path.exists() {
                    Self::merge_toml_file(&mut config, &default_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let overlay: ConfigOverlay =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        let mut config = Self::default();
        Self::merge(&mut config, overlay);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GlyphdexConfig) -> Result<(), ConfigError> {
        if config.confidence_threshold > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "confidence_threshold".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut GlyphdexConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let overlay: ConfigOverlay =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, overlay);
        Ok(())
    }

    /// Merge an overlay into `base`; only `Some` values override.
    fn merge(base: &mut GlyphdexConfig, overlay: ConfigOverlay) {
        if let Some(v) = overlay.db_path {
            base.db_path = v;
        }
        if let Some(v) = overlay.vendor_dir {
            base.vendor_dir = v;
        }
        if let Some(v) = overlay.confidence_threshold {
            base.confidence_threshold = v;
        }
        if let Some(v) = overlay.export_path {
            base.export_path = v;
        }
    }

    /// Apply environment variable overrides (`GLYPHDEX_*`).
    fn apply_env_overrides(config: &mut GlyphdexConfig) {
        if let Ok(val) = std::env::var("GLYPHDEX_DB_PATH") {
            config.db_path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("GLYPHDEX_VENDOR_DIR") {
            config.vendor_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("GLYPHDEX_CONFIDENCE_THRESHOLD") {
            if let Ok(v) = val.parse::<u8>() {
                config.confidence_threshold = v;
            }
        }
        if let Ok(val) = std::env::var("GLYPHDEX_EXPORT_PATH") {
            config.export_path = PathBuf::from(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GlyphdexConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.db_path = v.clone();
        }
        if let Some(ref v) = cli.vendor_dir {
            config.vendor_dir = v.clone();
        }
        if let Some(v) = cli.confidence_threshold {
            config.confidence_threshold = v;
        }
        if let Some(ref v) = cli.export_path {
            config.export_path = v.clone();
        }
    }
}
