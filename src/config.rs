//! Run configuration.
//!
//! A `Config` is built once at startup (compiled-in defaults, then an optional
//! YAML overlay, then CLI flags) and passed by reference to every stage.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::TECH_ASSETS;
use crate::crop::CROP_TIMEOUT_SECS;
use crate::error::{Result, SplitError};

/// Conventional config file name.
pub const CONFIG_FILENAME: &str = "atlas.yaml";

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Slot names, top to bottom.
    pub names: Vec<String>,
    /// Sprite sheet to split.
    pub input: PathBuf,
    /// Directory receiving one PNG per name.
    pub output_dir: PathBuf,
    /// Stylesheet file to (over)write.
    pub stylesheet: PathBuf,
    /// URL prefix the front-end serves `output_dir` under.
    pub public_base: String,
    pub tile_size: u32,
    /// Shared display class emitted in the stylesheet preamble.
    pub class_name: String,
    /// Header comment of the stylesheet.
    pub title: String,
    /// External crop program.
    pub tool: String,
    /// Bound on each external crop invocation.
    pub crop_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names: TECH_ASSETS.iter().map(|s| s.to_string()).collect(),
            input: PathBuf::from("src/assets/imagemaps/tech-atlas.png"),
            output_dir: PathBuf::from("src/assets/tech-icons"),
            stylesheet: PathBuf::from("src/app/shared/components/tech-atlas.css"),
            public_base: "/assets/tech-icons".to_string(),
            tile_size: DEFAULT_TILE_SIZE,
            class_name: "tech-icon".to_string(),
            title: "Stars! Tech Atlas - Individual Images".to_string(),
            tool: "magick".to_string(),
            crop_timeout_secs: CROP_TIMEOUT_SECS,
        }
    }
}

/// YAML overlay. Every field is optional; missing fields keep the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub names: Option<Vec<String>>,
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
    pub public_base: Option<String>,
    pub tile_size: Option<u32>,
    pub class_name: Option<String>,
    pub title: Option<String>,
    pub tool: Option<String>,
    pub crop_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Load an overlay from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SplitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse an overlay from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SplitError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check the YAML syntax and field names".to_string()),
        })
    }

    /// Serialize as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SplitError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Apply this overlay on top of `base`.
    pub fn apply(self, base: Config) -> Config {
        Config {
            names: self.names.unwrap_or(base.names),
            input: self.input.unwrap_or(base.input),
            output_dir: self.output_dir.unwrap_or(base.output_dir),
            stylesheet: self.stylesheet.unwrap_or(base.stylesheet),
            public_base: self.public_base.unwrap_or(base.public_base),
            tile_size: self.tile_size.unwrap_or(base.tile_size),
            class_name: self.class_name.unwrap_or(base.class_name),
            title: self.title.unwrap_or(base.title),
            tool: self.tool.unwrap_or(base.tool),
            crop_timeout_secs: self.crop_timeout_secs.unwrap_or(base.crop_timeout_secs),
        }
    }
}

impl From<&Config> for ConfigFile {
    fn from(config: &Config) -> Self {
        Self {
            names: Some(config.names.clone()),
            input: Some(config.input.clone()),
            output_dir: Some(config.output_dir.clone()),
            stylesheet: Some(config.stylesheet.clone()),
            public_base: Some(config.public_base.clone()),
            tile_size: Some(config.tile_size),
            class_name: Some(config.class_name.clone()),
            title: Some(config.title.clone()),
            tool: Some(config.tool.clone()),
            crop_timeout_secs: Some(config.crop_timeout_secs),
        }
    }
}

impl Config {
    /// Build a config for an explicit name list, keeping the other defaults.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Check structural invariants of the name list and tile size.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(SplitError::Config {
                message: "Tile size must be non-zero".to_string(),
                help: None,
            });
        }

        if self.crop_timeout_secs == 0 {
            return Err(SplitError::Config {
                message: "crop_timeout_secs must be non-zero".to_string(),
                help: Some("Every crop would time out; use at least 1".to_string()),
            });
        }

        if self.names.is_empty() {
            return Err(SplitError::Config {
                message: "Name list is empty".to_string(),
                help: Some("Add at least one slot name".to_string()),
            });
        }

        let mut seen = HashSet::with_capacity(self.names.len());
        for name in &self.names {
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(SplitError::Config {
                    message: format!("Invalid slot name '{}'", name),
                    help: Some("Slot names become file names and must not contain path separators".to_string()),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(SplitError::Config {
                    message: format!("Duplicate slot name '{}'", name),
                    help: Some("Each slot name must be unique".to_string()),
                });
            }
        }

        // The bottom edge of the last slot must fit in u32 pixel space.
        let count = self.names.len() as u64;
        if count * self.tile_size as u64 > u32::MAX as u64 {
            return Err(SplitError::Config {
                message: format!("{} slots of {}px exceed the maximum image height", count, self.tile_size),
                help: None,
            });
        }

        Ok(())
    }

    /// Output path for a slot name.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", name))
    }

    /// Public URL for a slot name.
    pub fn public_url(&self, name: &str) -> String {
        format!("{}/{}.png", self.public_base.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.names.len(), TECH_ASSETS.len());
        assert_eq!(config.tile_size, 64);
        assert_eq!(config.output_dir, PathBuf::from("src/assets/tech-icons"));
        assert_eq!(config.tool, "magick");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_overlay() {
        let overlay = ConfigFile::parse("").unwrap();
        let config = overlay.apply(Config::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_overlay() {
        let yaml = r#"
names: [a, b, c]
input: sheet.png
output_dir: out/icons
stylesheet: out/icons.css
public_base: /static/icons
tile_size: 32
class_name: icon
title: Icons
tool: convert
"#;
        let config = ConfigFile::parse(yaml).unwrap().apply(Config::default());

        assert_eq!(config.names, vec!["a", "b", "c"]);
        assert_eq!(config.input, PathBuf::from("sheet.png"));
        assert_eq!(config.output_dir, PathBuf::from("out/icons"));
        assert_eq!(config.stylesheet, PathBuf::from("out/icons.css"));
        assert_eq!(config.public_base, "/static/icons");
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.class_name, "icon");
        assert_eq!(config.title, "Icons");
        assert_eq!(config.tool, "convert");
    }

    #[test]
    fn test_parse_partial_overlay_keeps_defaults() {
        let config = ConfigFile::parse("tile_size: 16")
            .unwrap()
            .apply(Config::default());

        assert_eq!(config.tile_size, 16);
        assert_eq!(config.names.len(), TECH_ASSETS.len());
        assert_eq!(config.public_base, "/assets/tech-icons");
    }

    #[test]
    fn test_parse_unknown_field_rejected() {
        assert!(ConfigFile::parse("tiles: 3").is_err());
    }

    #[test]
    fn test_yaml_roundtrip_preserves_config() {
        let config = Config {
            tile_size: 16,
            ..Config::with_names(["x", "y"])
        };
        let yaml = ConfigFile::from(&config).to_yaml().unwrap();
        let back = ConfigFile::parse(&yaml).unwrap().apply(Config::default());
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate_duplicate_names() {
        let config = Config::with_names(["a", "b", "a"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate slot name 'a'"));
    }

    #[test]
    fn test_validate_empty_names() {
        let config = Config::with_names(Vec::<String>::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_path_separator() {
        assert!(Config::with_names(["ok", "../evil"]).validate().is_err());
        assert!(Config::with_names(["a\\b"]).validate().is_err());
    }

    #[test]
    fn test_validate_zero_tile() {
        let config = Config {
            tile_size: 0,
            ..Config::with_names(["a"])
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_crop_timeout() {
        let config = Config {
            crop_timeout_secs: 0,
            ..Config::with_names(["a"])
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("crop_timeout_secs"));
    }

    #[test]
    fn test_output_path_and_url() {
        let config = Config {
            output_dir: PathBuf::from("out"),
            public_base: "/assets/icons/".to_string(),
            ..Config::with_names(["a"])
        };

        assert_eq!(config.output_path("a"), PathBuf::from("out").join("a.png"));
        assert_eq!(config.public_url("a"), "/assets/icons/a.png");
    }
}
