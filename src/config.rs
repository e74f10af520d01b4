//! # Configuration
//!
//! Where the generator reads the catalog from and where it writes pages and
//! the manifest.
//!
//! ## Lookup Order
//!
//! | Source | Path |
//! |--------|------|
//! | `--config FILE` | as given (must exist) |
//! | Project file | `<root>/glassgen.json` |
//! | User file | `~/.config/glassgen/config.json` |
//! | Built-in defaults | see [`Config::default`] |
//!
//! The first file found wins; files are not merged. Fields missing from a
//! file take their default. Relative paths are resolved against the project
//! root by [`Config::resolved`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::generator::DuplicatePolicy;

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "glassgen.json";

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The animation catalog (JSON).
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Root scanned for standalone components.
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,
    /// Where preview pages are written.
    #[serde(default = "default_library_dir")]
    pub library_dir: PathBuf,
    /// Where `manifest.js` is written.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    #[serde(default)]
    pub duplicate_slugs: DuplicatePolicy,
    /// Leave generated pages out of the manifest's component list.
    #[serde(default)]
    pub exclude_library_from_components: bool,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("ui_animations.json")
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("components")
}

fn default_library_dir() -> PathBuf {
    ["components", "animations", "library"].iter().collect()
}

fn default_manifest() -> PathBuf {
    ["components", "animations", "manifest.js"].iter().collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            components_dir: default_components_dir(),
            library_dir: default_library_dir(),
            manifest: default_manifest(),
            duplicate_slugs: DuplicatePolicy::default(),
            exclude_library_from_components: false,
        }
    }
}

impl Config {
    /// Find and load the configuration for a project rooted at `root`.
    ///
    /// An explicit path must exist. Otherwise the project file, then the
    /// user file, then the defaults are used.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            debug!(config = %path.display(), "Using config file from command line");
            return Self::load_from(path);
        }

        let project = root.join(PROJECT_CONFIG_FILE);
        if project.exists() {
            debug!(config = %project.display(), "Using project config file");
            return Self::load_from(&project);
        }

        if let Some(user) = Self::user_config_path().filter(|p| p.exists()) {
            debug!(config = %user.display(), "Using user config file");
            return Self::load_from(&user);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Anchor every relative path at `root`; absolute paths are kept.
    pub fn resolved(self, root: &Path) -> Self {
        Self {
            catalog: root.join(self.catalog),
            components_dir: root.join(self.components_dir),
            library_dir: root.join(self.library_dir),
            manifest: root.join(self.manifest),
            duplicate_slugs: self.duplicate_slugs,
            exclude_library_from_components: self.exclude_library_from_components,
        }
    }

    /// Path of the per-user config file, if the platform has a config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "glassgen")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog, PathBuf::from("ui_animations.json"));
        assert_eq!(config.components_dir, PathBuf::from("components"));
        assert_eq!(
            config.library_dir,
            Path::new("components").join("animations").join("library")
        );
        assert_eq!(
            config.manifest,
            Path::new("components").join("animations").join("manifest.js")
        );
        assert_eq!(config.duplicate_slugs, DuplicatePolicy::Warn);
        assert!(!config.exclude_library_from_components);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let json = r#"{"catalog": "data/catalog.json", "duplicate_slugs": "error"}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.catalog, PathBuf::from("data/catalog.json"));
        assert_eq!(config.duplicate_slugs, DuplicatePolicy::Error);
        assert_eq!(config.components_dir, PathBuf::from("components"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"catalog": "a.json", "theme": "Nord"}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("glassgen.json");

        let config = Config {
            library_dir: PathBuf::from("site/library"),
            duplicate_slugs: DuplicatePolicy::Error,
            ..Config::default()
        };

        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let loaded =
            Config::load_from(&temp_dir.path().join("does_not_exist.json")).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_invalid_json() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("glassgen.json");
        fs::write(&config_path, "{ not json").expect("write");

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_discover_prefers_explicit_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            r#"{"catalog": "project.json"}"#,
        )
        .expect("write");
        let explicit = temp_dir.path().join("other.json");
        fs::write(&explicit, r#"{"catalog": "explicit.json"}"#).expect("write");

        let config = Config::discover(temp_dir.path(), Some(&explicit)).expect("discover");
        assert_eq!(config.catalog, PathBuf::from("explicit.json"));
    }

    #[test]
    fn test_discover_reads_project_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            r#"{"catalog": "project.json"}"#,
        )
        .expect("write");

        let config = Config::discover(temp_dir.path(), None).expect("discover");
        assert_eq!(config.catalog, PathBuf::from("project.json"));
    }

    #[test]
    fn test_discover_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let result = Config::discover(temp_dir.path(), Some(&temp_dir.path().join("nope.json")));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_resolved_anchors_relative_paths() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let absolute = temp_dir.path().join("elsewhere").join("manifest.js");
        let config = Config {
            manifest: absolute.clone(),
            ..Config::default()
        }
        .resolved(Path::new("/srv/site"));

        assert_eq!(config.catalog, Path::new("/srv/site").join("ui_animations.json"));
        assert_eq!(
            config.library_dir,
            Path::new("/srv/site").join("components/animations/library")
        );
        assert_eq!(config.manifest, absolute);
    }
}
