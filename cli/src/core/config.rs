//! # ReelRec Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for ReelRec, handling
//! loading, merging, validation, and access to configuration data - most
//! importantly the movie catalog the recommendation engine scores against.
//! It supports a multi-level configuration approach that combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit config file named by the `REELREC_CONFIG` environment
//!    variable (used alone when set - this is also the integration-test hook)
//! 2. Project-specific `.reelrec.toml` in current directory or ancestors
//! 3. User-specific `~/.config/reelrec/config.toml`
//! 4. Default values defined in the code (built-in demo catalog, top 3)
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Resolve the catalog the engine will score against
//! let catalog = config::load_catalog(&cfg)?;
//!
//! // Access recommendation settings
//! let top_n = cfg.recommendations.top_n;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::common::engine::catalog::{Catalog, Item};
use crate::core::error::{ReelrecError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
    // Add other top-level configuration sections here
}

/// Configuration for the movie catalog source.
///
/// When `items` is non-empty it replaces the built-in catalog wholesale;
/// otherwise `file` (if set) names an external TOML catalog. With neither,
/// the built-in demo catalog is used.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Inline catalog entries.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Path to an external catalog TOML file (can use ~). Will be expanded.
    #[serde(default)]
    pub file: Option<String>,
}

/// Settings for the recommendation commands.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RecommendationsConfig {
    /// How many recommendations to show by default.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    3
}

/// Shape of an external catalog file: a plain list of `[[items]]`.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

const PROJECT_CONFIG_FILENAME: &str = ".reelrec.toml";
const CONFIG_ENV_VAR: &str = "REELREC_CONFIG";

/// Loads the effective configuration from all sources, expands paths, and
/// validates the result.
pub fn load_config() -> Result<Config> {
    let mut merged_config = if let Some(explicit) = load_explicit_config()? {
        // An explicit file takes full precedence over the search path.
        explicit
    } else {
        let user_config = load_user_config()?;
        let project_config = load_project_config()?;
        merge_configs(user_config.unwrap_or_default(), project_config)
    };
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// Resolves the catalog the engine will use from an already-loaded config.
///
/// Inline items win over an external file; with neither configured the
/// built-in demo catalog is returned. Catalog shape is validated here so
/// the engine can assume well-formed data everywhere downstream.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    if !config.catalog.items.is_empty() {
        // Inline items were already validated during load_config, but this
        // function is also callable with a hand-built Config.
        validate_items(&config.catalog.items)?;
        return Ok(Catalog::new(config.catalog.items.clone()));
    }

    if let Some(file) = &config.catalog.file {
        let path = PathBuf::from(file);
        info!("Loading catalog from file: {}", path.display());
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let parsed: CatalogFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML from catalog file: {}", path.display()))?;
        validate_items(&parsed.items)
            .with_context(|| format!("Invalid catalog in '{}'", path.display()))?;
        if parsed.items.is_empty() {
            return Err(anyhow!(ReelrecError::Config(format!(
                "Catalog file '{}' contains no items.",
                path.display()
            ))));
        }
        return Ok(Catalog::new(parsed.items));
    }

    debug!("No catalog configured; using the built-in demo catalog.");
    Ok(Catalog::builtin())
}

fn load_explicit_config() -> Result<Option<Config>> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => {
            let expanded = shellexpand::tilde(&path).into_owned();
            let config_path = PathBuf::from(expanded);
            info!(
                "Loading configuration from {}: {}",
                CONFIG_ENV_VAR,
                config_path.display()
            );
            if !config_path.is_file() {
                return Err(anyhow!(ReelrecError::Config(format!(
                    "{} points at '{}', which is not a readable file.",
                    CONFIG_ENV_VAR,
                    config_path.display()
                ))));
            }
            load_config_from_path(&config_path).map(Some)
        }
        _ => Ok(None),
    }
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "ReelRec", "reelrec") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.reelrec.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.recommendations.top_n = if project_cfg.recommendations.top_n != default_top_n() {
        project_cfg.recommendations.top_n
    } else {
        user.recommendations.top_n
    };
    // A catalog override is taken wholesale from the nearest source that
    // defines one; inline items and a file path are never mixed across
    // sources.
    merged.catalog = if !project_cfg.catalog.items.is_empty() || project_cfg.catalog.file.is_some()
    {
        project_cfg.catalog
    } else {
        user.catalog
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    if let Some(file) = &config.catalog.file {
        let expanded = shellexpand::tilde(file).into_owned();
        debug!("Expanded catalog file path: {}", expanded);
        config.catalog.file = Some(expanded);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.recommendations.top_n == 0 {
        return Err(anyhow!(ReelrecError::Config(
            "recommendations.top_n must be at least 1.".to_string()
        )));
    }
    if let Some(file) = &config.catalog.file {
        if !config.catalog.items.is_empty() {
            warn!(
                "Both inline catalog items and a catalog file ('{}') are configured; \
                 inline items take precedence.",
                file
            );
        }
        let path = PathBuf::from(file);
        if path.exists() && !path.is_file() {
            return Err(anyhow!(ReelrecError::Config(format!(
                "Configured catalog path '{}' exists but is not a file.",
                path.display()
            ))));
        }
    }
    validate_items(&config.catalog.items)?;
    info!("Configuration validation successful.");
    Ok(())
}

/// Checks catalog shape: unique ids, non-empty titles and genres, and
/// duplicate-free tag sets. The engine assumes all of this downstream.
fn validate_items(items: &[Item]) -> Result<()> {
    let mut seen_ids = Vec::with_capacity(items.len());
    for item in items {
        if seen_ids.contains(&item.id) {
            return Err(anyhow!(ReelrecError::Config(format!(
                "Duplicate catalog id {} (titles must have unique ids).",
                item.id
            ))));
        }
        seen_ids.push(item.id);
        if item.title.trim().is_empty() {
            return Err(anyhow!(ReelrecError::Config(format!(
                "Catalog item {} has an empty title.",
                item.id
            ))));
        }
        if item.genre.trim().is_empty() {
            return Err(anyhow!(ReelrecError::Config(format!(
                "Catalog item {} ('{}') has an empty genre.",
                item.id, item.title
            ))));
        }
        for (idx, tag) in item.tags.iter().enumerate() {
            if item.tags[..idx].contains(tag) {
                return Err(anyhow!(ReelrecError::Config(format!(
                    "Catalog item {} ('{}') lists tag '{}' more than once.",
                    item.id, item.title, tag
                ))));
            }
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [recommendations]
            top_n = 5

            [catalog]
            file = "~/movies/catalog.toml"

            [[catalog.items]]
            id = 1
            title = "The Matrix"
            genre = "Sci-Fi"
            year = 1999
            tags = ["action", "philosophy"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.recommendations.top_n, 5);
        assert_eq!(config.catalog.items.len(), 1);
        assert_eq!(config.catalog.items[0].title, "The Matrix");
        assert_eq!(config.catalog.items[0].tags, vec!["action", "philosophy"]);
        assert_eq!(
            config.catalog.file.as_deref(),
            Some("~/movies/catalog.toml") // Not yet expanded
        );
    }

    #[test]
    fn test_defaults_apply_when_sections_missing() {
        let config: Config = toml::from_str("").expect("Empty config should parse");
        assert_eq!(config.recommendations.top_n, default_top_n());
        assert!(config.catalog.items.is_empty());
        assert!(config.catalog.file.is_none());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            catalog: CatalogConfig {
                file: Some("~/movies/catalog.toml".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.catalog.file.as_deref().unwrap(),
            home_dir.join("movies/catalog.toml").to_string_lossy()
        );
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            recommendations: RecommendationsConfig { top_n: 5 },
            catalog: CatalogConfig {
                file: Some("/user/catalog.toml".into()),
                ..Default::default()
            },
        };
        let project = Config {
            recommendations: RecommendationsConfig { top_n: 2 },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        // Project top_n wins; project had no catalog so the user's stays.
        assert_eq!(merged.recommendations.top_n, 2);
        assert_eq!(merged.catalog.file.as_deref(), Some("/user/catalog.toml"));
    }

    #[test]
    fn test_merge_keeps_user_top_n_when_project_is_default() {
        let user = Config {
            recommendations: RecommendationsConfig { top_n: 7 },
            ..Default::default()
        };
        let merged = merge_configs(user, Some(Config::default()));
        assert_eq!(merged.recommendations.top_n, 7);
    }

    #[test]
    fn test_validate_config_rejects_zero_top_n() {
        let config = Config {
            recommendations: RecommendationsConfig { top_n: 0 },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must be at least 1"));
    }

    #[test]
    fn test_validate_items_rejects_duplicate_ids_and_tags() {
        let item = |id: u32, tags: Vec<&str>| Item {
            id,
            title: format!("Film {id}"),
            genre: "Drama".into(),
            year: 2000,
            tags: tags.into_iter().map(String::from).collect(),
        };

        let dup_ids = vec![item(1, vec![]), item(1, vec![])];
        assert!(validate_items(&dup_ids)
            .unwrap_err()
            .to_string()
            .contains("Duplicate catalog id 1"));

        let dup_tags = vec![item(1, vec!["noir", "noir"])];
        assert!(validate_items(&dup_tags)
            .unwrap_err()
            .to_string()
            .contains("more than once"));

        let fine = vec![item(1, vec!["noir"]), item(2, vec!["noir"])];
        assert!(validate_items(&fine).is_ok());
    }

    #[test]
    fn test_load_catalog_prefers_inline_items() {
        let config = Config {
            catalog: CatalogConfig {
                items: vec![Item {
                    id: 10,
                    title: "Inline".into(),
                    genre: "Drama".into(),
                    year: 2001,
                    tags: vec![],
                }],
                file: Some("/does/not/matter.toml".into()),
            },
            ..Default::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(10));
    }

    #[test]
    fn test_load_catalog_from_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
            [[items]]
            id = 1
            title = "Metropolis"
            genre = "Sci-Fi"
            year = 1927
            tags = ["silent"]

            [[items]]
            id = 2
            title = "Sunrise"
            genre = "Drama"
            year = 1927
            "#,
        )?;

        let config = Config {
            catalog: CatalogConfig {
                file: Some(path.to_string_lossy().to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let catalog = load_catalog(&config)?;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "Metropolis");
        // Missing tags array defaults to empty.
        assert!(catalog.get(2).unwrap().tags.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_catalog_rejects_empty_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("empty.toml");
        fs::write(&path, "")?;

        let config = Config {
            catalog: CatalogConfig {
                file: Some(path.to_string_lossy().to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = load_catalog(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no items"));
        Ok(())
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(&Config::default()).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get(1).unwrap().title, "The Matrix");
    }
}
