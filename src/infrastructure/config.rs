//! Site configuration (site.toml)

use crate::domain::{CollectionRegistry, CollectionSpec};
use crate::error::{CollateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file marking a site root
pub const CONFIG_FILE: &str = "site.toml";

/// Directory layout, relative to the site root (`input`) or the input
/// directory (everything else).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub includes: PathBuf,
    pub layouts: PathBuf,
    pub data: PathBuf,
}

impl Default for DirConfig {
    fn default() -> Self {
        DirConfig {
            input: PathBuf::from("."),
            output: PathBuf::from("dist"),
            includes: PathBuf::from("_includes"),
            layouts: PathBuf::from("_includes/layouts"),
            data: PathBuf::from("_globals"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub path_prefix: String,
    pub passthrough: Vec<PathBuf>,
    pub bundles: Vec<String>,
    pub dir: DirConfig,
    #[serde(rename = "collection")]
    pub collections: Vec<CollectionSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path_prefix: "/adventofcode/".to_string(),
            passthrough: vec![PathBuf::from("dist/style.css")],
            bundles: vec!["css".to_string(), "js".to_string()],
            dir: DirConfig::default(),
            collections: vec![
                CollectionSpec::new("aoc2020", "2020/*.md"),
                CollectionSpec::new("aoc2021", "2021/*.md"),
                CollectionSpec::new("aoc2023", "2023/*.md"),
            ],
        }
    }
}

impl Config {
    /// Load config from site.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CollateError::NotSiteDirectory(path.to_path_buf())
            } else {
                CollateError::Io(e)
            }
        })?;

        Self::parse(&contents)
    }

    /// Parse config text, normalizing the path prefix
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)
            .map_err(|e| CollateError::Config(format!("Failed to parse site.toml: {}", e)))?;
        config.path_prefix = normalize_path_prefix(&config.path_prefix);
        Ok(config)
    }

    /// Save config to site.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CollateError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Validate the collection registrations and return them as a registry
    pub fn registry(&self) -> Result<CollectionRegistry> {
        CollectionRegistry::from_specs(&self.collections)
    }
}

/// Make a path prefix start and end with `/`.
pub fn normalize_path_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.path_prefix, "/adventofcode/");
        assert_eq!(config.dir.output, PathBuf::from("dist"));
        assert_eq!(config.collections.len(), 3);
        assert_eq!(config.collections[0], CollectionSpec::new("aoc2020", "2020/*.md"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join("site.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            CollateError::NotSiteDirectory(_) => {}
            other => panic!("Expected NotSiteDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
path_prefix = "blog"

[[collection]]
name = "posts"
glob = "posts/*.md"
"#,
        )
        .unwrap();

        assert_eq!(config.path_prefix, "/blog/");
        assert_eq!(config.dir, DirConfig::default());
        assert_eq!(config.collections, vec![CollectionSpec::new("posts", "posts/*.md")]);
        assert_eq!(config.bundles, vec!["css", "js"]);
    }

    #[test]
    fn test_parse_dir_overrides() {
        let config = Config::parse(
            r#"
[dir]
input = "src"
output = "public"
"#,
        )
        .unwrap();

        assert_eq!(config.dir.input, PathBuf::from("src"));
        assert_eq!(config.dir.output, PathBuf::from("public"));
        assert_eq!(config.dir.includes, PathBuf::from("_includes"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("path_prefix = [");
        assert!(matches!(result, Err(CollateError::Config(msg)) if msg.contains("site.toml")));
    }

    #[test]
    fn test_registry_from_config() {
        let registry = Config::default().registry().unwrap();
        let names: Vec<&str> = registry.specs().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["aoc2020", "aoc2021", "aoc2023"]);
    }

    #[test]
    fn test_normalize_path_prefix() {
        assert_eq!(normalize_path_prefix(""), "/");
        assert_eq!(normalize_path_prefix("/"), "/");
        assert_eq!(normalize_path_prefix("adventofcode"), "/adventofcode/");
        assert_eq!(normalize_path_prefix("/adventofcode/"), "/adventofcode/");
        assert_eq!(normalize_path_prefix("a/b/"), "/a/b/");
    }
}
