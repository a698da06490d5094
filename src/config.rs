use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-release.
///
/// Carries the repository identifiers used for commit permalinks and the tag
/// naming settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub tags: TagsConfig,
}

/// Repository identifiers used only for building commit permalinks.
///
/// Pure string substitution; nothing verifies the links resolve.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub name: String,
}

impl RepositoryConfig {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepositoryConfig {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Build the permalink for a commit hash
    pub fn commit_url(&self, hash: &str) -> String {
        format!(
            "https://github.com/{}/{}/commit/{}",
            self.owner, self.name, hash
        )
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Tag naming configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_tag_prefix(),
        }
    }
}

impl Config {
    /// Tag name for a computed version (e.g., "v1.2.3")
    pub fn tag_name(&self, version: &crate::domain::Version) -> String {
        format!("{}{}", self.tags.prefix, version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in current directory
/// 3. `~/.config/.gitrelease.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitrelease.toml").exists() {
        fs::read_to_string("./gitrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tags.prefix, "v");
        assert_eq!(config.repository.owner, "");
    }

    #[test]
    fn test_commit_url() {
        let repo = RepositoryConfig::new("acme", "widget");
        assert_eq!(
            repo.commit_url("abc1234"),
            "https://github.com/acme/widget/commit/abc1234"
        );
    }

    #[test]
    fn test_tag_name_uses_prefix() {
        let config = Config::default();
        assert_eq!(config.tag_name(&Version::new(1, 2, 3)), "v1.2.3");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
            [repository]
            owner = "acme"
            name = "widget"

            [tags]
            prefix = "release-"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repository.owner, "acme");
        assert_eq!(config.tags.prefix, "release-");
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let toml_str = r#"
            [repository]
            owner = "acme"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repository.name, "");
        assert_eq!(config.tags.prefix, "v");
    }
}
