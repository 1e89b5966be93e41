//! Board configuration.
//!
//! Loaded from an optional `board.toml` at the site root. Every option has a
//! default matching the conventional static-site layout, so most sites need
//! no config file at all:
//!
//! ```toml
//! posts_dir = "data/posts"          # Post sources, also the body fetch dir
//! index_path = "data/posts.json"    # Generated index, relative to the root
//! extensions = ["md", "markdown", "html"]
//! on_invalid_front_matter = "abort" # or "skip"
//!
//! [hosting]
//! subpath_suffixes = ["github.io"]  # Hosts that serve sites under /<repo>/
//!
//! [render]
//! markdown = true                   # false renders .md bodies as plain text
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "board.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// What the index builder does with a post whose header does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontMatterPolicy {
    /// Stop the build and report the file.
    #[default]
    Abort,
    /// Leave the file out of the index and keep going.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Directory holding post sources, relative to the site root.
    pub posts_dir: String,
    /// Output path of the generated index, relative to the site root.
    pub index_path: String,
    /// Post file extensions (without the dot), matched case-insensitively.
    pub extensions: Vec<String>,
    pub on_invalid_front_matter: FrontMatterPolicy,
    pub hosting: HostingConfig,
    pub render: RenderConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            posts_dir: "data/posts".to_string(),
            index_path: "data/posts.json".to_string(),
            extensions: vec!["md".to_string(), "markdown".to_string(), "html".to_string()],
            on_invalid_front_matter: FrontMatterPolicy::Abort,
            hosting: HostingConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Deployment hosting settings used to compute the base path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostingConfig {
    /// Host suffixes whose sites live under a first path segment
    /// (`https://user.github.io/<repo>/`).
    pub subpath_suffixes: Vec<String>,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            subpath_suffixes: vec!["github.io".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Convert `.md` bodies to HTML. When off they are shown as escaped text.
    pub markdown: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { markdown: true }
    }
}

impl BoardConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "extensions must be bare names like \"md\", got {ext:?}"
            )));
        }
        for (key, value) in [("posts_dir", &self.posts_dir), ("index_path", &self.index_path)] {
            if !is_site_relative(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a non-empty path inside the site root, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Whether `path` has one of the configured post extensions.
    pub fn is_post_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
            })
            .unwrap_or(false)
    }
}

fn is_site_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Load and validate a config file the user named. The file must exist.
pub fn load_config_file(path: &Path) -> Result<BoardConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: BoardConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `board.toml` from a site root. A missing file yields the defaults.
pub fn load_config(root: &Path) -> Result<BoardConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(BoardConfig::default());
    }
    load_config_file(&path)
}

/// A documented stock `board.toml` with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# noticeboard configuration
# All options are optional. Defaults are shown below.
# Unknown keys will cause an error.

# Directory holding post sources (.md, .markdown, .html), relative to the
# site root. Post bodies are fetched from here by the board page too.
posts_dir = "data/posts"

# Where the generated index is written, relative to the site root.
index_path = "data/posts.json"

# File extensions treated as posts (case-insensitive, no leading dot).
extensions = ["md", "markdown", "html"]

# What to do when a post's front matter is not valid YAML:
#   "abort" - stop the build and report the file
#   "skip"  - leave the post out of the index and continue
on_invalid_front_matter = "abort"

[hosting]
# Hosts that serve project sites under a first path segment, e.g.
# https://user.github.io/<repo>/. The board prefixes fetches with /<repo>.
subpath_suffixes = ["github.io"]

[render]
# Convert markdown bodies to HTML. When false they are shown as plain text.
markdown = true
"#
}
