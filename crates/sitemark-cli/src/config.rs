//! Site configuration loaded from `sitemark.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{Result, SiteError};

/// Entries never copied as static assets
const DEFAULT_EXCLUDE: &[&str] = &[
    "public",
    "docs",
    ".git",
    "src",
    "build.sh",
    "main.sh",
    "test.sh",
    "template.html",
    ".gitignore",
    "content",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the Markdown pages
    pub content_dir: PathBuf,
    /// Directory whose files are copied verbatim
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    /// File and directory names skipped while copying static assets
    pub exclude: Vec<String>,
    /// Remove the output directory before building
    pub clean_output: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            clean_output: true,
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from a TOML string
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check if a file or directory name is excluded from static copying
    pub fn is_excluded(&self, name: &str) -> bool {
        is_excluded(&self.exclude, name)
    }
}

/// Check `name` against an exclusion list by exact match
pub(crate) fn is_excluded(exclude: &[String], name: &str) -> bool {
    exclude.iter().any(|e| e == name)
}
