//! # sitemark-cli
//!
//! Build a static site from a directory of Markdown files.
//!
//! Every `.md` file under the content directory is converted with
//! [`sitemark::MarkdownService`], embedded into an HTML template through the
//! `{{ Title }}` and `{{ Content }}` placeholders, and written to the same
//! relative path (with an `.html` extension) under the output directory.
//! Static assets are copied alongside.

mod config;
mod site;

pub use config::SiteConfig;
pub use site::{build_site, copy_static, generate_page, generate_pages_recursive, BuildReport};

use std::path::PathBuf;

use sitemark::SitemarkError;

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to parse config file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to convert {}: {source}", path.display())]
    Convert {
        path: PathBuf,
        source: SitemarkError,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
