//! # sitemark
//!
//! Convert Markdown to an HTML node tree.
//!
//! The converter works in three layers:
//!
//! - **Inline parsing** splits text into typed spans (plain, bold, italic,
//!   code, link, image) by scanning for delimiters.
//! - **Block parsing** splits a document on blank lines and classifies each
//!   block as a heading, code fence, quote, list or paragraph.
//! - **Tree building** turns every block into a [`Node`] subtree and wraps the
//!   result in a single root `<div>`.
//!
//! Only a small, strict subset of Markdown is understood: delimiters are
//! matched one level deep, links and images use the nearest brackets, and list
//! items are flat.
//!
//! ## Example
//!
//! ```rust
//! use sitemark::MarkdownService;
//!
//! let service = MarkdownService::new();
//! let html = service.to_html("# Title\n\nHello **world**").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Hello <b>world</b></p></div>");
//!
//! let title = service.extract_title("# Title\n\nHello").unwrap();
//! assert_eq!(title, "Title");
//! ```

pub mod block;
pub mod inline;
pub mod rules;
mod service;
mod utilities;

pub use block::{block_to_block_type, markdown_to_blocks, BlockType};
pub use inline::{split_delimiter, text_to_nodes, text_to_spans, SpanKind, TextSpan};
pub use rules::{Filter, Rule, Rules};
pub use service::{ConvertOptions, MarkdownService};
pub use sitemark_core::{to_html, HtmlError, Node};
pub use utilities::{fill_template, strip_root_wrapper};

/// Error type for sitemark operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SitemarkError {
    #[error(transparent)]
    Html(#[from] HtmlError),

    #[error("closing delimiter `{delimiter}` not found")]
    UnterminatedDelimiter { delimiter: String },

    #[error("no H1 header found")]
    NoTitleFound,

    #[error("unknown block type: {0:?}")]
    UnknownBlockType(BlockType),
}

pub type Result<T> = std::result::Result<T, SitemarkError>;
