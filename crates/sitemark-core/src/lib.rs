//! sitemark-core - HTML node tree and serialization
//!
//! This crate provides the output data structure for sitemark: a small HTML
//! tree made of leaf nodes (text-bearing, childless) and parent nodes
//! (containers), and the serializer that renders it to markup.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──sitemark──▶ ┌───────────┐
//!                               │ Node tree │ ──▶ HTML String
//!                               └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sitemark_core::{to_html, Node};
//!
//! let tree = Node::parent(
//!     "p",
//!     vec![
//!         Node::text("Hello "),
//!         Node::leaf("b", "world"),
//!     ],
//! );
//!
//! assert_eq!(to_html(&tree).unwrap(), "<p>Hello <b>world</b></p>");
//! ```

mod node;
mod serialize;

pub use node::{Attributes, LeafNode, Node, ParentNode};
pub use serialize::{attributes_to_html, to_html};

/// Structural errors found while serializing a node tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node has no value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, HtmlError>;
