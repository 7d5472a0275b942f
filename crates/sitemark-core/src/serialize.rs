//! HTML serialization
//!
//! Converts a node tree into HTML markup. Text and attribute values are
//! written verbatim.

use crate::node::{Attributes, LeafNode, Node, ParentNode};
use crate::{HtmlError, Result};

/// Serialize a node tree to an HTML string
pub fn to_html(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(1024);
    serialize_node(node, &mut output)?;
    Ok(output)
}

/// Render attributes as ` key="value"` pairs, or nothing when empty
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    push_attributes(attributes, &mut out);
    out
}

fn serialize_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf(leaf) => serialize_leaf(leaf, out),
        Node::Parent(parent) => serialize_parent(parent, out),
    }
}

fn serialize_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let value = leaf.value.as_deref().ok_or(HtmlError::MissingValue)?;

    match leaf.tag.as_deref() {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, &leaf.attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn serialize_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let tag = parent.tag.as_deref().ok_or(HtmlError::MissingTag)?;
    let children = parent
        .children
        .as_ref()
        .ok_or_else(|| HtmlError::MissingChildren {
            tag: tag.to_string(),
        })?;

    open_tag(tag, &parent.attributes, out);
    for child in children {
        serialize_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
