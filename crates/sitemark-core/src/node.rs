//! HTML node tree
//!
//! This module defines the nodes produced by the Markdown converter. A tree is
//! built bottom-up and consumed once by [`crate::to_html`].
//!
//! The "required" fields (`value` on leaves, `tag` and `children` on parents)
//! are optional here so that malformed trees can still be constructed; the
//! serializer rejects them with an [`crate::HtmlError`].

use indexmap::IndexMap;

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node of the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text or a single-content element such as `<b>` or `<img>`
    Leaf(LeafNode),

    /// Container element whose content is entirely its children
    Parent(ParentNode),
}

/// A childless node carrying terminal text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// `None` renders the value as raw text
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A container node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    /// An empty vector is valid; `None` is not
    pub children: Option<Vec<Node>>,
    pub attributes: Attributes,
}

impl Node {
    /// Create a raw text node (no tag)
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Create a leaf element such as `<b>value</b>`
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Create a leaf element with attributes
    pub fn leaf_with_attrs(tag: &str, value: impl Into<String>, attrs: Vec<(&str, &str)>) -> Self {
        Node::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: collect_attrs(attrs),
        })
    }

    /// Create a container element
    pub fn parent(tag: &str, children: Vec<Node>) -> Self {
        Node::Parent(ParentNode {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Attributes::new(),
        })
    }

    /// Create a container element with attributes
    pub fn parent_with_attrs(tag: &str, children: Vec<Node>, attrs: Vec<(&str, &str)>) -> Self {
        Node::Parent(ParentNode {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: collect_attrs(attrs),
        })
    }

    /// Set an attribute, replacing any existing value for the same key
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Check if this is a parent node
    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent(_))
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Get the attributes of this node
    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Parent(parent) => &parent.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Leaf(leaf) => &mut leaf.attributes,
            Node::Parent(parent) => &mut parent.attributes,
        }
    }

    /// Get the children of a parent node; leaves have none
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Leaf(_) => None,
            Node::Parent(parent) => parent.children.as_deref(),
        }
    }

    /// Concatenated leaf values of this subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Leaf(leaf) => leaf.value.clone().unwrap_or_default(),
            Node::Parent(parent) => parent
                .children
                .iter()
                .flatten()
                .map(|child| child.text_content())
                .collect(),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
