//! Rule and Filter types for block conversion.

use std::mem::{discriminant, Discriminant};

use sitemark_core::Node;

use crate::block::BlockType;

/// Type alias for builder functions: block text and its type to a subtree
pub type BuildFn = Box<dyn Fn(&str, &BlockType) -> Node + Send + Sync>;

/// A filter determines which block types a rule applies to
pub enum Filter {
    /// Match a single block type name
    Name(String),
    /// Match any of multiple block type names
    Names(Vec<String>),
    /// Match a block type variant, ignoring its data (e.g. any heading level)
    Kind(Discriminant<BlockType>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&BlockType) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single block type name
    pub fn name(name: &str) -> Self {
        Filter::Name(name.to_string())
    }

    /// Create a filter for multiple block type names
    pub fn names(names: &[&str]) -> Self {
        Filter::Names(names.iter().map(|s| s.to_string()).collect())
    }

    /// Create a filter for the variant of `block_type`
    pub fn kind(block_type: &BlockType) -> Self {
        Filter::Kind(discriminant(block_type))
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&BlockType) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a block type
    pub fn matches(&self, block_type: &BlockType) -> bool {
        match self {
            Filter::Name(name) => block_type.name() == name,
            Filter::Names(names) => names.iter().any(|n| n == block_type.name()),
            Filter::Kind(kind) => discriminant(block_type) == *kind,
            Filter::Predicate(f) => f(block_type),
        }
    }
}

/// A rule defines how to build the subtree of a matched block
pub struct Rule {
    /// Filter to determine which blocks this rule applies to
    pub filter: Filter,
    /// Builder function that produces the subtree
    pub build: BuildFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, build: F) -> Self
    where
        F: Fn(&str, &BlockType) -> Node + Send + Sync + 'static,
    {
        Self {
            filter,
            build: Box::new(build),
        }
    }

    /// Create a rule that matches a single block type name
    pub fn for_block<F>(name: &str, build: F) -> Self
    where
        F: Fn(&str, &BlockType) -> Node + Send + Sync + 'static,
    {
        Self::new(Filter::name(name), build)
    }

    /// Create a rule that matches the variant of `block_type`
    pub fn for_kind<F>(block_type: &BlockType, build: F) -> Self
    where
        F: Fn(&str, &BlockType) -> Node + Send + Sync + 'static,
    {
        Self::new(Filter::kind(block_type), build)
    }

    /// Apply this rule's builder
    pub fn build(&self, block: &str, block_type: &BlockType) -> Node {
        (self.build)(block, block_type)
    }
}
