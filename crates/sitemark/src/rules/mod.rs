//! Rule system for building node subtrees from blocks.

mod markdown;
mod rule;

pub use markdown::markdown_rules;
pub use rule::{BuildFn, Filter, Rule};

use indexmap::IndexMap;

use crate::block::BlockType;

/// Collection of rules for conversion
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in Markdown rules
    markdown_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in Markdown rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            markdown_rules: markdown_rules(),
        }
    }

    /// Create a Rules instance with no rules at all
    pub fn empty() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            markdown_rules: Vec::new(),
        }
    }

    /// Add a custom rule; a rule with the same key is replaced
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Find the rule for a block type
    pub fn for_block(&self, block_type: &BlockType) -> Option<&Rule> {
        self.custom_rules
            .values()
            .chain(self.markdown_rules.iter())
            .find(|rule| rule.filter.matches(block_type))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
