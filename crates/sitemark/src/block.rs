//! Block parsing: splitting a document into blocks and classifying them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening and closing marker of a code block
pub const FENCE: &str = "```";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) ").unwrap());

/// The type of a Markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    /// `#` to `######` followed by a space
    Heading { level: u8 },
    /// Fenced with three backticks on both ends
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    /// Name used to select block rules
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading { .. } => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

/// Split a document on blank lines into trimmed, non-empty blocks
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Heading level of a block, if it is a heading
pub fn heading_level(block: &str) -> Option<u8> {
    HEADING_RE
        .captures(block)
        .map(|caps| caps[1].len() as u8)
}

/// Classify a trimmed block. The first matching type wins; anything
/// malformed is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if block.starts_with('#') {
        return match heading_level(block) {
            Some(level) => BlockType::Heading { level },
            None => BlockType::Paragraph,
        };
    }

    if block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if lines
        .iter()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        return BlockType::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}
