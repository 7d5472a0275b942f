//! MarkdownService - the main entry point for Markdown to HTML conversion.

use log::debug;
use sitemark_core::{to_html, Node};

use crate::block::{block_to_block_type, markdown_to_blocks};
use crate::rules::{Rule, Rules};
use crate::utilities::{fill_template, strip_root_wrapper};
use crate::{Result, SitemarkError};

/// Options for MarkdownService
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Strip the root `<div>` before embedding content into a page
    pub strip_root_wrapper: bool,

    /// Placeholder replaced by the page title
    pub title_placeholder: String,

    /// Placeholder replaced by the page content
    pub content_placeholder: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            strip_root_wrapper: true,
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

/// The main service for converting Markdown to HTML
pub struct MarkdownService {
    options: ConvertOptions,
    rules: Rules,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Create a MarkdownService with a custom rule set
    pub fn with_rules(options: ConvertOptions, rules: Rules) -> Self {
        Self { options, rules }
    }

    /// Add a custom block rule, checked before the built-in ones
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Convert Markdown to a node tree rooted at a `<div>`
    pub fn markdown_to_html_node(&self, markdown: &str) -> Result<Node> {
        let blocks = markdown_to_blocks(markdown);
        let mut children = Vec::with_capacity(blocks.len());

        for block in blocks {
            let block_type = block_to_block_type(block);
            debug!("block classified as {}", block_type.name());

            let rule = self
                .rules
                .for_block(&block_type)
                .ok_or(SitemarkError::UnknownBlockType(block_type))?;
            children.push(rule.build(block, &block_type));
        }

        Ok(Node::parent("div", children))
    }

    /// Convert Markdown to an HTML string, including the root `<div>`
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        let node = self.markdown_to_html_node(markdown)?;
        Ok(to_html(&node)?)
    }

    /// Convert Markdown to the HTML fragment embedded into a page
    pub fn render_content(&self, markdown: &str) -> Result<String> {
        let html = self.to_html(markdown)?;
        if self.options.strip_root_wrapper {
            Ok(strip_root_wrapper(&html).to_string())
        } else {
            Ok(html)
        }
    }

    /// Text of the first `# ` heading line, trimmed
    pub fn extract_title(&self, markdown: &str) -> Result<String> {
        markdown
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(|title| title.trim().to_string())
            .ok_or(SitemarkError::NoTitleFound)
    }

    /// Render a full page by filling the title and content placeholders
    pub fn render_page(&self, markdown: &str, template: &str) -> Result<String> {
        let content = self.render_content(markdown)?;
        let title = self.extract_title(markdown)?;

        Ok(fill_template(
            template,
            &[
                (self.options.title_placeholder.as_str(), title.as_str()),
                (self.options.content_placeholder.as_str(), content.as_str()),
            ],
        ))
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}
