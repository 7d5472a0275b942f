//! Built-in rules turning Markdown blocks into HTML subtrees.

use sitemark_core::Node;

use super::Rule;
use crate::block::BlockType;
use crate::inline::text_to_nodes;

/// Create all built-in rules
pub fn markdown_rules() -> Vec<Rule> {
    vec![
        paragraph_rule(),
        heading_rule(),
        code_block_rule(),
        quote_rule(),
        unordered_list_rule(),
        ordered_list_rule(),
    ]
}

fn paragraph_rule() -> Rule {
    Rule::for_kind(&BlockType::Paragraph, |block, _| {
        Node::parent("p", text_to_nodes(block))
    })
}

fn heading_rule() -> Rule {
    Rule::for_kind(&BlockType::Heading { level: 1 }, |block, block_type| {
        let level = match block_type {
            BlockType::Heading { level } => (*level).clamp(1, 6),
            _ => block.chars().take_while(|&c| c == '#').count().clamp(1, 6) as u8,
        };

        let text = block
            .get(level as usize..)
            .unwrap_or_default()
            .trim();

        Node::parent(&format!("h{level}"), text_to_nodes(text))
    })
}

fn code_block_rule() -> Rule {
    Rule::for_kind(&BlockType::Code, |block, _| {
        // Drop the fence lines
        let lines: Vec<&str> = block.split('\n').collect();
        let inner = if lines.len() > 2 {
            lines[1..lines.len() - 1].join("\n")
        } else {
            String::new()
        };

        let code = Node::parent("code", text_to_nodes(&inner));
        Node::parent("pre", vec![code])
    })
}

fn quote_rule() -> Rule {
    Rule::for_kind(&BlockType::Quote, |block, _| {
        let text = block.trim_start_matches('>').trim();
        Node::parent("blockquote", text_to_nodes(text))
    })
}

fn unordered_list_rule() -> Rule {
    Rule::for_kind(&BlockType::UnorderedList, |block, _| {
        let items = block
            .split('\n')
            .map(|line| {
                let text = line
                    .strip_prefix("* ")
                    .or_else(|| line.strip_prefix("- "))
                    .unwrap_or(line)
                    .trim();
                Node::parent("li", text_to_nodes(text))
            })
            .collect();

        Node::parent("ul", items)
    })
}

fn ordered_list_rule() -> Rule {
    Rule::for_kind(&BlockType::OrderedList, |block, _| {
        let items = block
            .split('\n')
            .map(|line| {
                let text = line
                    .split_once(". ")
                    .map(|(_, rest)| rest)
                    .unwrap_or(line)
                    .trim();
                Node::parent("li", text_to_nodes(text))
            })
            .collect();

        Node::parent("ol", items)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::block_to_block_type;
    use crate::rules::Rules;
    use pretty_assertions::assert_eq;
    use sitemark_core::to_html;

    fn build(block: &str) -> String {
        let block_type = block_to_block_type(block);
        let node = Rules::new()
            .for_block(&block_type)
            .unwrap()
            .build(block, &block_type);
        to_html(&node).unwrap()
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(
            build("This is **bolded** paragraph\ntext in a p\ntag here"),
            "<p>This is <b>bolded</b> paragraph\ntext in a p\ntag here</p>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(build("# Title"), "<h1>Title</h1>");
        assert_eq!(build("### Deep *heading*"), "<h3>Deep <i>heading</i></h3>");
        assert_eq!(build("###### six"), "<h6>six</h6>");
    }

    #[test]
    fn test_heading_tag_matches_level() {
        for level in 1..=6u8 {
            let block = format!("{} text", "#".repeat(level as usize));
            assert_eq!(block_to_block_type(&block), BlockType::Heading { level });
            let node = Rules::new()
                .for_block(&BlockType::Heading { level })
                .unwrap()
                .build(&block, &BlockType::Heading { level });
            assert_eq!(node.tag(), Some(format!("h{level}").as_str()));
        }
    }

    #[test]
    fn test_heading_level_clamped_for_long_runs() {
        let block = format!("{} deep", "#".repeat(300));
        let rules = Rules::new();
        let rule = rules.for_block(&BlockType::Heading { level: 1 }).unwrap();

        let node = rule.build(&block, &BlockType::Paragraph);
        assert_eq!(node.tag(), Some("h6"));

        let node = rule.build("# x", &BlockType::Heading { level: 9 });
        assert_eq!(node.tag(), Some("h6"));
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            build("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
            "<pre><code>This is text that _should_ remain\nthe <b>same</b> even with inline stuff</code></pre>"
        );
    }

    #[test]
    fn test_code_block_without_body() {
        assert_eq!(build("```\n```"), "<pre><code></code></pre>");
        assert_eq!(build("```"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_quote_strips_whole_block_once() {
        assert_eq!(
            build("> This is a\n> blockquote block"),
            "<blockquote>This is a\n> blockquote block</blockquote>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            build("* a\n- **b**\n* c"),
            "<ul><li>a</li><li><b>b</b></li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            build("1. first\n2. second with `code`"),
            "<ol><li>first</li><li>second with <code>code</code></li></ol>"
        );
    }
}
