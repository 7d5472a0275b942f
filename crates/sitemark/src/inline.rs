//! Inline parsing: text to typed spans.
//!
//! Text is run through a fixed pipeline of stages. Each stage only looks at
//! spans that are still plain text and splits them further:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. bold `**text**`
//! 4. italic `*text*`
//! 5. code `` `text` ``
//!
//! Every stage handles the first delimiter pair of a span only, and does not
//! re-scan the fragments it split off. An unterminated delimiter makes its
//! stage a no-op, so the delimiter shows up literally in the output.

use log::debug;
use sitemark_core::Node;

use crate::{Result, SitemarkError};

/// The type of an inline span. Links and images carry their URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A typed run of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// The text, or the alt text for images
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    /// The URL of a link or image span
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert this span into a leaf node
    pub fn into_node(self) -> Node {
        match self.kind {
            SpanKind::Plain => Node::text(self.content),
            SpanKind::Bold => Node::leaf("b", self.content),
            SpanKind::Italic => Node::leaf("i", self.content),
            SpanKind::Code => Node::leaf("code", self.content),
            SpanKind::Link { url } => {
                Node::leaf_with_attrs("a", self.content, vec![("href", url.as_str())])
            }
            SpanKind::Image { url } => Node::leaf_with_attrs(
                "img",
                "",
                vec![("src", url.as_str()), ("alt", self.content.as_str())],
            ),
        }
    }
}

/// Markers of a bracketed construct: `open` text `middle` url `close`
struct Bracketed {
    open: &'static str,
    middle: &'static str,
    close: &'static str,
}

const IMAGE: Bracketed = Bracketed {
    open: "![",
    middle: "](",
    close: ")",
};

const LINK: Bracketed = Bracketed {
    open: "[",
    middle: "](",
    close: ")",
};

/// A bracketed match within a string
struct BracketedMatch<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

impl Bracketed {
    /// Find the leftmost `open`, then the next `middle`, then the next `close`.
    /// Brackets are not balanced.
    fn find<'a>(&self, haystack: &'a str) -> Option<BracketedMatch<'a>> {
        let start = haystack.find(self.open)?;
        let text_start = start + self.open.len();
        let middle = text_start + haystack[text_start..].find(self.middle)?;
        let url_start = middle + self.middle.len();
        let close = url_start + haystack[url_start..].find(self.close)?;

        Some(BracketedMatch {
            start,
            end: close + self.close.len(),
            text: &haystack[text_start..middle],
            url: &haystack[url_start..close],
        })
    }

    /// Split every plain span on all matches of this construct
    fn split<F>(&self, spans: Vec<TextSpan>, make: F) -> Vec<TextSpan>
    where
        F: Fn(&str, &str) -> TextSpan,
    {
        let mut result = Vec::with_capacity(spans.len());

        for span in spans {
            if !span.is_plain() {
                result.push(span);
                continue;
            }

            let mut rest = span.content.as_str();
            while let Some(found) = self.find(rest) {
                if found.start > 0 {
                    result.push(TextSpan::plain(&rest[..found.start]));
                }
                result.push(make(found.text, found.url));
                rest = &rest[found.end..];
            }
            if !rest.is_empty() {
                result.push(TextSpan::plain(rest));
            }
        }

        result
    }
}

/// Extract `![alt](url)` images from plain spans
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    IMAGE.split(spans, |alt, url| TextSpan::image(alt, url))
}

/// Extract `[text](url)` links from plain spans
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    LINK.split(spans, |text, url| TextSpan::link(text, url))
}

/// Split the first `delimiter` pair of every plain span into a span of `kind`.
///
/// Text before and after the pair stays plain; empty pieces are dropped.
/// Fails if an opening delimiter has no closing one.
pub fn split_delimiter(spans: &[TextSpan], delimiter: &str, kind: SpanKind) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span.clone());
            continue;
        }

        let text = span.content.as_str();
        let Some(open) = text.find(delimiter) else {
            result.push(span.clone());
            continue;
        };

        let inner_start = open + delimiter.len();
        let close = text[inner_start..]
            .find(delimiter)
            .map(|i| inner_start + i)
            .ok_or_else(|| SitemarkError::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
            })?;

        let before = &text[..open];
        let inner = &text[inner_start..close];
        let after = &text[close + delimiter.len()..];

        if !before.is_empty() {
            result.push(TextSpan::plain(before));
        }
        if !inner.is_empty() {
            result.push(TextSpan::new(inner, kind.clone()));
        }
        if !after.is_empty() {
            result.push(TextSpan::plain(after));
        }
    }

    Ok(result)
}

/// Run a delimiter stage, keeping its input when the stage fails
fn delimiter_stage(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    match split_delimiter(&spans, delimiter, kind) {
        Ok(split) => split,
        Err(err) => {
            debug!("leaving spans unsplit: {err}");
            spans
        }
    }
}

/// Parse inline Markdown into typed spans
pub fn text_to_spans(text: &str) -> Vec<TextSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = delimiter_stage(spans, "**", SpanKind::Bold);
    let spans = delimiter_stage(spans, "*", SpanKind::Italic);
    let spans = delimiter_stage(spans, "`", SpanKind::Code);

    // Only empty delimiter pairs, e.g. "****"
    if spans.is_empty() {
        return vec![TextSpan::plain(text)];
    }

    spans
}

/// Parse inline Markdown straight into leaf nodes
pub fn text_to_nodes(text: &str) -> Vec<Node> {
    text_to_spans(text)
        .into_iter()
        .map(TextSpan::into_node)
        .collect()
}
