//! Minimal TSDoc reader.
//!
//! A documentation comment is split into a summary section and the tagged
//! blocks that follow it. The summary is kept as a tree of nodes whose leaves
//! carry the exact source excerpts, so rendering it back is a plain
//! depth-first walk.

/// Tags that flag a declaration instead of opening a content block.
const MODIFIER_TAGS: &[&str] = &[
    "alpha",
    "beta",
    "eventProperty",
    "experimental",
    "internal",
    "override",
    "packageDocumentation",
    "public",
    "readonly",
    "sealed",
    "virtual",
];

/// Node categories produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocNodeKind {
    Section,
    Paragraph,
    PlainText,
    SoftBreak,
    EscapedText,
    CodeSpan,
    InlineTag,
    Excerpt,
}

/// A node in the parsed documentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNode {
    pub kind: DocNodeKind,
    excerpt: Option<String>,
    children: Vec<DocNode>,
}

impl DocNode {
    fn container(kind: DocNodeKind, children: Vec<DocNode>) -> Self {
        Self {
            kind,
            excerpt: None,
            children,
        }
    }

    fn leaf(kind: DocNodeKind, excerpt: impl Into<String>) -> Self {
        Self {
            kind,
            excerpt: Some(excerpt.into()),
            children: Vec::new(),
        }
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[DocNode] {
        &self.children
    }
}

/// Tree shape needed to render excerpt text.
pub trait DocTree: Sized {
    /// Child nodes in document order.
    fn child_nodes(&self) -> &[Self];

    /// Source text carried by this node, if any.
    fn excerpt(&self) -> Option<&str>;
}

impl DocTree for DocNode {
    fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }
}

/// Concatenate every excerpt under `node`, pre-order.
pub fn render_excerpts<T: DocTree>(node: &T) -> String {
    let mut output = String::new();
    push_excerpts(node, &mut output);
    output
}

fn push_excerpts<T: DocTree>(node: &T, output: &mut String) {
    if let Some(excerpt) = node.excerpt() {
        output.push_str(excerpt);
    }
    for child in node.child_nodes() {
        push_excerpts(child, output);
    }
}

/// Parsed documentation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// Everything before the first tag.
    pub summary_section: DocNode,
    /// Block tags in order of appearance, without the `@`.
    pub block_tags: Vec<String>,
    /// Modifier tags such as `public` or `internal`.
    pub modifier_tags: Vec<String>,
    /// `false` when the comment does not use `/** ... */` delimiters.
    pub well_formed: bool,
}

impl DocComment {
    fn empty(well_formed: bool) -> Self {
        Self {
            summary_section: DocNode::container(DocNodeKind::Section, Vec::new()),
            block_tags: Vec::new(),
            modifier_tags: Vec::new(),
            well_formed,
        }
    }

    /// Summary text exactly as written, line prefixes removed.
    pub fn summary(&self) -> String {
        render_excerpts(&self.summary_section)
    }

    /// Returns `true` if the comment carries the given modifier tag.
    pub fn has_modifier(&self, tag: &str) -> bool {
        self.modifier_tags.iter().any(|t| t == tag)
    }
}

/// Parse a complete block comment, delimiters included.
pub fn parse_doc_comment(text: &str) -> DocComment {
    let text = text.trim();
    if text.len() < 5 || !text.starts_with("/**") || !text.ends_with("*/") {
        return DocComment::empty(false);
    }

    let lines = normalize_lines(&text[3..text.len() - 2]);
    let mut comment = DocComment::empty(true);
    let mut summary_lines = Vec::new();
    let mut in_summary = true;
    let mut in_fence = false;

    for line in lines {
        if line.starts_with("```") {
            in_fence = !in_fence;
        } else if !in_fence {
            if let Some(tag) = leading_tag(&line) {
                in_summary = false;
                if MODIFIER_TAGS.contains(&tag) {
                    comment.modifier_tags.push(tag.to_string());
                } else {
                    comment.block_tags.push(tag.to_string());
                }
                continue;
            }
        }
        if in_summary {
            summary_lines.push(line);
        }
    }

    while summary_lines.last().is_some_and(|line| line.is_empty()) {
        summary_lines.pop();
    }
    comment.summary_section = build_section(&summary_lines);
    comment
}

/// First paragraph of `summary`, on one line.
pub fn extract_brief(summary: &str) -> String {
    let summary = summary.replace("\r\n", "\n");
    let brief = match summary.find("\n\n") {
        Some(index) if index > 0 => &summary[..index],
        _ => summary.as_str(),
    };
    brief.trim().replace('\n', " ")
}

fn normalize_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim().to_string()
        })
        .skip_while(|line| line.is_empty())
        .collect()
}

fn leading_tag(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('@')?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let tag = &rest[..end];
    tag.starts_with(|c: char| c.is_ascii_alphabetic())
        .then_some(tag)
}

fn build_section(lines: &[String]) -> DocNode {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let next_is_text = lines.get(index + 1).is_some_and(|next| !next.is_empty());
        if !line.is_empty() {
            current.extend(tokenize_line(line));
        }
        current.push(DocNode::leaf(DocNodeKind::SoftBreak, "\n"));
        if line.is_empty() && next_is_text {
            paragraphs.push(DocNode::container(
                DocNodeKind::Paragraph,
                std::mem::take(&mut current),
            ));
        }
    }
    if !current.is_empty() {
        paragraphs.push(DocNode::container(DocNodeKind::Paragraph, current));
    }

    DocNode::container(DocNodeKind::Section, paragraphs)
}

fn tokenize_line(line: &str) -> Vec<DocNode> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let special = match c {
            '`' => code_span(rest),
            '{' if rest.starts_with("{@") => inline_tag(rest),
            '\\' => escaped_text(rest),
            _ => None,
        };
        match special {
            Some((node, consumed)) => {
                flush_text(&mut text, &mut nodes);
                nodes.push(node);
                rest = &rest[consumed..];
            }
            None => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    flush_text(&mut text, &mut nodes);
    nodes
}

fn flush_text(text: &mut String, nodes: &mut Vec<DocNode>) {
    if !text.is_empty() {
        nodes.push(DocNode::leaf(DocNodeKind::PlainText, std::mem::take(text)));
    }
}

fn code_span(input: &str) -> Option<(DocNode, usize)> {
    let close = input[1..].find('`')? + 1;
    let node = DocNode::container(
        DocNodeKind::CodeSpan,
        vec![
            DocNode::leaf(DocNodeKind::Excerpt, "`"),
            DocNode::leaf(DocNodeKind::Excerpt, &input[1..close]),
            DocNode::leaf(DocNodeKind::Excerpt, "`"),
        ],
    );
    Some((node, close + 1))
}

fn inline_tag(input: &str) -> Option<(DocNode, usize)> {
    let close = input.find('}')?;
    let inner = &input[1..close];
    let name_end = inner[1..]
        .find(|c: char| !c.is_ascii_alphanumeric())
        .map_or(inner.len(), |index| index + 1);
    if name_end == 1 {
        return None;
    }
    let mut children = vec![
        DocNode::leaf(DocNodeKind::Excerpt, "{"),
        DocNode::leaf(DocNodeKind::Excerpt, &inner[..name_end]),
    ];
    if name_end < inner.len() {
        children.push(DocNode::leaf(DocNodeKind::Excerpt, &inner[name_end..]));
    }
    children.push(DocNode::leaf(DocNodeKind::Excerpt, "}"));
    Some((DocNode::container(DocNodeKind::InlineTag, children), close + 1))
}

fn escaped_text(input: &str) -> Option<(DocNode, usize)> {
    let escaped = input[1..].chars().next()?;
    if !escaped.is_ascii_punctuation() {
        return None;
    }
    let consumed = 1 + escaped.len_utf8();
    Some((
        DocNode::leaf(DocNodeKind::EscapedText, &input[..consumed]),
        consumed,
    ))
}
