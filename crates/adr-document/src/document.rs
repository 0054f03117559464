//! Normalized document and section index
//!
//! Parsing happens once per analysis. Heading lines split the text into
//! sections; section bodies are rendered to plain text with pulldown-cmark so
//! later phases never see markup.

use crate::error::DocumentError;
use crate::text;
use indexmap::IndexMap;
use pulldown_cmark::{Event, Options, Parser as MdParser, Tag, TagEnd};
use serde::Serialize;

/// One section of the document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Normalized key (see [`text::normalize_key`])
    pub key: String,
    /// Heading text as written, without `#` markers
    pub heading: String,
    /// Heading depth (1-6)
    pub level: u8,
    /// Plain-text body
    pub body: String,
    /// Lowercased body
    #[serde(skip)]
    pub body_lower: String,
}

impl Section {
    /// Words in the body
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        text::word_count(&self.body)
    }

    /// Whether the body has any words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

/// Normalized ADR text with its section index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// First level-1 heading, if any
    pub title: Option<String>,
    /// Sections by key, in document order; repeated headings are merged
    pub sections: IndexMap<String, Section>,
    /// Plain text before the first heading
    pub preamble: String,
    /// Plain text of the whole document, headings included
    pub text: String,
    /// Lowercased [`Document::text`]
    #[serde(skip)]
    pub text_lower: String,
    /// YAML frontmatter, if present and well-formed
    pub metadata: Option<serde_yaml::Value>,
    /// Words in [`Document::text`]
    pub word_count: usize,
}

struct RawSection {
    key: String,
    heading: String,
    level: u8,
    lines: Vec<String>,
}

impl Document {
    /// Normalize raw ADR text
    ///
    /// # Errors
    ///
    /// [`DocumentError::Empty`] when the text has no character that is neither
    /// whitespace nor markup.
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        if !text::has_content(raw) {
            return Err(DocumentError::Empty);
        }

        let cleaned = raw.trim_start_matches('\u{feff}').replace("\r\n", "\n").replace('\r', "\n");
        let (metadata, content) = extract_frontmatter(&cleaned);

        let (preamble_lines, raw_sections) = split_sections(content);

        let preamble = plain_text(&preamble_lines.join("\n"));
        let mut text = String::new();
        push_block(&mut text, &preamble);

        let mut title = None;
        let mut sections: IndexMap<String, Section> = IndexMap::new();
        for raw_section in raw_sections {
            let body = plain_text(&raw_section.lines.join("\n"));
            push_block(&mut text, &raw_section.heading);
            push_block(&mut text, &body);

            if title.is_none() && raw_section.level == 1 {
                title = Some(raw_section.heading.clone());
            }

            match sections.get_mut(&raw_section.key) {
                Some(existing) => {
                    if !body.is_empty() {
                        if !existing.body.is_empty() {
                            existing.body.push_str("\n\n");
                        }
                        existing.body.push_str(&body);
                        existing.body_lower = existing.body.to_lowercase();
                    }
                }
                None => {
                    let body_lower = body.to_lowercase();
                    sections.insert(
                        raw_section.key.clone(),
                        Section {
                            key: raw_section.key,
                            heading: raw_section.heading,
                            level: raw_section.level,
                            body,
                            body_lower,
                        },
                    );
                }
            }
        }

        let text_lower = text.to_lowercase();
        let word_count = text::word_count(&text);
        tracing::debug!(
            sections = sections.len(),
            words = word_count,
            frontmatter = metadata.is_some(),
            "normalized document"
        );

        Ok(Self {
            title,
            sections,
            preamble,
            text,
            text_lower,
            metadata,
            word_count,
        })
    }

    /// Section by normalized key
    #[inline]
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    /// Sections in document order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Whether the document has no headings at all
    #[inline]
    #[must_use]
    pub fn is_unstructured(&self) -> bool {
        self.sections.is_empty()
    }
}

fn push_block(out: &mut String, block: &str) {
    if block.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(block);
}

/// Split off a leading `---` YAML block
fn extract_frontmatter(content: &str) -> (Option<serde_yaml::Value>, &str) {
    let Some(rest) = content.strip_prefix("---\n") else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if matches!(line.trim_end(), "---" | "...") {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
                Ok(value) if value.is_mapping() => (Some(value), body),
                Ok(_) | Err(_) => {
                    tracing::debug!("leading block is not YAML frontmatter; keeping it as text");
                    (None, content)
                }
            };
        }
        offset += line.len();
    }
    (None, content)
}

/// Heading level and text for an ATX heading line
fn heading(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim().trim_end_matches('#').trim_end();
    // Level fits: at most six hashes.
    Some((hashes as u8, text))
}

fn split_sections(content: &str) -> (Vec<String>, Vec<RawSection>) {
    let mut preamble = Vec::new();
    let mut sections: Vec<RawSection> = Vec::new();
    let mut fence: Option<&str> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
        } else if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            fence = Some(&trimmed[..3]);
        } else if let Some((level, heading_text)) = heading(line) {
            let key = text::normalize_key(heading_text);
            if !key.is_empty() {
                sections.push(RawSection {
                    key,
                    heading: heading_text.to_string(),
                    level,
                    lines: Vec::new(),
                });
                continue;
            }
        }

        match sections.last_mut() {
            Some(section) => section.lines.push(line.to_string()),
            None => preamble.push(line.to_string()),
        }
    }
    (preamble, sections)
}

/// Render a markdown fragment as plain text
///
/// Code blocks and raw HTML are dropped; link targets are kept in parentheses
/// after the link text so references survive.
fn plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut links: Vec<String> = Vec::new();
    let mut in_code_block = false;

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    for event in MdParser::new_ext(markdown, options) {
        match event {
            Event::Text(t) if !in_code_block => out.push_str(&t),
            Event::Code(code) => out.push_str(&code),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Start(Tag::Link { dest_url, .. }) => links.push(dest_url.to_string()),
            Event::End(TagEnd::Link) => {
                if let Some(url) = links.pop() {
                    if !url.is_empty() && !out.ends_with(url.as_str()) {
                        out.push_str(" (");
                        out.push_str(&url);
                        out.push(')');
                    }
                }
            }
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Item
                | TagEnd::Heading(_)
                | TagEnd::BlockQuote(_)
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => out.push('\n'),
            Event::End(TagEnd::TableCell) => out.push(' '),
            _ => {}
        }
    }

    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn headings_need_a_space() {
        assert_eq!(heading("## Context"), Some((2, "Context")));
        assert_eq!(heading("  # Title #"), Some((1, "Title")));
        assert_eq!(heading("#123 fixed"), None);
        assert_eq!(heading("####### too deep"), None);
        assert_eq!(heading("plain"), None);
    }

    #[test]
    fn plain_text_strips_markup() {
        let md = "Use **Postgres** with `sqlx`.\nSee [the RFC](https://example.com/rfc).\n\n- one\n- two";
        assert_eq!(
            plain_text(md),
            "Use Postgres with sqlx. See the RFC (https://example.com/rfc).\none\ntwo"
        );
    }

    #[test]
    fn plain_text_drops_code_blocks() {
        let md = "Before\n\n```rust\nfn main() {}\n```\n\nAfter";
        assert_eq!(plain_text(md), "Before\nAfter");
    }

    #[test]
    fn autolinks_are_not_duplicated() {
        assert_eq!(plain_text("<https://example.com>"), "https://example.com");
    }

    #[test]
    fn frontmatter_is_split_off() {
        let (meta, body) = extract_frontmatter("---\nstatus: accepted\n---\n# Title\n");
        assert_eq!(body, "# Title\n");
        let meta = meta.unwrap();
        assert_eq!(meta["status"].as_str(), Some("accepted"));
    }

    #[test]
    fn horizontal_rule_is_not_frontmatter() {
        let text = "---\njust text\n---\nmore";
        let (meta, body) = extract_frontmatter(text);
        assert!(meta.is_none());
        assert_eq!(body, text);
    }
}
