//! Splits raw markdown into a title and an ordered list of named sections.
//!
//! Only two heading levels are recognised: `# ` marks the title and `## `
//! opens a section. Deeper headings are ordinary body lines.

use serde::Serialize;
use tracing::debug;

pub const DEFAULT_TITLE: &str = "Untitled Blog Post";
pub const INTRODUCTION: &str = "Introduction";

const TITLE_MARKER: &str = "# ";
const SECTION_MARKER: &str = "## ";

/// A named chunk of the post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub body: String,
}

/// A parsed blog post. Built by [`parse_document`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    /// Sections in order of first appearance. Names are unique.
    pub sections: Vec<Section>,
    /// The unmodified input text.
    pub raw: String,
}

impl Document {
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }
}

/// Parse a markdown blog post. Never fails; missing structure gets defaults.
pub fn parse_document(text: &str) -> Document {
    let title_line = text.split('\n').position(|l| l.starts_with(TITLE_MARKER));
    let title = match title_line {
        Some(idx) => heading_text(text.split('\n').nth(idx).unwrap_or_default()),
        None => DEFAULT_TITLE.to_string(),
    };

    let mut sections: Vec<Section> = Vec::new();
    let mut current = INTRODUCTION.to_string();
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_preamble = true;

    for (idx, line) in text.split('\n').enumerate() {
        if Some(idx) == title_line {
            continue;
        }
        if line.starts_with(SECTION_MARKER) {
            let body = buffer.join("\n");
            if !in_preamble || !body.trim().is_empty() {
                flush(&mut sections, &current, body.trim());
            }
            in_preamble = false;
            current = heading_text(line);
            buffer.clear();
        } else {
            buffer.push(line);
        }
    }
    let body = buffer.join("\n");
    if !in_preamble || !body.trim().is_empty() {
        flush(&mut sections, &current, body.trim());
    }

    if !sections.iter().any(|s| s.name == INTRODUCTION) {
        sections.insert(
            0,
            Section {
                name: INTRODUCTION.to_string(),
                body: String::new(),
            },
        );
    }

    debug!(
        title = %title,
        sections = sections.len(),
        "Parsed blog post"
    );

    Document {
        title,
        sections,
        raw: text.to_string(),
    }
}

/// Strip the leading `#`/space run and surrounding whitespace of a heading.
fn heading_text(line: &str) -> String {
    line.trim_start_matches(&['#', ' '][..])
        .trim()
        .to_string()
}

// Repeated names keep their first position; bodies are appended.
fn flush(sections: &mut Vec<Section>, name: &str, body: &str) {
    match sections.iter_mut().find(|s| s.name == name) {
        Some(existing) => {
            if existing.body.is_empty() {
                existing.body = body.to_string();
            } else if !body.is_empty() {
                existing.body.push_str("\n\n");
                existing.body.push_str(body);
            }
        }
        None => sections.push(Section {
            name: name.to_string(),
            body: body.to_string(),
        }),
    }
}
