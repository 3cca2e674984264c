use serde::Serialize;

use crate::analysis::{extract_sections, parse_bullet_points, split_perspectives};

pub const SUPPORTERS_PLACEHOLDER: &str = "Analysis pending for supporter perspectives";
pub const OPPOSITION_PLACEHOLDER: &str = "Analysis pending for opposition perspectives";
pub const CONTROVERSY_PLACEHOLDER: &str = "Analysis pending for key points of controversy";
pub const CONTEXT_PLACEHOLDER: &str = "Analysis pending for context and background";
pub const IDEAS_PLACEHOLDER: &str = "Analysis pending for key ideas and themes";

/// The structured view of one raw reply, ready for display: bullet lists for
/// the perspective groups, plain text for context and ideas. Every field is
/// populated; parse misses degrade to the fixed placeholder strings.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RenderedAnalysis {
    pub supporters: Vec<String>,
    pub opposition: Vec<String>,
    pub controversy: Vec<String>,
    pub context: String,
    pub ideas: String,
}

/// Runs the full parse pipeline over a raw reply: section extraction, the
/// positional perspective split, and bullet extraction per group.
pub fn render_analysis(raw: &str) -> RenderedAnalysis {
    let sections = extract_sections(raw);

    let (supporters, opposition, controversy) = match sections.perspectives.as_deref() {
        Some(perspectives) => {
            let groups = split_perspectives(perspectives);
            (
                list_or_placeholder(
                    parse_bullet_points(&groups.supporters),
                    SUPPORTERS_PLACEHOLDER,
                ),
                list_or_placeholder(
                    parse_bullet_points(&groups.opposition),
                    OPPOSITION_PLACEHOLDER,
                ),
                controversy_paragraphs(&groups.controversy),
            )
        }
        None => (
            vec![SUPPORTERS_PLACEHOLDER.to_string()],
            vec![OPPOSITION_PLACEHOLDER.to_string()],
            vec![CONTROVERSY_PLACEHOLDER.to_string()],
        ),
    };

    RenderedAnalysis {
        supporters,
        opposition,
        controversy,
        context: sections
            .context
            .unwrap_or_else(|| CONTEXT_PLACEHOLDER.to_string()),
        ideas: sections
            .ideas
            .unwrap_or_else(|| IDEAS_PLACEHOLDER.to_string()),
    }
}

fn list_or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}

// A non-blank controversy group whose bullet extraction comes back empty
// renders as a single paragraph holding the trimmed group text.
fn controversy_paragraphs(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![CONTROVERSY_PLACEHOLDER.to_string()];
    }

    let points = parse_bullet_points(text);
    if points.is_empty() {
        vec![text.trim().to_string()]
    } else {
        points
    }
}
