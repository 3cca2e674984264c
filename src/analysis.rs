use once_cell::sync::Lazy;
use regex::Regex;

/// Inline label that opens the opposition group inside the Perspectives
/// section. Matched case-sensitively, as the model is asked to emit it.
pub const OPPOSITION_MARKER: &str = "Likely Opposition:";
/// Inline label that opens the controversy group.
pub const CONTROVERSY_MARKER: &str = "Key Points of Controversy:";

// Each section runs from its header to the next known header, or to the end
// of the reply. The terminator is consumed rather than looked ahead at, which
// is equivalent here because every section is matched over the full text.
static PERSPECTIVES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Perspectives(.*?)(?:Context & Background|\z)").unwrap());
static CONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Context & Background(.*?)(?:Key Ideas & Themes|\z)").unwrap());
static IDEAS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)Key Ideas & Themes(.*)\z").unwrap());

/// The three header-delimited sections of a raw model reply. A section whose
/// header never appears is `None`; that is a parse miss, not an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedSections {
    pub perspectives: Option<String>,
    pub context: Option<String>,
    pub ideas: Option<String>,
}

/// Sub-groups of the Perspectives section, split positionally on the two
/// inline markers. A missing or out-of-order marker leaves its group empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerspectiveGroups {
    pub supporters: String,
    pub opposition: String,
    pub controversy: String,
}

/// Locates the three known section headers in the raw reply,
/// case-insensitively, and captures the trimmed text between them.
pub fn extract_sections(raw: &str) -> ParsedSections {
    ParsedSections {
        perspectives: capture_section(&PERSPECTIVES_RE, raw),
        context: capture_section(&CONTEXT_RE, raw),
        ideas: capture_section(&IDEAS_RE, raw),
    }
}

fn capture_section(re: &Regex, raw: &str) -> Option<String> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Splits the Perspectives text into supporter, opposition, and controversy
/// groups. The split is purely positional: supporters is everything before
/// the first marker, opposition counts only when its marker comes first, and
/// controversy only when its marker follows the opposition marker. Each
/// marker consumes one immediately-following whitespace character. This
/// freezes the fragile behavior of the upstream contract; it is not a
/// guarded invariant.
pub fn split_perspectives(text: &str) -> PerspectiveGroups {
    let opposition_at = text.find(OPPOSITION_MARKER);
    let controversy_at = text.find(CONTROVERSY_MARKER);

    let first_marker = match (opposition_at, controversy_at) {
        (Some(o), Some(c)) => Some(o.min(c)),
        (o, c) => o.or(c),
    };

    let supporters = match first_marker {
        Some(at) => &text[..at],
        None => text,
    };

    let opposition = match (opposition_at, controversy_at) {
        (Some(o), Some(c)) if o < c => {
            strip_one_space(&text[o + OPPOSITION_MARKER.len()..c])
        }
        (Some(o), None) => strip_one_space(&text[o + OPPOSITION_MARKER.len()..]),
        _ => "",
    };

    let controversy = match (opposition_at, controversy_at) {
        (Some(o), Some(c)) if o < c => {
            strip_one_space(&text[c + CONTROVERSY_MARKER.len()..])
        }
        _ => "",
    };

    PerspectiveGroups {
        supporters: supporters.to_string(),
        opposition: opposition.to_string(),
        controversy: controversy.to_string(),
    }
}

fn strip_one_space(text: &str) -> &str {
    text.strip_prefix(' ').unwrap_or(text)
}

/// Extracts an ordered bullet list from a text block: lines opening with `-`
/// or `•` with the marker stripped, or, when no such line exists, the block
/// split on sentence-terminating punctuation with empty fragments dropped.
pub fn parse_bullet_points(text: &str) -> Vec<String> {
    let bullets: Vec<String> = text
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
                .map(|rest| rest.trim().to_string())
        })
        .collect();

    if !bullets.is_empty() {
        return bullets;
    }

    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
