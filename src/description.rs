use std::fmt;

use crate::word::WordEntry;

/// Default dictionary lookup used for description links.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "http://www.wordnik.com/words/";

/// One run of a formatted description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// A dictionary lookup link. Always opens in a new tab.
    Link { label: String, href: String },
}

/// A word description ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub segments: Vec<Segment>,
}

impl Description {
    fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::Text(text)],
        }
    }

    /// `(see <target>)` with the target linked.
    fn see(target: &str, lookup: &str) -> Self {
        Self {
            segments: vec![
                Segment::Text("(see ".to_string()),
                Segment::Link {
                    label: target.to_string(),
                    href: lookup_url(lookup, target),
                },
                Segment::Text(")".to_string()),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Link { label, .. } => f.write_str(label)?,
            }
        }
        Ok(())
    }
}

/// Formats the description of `entry`, linking to the dictionary at `lookup`.
///
/// The first matching rule wins:
/// 1. `(see WORD)` links WORD.
/// 2. An empty description on a real word becomes `(see <word>)`.
/// 3. A single bare word is a synonym pointer and becomes `(see <that word>)`.
/// 4. Any other description on a real word gets a trailing `(more)` link.
///
/// Descriptions of invalid words that match none of the first three rules are
/// left as they are.
pub fn format_description(entry: &WordEntry, lookup: &str) -> Description {
    let description = entry.description.as_str();

    if let Some(target) = see_target(description) {
        return Description::see(target, lookup);
    }

    if description.is_empty() && entry.is_real {
        return Description::see(&entry.word.to_lowercase(), lookup);
    }

    if is_bare_word(description) {
        return Description::see(&description.to_lowercase(), lookup);
    }

    if entry.is_real {
        let mut formatted = Description::text(format!("{} (", description));
        formatted.segments.push(Segment::Link {
            label: "more".to_string(),
            href: lookup_url(lookup, &entry.word.to_lowercase()),
        });
        formatted.segments.push(Segment::Text(")".to_string()));
        return formatted;
    }

    Description::text(description)
}

pub fn lookup_url(base: &str, word: &str) -> String {
    format!("{}{}", base, word)
}

fn see_target(description: &str) -> Option<&str> {
    description
        .strip_prefix("(see ")
        .and_then(|rest| rest.strip_suffix(')'))
        .filter(|target| is_bare_word(target))
}

fn is_bare_word(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
