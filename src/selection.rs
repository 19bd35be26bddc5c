use std::fmt;

/// Shortest word length the endpoint serves.
pub const MIN_WORD_LENGTH: u32 = 2;
/// Longest word length the endpoint serves.
pub const MAX_WORD_LENGTH: u32 = 15;

/// Value of the word-type selector that switches to length ranges.
pub const LENGTH_KIND: &str = "length";

/// Criterion used to request a batch of words.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SelectionMode {
    /// Words whose length falls in `from..=to`.
    Length { from: u32, to: u32 },
    /// Words from a named server-side index such as `q_words`.
    Index { category: String },
}

impl SelectionMode {
    /// Builds a length selection with both bounds clamped.
    pub fn length(from: u32, to: u32) -> Self {
        let (from, to) = clamp_length(from, to);
        Self::Length { from, to }
    }

    pub fn index(category: impl Into<String>) -> Self {
        Self::Index {
            category: category.into(),
        }
    }

    /// Maps a word-type selector value plus the two length inputs to a mode.
    pub fn from_selector(kind: &str, from: u32, to: u32) -> Self {
        if kind == LENGTH_KIND {
            Self::length(from, to)
        } else {
            Self::index(kind)
        }
    }

    /// Returns a copy whose length bounds are within the served range.
    pub fn clamped(&self) -> Self {
        match self {
            Self::Length { from, to } => Self::length(*from, *to),
            Self::Index { category } => Self::index(category.clone()),
        }
    }

    /// Trailing endpoint path, e.g. `length/2/8` or `index/q_words`.
    pub fn path_segment(&self) -> String {
        match self.clamped() {
            Self::Length { from, to } => format!("length/{}/{}", from, to),
            Self::Index { category } => format!("index/{}", category),
        }
    }

    /// Selector value this mode corresponds to.
    pub fn selector_value(&self) -> &str {
        match self {
            Self::Length { .. } => LENGTH_KIND,
            Self::Index { category } => category,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.clamped() {
            Self::Length { from, to } => write!(f, "{}-{} letters", from, to),
            Self::Index { category } => write!(f, "{}", category),
        }
    }
}

/// `from` is raised to the minimum and `to` is kept within `[from, MAX]`.
pub fn clamp_length(from: u32, to: u32) -> (u32, u32) {
    let from = from.clamp(MIN_WORD_LENGTH, MAX_WORD_LENGTH);
    let to = to.clamp(from, MAX_WORD_LENGTH);
    (from, to)
}
