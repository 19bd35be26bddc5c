/// A candidate word as served by the word endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct WordEntry {
    pub word: String,
    /// Whether the word is in the dictionary.
    pub is_real: bool,
    /// Definition, synonym pointer, or empty.
    #[serde(default)]
    pub description: String,
}

impl WordEntry {
    pub fn validity_label(&self) -> &'static str {
        if self.is_real { "valid" } else { "not valid" }
    }
}

/// The current batch of words and a cursor to the next unseen one.
///
/// The cursor never moves past the end of the batch; a queue whose cursor
/// reached the end is exhausted and needs a refill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordQueue {
    entries: Vec<WordEntry>,
    cursor: usize,
}

impl WordQueue {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries, cursor: 0 }
    }

    /// Replaces the whole batch and rewinds the cursor.
    pub fn replace(&mut self, entries: Vec<WordEntry>) {
        self.entries = entries;
        self.cursor = 0;
    }

    /// Returns the entry at the cursor and advances past it.
    pub fn take_next(&mut self) -> Option<WordEntry> {
        let entry = self.entries.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(entry)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
