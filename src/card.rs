use crate::description::{Description, format_description};
use crate::word::WordEntry;

/// Fade-in of the validity label and description after a guess.
pub const REVEAL_FADE_MS: u32 = 400;
/// Fade-in of a freshly shown word.
pub const WORD_FADE_MS: u32 = 400;
/// Slide-down of a new card at the top of the list.
pub const CARD_SLIDE_MS: u32 = 120;
/// Fade of the current word when a reload replaces it.
pub const REFRESH_FADE_MS: u32 = 300;
/// Fade-out of history entries before removal.
pub const RETIRE_FADE_MS: u32 = 300;

/// A word on screen, revealed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub entry: WordEntry,
    pub description: Description,
    /// Validity and description are hidden until the card is revealed.
    pub revealed: bool,
}

impl Card {
    pub fn new(entry: WordEntry, lookup: &str) -> Self {
        let description = format_description(&entry, lookup);
        Self {
            entry,
            description,
            revealed: false,
        }
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn word(&self) -> &str {
        &self.entry.word
    }

    pub fn is_real(&self) -> bool {
        self.entry.is_real
    }

    pub fn validity_label(&self) -> &'static str {
        self.entry.validity_label()
    }
}
