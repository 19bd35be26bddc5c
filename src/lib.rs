pub mod card;
pub mod config;
pub mod controller;
pub mod description;
pub mod history;
pub mod score;
pub mod selection;
pub mod source;
pub mod word;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use card::Card;
pub use config::{Category, ConfigError, LengthRange, QuizConfig, RetryPolicy};
pub use controller::{GuessResult, QuizController};
pub use description::{Description, Segment, format_description};
pub use history::{GuessRecord, History, HistoryEntry};
pub use score::{Guess, GuessOutcome, ScoreState};
pub use selection::SelectionMode;
pub use source::{FetchError, ReloadRequest, parse_batch};
pub use word::{WordEntry, WordQueue};
