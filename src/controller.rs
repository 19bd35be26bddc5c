use crate::card::Card;
use crate::config::QuizConfig;
use crate::history::{GuessRecord, History};
use crate::score::{Guess, GuessOutcome, ScoreState};
use crate::selection::SelectionMode;
use crate::source::{FetchError, ReloadRequest};
use crate::word::{WordEntry, WordQueue};

/// What a guess changed, for the front end to act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: GuessOutcome,
    /// Refill to perform because the queue ran out.
    pub reload: Option<ReloadRequest>,
    /// History entries to fade out and then pass to
    /// [`QuizController::finish_retired`].
    pub retired: Vec<u64>,
}

/// State of one quiz session.
///
/// The controller never performs I/O. Operations that need words return a
/// [`ReloadRequest`]; the caller fetches it and reports back through
/// [`QuizController::apply_batch`] or [`QuizController::fail_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizController {
    config: QuizConfig,
    selection: SelectionMode,
    queue: WordQueue,
    current: Option<Card>,
    shown: u64,
    history: History,
    history_size: usize,
    score: ScoreState,
    next_request_id: u64,
    in_flight: usize,
    /// Id of the outstanding refill for a used-up queue.
    preload: Option<u64>,
    failed: Option<(ReloadRequest, FetchError)>,
}

impl QuizController {
    pub fn new(config: QuizConfig) -> Self {
        let selection = config.initial_selection();
        let history_size = config.default_history_size.max(1);

        Self {
            config,
            selection,
            queue: WordQueue::default(),
            current: None,
            shown: 0,
            history: History::new(),
            history_size,
            score: ScoreState::default(),
            next_request_id: 0,
            in_flight: 0,
            preload: None,
            failed: None,
        }
    }

    /// Requests a fresh batch for the current selection.
    pub fn reload(&mut self, refresh_current: bool) -> ReloadRequest {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight += 1;

        ReloadRequest {
            id,
            mode: self.selection.clone(),
            refresh_current,
            url: self.config.endpoint_for(&self.selection),
        }
    }

    /// Switches the word selection and requests a batch that replaces the
    /// word on screen.
    pub fn set_selection(&mut self, mode: SelectionMode) -> ReloadRequest {
        self.selection = mode.clamped();
        self.reload(true)
    }

    /// Installs a fetched batch. Whichever batch arrives last wins.
    ///
    /// Shows the first new word when the request asked for a refresh or when
    /// nothing is on screen yet. Returns a follow-up request if that emptied
    /// the queue again.
    pub fn apply_batch(
        &mut self,
        request: &ReloadRequest,
        batch: Vec<WordEntry>,
    ) -> Result<Option<ReloadRequest>, FetchError> {
        self.settle(request);

        if batch.is_empty() {
            self.failed = Some((request.clone(), FetchError::EmptyBatch));
            return Err(FetchError::EmptyBatch);
        }

        self.queue.replace(batch);
        self.failed = None;

        if request.refresh_current || self.current.is_none() {
            return Ok(self.show_next());
        }

        Ok(None)
    }

    /// Records a failed fetch. The queue and the word on screen stay as they
    /// were.
    pub fn fail_batch(&mut self, request: &ReloadRequest, error: FetchError) {
        self.settle(request);
        self.failed = Some((request.clone(), error));
    }

    fn settle(&mut self, request: &ReloadRequest) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.preload == Some(request.id) {
            self.preload = None;
        }
    }

    /// Re-issues the last failed request, if any.
    pub fn retry(&mut self) -> Option<ReloadRequest> {
        let (failed, _) = self.failed.take()?;
        let mut request = self.reload(failed.refresh_current);
        request.mode = failed.mode;
        request.url = failed.url;
        if !request.refresh_current && self.preload.is_none() {
            self.preload = Some(request.id);
        }
        Some(request)
    }

    /// Puts the next queued word on screen, hidden until revealed.
    ///
    /// Returns a preload request once the queue is used up, unless one is
    /// already outstanding. With an empty queue the screen is left without a
    /// word until the refill arrives.
    pub fn show_next(&mut self) -> Option<ReloadRequest> {
        self.current = self
            .queue
            .take_next()
            .map(|entry| Card::new(entry, &self.config.lookup_base_url));
        if self.current.is_some() {
            self.shown += 1;
        }

        if !self.queue.is_exhausted() || self.preload.is_some() {
            return None;
        }

        log::debug!("queue used up after {} words", self.queue.cursor());
        let request = self.reload(false);
        self.preload = Some(request.id);
        Some(request)
    }

    /// Reveals validity and description of the word on screen.
    pub fn reveal(&mut self) {
        if let Some(card) = self.current.as_mut() {
            card.reveal();
        }
    }

    /// Scores a guess label against the word on screen, moves the revealed
    /// card into history, shows the next word, and trims the history.
    ///
    /// Labels other than `Yes`/`No`, or a guess with no word on screen, change
    /// nothing.
    pub fn guess(&mut self, label: &str) -> GuessResult {
        let (Some(guess), Some(card)) = (Guess::parse(label), self.current.as_ref()) else {
            return GuessResult::default();
        };

        let outcome = self.score.record(label, card.is_real());
        log::debug!(
            "guessed {} for {}: {}",
            label,
            card.word(),
            if outcome.was_correct { "correct" } else { "incorrect" }
        );

        self.reveal();
        if let Some(card) = self.current.take() {
            self.history.push(GuessRecord {
                card,
                guess,
                outcome,
            });
        }

        let reload = self.show_next();
        let retired = self.history.trim(self.history_size);

        GuessResult {
            outcome,
            reload,
            retired,
        }
    }

    /// Changes the history window and returns the entries to retire.
    pub fn set_history_size(&mut self, max_entries: usize) -> Vec<u64> {
        self.history_size = max_entries.max(1);
        self.history.trim(self.history_size)
    }

    pub fn finish_retired(&mut self, ids: &[u64]) -> usize {
        self.history.finish_retired(ids)
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionMode {
        &self.selection
    }

    pub fn current(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    /// Number of times a word has been put on screen.
    pub fn shown(&self) -> u64 {
        self.shown
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.failed.as_ref().map(|(_, error)| error)
    }
}
