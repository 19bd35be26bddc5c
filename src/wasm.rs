#![cfg(target_arch = "wasm32")]

use crate::card::{CARD_SLIDE_MS, REFRESH_FADE_MS, RETIRE_FADE_MS, REVEAL_FADE_MS, WORD_FADE_MS};
use crate::selection::{LENGTH_KIND, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::source::{fetch_batch, inline_batch};
use crate::{
    Card, Category, Description, HistoryEntry, QuizConfig, QuizController, ReloadRequest, Segment,
    SelectionMode, WordEntry,
};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

const CONFIG_PATH: &str = "isaword.json";

const STYLE: &str = r#"
@keyframes isaword-fade-in { from { opacity: 0.01; } to { opacity: 1; } }
@keyframes isaword-fade-out { from { opacity: 1; } to { opacity: 0.01; } }
@keyframes isaword-slide-down { from { max-height: 0; } to { max-height: 12em; } }
"#;

fn fade_in(duration_ms: u32) -> String {
    format!("animation: isaword-fade-in {}ms ease-in;", duration_ms)
}

fn parse_or<T: FromStr>(value: &str, fallback: T) -> T {
    value.trim().parse().unwrap_or(fallback)
}

async fn fetch_config() -> QuizConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::info!(
                "no quiz configuration at {} (status {}), using defaults",
                CONFIG_PATH,
                response.status()
            );
            return QuizConfig::default();
        }
        Err(error) => {
            log::warn!("could not request {}: {}", CONFIG_PATH, error);
            return QuizConfig::default();
        }
    };

    match response.text().await {
        Ok(body) => QuizConfig::from_json_str(&body).unwrap_or_else(|error| {
            log::warn!("{}, using defaults", error);
            QuizConfig::default()
        }),
        Err(error) => {
            log::warn!("could not read {}: {}", CONFIG_PATH, error);
            QuizConfig::default()
        }
    }
}

/// Signals shared by every part of the widget.
#[derive(Clone, Copy)]
struct QuizHandle {
    controller: RwSignal<QuizController>,
    /// Fade used for the next word put on screen.
    word_fade_ms: RwSignal<u32>,
    /// Set once the configured controller is installed; inputs stay
    /// disabled until then.
    ready: RwSignal<bool>,
}

impl QuizHandle {
    fn new(config: QuizConfig) -> Self {
        Self {
            controller: create_rw_signal(QuizController::new(config)),
            word_fade_ms: create_rw_signal(WORD_FADE_MS),
            ready: create_rw_signal(false),
        }
    }

    /// Installs the controller built from the loaded configuration and
    /// loads the first batch.
    fn configure(self, config: QuizConfig) {
        self.controller.set(QuizController::new(config));
        self.ready.set(true);
        self.start();
    }

    fn is_ready(self) -> bool {
        self.ready.get_untracked()
    }

    /// Loads the first batch, preferring words inlined by the host page.
    fn start(self) {
        let Some(request) = self.controller.try_update(|quiz| quiz.reload(true)) else {
            return;
        };

        match inline_batch() {
            Some(batch) => {
                log::info!("starting with {} inlined words", batch.len());
                self.apply(&request, batch);
            }
            None => self.dispatch(request),
        }
    }

    /// Fetches a batch in the background, retrying as configured.
    fn dispatch(self, request: ReloadRequest) {
        spawn_local(async move {
            let retry = self.controller.with_untracked(|quiz| quiz.config().retry);
            let mut attempt = 0;

            loop {
                log::info!("fetching {} ({})", request.url, request.mode);

                match fetch_batch(&request.url).await {
                    Ok(batch) => {
                        log::info!("loaded {} words for {}", batch.len(), request.mode);
                        self.apply(&request, batch);
                        return;
                    }
                    Err(error) if attempt < retry.max_attempts => {
                        attempt += 1;
                        log::warn!(
                            "{}; retry {}/{} in {}ms",
                            error,
                            attempt,
                            retry.max_attempts,
                            retry.delay_ms
                        );
                        TimeoutFuture::new(retry.delay_ms).await;
                    }
                    Err(error) => {
                        log::error!("giving up on {}: {}", request.url, error);
                        self.controller
                            .update(|quiz| quiz.fail_batch(&request, error));
                        return;
                    }
                }
            }
        });
    }

    fn apply(self, request: &ReloadRequest, batch: Vec<WordEntry>) {
        if request.refresh_current {
            self.word_fade_ms.set(REFRESH_FADE_MS);
        }

        match self
            .controller
            .try_update(|quiz| quiz.apply_batch(request, batch))
        {
            Some(Ok(Some(follow_up))) => self.dispatch(follow_up),
            Some(Err(error)) => log::error!("rejected batch from {}: {}", request.url, error),
            _ => {}
        }
    }

    fn guess(self, label: &str) {
        if !self.is_ready() {
            return;
        }
        self.word_fade_ms.set(WORD_FADE_MS);

        let Some(result) = self.controller.try_update(|quiz| quiz.guess(label)) else {
            return;
        };

        if let Some(request) = result.reload {
            self.dispatch(request);
        }
        self.retire(result.retired);
    }

    fn select(self, mode: SelectionMode) {
        if !self.is_ready() {
            return;
        }
        if let Some(request) = self.controller.try_update(|quiz| quiz.set_selection(mode)) {
            self.dispatch(request);
        }
    }

    fn set_history_size(self, size: usize) {
        if !self.is_ready() {
            return;
        }
        if let Some(retired) = self
            .controller
            .try_update(|quiz| quiz.set_history_size(size))
        {
            self.retire(retired);
        }
    }

    fn retry(self) {
        if !self.is_ready() {
            return;
        }
        if let Some(Some(request)) = self.controller.try_update(|quiz| quiz.retry()) {
            self.dispatch(request);
        }
    }

    /// Removes faded-out history entries once the fade has finished.
    fn retire(self, ids: Vec<u64>) {
        if ids.is_empty() {
            return;
        }

        spawn_local(async move {
            TimeoutFuture::new(RETIRE_FADE_MS).await;
            self.controller.update(|quiz| {
                quiz.finish_retired(&ids);
            });
        });
    }
}

fn description_view(description: &Description) -> View {
    description
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone().into_view(),
            Segment::Link { label, href } => view! {
                <a href=href.clone() target="_blank">{label.clone()}</a>
            }
            .into_view(),
        })
        .collect_view()
}

fn card_details(card: &Card) -> View {
    let style = if card.revealed {
        fade_in(REVEAL_FADE_MS)
    } else {
        "display:none;".to_string()
    };
    let validity_class = if card.is_real() { "is-valid" } else { "" };
    let description = (!card.description.is_empty()).then(|| {
        view! {
            <div class="description">
                <span style=style.clone()>{description_view(&card.description)}</span>
            </div>
        }
    });

    view! {
        <div class="is-a-word">
            <span class=validity_class style=style>{card.validity_label()}</span>
        </div>
        {description}
    }
    .into_view()
}

#[component]
fn CurrentCard(card: Card, fade_ms: u32) -> impl IntoView {
    view! {
        <div
            class="float-wrap current"
            style=format!("overflow:hidden; animation: isaword-slide-down {}ms ease-out;", CARD_SLIDE_MS)
        >
            <div class="word">
                <span style=fade_in(fade_ms)>{card.word().to_string()}</span>
            </div>
            {card_details(&card)}
            <div class="was-correct"></div>
        </div>
    }
}

#[component]
fn PastCard(entry: HistoryEntry) -> impl IntoView {
    let record = entry.record;
    let verdict_class = if record.outcome.was_correct {
        "was-correct true"
    } else {
        "was-correct false"
    };
    let style = if entry.retiring {
        format!("animation: isaword-fade-out {}ms forwards;", RETIRE_FADE_MS)
    } else {
        String::new()
    };

    view! {
        <div class="float-wrap past" style=style>
            <div class="word">
                <span>{record.card.word().to_string()}</span>
            </div>
            {card_details(&record.card)}
            <div class=verdict_class style=fade_in(REVEAL_FADE_MS)>
                {format!("You said {}", record.guess.label())}
            </div>
        </div>
    }
}

#[component]
fn CategoryOption(
    category: Category,
    selected: Memo<String>,
    ready: RwSignal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let checked_name = category.name.clone();
    let selected_name = category.name.clone();

    view! {
        <label class="word-type-option">
            <input
                type="radio"
                name="word-type"
                class="word-type"
                value=category.name
                prop:checked=move || selected.get() == checked_name
                prop:disabled=move || !ready.get()
                on:change=move |_| on_select.call(selected_name.clone())
            />
            {category.label}
        </label>
    }
}

#[component]
fn App() -> impl IntoView {
    let quiz = QuizHandle::new(QuizConfig::default());
    let defaults = QuizConfig::default();
    let from_length = create_rw_signal(defaults.default_length.from);
    let to_length = create_rw_signal(defaults.default_length.to);

    spawn_local(async move {
        let config = fetch_config().await;
        from_length.set(config.default_length.from);
        to_length.set(config.default_length.to);
        quiz.configure(config);
    });

    let selected = create_memo(move |_| {
        quiz.controller
            .with(|controller| controller.selection().selector_value().to_string())
    });
    let history_size = create_memo(move |_| quiz.controller.with(QuizController::history_size));
    let disabled = move || !quiz.ready.get();

    let reload_selection = Callback::new(move |kind: String| {
        quiz.select(SelectionMode::from_selector(
            &kind,
            from_length.get_untracked(),
            to_length.get_untracked(),
        ));
    });

    let current = create_memo(move |_| {
        quiz.controller
            .with(|controller| (controller.shown(), controller.current().cloned()))
    });
    let score = create_memo(move |_| quiz.controller.with(QuizController::score));
    let loading = create_memo(move |_| quiz.controller.with(QuizController::is_loading));
    let history = create_memo(move |_| {
        quiz.controller.with(|controller| {
            controller
                .history()
                .entries()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let categories = create_memo(move |_| {
        quiz.controller
            .with(|controller| controller.config().categories.clone())
    });
    let fetch_error = create_memo(move |_| {
        quiz.controller
            .with(|controller| controller.last_error().map(ToString::to_string))
    });

    view! {
        <style>{STYLE}</style>
        <div id="isaword" class="quiz">
            <form id="word-type" class="word-type-selector" on:submit=|ev| ev.prevent_default()>
                <label class="word-type-option">
                    <input
                        type="radio"
                        name="word-type"
                        class="word-type"
                        value=LENGTH_KIND
                        prop:checked=move || selected.get() == LENGTH_KIND
                        prop:disabled=disabled
                        on:change=move |_| reload_selection.call(LENGTH_KIND.to_string())
                    />
                    "Words from "
                    <input
                        type="number"
                        id="from-length"
                        min=MIN_WORD_LENGTH
                        max=MAX_WORD_LENGTH
                        prop:value=move || from_length.get().to_string()
                        prop:disabled=disabled
                        on:change=move |ev| {
                            from_length.set(parse_or(&event_target_value(&ev), MIN_WORD_LENGTH));
                            reload_selection.call(selected.get_untracked());
                        }
                    />
                    " to "
                    <input
                        type="number"
                        id="to-length"
                        min=MIN_WORD_LENGTH
                        max=MAX_WORD_LENGTH
                        prop:value=move || to_length.get().to_string()
                        prop:disabled=disabled
                        on:change=move |ev| {
                            to_length.set(parse_or(&event_target_value(&ev), MIN_WORD_LENGTH));
                            reload_selection.call(selected.get_untracked());
                        }
                    />
                    " letters long"
                </label>
                <For
                    each=move || categories.get()
                    key=|category| category.name.clone()
                    children=move |category: Category| {
                        view! {
                            <CategoryOption
                                category=category
                                selected=selected
                                ready=quiz.ready
                                on_select=reload_selection
                            />
                        }
                    }
                />
                <label class="history-size">
                    "Keep "
                    <input
                        type="number"
                        id="history-size"
                        min="1"
                        prop:value=move || history_size.get().to_string()
                        prop:disabled=disabled
                        on:change=move |ev| {
                            quiz.set_history_size(parse_or(&event_target_value(&ev), 1usize));
                        }
                    />
                    " past words"
                </label>
            </form>

            <div class="score">
                <span>"Correct: "<span id="num-correct">{move || score.get().correct}</span></span>
                <span>"Incorrect: "<span id="num-incorrect">{move || score.get().incorrect}</span></span>
                <span>"Streak: "<span id="current-streak">{move || score.get().current_streak}</span></span>
                <span>"Longest: "<span id="longest-streak">{move || score.get().longest_streak}</span></span>
            </div>

            {move || {
                fetch_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="fetch-error" role="alert">
                                <span>{message}</span>
                                <button type="button" on:click=move |_| quiz.retry()>
                                    "Retry"
                                </button>
                            </div>
                        }
                    })
            }}

            <div id="guess">
                "Is this a word? "
                <a
                    href="#"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        quiz.guess("Yes");
                    }
                >
                    "Yes"
                </a>
                " "
                <a
                    href="#"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        quiz.guess("No");
                    }
                >
                    "No"
                </a>
            </div>

            <div id="words-to-guess">
                {move || match current.get() {
                    (_, Some(card)) => {
                        view! { <CurrentCard card=card fade_ms=quiz.word_fade_ms.get_untracked() /> }
                            .into_view()
                    }
                    (_, None) if loading.get() => {
                        view! { <div class="float-wrap placeholder">"Loading words..."</div> }
                            .into_view()
                    }
                    (_, None) => {
                        view! { <div class="float-wrap placeholder">"No words to show."</div> }
                            .into_view()
                    }
                }}
                <For
                    each=move || history.get()
                    key=|entry| (entry.id, entry.retiring)
                    children=move |entry: HistoryEntry| view! { <PastCard entry=entry /> }
                />
            </div>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(|| view! { <App /> });
}
