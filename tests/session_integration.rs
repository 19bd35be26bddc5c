use isaword::{QuizConfig, QuizController, SelectionMode, WordEntry, parse_batch};

fn batch(words: &[(&str, bool, &str)]) -> Vec<WordEntry> {
    words
        .iter()
        .map(|(word, is_real, description)| WordEntry {
            word: word.to_string(),
            is_real: *is_real,
            description: description.to_string(),
        })
        .collect()
}

fn started(words: &[(&str, bool, &str)]) -> QuizController {
    let mut quiz = QuizController::new(QuizConfig::default());
    let request = quiz.reload(true);
    let follow_up = quiz
        .apply_batch(&request, batch(words))
        .expect("batch should apply");
    assert!(follow_up.is_none());
    quiz
}

#[test]
fn exhausting_the_queue_requests_exactly_one_preload() {
    let mut quiz = started(&[("QI", true, ""), ("QAT", true, ""), ("QOPE", false, "")]);
    let mut reloads = Vec::new();

    for _ in 0..2 {
        let result = quiz.guess("Yes");
        reloads.extend(result.reload);
    }

    assert_eq!(reloads.len(), 1);
    assert!(!reloads[0].refresh_current);
    assert_eq!(reloads[0].url, "/words/owl2/40/length/2/8");
    assert_eq!(quiz.current().map(|card| card.word()), Some("QOPE"));

    quiz.apply_batch(&reloads[0], batch(&[("ZA", true, ""), ("ZO", true, "")]))
        .expect("preload should apply");
    assert_eq!(quiz.current().map(|card| card.word()), Some("QOPE"));

    let result = quiz.guess("No");
    assert!(result.outcome.was_correct);
    assert!(result.reload.is_none());
    assert_eq!(quiz.current().map(|card| card.word()), Some("ZA"));
}

#[test]
fn guessing_past_the_end_waits_for_the_pending_refill() {
    let mut quiz = started(&[("QI", true, ""), ("QAT", true, "")]);
    let mut reloads = Vec::new();

    for label in ["Yes", "Yes"] {
        reloads.extend(quiz.guess(label).reload);
    }

    assert_eq!(reloads.len(), 1);
    assert!(quiz.current().is_none());
    assert_eq!(quiz.shown(), 2);
    assert!(quiz.is_loading());

    let follow_up = quiz
        .apply_batch(&reloads[0], batch(&[("ZA", true, ""), ("ZO", true, "")]))
        .expect("refill should apply");

    assert!(follow_up.is_none());
    assert!(!quiz.is_loading());
    assert_eq!(quiz.current().map(|card| card.word()), Some("ZA"));

    let result = quiz.guess("Yes");
    assert!(result.reload.is_some());
    assert_eq!(quiz.current().map(|card| card.word()), Some("ZO"));
}

#[test]
fn scores_a_mixed_session() {
    let mut quiz = started(&[
        ("QI", true, ""),
        ("QAT", true, ""),
        ("QOPE", false, ""),
        ("QUA", true, ""),
        ("QIS", true, ""),
        ("QUAX", false, ""),
    ]);

    quiz.guess("Yes");
    quiz.guess("Yes");
    quiz.guess("Yes");
    quiz.guess("Yes");
    quiz.guess("Yes");

    let score = quiz.score();
    assert_eq!(score.correct, 4);
    assert_eq!(score.incorrect, 1);
    assert_eq!(score.current_streak, 2);
    assert_eq!(score.longest_streak, 2);
}

#[test]
fn history_keeps_most_recent_guesses() {
    let words: Vec<(String, bool, &str)> =
        (0..8).map(|index| (format!("W{}", index), true, "")).collect();
    let words: Vec<(&str, bool, &str)> = words
        .iter()
        .map(|(word, is_real, description)| (word.as_str(), *is_real, *description))
        .collect();
    let mut quiz = started(&words);
    quiz.set_history_size(3);

    let mut retired = Vec::new();
    for _ in 0..5 {
        retired.extend(quiz.guess("Yes").retired);
    }

    assert_eq!(retired.len(), 2);
    quiz.finish_retired(&retired);

    let kept: Vec<&str> = quiz
        .history()
        .entries()
        .map(|entry| entry.record.card.word())
        .collect();
    assert_eq!(kept, vec!["W4", "W3", "W2"]);
}

#[test]
fn changing_selection_refreshes_the_word() {
    let mut quiz = started(&[("QI", true, ""), ("QAT", true, "")]);

    let request = quiz.set_selection(SelectionMode::from_selector("q_words", 2, 8));
    assert!(request.refresh_current);
    assert_eq!(request.url, "/words/owl2/40/index/q_words");

    let payload = r#"[
        { "word": "QOPH", "description": "(see KOPH)", "is_real": true },
        { "word": "QUOP", "description": "", "is_real": false }
    ]"#;
    quiz.apply_batch(&request, parse_batch(payload).expect("payload should parse"))
        .expect("batch should apply");

    let card = quiz.current().expect("refreshed word should be shown");
    assert_eq!(card.word(), "QOPH");
    assert_eq!(card.description.to_string(), "(see KOPH)");
}

#[test]
fn later_response_wins() {
    let mut quiz = started(&[("QI", true, ""), ("QAT", true, "")]);
    let first = quiz.set_selection(SelectionMode::index("x_words"));
    let second = quiz.set_selection(SelectionMode::index("z_words"));

    quiz.apply_batch(&second, batch(&[("ZA", true, ""), ("ZAX", true, "")]))
        .expect("batch should apply");
    quiz.apply_batch(&first, batch(&[("XU", true, ""), ("AX", true, "")]))
        .expect("batch should apply");

    assert_eq!(quiz.current().map(|card| card.word()), Some("XU"));
    assert!(!quiz.is_loading());
}
