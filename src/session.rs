// File: src/session.rs
//! The load-with-retry flow, as an explicit state machine.
//!
//! `AwaitingFilename -> Loading -> Ready`, or `Loading -> Retry ->
//! AwaitingFilename` when the file cannot be read. The prompt ending its
//! input moves the machine to `Aborted`.

use crate::core::normalize::normalize_item;
use crate::core::table::FrequencyTable;
use crate::error::GrocerError;
use crate::persistence::load_from_source;
use log::trace;
use std::path::PathBuf;

/// Source of filenames for the load loop, usually the terminal.
pub trait FilenamePrompt {
    /// Asks for an input filename. `last_error` is the failure of the
    /// previous attempt, `None` on the first request. Returns `None` once no
    /// more input is available.
    fn prompt_for_filename(&mut self, last_error: Option<&GrocerError>) -> Option<String>;
}

#[derive(Debug)]
pub enum LoadState {
    AwaitingFilename { last_error: Option<GrocerError> },
    Loading(PathBuf),
    Retry(GrocerError),
    Ready { path: PathBuf, table: FrequencyTable },
    Aborted,
}

impl LoadState {
    /// Starts at `Loading` when a path is already known, otherwise asks.
    pub fn start(initial: Option<PathBuf>) -> Self {
        match initial {
            Some(path) => LoadState::Loading(path),
            None => LoadState::AwaitingFilename { last_error: None },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Ready { .. } | LoadState::Aborted)
    }

    /// Performs one transition. Terminal states return themselves.
    pub fn advance<P: FilenamePrompt + ?Sized>(self, prompt: &mut P) -> Self {
        let next = match self {
            LoadState::AwaitingFilename { last_error } => {
                let answer = prompt.prompt_for_filename(last_error.as_ref());
                match answer {
                    // A blank answer is asked again with the same error.
                    Some(answer) => match normalize_item(&answer) {
                        Some(name) => LoadState::Loading(PathBuf::from(name)),
                        None => LoadState::AwaitingFilename { last_error },
                    },
                    None => LoadState::Aborted,
                }
            }
            LoadState::Loading(path) => match load_from_source(&path) {
                Ok(table) => LoadState::Ready { path, table },
                Err(err) => LoadState::Retry(err),
            },
            LoadState::Retry(err) => LoadState::AwaitingFilename {
                last_error: Some(err),
            },
            done => done,
        };
        trace!("load state -> {}", next.name());
        next
    }

    fn name(&self) -> &'static str {
        match self {
            LoadState::AwaitingFilename { .. } => "AwaitingFilename",
            LoadState::Loading(_) => "Loading",
            LoadState::Retry(_) => "Retry",
            LoadState::Ready { .. } => "Ready",
            LoadState::Aborted => "Aborted",
        }
    }
}

/// Runs the machine to completion. Returns the loaded path and table, or
/// `None` if the prompt ran out of input first.
pub fn load_interactively<P: FilenamePrompt + ?Sized>(
    initial: Option<PathBuf>,
    prompt: &mut P,
) -> Option<(PathBuf, FrequencyTable)> {
    let mut state = LoadState::start(initial);
    while !state.is_terminal() {
        state = state.advance(prompt);
    }
    match state {
        LoadState::Ready { path, table } => Some((path, table)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;

    /// Replays canned answers and records the errors it was shown.
    struct Scripted {
        answers: VecDeque<String>,
        seen_errors: Vec<String>,
        asked: usize,
    }

    impl Scripted {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                seen_errors: Vec::new(),
                asked: 0,
            }
        }
    }

    impl FilenamePrompt for Scripted {
        fn prompt_for_filename(&mut self, last_error: Option<&GrocerError>) -> Option<String> {
            self.asked += 1;
            if let Some(err) = last_error {
                self.seen_errors.push(err.to_string());
            }
            self.answers.pop_front()
        }
    }

    #[test]
    fn retries_until_a_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("items.txt");
        fs::write(&good, "Peas\nPeas\nLimes\n").unwrap();
        let missing = dir.path().join("nope.txt");

        let mut prompt = Scripted::new(&[missing.to_str().unwrap(), good.to_str().unwrap()]);
        let (path, table) = load_interactively(None, &mut prompt).unwrap();

        assert_eq!(path, good);
        assert_eq!(table.item_frequency("Peas"), 2);
        assert_eq!(prompt.asked, 2);
        assert_eq!(prompt.seen_errors.len(), 1);
        assert!(prompt.seen_errors[0].contains("for reading"));
    }

    #[test]
    fn initial_path_skips_the_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("items.txt");
        fs::write(&good, "Kale\n").unwrap();

        let mut prompt = Scripted::new(&[]);
        let (_, table) = load_interactively(Some(good), &mut prompt).unwrap();
        assert_eq!(table.item_frequency("Kale"), 1);
        assert_eq!(prompt.asked, 0);
    }

    #[test]
    fn blank_answer_asks_again() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("items.txt");
        fs::write(&good, "Kale\n").unwrap();
        let padded = format!("  {}  ", good.display());

        let mut prompt = Scripted::new(&["   ", &padded]);
        assert!(load_interactively(None, &mut prompt).is_some());
        assert_eq!(prompt.asked, 2);
    }

    #[test]
    fn exhausted_prompt_aborts() {
        let mut prompt = Scripted::new(&["does/not/exist.txt"]);
        assert!(load_interactively(None, &mut prompt).is_none());
        assert_eq!(prompt.asked, 2);
    }

    #[test]
    fn transitions_follow_the_retry_cycle() {
        let mut prompt = Scripted::new(&[]);
        let state = LoadState::start(Some(PathBuf::from("does/not/exist.txt")));
        let state = state.advance(&mut prompt);
        assert!(matches!(
            state,
            LoadState::Retry(GrocerError::SourceUnavailable { .. })
        ));
        let state = state.advance(&mut prompt);
        assert!(matches!(
            state,
            LoadState::AwaitingFilename { last_error: Some(_) }
        ));
        let state = state.advance(&mut prompt);
        assert!(matches!(state, LoadState::Aborted));
        assert!(state.advance(&mut prompt).is_terminal());
    }
}
