//! Heroes actions and their creators
//!
//! Naming follows the intent/result split:
//! - `FetchRequest` is the intent, the only action that starts work
//! - `FetchSuccess` / `FetchError` carry the outcome back
//! - `ChangeBanana` / `ChangeMood` are purely local toggles

use std::fmt;

use crate::action::{Action, ActionSummary};
use crate::hero::Hero;

/// Everything that can happen to the heroes slice
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroesAction {
    /// Intent: begin fetching the hero list
    FetchRequest,
    /// Result: the hero list arrived
    FetchSuccess(Vec<Hero>),
    /// Result: the fetch failed with a message
    FetchError(String),
    /// Flip the monkey's banana between fresh and rotten
    ChangeBanana,
    /// Flip the monkey between happy and sad
    ChangeMood,
}

/// Payload-free tag of a [`HeroesAction`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeroesActionKind {
    FetchRequest,
    FetchSuccess,
    FetchError,
    ChangeBanana,
    ChangeMood,
}

impl HeroesActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HeroesActionKind::FetchRequest => "FETCH_REQUEST",
            HeroesActionKind::FetchSuccess => "FETCH_SUCCESS",
            HeroesActionKind::FetchError => "FETCH_ERROR",
            HeroesActionKind::ChangeBanana => "CHANGE_BANANA",
            HeroesActionKind::ChangeMood => "CHANGE_MOOD",
        }
    }
}

impl fmt::Display for HeroesActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HeroesAction {
    pub fn kind(&self) -> HeroesActionKind {
        match self {
            HeroesAction::FetchRequest => HeroesActionKind::FetchRequest,
            HeroesAction::FetchSuccess(_) => HeroesActionKind::FetchSuccess,
            HeroesAction::FetchError(_) => HeroesActionKind::FetchError,
            HeroesAction::ChangeBanana => HeroesActionKind::ChangeBanana,
            HeroesAction::ChangeMood => HeroesActionKind::ChangeMood,
        }
    }
}

impl Action for HeroesAction {
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl ActionSummary for HeroesAction {
    fn summary(&self) -> String {
        match self {
            // A full hero list is far too noisy for a log line
            HeroesAction::FetchSuccess(heroes) => {
                format!("FETCH_SUCCESS {{ heroes: {} }}", heroes.len())
            }
            HeroesAction::FetchError(e) => {
                let msg = if e.chars().count() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("FETCH_ERROR({:?})", msg)
            }
            other => other.name().to_string(),
        }
    }
}

pub fn fetch_request() -> HeroesAction {
    HeroesAction::FetchRequest
}

pub fn fetch_success(heroes: Vec<Hero>) -> HeroesAction {
    HeroesAction::FetchSuccess(heroes)
}

pub fn fetch_error(message: impl Into<String>) -> HeroesAction {
    HeroesAction::FetchError(message.into())
}

pub fn change_banana() -> HeroesAction {
    HeroesAction::ChangeBanana
}

pub fn change_mood() -> HeroesAction {
    HeroesAction::ChangeMood
}
