//! Core state slice for the heroes dashboard
//!
//! This crate holds everything that decides *what* the heroes page knows,
//! with no terminal or network code:
//!
//! - **Model**: [`Hero`], [`Monkey`], [`HeroesState`]
//! - **Actions**: [`HeroesAction`] and the creator functions in [`actions`]
//! - **Reducer**: [`reducer`] / [`reduce`] - how the slice changes
//! - **Store**: [`Store`] - an explicitly constructed state container
//!
//! # Example
//!
//! ```
//! use heroes_core::{actions, reduce, HeroesState};
//!
//! let state = HeroesState::default();
//! let state = reduce(&state, actions::fetch_request());
//! assert!(state.loading);
//!
//! let state = reduce(&state, actions::change_banana());
//! assert!(state.monkey.banana.is_rotten);
//! ```
//!
//! # Async pattern
//!
//! The slice never performs I/O. A fetch is modelled as two phases:
//!
//! 1. **Intent**: `FETCH_REQUEST` flips `loading` on
//! 2. **Result**: `FETCH_SUCCESS` or `FETCH_ERROR`, dispatched later by
//!    whoever ran the request
//!
//! The terminal app declares the request as an effect from its reducer and
//! runs it on a task; see `heroes-tui`.

pub mod action;
pub mod actions;
pub mod hero;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::{Action, ActionSummary};
pub use actions::{HeroesAction, HeroesActionKind};
pub use hero::{Banana, Hero, Monkey};
pub use reducer::{reduce, reducer};
pub use state::HeroesState;
pub use store::{DispatchResult, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store};
