//! Terminal page for browsing Dota 2 heroes
//!
//! The hero slice from `heroes-core` is wired into a ratatui page:
//! - [`reducer`] extends the slice with UI state and declares [`effect::Effect`]s
//! - [`effect`] runs fetches on the [`tasks::TaskManager`] through [`api`]
//! - [`runtime`] owns the store and drives the event/action/render loop
//! - [`components`] render state and map input to actions

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod event;
pub mod logging;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use api::{ApiError, HeroesClient};
pub use config::{Args, Config, ConfigError};
pub use effect::{handle_effect, Effect};
pub use reducer::reducer;
pub use runtime::{EffectContext, EventOutcome, PollerConfig, Runtime};
pub use state::AppState;
