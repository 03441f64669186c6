//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure and only says *what* should happen; the handler
//! here runs it on the task manager and turns the outcome into a result
//! action.

use heroes_core::actions;

use crate::action::Action;
use crate::api::HeroesClient;
use crate::runtime::EffectContext;

/// Task key shared by every hero fetch
///
/// A new fetch aborts the one in flight. A result that was already queued
/// carries its request's `seq`, and the reducer drops it once a newer request
/// exists.
pub const FETCH_TASK: &str = "heroes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the hero list for request `seq` from the statistics API
    FetchHeroes { seq: u64 },
}

/// Run an effect
pub fn handle_effect(client: &HeroesClient, effect: Effect, ctx: &mut EffectContext<'_, Action>) {
    match effect {
        Effect::FetchHeroes { seq } => {
            let client = client.clone();
            if ctx.tasks().is_running(&FETCH_TASK.into()) {
                tracing::info!("Superseding in-flight hero fetch");
            }
            ctx.tasks().spawn(FETCH_TASK, async move {
                tracing::info!(endpoint = %client.endpoint(), seq, "Fetching heroes");
                let result = match client.fetch_heroes().await {
                    Ok(heroes) => {
                        tracing::info!(count = heroes.len(), seq, "Heroes loaded");
                        actions::fetch_success(heroes)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, seq, "Hero fetch failed");
                        actions::fetch_error(e.to_string())
                    }
                };
                Action::HeroesFetched { seq, result }
            });
        }
    }
}
