//! Centralized state container with effect-emitting reducers
//!
//! A reducer here returns both "did state change" and a list of effects:
//!
//! ```ignore
//! fn reducer(state: &mut S, action: A) -> DispatchResult<E>
//! ```
//!
//! Effects are declarative descriptions of work (e.g. "fetch heroes"), not the
//! work itself. Whoever owns the store decides how to run them.
//!
//! # Example
//!
//! ```
//! use heroes_core::{Action, DispatchResult, Store};
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         "Increment"
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Effect {
//!     Save(i32),
//! }
//!
//! fn reducer(count: &mut i32, action: CounterAction) -> DispatchResult<Effect> {
//!     match action {
//!         CounterAction::Increment => {
//!             *count += 1;
//!             DispatchResult::changed_with(Effect::Save(*count))
//!         }
//!     }
//! }
//!
//! let mut store = Store::new(0, reducer);
//! let result = store.dispatch(CounterAction::Increment);
//! assert!(result.changed);
//! assert_eq!(result.effects, vec![Effect::Save(1)]);
//! assert_eq!(*store.state(), 1);
//! ```

use crate::action::{Action, ActionSummary};

/// Result of dispatching one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified (re-render needed)
    pub changed: bool,
    /// Effects to run after the dispatch
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed and one effect should run
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Lift a plain `bool` reducer result
    #[inline]
    pub fn from_changed(changed: bool) -> Self {
        Self {
            changed,
            effects: vec![],
        }
    }

    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that can declare effects
pub type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Hooks called around every dispatch
///
/// Middleware sees the action and the change flag, never the effects.
pub trait Middleware<A: Action> {
    /// Called before the reducer runs
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Logs every dispatch through `tracing` at debug level
///
/// Actions named in `exclude` (high-frequency ones such as `Tick`) go to
/// `trace` instead.
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    pub log_before: bool,
    pub exclude: Vec<&'static str>,
}

impl LoggingMiddleware {
    /// Log after dispatch only, `Tick` excluded
    pub fn new() -> Self {
        Self {
            log_before: false,
            exclude: vec!["Tick"],
        }
    }

    /// Log both before and after dispatch
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            ..Self::new()
        }
    }

    /// Replace the list of action names demoted to `trace`
    pub fn with_exclude(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
        self.exclude = names.into_iter().collect();
        self
    }

    /// Whether an action with this name is logged at `debug`
    pub fn should_log(&self, name: &str) -> bool {
        !self.exclude.iter().any(|excluded| *excluded == name)
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before && self.should_log(action.name()) {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if !self.should_log(action.name()) {
            tracing::trace!(action = %action.name(), state_changed, "Action processed");
            return;
        }
        tracing::debug!(
            action = %action.name(),
            summary = %action.summary(),
            state_changed,
            "Action processed"
        );
    }
}

/// Owns the state and is the only place it is mutated
///
/// The store is built explicitly and passed to whoever drives it; there is no
/// global instance.
pub struct Store<S, A, E, M = NoopMiddleware> {
    state: S,
    reducer: Reducer<S, A, E>,
    middleware: M,
}

impl<S, A: Action, E> Store<S, A, E> {
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, E, M: Middleware<A>> Store<S, A, E, M> {
    pub fn with_middleware(state: S, reducer: Reducer<S, A, E>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
        }
    }

    /// Run an action through middleware and the reducer
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Direct access for initialization; prefer dispatching actions
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    #[inline]
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}
