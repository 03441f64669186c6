//! Traits shared by every action type that goes through a [`Store`](crate::Store)

use std::fmt::Debug;

/// Marker trait for values that can be dispatched to a store
///
/// Actions are plain descriptors of intent. They are:
/// - Clone: middleware sees a copy of every action
/// - Debug: for logs and test failures
/// - Send + 'static: async tasks send them back over a channel
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable name used for logging and filtering
    fn name(&self) -> &'static str;
}

/// Short, log-friendly description of an action
///
/// The default is the `Debug` output. Override it for actions that carry
/// large payloads (a full hero list, for example).
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
