/// Errors surfaced by the spin engine.
///
/// All variants except [`SpinError::StaleCollection`] are raised synchronously
/// from [`crate::Spinner::start`]; there is no recoverable mid-flight error
/// path besides cancellation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpinError {
    /// The planner was asked to land outside the displayed window.
    #[error("invalid spin target {target} for window of {total} items")]
    InvalidTarget { target: usize, total: usize },

    /// No entry in the collection matches the requested winner identity.
    #[error("winner identity not found in collection")]
    WinnerNotFound,

    /// `start` was called while a spin is already in flight.
    #[error("a spin is already in progress")]
    AlreadySpinning,

    /// The caller replaced the collection snapshot mid-spin.
    #[error("collection snapshot changed mid-spin")]
    StaleCollection,
}
