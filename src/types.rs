use alloc::string::String;
use alloc::sync::Arc;

/// One participant/ticket record.
///
/// Entries are immutable and externally supplied; the engine never creates or
/// mutates them. `sort_key` is the ordering key of the caller's collection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub identity: String,
    pub display_name: String,
    pub sort_key: i64,
}

impl Entry {
    pub fn new(
        identity: impl Into<String>,
        display_name: impl Into<String>,
        sort_key: i64,
    ) -> Self {
        Self {
            identity: identity.into(),
            display_name: display_name.into(),
            sort_key,
        }
    }
}

/// A read-only snapshot of the full candidate pool, sorted by `sort_key`.
///
/// The engine treats the snapshot as frozen for the duration of one spin.
/// Snapshot identity is pointer identity: if the caller swaps the `Arc`
/// mid-spin, the next [`crate::Spinner::advance`] forces cancellation instead
/// of animating against stale data.
pub type Collection = Arc<[Entry]>;

/// The lifecycle phase of a spin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Spinning,
    /// Terminal: the spin landed on the winner.
    Landed,
    /// Terminal: the spin was cancelled (explicitly or by a stale snapshot).
    Cancelled,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Landed | Self::Cancelled)
    }
}

/// Which construction produced the active window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowKind {
    /// first ⌊W/2⌋ + last ⌈W/2⌉ entries, used before the winner is targeted.
    Wrap,
    /// Contains the winner at the canonical offset.
    Winner,
}

/// A lightweight per-frame snapshot for the renderer.
///
/// `position` is the cumulative scroll distance in pixels; `render_position`
/// is the same value reduced modulo the active window's span, which is what a
/// looping renderer actually draws at. The window contents are exposed
/// separately via [`crate::Spinner::active_window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderState {
    pub phase: Phase,
    pub position: u64,
    pub render_position: u64,
    pub window_len: usize,
}
