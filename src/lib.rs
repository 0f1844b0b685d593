//! A headless slot-machine spin engine for winner reveals.
//!
//! Given a target winner identity, the engine produces a deterministic,
//! physically plausible spin that always lands exactly on that winner, while
//! keeping the rendered list bounded: large collections are virtualized into a
//! fixed-capacity window that is swapped mid-flight for a winner-centered
//! window without a visible discontinuity.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a sorted, read-only `Arc<[Entry]>` snapshot of the candidate pool
//! - a per-frame clock driving [`Spinner::advance`] with `now_ms`
//! - the actual rendering of the active window at the reported position
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod error;
mod options;
mod plan;
mod reconcile;
mod session;
mod types;
mod window;


pub use easing::DecelProfile;
pub use error::SpinError;
pub use options::{NormalizeFn, OnLandedCallback, RotationDraw, SpinnerOptions};
pub use plan::SpinPlan;
pub use reconcile::rebase_position;
pub use session::{SpinSession, Spinner};
pub use types::{Collection, Entry, Phase, RenderState, WindowKind};
pub use window::{EntryWindow, winner_offset};
