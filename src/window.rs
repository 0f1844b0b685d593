use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Entry, WindowKind};

/// A bounded, ordered view over the candidate collection.
///
/// Windows always hold exactly `min(capacity, collection.len())` entries.
/// Two constructions exist:
/// - [`EntryWindow::wrap`]: first half + last half of the collection, used
///   before a winner is targeted so the loop seam looks seamless.
/// - [`EntryWindow::around_winner`]: guaranteed to contain the winner at the
///   canonical offset returned by [`winner_offset`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryWindow {
    entries: Vec<Entry>,
    kind: WindowKind,
}

/// The canonical offset of the winner inside a winner window.
///
/// When the collection fits in the window the winner keeps its natural index;
/// otherwise it always sits at `⌊capacity/2⌋`, regardless of where in the
/// collection it lives.
pub fn winner_offset(capacity: usize, collection_len: usize, winner_index: usize) -> usize {
    if collection_len <= capacity {
        winner_index
    } else {
        capacity / 2
    }
}

impl EntryWindow {
    /// Builds the pre-targeting wrap window: the whole collection when it
    /// fits, else the first `⌊capacity/2⌋` entries followed by the last
    /// `⌈capacity/2⌉`.
    pub fn wrap(collection: &[Entry], capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let len = collection.len();
        let entries = if len <= capacity {
            collection.to_vec()
        } else {
            let head = capacity / 2;
            let tail = capacity - head;
            let mut out = Vec::with_capacity(capacity);
            out.extend_from_slice(&collection[..head]);
            out.extend_from_slice(&collection[len - tail..]);
            out
        };
        strace!(len, window_len = entries.len(), "EntryWindow::wrap");
        Self {
            entries,
            kind: WindowKind::Wrap,
        }
    }

    /// Builds the landing window containing `collection[winner_index]` at the
    /// canonical offset.
    ///
    /// For oversized collections this is a single length-`capacity` slice
    /// starting at `winner_index - ⌊capacity/2⌋`, taken modulo the collection
    /// length; the wrap-around covers both the negative-start and
    /// past-the-end cases with one formula.
    pub fn around_winner(collection: &[Entry], winner_index: usize, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let len = collection.len();
        debug_assert!(winner_index < len, "winner_index out of bounds");

        let entries = if len <= capacity {
            collection.to_vec()
        } else {
            let offset = capacity / 2;
            let start = (winner_index + len - offset) % len;
            let mut out = Vec::with_capacity(capacity);
            for i in 0..capacity {
                out.push(collection[(start + i) % len].clone());
            }
            out
        };
        strace!(
            len,
            winner_index,
            window_len = entries.len(),
            "EntryWindow::around_winner"
        );
        Self {
            entries,
            kind: WindowKind::Winner,
        }
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Total pixel span of one loop of this window.
    pub fn span(&self, item_height: u32) -> u64 {
        self.entries.len() as u64 * item_height.max(1) as u64
    }

    /// The window index rendered at `position` (position reduced modulo the
    /// window span, then divided by the item height).
    pub fn index_at(&self, position: u64, item_height: u32) -> usize {
        let span = self.span(item_height);
        if span == 0 {
            return 0;
        }
        ((position % span) / item_height.max(1) as u64) as usize
    }

    /// Finds an entry by normalized identity.
    pub fn find(
        &self,
        normalized_identity: &str,
        normalize: impl Fn(&str) -> String,
    ) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| normalize(&e.identity) == normalized_identity)
    }
}
