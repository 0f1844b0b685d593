use alloc::string::String;

use crate::window::EntryWindow;

/// Re-expresses an animated position in a new window's coordinate frame.
///
/// Called at the moment the active window is swapped. The entry rendered at
/// the center is located in the new window and the position is shifted by the
/// exact placement difference, so the centered entry immediately before and
/// after the swap is identical. The position is never re-derived from scratch
/// via a modulo of the new window length — that would move the coordinate
/// origin and produce a visible snap.
///
/// If the centered identity is missing from the new window, the nearest
/// sort-adjacent entry is used instead; only an empty new window degrades to
/// plain modulo normalization. Both paths are correctness bugs upstream and
/// are logged as warnings.
pub fn rebase_position(
    position: u64,
    old_window: &EntryWindow,
    new_window: &EntryWindow,
    item_height: u32,
    normalize: impl Fn(&str) -> String,
) -> u64 {
    if old_window.is_empty() || new_window.is_empty() {
        swarn!(
            old_len = old_window.len(),
            new_len = new_window.len(),
            "rebase_position: empty window, falling back to modulo normalization"
        );
        let span = new_window.span(item_height);
        return if span == 0 { 0 } else { position % span };
    }

    let h = item_height.max(1) as u64;
    let center_idx = old_window.index_at(position, item_height);
    let centered = &old_window.entries()[center_idx];

    let new_center_idx = match new_window.find(&normalize(&centered.identity), &normalize) {
        Some(i) => i,
        None => {
            // The swap should always carry the centered entry over; pick the
            // closest sort key so the frame stays visually anchored.
            swarn!(
                identity = %centered.identity,
                "rebase_position: centered entry missing from new window"
            );
            nearest_by_sort_key(new_window, centered.sort_key)
        }
    };

    let shift = center_idx as i64 - new_center_idx as i64;
    let adjusted = position as i64 - shift * h as i64;
    strace!(
        position,
        center_idx,
        new_center_idx,
        adjusted,
        "rebase_position"
    );
    adjusted.max(0) as u64
}

fn nearest_by_sort_key(window: &EntryWindow, sort_key: i64) -> usize {
    let mut best = 0usize;
    let mut best_dist = i64::MAX;
    for (i, e) in window.entries().iter().enumerate() {
        let dist = e.sort_key.saturating_sub(sort_key).saturating_abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
