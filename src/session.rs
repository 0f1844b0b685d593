use alloc::string::String;
use alloc::sync::Arc;

use crate::error::SpinError;
use crate::options::SpinnerOptions;
use crate::plan::SpinPlan;
use crate::reconcile::rebase_position;
use crate::types::{Collection, Entry, Phase, RenderState};
use crate::window::{EntryWindow, winner_offset};

/// Mutable state for one spin, created by [`Spinner::start`] and discarded
/// when the spin lands or is cancelled.
///
/// All animation state lives here explicitly; the session is threaded through
/// every `advance` call rather than hidden in per-frame flags.
#[derive(Clone, Debug)]
pub struct SpinSession {
    phase: Phase,
    collection: Collection,
    plan: SpinPlan,
    window: EntryWindow,
    started_at_ms: u64,
    position: u64,
    target_offset: usize,
    winner_index: usize,
    winner_identity: String,
    has_swapped: bool,
    stale_cancelled: bool,
    /// Position immediately after the swap rebase, in the new frame.
    swap_base_position: u64,
    /// Eased progress at the swap moment; the curve is re-parameterized over
    /// what remains of it.
    swap_base_eased: f32,
    /// Distance still to travel after the swap, congruent to the winner
    /// offset in the new frame.
    swap_remaining: u64,
}

impl SpinSession {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn plan(&self) -> &SpinPlan {
        &self.plan
    }

    pub fn window(&self) -> &EntryWindow {
        &self.window
    }

    pub fn has_swapped(&self) -> bool {
        self.has_swapped
    }

    /// The normalized identity this spin is targeting.
    pub fn winner_identity(&self) -> &str {
        &self.winner_identity
    }

    /// True when the session was cancelled because the caller replaced the
    /// collection snapshot mid-spin.
    pub fn was_stale_cancelled(&self) -> bool {
        self.stale_cancelled
    }

    /// The entry the spin lands (or landed) on.
    pub fn winner(&self) -> Option<&Entry> {
        if self.has_swapped || self.collection.len() <= self.window.len() {
            self.window.get(self.target_offset)
        } else {
            self.collection.get(self.winner_index)
        }
    }

    fn render_state(&self, item_height: u32) -> RenderState {
        let span = self.window.span(item_height);
        RenderState {
            phase: self.phase,
            position: self.position,
            render_position: if span == 0 { 0 } else { self.position % span },
            window_len: self.window.len(),
        }
    }

    fn sample(&self, elapsed_ms: u64) -> u64 {
        if !self.has_swapped {
            return self.plan.sample(elapsed_ms);
        }
        let eased = self.plan.easing.sample(self.plan.progress(elapsed_ms));
        let denom = 1.0 - self.swap_base_eased;
        if denom <= f32::EPSILON {
            return self.swap_base_position.saturating_add(self.swap_remaining);
        }
        let frac = ((eased - self.swap_base_eased) / denom).clamp(0.0, 1.0);
        let v = self.swap_base_position as f64 + self.swap_remaining as f64 * frac as f64;
        v.max(0.0) as u64
    }

    /// The exact position this session ends at, in the current frame.
    fn end_position(&self) -> u64 {
        if self.has_swapped {
            self.swap_base_position.saturating_add(self.swap_remaining)
        } else {
            self.plan.end_position()
        }
    }

    fn swap_to_winner_window(&mut self, options: &SpinnerOptions, elapsed_ms: u64) {
        let new_window = EntryWindow::around_winner(
            &self.collection,
            self.winner_index,
            options.window_capacity,
        );
        let h = options.item_height;
        let old_end = self.plan.end_position();
        let remaining = old_end.saturating_sub(self.position);

        let adjusted = rebase_position(self.position, &self.window, &new_window, h, |s| {
            options.normalized(s)
        });

        // Remaining distance is recomputed against the new window's span for
        // both the current position and the landing target; mixing old/new
        // normalization here is exactly what causes mis-landings.
        let span = new_window.span(h);
        let target_px = self.target_offset as u64 * h.max(1) as u64;
        let base_end = adjusted.saturating_add(remaining);
        let correction = if span == 0 {
            0
        } else {
            (target_px + span - (base_end % span)) % span
        };

        self.swap_base_position = adjusted;
        self.swap_base_eased = self.plan.easing.sample(self.plan.progress(elapsed_ms));
        self.swap_remaining = remaining.saturating_add(correction);
        self.window = new_window;
        self.position = adjusted;
        self.has_swapped = true;
        sdebug!(
            adjusted,
            remaining = self.swap_remaining,
            eased = self.swap_base_eased,
            "SpinSession: swapped to winner window"
        );
    }

    /// Advances the session against the caller's current collection snapshot.
    ///
    /// Terminal phases are no-ops; a snapshot identity change forces
    /// cancellation before any further animation.
    pub fn advance(
        &mut self,
        current: &Collection,
        options: &SpinnerOptions,
        now_ms: u64,
    ) -> RenderState {
        if self.phase != Phase::Spinning {
            return self.render_state(options.item_height);
        }

        if !Arc::ptr_eq(&self.collection, current) {
            swarn!("SpinSession: collection snapshot changed mid-spin, cancelling");
            self.stale_cancelled = true;
            self.phase = Phase::Cancelled;
            return self.render_state(options.item_height);
        }

        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        self.position = self.sample(elapsed);

        let progress = self.plan.progress(elapsed);
        if !self.has_swapped
            && progress >= options.swap_threshold
            && self.collection.len() > self.window.len()
        {
            self.swap_to_winner_window(options, elapsed);
        }

        if self.plan.is_done(elapsed) {
            // Snap to the exact landing position; sampling through f32/f64
            // easing must not be allowed to drift the final slot.
            self.position = self.end_position();
            self.phase = Phase::Landed;
            sdebug!(position = self.position, "SpinSession: landed");
        }

        self.render_state(options.item_height)
    }

    fn cancel(&mut self) {
        if self.phase == Phase::Spinning {
            self.phase = Phase::Cancelled;
        }
    }
}

/// The engine front object: owns the collection snapshot and at most one
/// [`SpinSession`] at a time.
///
/// The engine is single-threaded and cooperative: it only moves when the
/// caller's frame clock invokes [`Spinner::advance`] with a monotonic
/// `now_ms`. Independent spinners share no mutable state.
#[derive(Clone)]
pub struct Spinner {
    collection: Collection,
    options: SpinnerOptions,
    session: Option<SpinSession>,
    landed_notified: bool,
}

impl Spinner {
    pub fn new(collection: Collection, options: SpinnerOptions) -> Self {
        sdebug!(
            count = collection.len(),
            window_capacity = options.window_capacity,
            "Spinner::new"
        );
        Self {
            collection,
            options,
            session: None,
            landed_notified: false,
        }
    }

    pub fn options(&self) -> &SpinnerOptions {
        &self.options
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Replaces the collection snapshot.
    ///
    /// A replacement while a spin is in flight force-cancels that spin; the
    /// engine never animates against stale data.
    pub fn set_collection(&mut self, collection: Collection) {
        if let Some(session) = &mut self.session {
            if session.phase == Phase::Spinning && !Arc::ptr_eq(&session.collection, &collection) {
                swarn!("Spinner: collection replaced mid-spin, cancelling");
                session.stale_cancelled = true;
                session.cancel();
            }
        }
        self.collection = collection;
    }

    pub fn phase(&self) -> Phase {
        self.session.as_ref().map(|s| s.phase).unwrap_or_default()
    }

    pub fn is_spinning(&self) -> bool {
        self.phase() == Phase::Spinning
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// The window the renderer should draw, if a session exists.
    pub fn active_window(&self) -> Option<&EntryWindow> {
        self.session.as_ref().map(|s| &s.window)
    }

    /// The winning entry once the spin has landed.
    pub fn winner(&self) -> Option<&Entry> {
        self.session
            .as_ref()
            .filter(|s| s.phase == Phase::Landed)
            .and_then(|s| s.winner())
    }

    /// Starts a spin that will land exactly on `target_identity`.
    ///
    /// Fails with [`SpinError::AlreadySpinning`] while a spin is in flight and
    /// with [`SpinError::WinnerNotFound`] before any animation starts if the
    /// identity has no match in the collection.
    pub fn start(&mut self, target_identity: &str, now_ms: u64) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::AlreadySpinning);
        }

        let needle = self.options.normalized(target_identity);
        let winner_index = self
            .collection
            .iter()
            .position(|e| self.options.normalized(&e.identity) == needle)
            .ok_or(SpinError::WinnerNotFound)?;

        let len = self.collection.len();
        let capacity = self.options.window_capacity;
        // Small pools never need a swap: target the winner window directly.
        let window = if len <= capacity {
            EntryWindow::around_winner(&self.collection, winner_index, capacity)
        } else {
            EntryWindow::wrap(&self.collection, capacity)
        };
        let target_offset = winner_offset(capacity, len, winner_index);

        let plan = SpinPlan::build(
            target_offset,
            window.len(),
            self.options.item_height,
            self.options.min_duration_secs,
            self.options.profile,
            &self.options.rotation_draw,
        )?;

        sdebug!(
            winner_index,
            target_offset,
            window_len = window.len(),
            now_ms,
            "Spinner::start"
        );
        self.landed_notified = false;
        self.session = Some(SpinSession {
            phase: Phase::Spinning,
            collection: Arc::clone(&self.collection),
            plan,
            window,
            started_at_ms: now_ms,
            position: plan.start_position,
            target_offset,
            winner_index,
            winner_identity: needle,
            has_swapped: false,
            stale_cancelled: false,
            swap_base_position: 0,
            swap_base_eased: 0.0,
            swap_remaining: 0,
        });
        Ok(())
    }

    /// Advances the active session by one frame.
    ///
    /// Idle engines and terminal sessions return their current state
    /// unchanged; queued ticks after cancellation are no-ops.
    pub fn advance(&mut self, now_ms: u64) -> RenderState {
        let Some(session) = &mut self.session else {
            return RenderState {
                phase: Phase::Idle,
                position: 0,
                render_position: 0,
                window_len: 0,
            };
        };

        let state = session.advance(&self.collection, &self.options, now_ms);
        if state.phase == Phase::Landed && !self.landed_notified {
            self.landed_notified = true;
            if let Some(cb) = &self.options.on_landed {
                if let Some(winner) = self.session.as_ref().and_then(|s| s.winner()) {
                    cb(winner);
                }
            }
        }
        state
    }

    /// Cancels the spin in flight. Synchronous and immediate; no winner is
    /// emitted.
    pub fn cancel(&mut self) {
        if let Some(session) = &mut self.session {
            session.cancel();
        }
    }

    /// Discards any terminal session, returning the engine to `Idle` so the
    /// same engine can run the next drawing.
    pub fn reset(&mut self) {
        if self.phase().is_terminal() {
            self.session = None;
            self.landed_notified = false;
        }
    }
}

impl core::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Spinner")
            .field("count", &self.collection.len())
            .field("phase", &self.phase())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
