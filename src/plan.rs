use crate::easing::DecelProfile;
use crate::error::SpinError;
use crate::options::RotationDraw;

/// Minimum and maximum whole visual loops per spin.
const MIN_LOOPS: u64 = 3;
const MAX_LOOPS: u64 = 4;

/// An immutable animation plan for one spin.
///
/// Computed once by [`SpinPlan::build`] and never mutated afterwards. The
/// landing slot is fixed by construction: `total_distance` is congruent to
/// `target_index × item_height` modulo the window span, so the rotation draw
/// only changes how many times the window visibly cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinPlan {
    pub total_distance: u64,
    pub duration_ms: u64,
    pub start_position: u64,
    pub easing: DecelProfile,
}

impl SpinPlan {
    /// Builds a plan that lands exactly on `target_index` within a window of
    /// `total_items` entries.
    ///
    /// The rotation draw is resolved once and quantized to whole loops in
    /// `[MIN_LOOPS, MAX_LOOPS]`; draws outside `[3, 5)` are clamped.
    pub fn build(
        target_index: usize,
        total_items: usize,
        item_height: u32,
        min_duration_secs: f64,
        easing: DecelProfile,
        draw: &RotationDraw,
    ) -> Result<Self, SpinError> {
        if total_items < 1 || target_index >= total_items {
            return Err(SpinError::InvalidTarget {
                target: target_index,
                total: total_items,
            });
        }

        let r = draw.resolve();
        let loops = if r.is_finite() {
            (r.max(0.0) as u64).clamp(MIN_LOOPS, MAX_LOOPS)
        } else {
            MIN_LOOPS
        };

        // Integer math end to end: (loops*N + target) * h mod (N*h) is
        // exactly target * h, independent of the draw.
        let h = item_height.max(1) as u64;
        let total_distance = (loops * total_items as u64 + target_index as u64) * h;
        let duration_ms = if min_duration_secs.is_finite() && min_duration_secs > 0.0 {
            (min_duration_secs * 1000.0) as u64
        } else {
            0
        }
        .max(1);

        sdebug!(
            target_index,
            total_items,
            loops,
            total_distance,
            duration_ms,
            "SpinPlan::build"
        );
        Ok(Self {
            total_distance,
            duration_ms,
            start_position: 0,
            easing,
        })
    }

    /// Raw progress in `[0,1]` after `elapsed_ms` of animation.
    pub fn progress(&self, elapsed_ms: u64) -> f32 {
        (elapsed_ms as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// The exact position the spin ends at.
    pub fn end_position(&self) -> u64 {
        self.start_position.saturating_add(self.total_distance)
    }

    /// Samples the eased position after `elapsed_ms`.
    pub fn sample(&self, elapsed_ms: u64) -> u64 {
        let eased = self.easing.sample(self.progress(elapsed_ms));
        let v = self.start_position as f64 + self.total_distance as f64 * eased as f64;
        v.max(0.0) as u64
    }
}
