use alloc::string::String;
use alloc::sync::Arc;

use crate::easing::DecelProfile;
use crate::types::Entry;

/// Caller-supplied identity normalization (e.g. strip leading zeros, trim).
///
/// The same function is applied to stored identities and to the requested
/// winner identity, so lookups never depend on raw formatting.
pub type NormalizeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A callback fired exactly once when a spin lands, with the winning entry.
pub type OnLandedCallback = Arc<dyn Fn(&Entry) + Send + Sync>;

/// How the planner obtains its rotation draw (the visible loop count).
///
/// Draws are interpreted in rotations of the displayed window and quantized to
/// whole loops in `[3, 5)` by the planner; the draw only changes how many
/// times the list visibly cycles, never where it lands.
#[derive(Clone)]
pub enum RotationDraw {
    /// A fixed draw. Replaying a spin with the same value reproduces the
    /// exact (window, position) sequence.
    Value(f32),
    /// A lazily evaluated draw provider, called once per `start`. Use this to
    /// plug in real entropy.
    Provider(Arc<dyn Fn() -> f32 + Send + Sync>),
}

impl RotationDraw {
    pub(crate) fn resolve(&self) -> f32 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for RotationDraw {
    fn default() -> Self {
        Self::Value(4.0)
    }
}

impl core::fmt::Debug for RotationDraw {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Spinner`].
///
/// Cheap to clone: closure-valued fields are stored in `Arc`s.
pub struct SpinnerOptions {
    /// Height of one rendered entry in the scroll axis, in pixels.
    pub item_height: u32,
    /// Maximum entries held in the active window (`W`).
    pub window_capacity: usize,
    /// Progress at which the wrap window is swapped for the winner window.
    pub swap_threshold: f32,
    /// Minimum spin duration in seconds.
    pub min_duration_secs: f64,
    /// Deceleration profile applied over the whole spin.
    pub profile: DecelProfile,
    /// Rotation draw source for the visual loop count.
    pub rotation_draw: RotationDraw,
    /// Optional identity normalization applied to winner lookups.
    pub normalize: Option<NormalizeFn>,
    /// Optional callback fired when a spin lands.
    pub on_landed: Option<OnLandedCallback>,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            item_height: 1,
            window_capacity: 100,
            swap_threshold: 0.25,
            min_duration_secs: 5.0,
            profile: DecelProfile::Slow,
            rotation_draw: RotationDraw::default(),
            normalize: None,
            on_landed: None,
        }
    }
}

impl SpinnerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height.max(1);
        self
    }

    pub fn with_window_capacity(mut self, window_capacity: usize) -> Self {
        self.window_capacity = window_capacity.max(1);
        self
    }

    pub fn with_swap_threshold(mut self, swap_threshold: f32) -> Self {
        self.swap_threshold = swap_threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_duration_secs(mut self, min_duration_secs: f64) -> Self {
        self.min_duration_secs = min_duration_secs;
        self
    }

    pub fn with_profile(mut self, profile: DecelProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_rotation_draw(mut self, rotation_draw: RotationDraw) -> Self {
        self.rotation_draw = rotation_draw;
        self
    }

    pub fn with_rotation_provider(
        mut self,
        provider: impl Fn() -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.rotation_draw = RotationDraw::Provider(Arc::new(provider));
        self
    }

    pub fn with_normalize(
        mut self,
        normalize: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.normalize = Some(Arc::new(normalize));
        self
    }

    pub fn with_on_landed(mut self, on_landed: impl Fn(&Entry) + Send + Sync + 'static) -> Self {
        self.on_landed = Some(Arc::new(on_landed));
        self
    }

    /// Applies the configured normalization to an identity.
    pub(crate) fn normalized(&self, identity: &str) -> String {
        match &self.normalize {
            Some(f) => f(identity),
            None => String::from(identity),
        }
    }
}

impl Clone for SpinnerOptions {
    fn clone(&self) -> Self {
        Self {
            item_height: self.item_height,
            window_capacity: self.window_capacity,
            swap_threshold: self.swap_threshold,
            min_duration_secs: self.min_duration_secs,
            profile: self.profile,
            rotation_draw: self.rotation_draw.clone(),
            normalize: self.normalize.clone(),
            on_landed: self.on_landed.clone(),
        }
    }
}

impl core::fmt::Debug for SpinnerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpinnerOptions")
            .field("item_height", &self.item_height)
            .field("window_capacity", &self.window_capacity)
            .field("swap_threshold", &self.swap_threshold)
            .field("min_duration_secs", &self.min_duration_secs)
            .field("profile", &self.profile)
            .field("rotation_draw", &self.rotation_draw)
            .finish_non_exhaustive()
    }
}
