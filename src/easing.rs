/// Deceleration profiles for the landing phase of a spin.
///
/// Every profile maps progress `t ∈ [0,1]` to eased progress, is monotonic
/// non-decreasing, and satisfies `sample(0) == 0` and `sample(1) == 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecelProfile {
    /// Cubic ease-out: `1 - (1-t)^3`. Long, gentle runout.
    #[default]
    Slow,
    /// Quadratic ease-out: `1 - (1-t)^2`.
    Medium,
    /// Linear for the first half, quadratic ease-out for the second,
    /// blended continuously at `t = 0.5`.
    Fast,
}

impl DecelProfile {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Slow => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::Medium => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::Fast => {
                // Linear-in, quadratic-out, joined at t = 0.5 with matching
                // value (2/3) and slope (4/3) so the blend has no kink.
                if t < 0.5 {
                    t * (4.0 / 3.0)
                } else {
                    let u = 1.0 - t;
                    1.0 - u * u * (4.0 / 3.0)
                }
            }
        }
    }
}
