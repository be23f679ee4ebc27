mod timeline;
mod timing;

pub use timeline::{AdvanceResult, Rounding, Timeline, Track};
pub use timing::TimingFunction;

/// Default transition length in milliseconds
pub const DEFAULT_DURATION_MS: f32 = 250.0;

/// Eased progress past which the label counts as outside on the way out
pub const DEFAULT_OUTSIDE_THRESHOLD: f32 = 0.2;

/// Eased progress past which the label counts as inside on the way back in
pub const DEFAULT_INSIDE_THRESHOLD: f32 = 0.8;

/// Configuration for how the placeholder label moves between its anchors
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Eased progress at which an outward animation stops counting as inside
    pub outside_threshold: f32,
    /// Eased progress at which an inward animation starts counting as inside
    pub inside_threshold: f32,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            outside_threshold: DEFAULT_OUTSIDE_THRESHOLD,
            inside_threshold: DEFAULT_INSIDE_THRESHOLD,
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Set the classification thresholds for the outward and inward legs
    pub fn thresholds(mut self, outside: f32, inside: f32) -> Self {
        self.outside_threshold = outside;
        self.inside_threshold = inside;
        self
    }

    /// Eased progress for a linear progress value, clamped to `0.0..=1.0`.
    ///
    /// Completion always maps to exactly `1.0` so custom curves cannot leave
    /// the label short of its target.
    pub fn eased(&self, progress: f32) -> f32 {
        if progress >= 1.0 {
            return 1.0;
        }
        self.timing.evaluate(progress.max(0.0)).clamp(0.0, 1.0)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, TimingFunction::default())
    }
}
