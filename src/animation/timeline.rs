/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Fixed-duration clock producing a monotonic progress fraction.
///
/// The timeline never reads the system clock; the host feeds it either
/// elapsed milliseconds ([`Timeline::advance_by`]) or an absolute progress
/// fraction ([`Timeline::seek`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration_ms: f32,
    elapsed_ms: f32,
    /// Progress from 0.0 to 1.0
    progress: f32,
    running: bool,
}

impl Timeline {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0.0,
            progress: 0.0,
            running: false,
        }
    }

    /// Restart from zero
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.progress = 0.0;
        self.running = true;
    }

    /// Cancel without flushing a final frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Change the duration. Elapsed time is kept, so a running timeline
    /// continues from where it is.
    pub fn set_duration(&mut self, duration_ms: f32) {
        self.duration_ms = duration_ms;
    }

    /// Add elapsed milliseconds and return the new progress
    pub fn advance_by(&mut self, delta_ms: f32) -> f32 {
        if !self.running {
            return self.progress;
        }
        self.elapsed_ms += delta_ms.max(0.0);
        let fraction = if self.duration_ms <= 0.0 {
            1.0
        } else {
            self.elapsed_ms / self.duration_ms
        };
        self.progress = self.progress.max(fraction.min(1.0));
        self.progress
    }

    /// Jump to an absolute progress fraction. Progress never moves backwards.
    pub fn seek(&mut self, fraction: f32) -> f32 {
        if !self.running {
            return self.progress;
        }
        self.progress = self.progress.max(fraction.clamp(0.0, 1.0));
        self.elapsed_ms = self.elapsed_ms.max(self.progress * self.duration_ms);
        self.progress
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Rounding applied to an interpolated value before it is published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

impl Rounding {
    pub fn apply(self, value: f32) -> f32 {
        match self {
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
        }
    }
}

/// One animated quantity: the value captured when the animation started and
/// the value it is heading for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub start: f32,
    pub target: f32,
    pub rounding: Rounding,
}

impl Track {
    pub fn new(start: f32, target: f32, rounding: Rounding) -> Self {
        Self {
            start,
            target,
            rounding,
        }
    }

    /// Interpolated value at the given eased progress
    pub fn sample(&self, eased: f32) -> f32 {
        self.rounding
            .apply(self.start + (self.target - self.start) * eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_new_is_idle() {
        let timeline = Timeline::new(300.0);
        assert!(!timeline.is_running());
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn test_timeline_advance_by() {
        let mut timeline = Timeline::new(200.0);
        timeline.start();
        assert_eq!(timeline.advance_by(50.0), 0.25);
        assert_eq!(timeline.advance_by(100.0), 0.75);
        assert_eq!(timeline.advance_by(100.0), 1.0);
        assert!(timeline.is_finished());
    }

    #[test]
    fn test_timeline_ignores_ticks_when_stopped() {
        let mut timeline = Timeline::new(200.0);
        assert_eq!(timeline.advance_by(100.0), 0.0);
        timeline.start();
        timeline.advance_by(100.0);
        timeline.stop();
        assert_eq!(timeline.advance_by(100.0), 0.5);
    }

    #[test]
    fn test_timeline_seek_is_monotonic() {
        let mut timeline = Timeline::new(100.0);
        timeline.start();
        assert_eq!(timeline.seek(0.6), 0.6);
        assert_eq!(timeline.seek(0.3), 0.6);
        assert_eq!(timeline.seek(4.0), 1.0);
    }

    #[test]
    fn test_timeline_zero_duration_completes_on_first_tick() {
        let mut timeline = Timeline::new(0.0);
        timeline.start();
        assert_eq!(timeline.advance_by(0.0), 1.0);
    }

    #[test]
    fn test_timeline_duration_change_keeps_elapsed() {
        let mut timeline = Timeline::new(100.0);
        timeline.start();
        timeline.advance_by(50.0);
        timeline.set_duration(200.0);
        // 60ms of 200ms is behind the current progress, so progress holds
        assert_eq!(timeline.advance_by(10.0), 0.5);
        assert_eq!(timeline.advance_by(90.0), 0.75);
    }

    #[test]
    fn test_track_rounding() {
        let down = Track::new(40.0, 10.0, Rounding::Floor);
        assert_eq!(down.sample(0.0), 40.0);
        assert_eq!(down.sample(0.5), 25.0);
        assert_eq!(down.sample(0.51), 24.0);
        assert_eq!(down.sample(1.0), 10.0);

        let up = Track::new(10.0, 40.0, Rounding::Ceil);
        assert_eq!(up.sample(0.01), 11.0);
        assert_eq!(up.sample(1.0), 40.0);
    }

    #[test]
    fn test_advance_result_is_changed() {
        assert!(AdvanceResult::Changed(1).is_changed());
        assert!(!AdvanceResult::<i32>::NoChange.is_changed());
    }
}
