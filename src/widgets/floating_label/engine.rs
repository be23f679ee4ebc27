//! Placeholder transition engine.
//!
//! The engine owns the label's interpolated state and moves it between the
//! inside and outside anchors. Position and font size share one timeline, so
//! starting a direction always starts both and cancelling cancels both.
//!
//! ```text
//!  IdleInside --start(ToOutside)--> Animating(ToOutside) --p=1--> IdleOutside
//!  IdleOutside --start(ToInside)--> Animating(ToInside)  --p=1--> IdleInside
//!  Animating(ToInside) <--------- start(opposite) ---------> Animating(ToOutside)
//! ```
//!
//! Reversing mid-flight captures the current values as the new start values,
//! so the label never jumps.

use std::time::Duration;

use crate::animation::{AdvanceResult, Rounding, Timeline, Track, Transition};
use crate::widgets::{Color, Point};

/// Which anchor the label is heading for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ToOutside,
    ToInside,
}

impl Direction {
    fn rounding(self) -> Rounding {
        match self {
            Direction::ToOutside => Rounding::Floor,
            Direction::ToInside => Rounding::Ceil,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    IdleInside,
    IdleOutside,
    Animating(Direction),
}

impl Phase {
    /// Direction the label is moving in, or the one it last completed
    pub fn heading(self) -> Direction {
        match self {
            Phase::IdleInside => Direction::ToInside,
            Phase::IdleOutside => Direction::ToOutside,
            Phase::Animating(direction) => direction,
        }
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Animating(_))
    }
}

/// Current interpolated label values, replaced wholesale on every change
#[derive(Debug, Clone, PartialEq)]
pub struct LabelState {
    pub position: Point,
    pub font_size: f32,
    pub is_inside: bool,
    pub text: String,
    pub color: Color,
}

/// One end of the transition
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub position: Point,
    /// Whole, non-negative point size
    pub font_size: f32,
    /// Label text elided for this end's font
    pub text: String,
}

impl Endpoint {
    pub fn new(position: Point, font_size: f32, text: impl Into<String>) -> Self {
        Self {
            position,
            font_size: font_size.round().max(0.0),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelColors {
    pub inside: Color,
    /// Falls back to `inside` when unset
    pub outside: Option<Color>,
}

impl LabelColors {
    pub fn resolve(&self, direction: Direction) -> Color {
        match direction {
            Direction::ToOutside => self.outside.unwrap_or(self.inside),
            Direction::ToInside => self.inside,
        }
    }
}

pub struct TransitionEngine {
    state: LabelState,
    phase: Phase,
    timeline: Timeline,
    transition: Transition,
    position: Track,
    font: Track,
    inner: Endpoint,
    outer: Endpoint,
    colors: LabelColors,
}

impl TransitionEngine {
    /// Engine resting at the inside anchor
    pub fn new(inner: Endpoint, outer: Endpoint, colors: LabelColors, transition: Transition) -> Self {
        let state = LabelState {
            position: inner.position,
            font_size: inner.font_size,
            is_inside: true,
            text: inner.text.clone(),
            color: colors.resolve(Direction::ToInside),
        };
        let position_y = inner.position.y as f32;
        Self {
            position: Track::new(position_y, position_y, Rounding::Ceil),
            font: Track::new(inner.font_size, inner.font_size, Rounding::Ceil),
            timeline: Timeline::new(transition.duration_ms),
            state,
            phase: Phase::IdleInside,
            transition,
            inner,
            outer,
            colors,
        }
    }

    pub fn state(&self) -> &LabelState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Linear progress of the running animation
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn endpoint(&self, direction: Direction) -> &Endpoint {
        match direction {
            Direction::ToOutside => &self.outer,
            Direction::ToInside => &self.inner,
        }
    }

    /// Replace both anchors.
    ///
    /// An idle label jumps to its new anchor. A running animation keeps its
    /// progress and start values and heads for the new target from the next
    /// tick on.
    pub fn set_endpoints(&mut self, inner: Endpoint, outer: Endpoint) {
        self.inner = inner;
        self.outer = outer;
        match self.phase {
            Phase::IdleInside | Phase::IdleOutside => {
                let dest = self.endpoint(self.phase.heading()).clone();
                self.state.position = dest.position;
                self.state.font_size = dest.font_size;
                self.state.text = dest.text;
            }
            Phase::Animating(direction) => {
                let dest = self.endpoint(direction);
                let (target_y, target_size, x) =
                    (dest.position.y as f32, dest.font_size, dest.position.x);
                self.position.target = target_y;
                self.font.target = target_size;
                self.state.position.x = x;

                // Text elided for the old width may no longer fit. The text
                // elided for the larger font fits at every size in between.
                if self.state.text != self.inner.text && self.state.text != self.outer.text {
                    let fitting = if self.inner.font_size >= self.outer.font_size {
                        &self.inner
                    } else {
                        &self.outer
                    };
                    self.state.text = fitting.text.clone();
                }
            }
        }
    }

    /// Takes effect on the next tick; a running animation is not restarted.
    pub fn set_transition(&mut self, transition: Transition) {
        self.timeline.set_duration(transition.duration_ms);
        self.transition = transition;
    }

    pub fn set_colors(&mut self, colors: LabelColors) {
        self.colors = colors;
        self.state.color = colors.resolve(self.phase.heading());
    }

    /// Begin animating towards `direction`.
    ///
    /// Returns `false` without touching anything when the label is already
    /// heading that way or resting there.
    pub fn start(&mut self, direction: Direction) -> bool {
        if self.phase.heading() == direction {
            log::trace!("label already heading {:?}", direction);
            return false;
        }

        let interrupted = self.phase.is_animating();
        self.timeline.stop();

        let dest = self.endpoint(direction).clone();
        let rounding = direction.rounding();
        self.position = Track::new(
            self.state.position.y as f32,
            dest.position.y as f32,
            rounding,
        );
        self.font = Track::new(self.state.font_size, dest.font_size, rounding);
        self.state.color = self.colors.resolve(direction);

        // A less truncated destination text is safe to show right away
        if dest.text.chars().count() >= self.state.text.chars().count() {
            self.state.text = dest.text;
        }

        self.phase = Phase::Animating(direction);
        self.timeline.start();

        if interrupted {
            log::debug!(
                "label reversed {:?} at y={} size={}",
                direction,
                self.state.position.y,
                self.state.font_size
            );
        } else {
            log::debug!("label started {:?}", direction);
        }
        true
    }

    /// Jump straight to the end state of `direction`, cancelling any animation.
    pub fn snap(&mut self, direction: Direction) {
        self.timeline.stop();
        let dest = self.endpoint(direction).clone();
        self.state = LabelState {
            position: dest.position,
            font_size: dest.font_size,
            is_inside: direction == Direction::ToInside,
            text: dest.text,
            color: self.colors.resolve(direction),
        };
        self.phase = idle_phase(direction);
        log::debug!("label snapped {:?}", direction);
    }

    /// Move the running animation to absolute progress `fraction`.
    ///
    /// Progress is monotonic; a fraction behind the current progress leaves
    /// the state untouched.
    pub fn advance(&mut self, fraction: f32) -> AdvanceResult<LabelState> {
        if !self.phase.is_animating() {
            return AdvanceResult::NoChange;
        }
        let progress = self.timeline.seek(fraction);
        self.apply_progress(progress)
    }

    /// Advance the running animation by elapsed wall time
    pub fn tick(&mut self, delta: Duration) -> AdvanceResult<LabelState> {
        if !self.phase.is_animating() {
            return AdvanceResult::NoChange;
        }
        let progress = self.timeline.advance_by(delta.as_secs_f32() * 1000.0);
        self.apply_progress(progress)
    }

    fn apply_progress(&mut self, progress: f32) -> AdvanceResult<LabelState> {
        let Phase::Animating(direction) = self.phase else {
            return AdvanceResult::NoChange;
        };
        let before = self.state.clone();
        let eased = self.transition.eased(progress);

        self.state.position.y = self.position.sample(eased) as i32;
        self.state.font_size = self.font.sample(eased).max(0.0);

        match direction {
            Direction::ToOutside => {
                if self.state.is_inside && eased > self.transition.outside_threshold {
                    self.state.is_inside = false;
                }
            }
            Direction::ToInside => {
                if !self.state.is_inside && eased > self.transition.inside_threshold {
                    self.state.is_inside = true;
                }
            }
        }

        // Swap text only once the glyphs are drawn at the size it was elided for
        let dest = self.endpoint(direction);
        if self.state.font_size == dest.font_size && self.state.text != dest.text {
            let text = dest.text.clone();
            self.state.text = text;
        }

        if progress >= 1.0 {
            self.finish(direction);
        }

        log::trace!(
            "label tick p={:.3} eased={:.3} y={} size={}",
            progress,
            eased,
            self.state.position.y,
            self.state.font_size
        );

        if self.state != before {
            AdvanceResult::Changed(self.state.clone())
        } else {
            AdvanceResult::NoChange
        }
    }

    fn finish(&mut self, direction: Direction) {
        self.timeline.stop();
        let dest = self.endpoint(direction).clone();
        self.state.position = dest.position;
        self.state.font_size = dest.font_size;
        self.state.text = dest.text;
        self.state.is_inside = direction == Direction::ToInside;
        self.phase = idle_phase(direction);
        log::debug!("label finished {:?}", direction);
    }
}

fn idle_phase(direction: Direction) -> Phase {
    match direction {
        Direction::ToOutside => Phase::IdleOutside,
        Direction::ToInside => Phase::IdleInside,
    }
}
