//! Floating placeholder label for a single-line text entry.
//!
//! [`FloatingLabel`] decorates a host text entry. The host forwards focus,
//! resize and content notifications, drives time with [`FloatingLabel::tick`]
//! or [`FloatingLabel::advance`], and paints the current [`Frame`] after its
//! own content.
//!
//! ```
//! use std::time::Duration;
//! use floating_label::text::MonospaceMeasurer;
//! use floating_label::widgets::{FloatingLabel, LabelConfig};
//!
//! let mut label = FloatingLabel::new(
//!     LabelConfig::new("Username").duration(150.0),
//!     MonospaceMeasurer::default(),
//!     200,
//!     35,
//! );
//! label.on_focus_gained();
//! while label.is_animating() {
//!     label.tick(Duration::from_millis(16));
//! }
//! assert!(!label.frame().is_inside);
//! ```

mod config;
mod engine;
mod geometry;

pub use config::{ConfigChanges, LabelConfig};
pub use engine::{Direction, Endpoint, LabelColors, LabelState, Phase, TransitionEngine};
pub use geometry::{GeometryInput, GeometrySnapshot};

use std::time::Duration;

use crate::animation::AdvanceResult;
use crate::text::{CosmicTextMeasurer, TextMeasurer};
use crate::widgets::{Color, Event, Font, LabelPainter, Line, Point};

/// Background-colored strokes drawn behind the outside label
#[derive(Debug, Clone, PartialEq)]
pub struct Cutout {
    pub lines: Vec<Line>,
    pub color: Color,
}

/// Everything needed to paint the label for one repaint
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub anchor: Point,
    /// Font at the current interpolated point size
    pub font: Font,
    pub text: String,
    pub color: Color,
    pub is_inside: bool,
    /// Present while the label counts as outside
    pub cutout: Option<Cutout>,
}

impl Frame {
    pub fn font_size(&self) -> f32 {
        self.font.point_size
    }

    /// Draw the cutout (if any) and then the label text
    pub fn paint<P: LabelPainter + ?Sized>(&self, painter: &mut P) {
        if let Some(cutout) = &self.cutout {
            for line in &cutout.lines {
                painter.draw_line(*line, cutout.color);
            }
        }
        if !self.text.is_empty() {
            painter.draw_text(self.anchor, &self.text, &self.font, self.color);
        }
    }
}

pub struct FloatingLabel<M: TextMeasurer = CosmicTextMeasurer> {
    config: LabelConfig,
    measurer: M,
    geometry: GeometrySnapshot,
    engine: TransitionEngine,
    width: i32,
    height: i32,
    has_focus: bool,
    is_empty: bool,
}

impl<M: TextMeasurer> FloatingLabel<M> {
    /// Label resting inside an unfocused, empty entry of the given size
    pub fn new(config: LabelConfig, mut measurer: M, width: i32, height: i32) -> Self {
        let geometry = compute_geometry(&mut measurer, &config, width, height);
        let (inner, outer) = endpoints(&config, &geometry);
        let engine = TransitionEngine::new(inner, outer, config.colors(), config.transition.clone());
        Self {
            config,
            measurer,
            geometry,
            engine,
            width,
            height,
            has_focus: false,
            is_empty: true,
        }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    pub fn state(&self) -> &LabelState {
        self.engine.state()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Top margin the host entry should reserve for the floated label
    pub fn content_margin_top(&self) -> i32 {
        self.geometry.top_offset
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    pub fn on_focus_gained(&mut self) {
        self.has_focus = true;
        if !self.is_empty {
            log::trace!("focus gained with content, label stays");
            return;
        }
        self.engine.start(Direction::ToOutside);
    }

    pub fn on_focus_lost(&mut self) {
        self.has_focus = false;
        if !self.is_empty {
            log::trace!("focus lost with content, label stays");
            return;
        }
        self.engine.start(Direction::ToInside);
    }

    /// Recompute geometry for the new size. A running animation keeps its
    /// progress and heads for the new anchors.
    pub fn on_resize(&mut self, width: i32, height: i32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.recompute();
    }

    /// Content became empty or non-empty.
    ///
    /// Content arriving while the label rests inside (e.g. set
    /// programmatically) moves the label outside at once. Content cleared
    /// while unfocused animates the label back inside.
    pub fn on_text_changed(&mut self, is_empty: bool) {
        if self.is_empty == is_empty {
            return;
        }
        self.is_empty = is_empty;

        let heading = self.engine.phase().heading();
        if !is_empty {
            if heading == Direction::ToInside {
                self.engine.snap(Direction::ToOutside);
            }
        } else if !self.has_focus && heading == Direction::ToOutside {
            self.engine.start(Direction::ToInside);
        }
    }

    /// Dispatch a host notification. Returns `true` when the label or its
    /// geometry changed and needs a repaint; the host entry still handles
    /// every event itself.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let before = (self.frame(), self.phase(), self.geometry.clone());
        match *event {
            Event::FocusIn => self.on_focus_gained(),
            Event::FocusOut => self.on_focus_lost(),
            Event::Resize { width, height } => self.on_resize(width, height),
            Event::TextChanged { is_empty } => self.on_text_changed(is_empty),
        }
        before != (self.frame(), self.phase(), self.geometry.clone())
    }

    /// Move the running animation to absolute progress `fraction`.
    ///
    /// Returns the new frame, or [`AdvanceResult::NoChange`] when nothing
    /// visible moved and the previous paint is still current.
    pub fn advance(&mut self, fraction: f32) -> AdvanceResult<Frame> {
        let result = self.engine.advance(fraction);
        self.frame_if(result.is_changed())
    }

    /// Advance the running animation by elapsed time
    pub fn tick(&mut self, delta: Duration) -> AdvanceResult<Frame> {
        let result = self.engine.tick(delta);
        self.frame_if(result.is_changed())
    }

    fn frame_if(&self, changed: bool) -> AdvanceResult<Frame> {
        if changed {
            AdvanceResult::Changed(self.frame())
        } else {
            AdvanceResult::NoChange
        }
    }

    pub fn frame(&self) -> Frame {
        let state = self.engine.state();
        let base = if state.is_inside {
            &self.config.font_inner
        } else {
            &self.config.font_outer
        };
        let cutout = (!state.is_inside).then(|| Cutout {
            lines: self.geometry.cutout_lines(),
            color: self.config.background_color,
        });
        Frame {
            anchor: state.position,
            font: base.with_point_size(state.font_size),
            text: state.text.clone(),
            color: state.color,
            is_inside: state.is_inside,
            cutout,
        }
    }

    pub fn paint<P: LabelPainter + ?Sized>(&self, painter: &mut P) {
        self.frame().paint(painter);
    }

    /// Mutate the configuration in place and apply it
    pub fn configure(&mut self, update: impl FnOnce(&mut LabelConfig)) -> ConfigChanges {
        let mut config = self.config.clone();
        update(&mut config);
        self.set_config(config)
    }

    /// Replace the configuration. Geometry is only recomputed when a
    /// layout-affecting field changed; running animations continue.
    pub fn set_config(&mut self, config: LabelConfig) -> ConfigChanges {
        let changes = self.config.changes(&config);
        self.config = config;

        if changes.contains(ConfigChanges::TRANSITION) {
            self.engine.set_transition(self.config.transition.clone());
        }
        if changes.contains(ConfigChanges::COLORS) {
            self.engine.set_colors(self.config.colors());
        }
        if changes.contains(ConfigChanges::GEOMETRY) {
            self.recompute();
        }
        if !changes.is_empty() {
            log::debug!("label config applied: {:?}", changes);
        }
        changes
    }

    fn recompute(&mut self) {
        self.geometry = compute_geometry(&mut self.measurer, &self.config, self.width, self.height);
        let (inner, outer) = endpoints(&self.config, &self.geometry);
        self.engine.set_endpoints(inner, outer);
    }
}

fn compute_geometry<M: TextMeasurer + ?Sized>(
    measurer: &mut M,
    config: &LabelConfig,
    width: i32,
    height: i32,
) -> GeometrySnapshot {
    GeometrySnapshot::compute(
        measurer,
        &GeometryInput {
            text: &config.placeholder_text,
            font_inner: &config.font_inner,
            font_outer: &config.font_outer,
            width,
            height,
            border_radius: to_pixels(config.border_radius),
            border_width: to_pixels(config.effective_border_width()),
        },
    )
}

fn to_pixels(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn endpoints(config: &LabelConfig, geometry: &GeometrySnapshot) -> (Endpoint, Endpoint) {
    (
        Endpoint::new(
            geometry.position_inner,
            config.font_inner.point_size,
            geometry.elided_text_inner.clone(),
        ),
        Endpoint::new(
            geometry.position_outer,
            config.font_outer.point_size,
            geometry.elided_text_outer.clone(),
        ),
    )
}
