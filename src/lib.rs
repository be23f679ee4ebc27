//! Animated floating placeholder label for single-line text entries.
//!
//! The label rests inside an empty, unfocused entry in a large font and
//! floats above it in a small font once the entry gains focus. The crate
//! owns the geometry and the transition; drawing and text editing stay with
//! the host toolkit, reached through [`text::TextMeasurer`] and
//! [`widgets::LabelPainter`].

pub mod animation;
pub mod text;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{AdvanceResult, TimingFunction, Transition};
    pub use crate::text::{CosmicTextMeasurer, MonospaceMeasurer, TextMeasurer};
    pub use crate::widgets::{
        Color, Event, FloatingLabel, Font, FontFamily, FontWeight, Frame,
        LabelConfig, LabelPainter, Line, Phase, Point,
    };
}
