pub mod floating_label;
pub mod font;
mod widget;

pub use floating_label::{
    ConfigChanges, Cutout, Direction, FloatingLabel, Frame, GeometrySnapshot, LabelConfig,
    LabelState, Phase,
};
pub use font::{Font, FontFamily, FontWeight};
pub use widget::{Color, Event, LabelPainter, Line, ParseColorError, Point, Size};
