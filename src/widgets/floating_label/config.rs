use bitflags::bitflags;

use crate::animation::{TimingFunction, Transition};
use crate::widgets::font::{DEFAULT_INNER_POINT_SIZE, DEFAULT_OUTER_POINT_SIZE};
use crate::widgets::{Color, Font, FontFamily};

use super::engine::LabelColors;

bitflags! {
    /// Which derived parts of the label a configuration change invalidates
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ConfigChanges: u8 {
        /// Text, fonts, radius or border widths changed; geometry is recomputed
        const GEOMETRY   = 0b001;
        /// Duration, easing or thresholds changed
        const TRANSITION = 0b010;
        /// Only colors changed; nothing is recomputed
        const COLORS     = 0b100;
    }
}

/// Everything the embedding application can tune about the label.
///
/// # Examples
///
/// ```
/// use floating_label::widgets::{Color, LabelConfig};
///
/// let config = LabelConfig::new("Username")
///     .font_sizes(10.0, 8.0)
///     .border_radius(2)
///     .placeholder_color_outside(Color::from_hex(0x3daee9));
/// assert_eq!(config.font_outer.point_size, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub placeholder_text: String,
    pub font_inner: Font,
    pub font_outer: Font,
    pub transition: Transition,
    pub placeholder_color: Color,
    /// Color while outside; `placeholder_color` when unset
    pub placeholder_color_outside: Option<Color>,
    /// Color of the cutout stroke behind the outside label
    pub background_color: Color,
    pub border_width: u32,
    pub border_radius: u32,
    /// Border width while focused; `border_width` when unset
    pub focused_border_width: Option<u32>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            placeholder_text: String::new(),
            font_inner: Font::new(FontFamily::default(), DEFAULT_INNER_POINT_SIZE),
            font_outer: Font::new(FontFamily::default(), DEFAULT_OUTER_POINT_SIZE),
            transition: Transition::default(),
            placeholder_color: Color::from_rgb8(100, 100, 100),
            placeholder_color_outside: None,
            background_color: Color::WHITE,
            border_width: 1,
            border_radius: 0,
            focused_border_width: None,
        }
    }
}

impl LabelConfig {
    pub fn new(placeholder_text: impl Into<String>) -> Self {
        Self {
            placeholder_text: placeholder_text.into(),
            ..Self::default()
        }
    }

    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    pub fn font_inner(mut self, font: Font) -> Self {
        self.font_inner = font;
        self
    }

    pub fn font_outer(mut self, font: Font) -> Self {
        self.font_outer = font;
        self
    }

    /// Set the family of both fonts
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_inner.family = family.clone();
        self.font_outer.family = family;
        self
    }

    /// Set the inside and outside point sizes
    pub fn font_sizes(mut self, inner: f32, outer: f32) -> Self {
        self.font_inner.point_size = inner;
        self.font_outer.point_size = outer;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.font_inner = self.font_inner.bold(bold);
        self.font_outer = self.font_outer.bold(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.font_inner.italic = italic;
        self.font_outer.italic = italic;
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.transition.duration_ms = duration_ms;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.transition.timing = timing;
        self
    }

    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    pub fn placeholder_color_outside(mut self, color: Color) -> Self {
        self.placeholder_color_outside = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    pub fn border_radius(mut self, radius: u32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn focused_border_width(mut self, width: u32) -> Self {
        self.focused_border_width = Some(width);
        self
    }

    /// Border width in effect while the label is floated
    pub fn effective_border_width(&self) -> u32 {
        self.focused_border_width.unwrap_or(self.border_width)
    }

    pub fn colors(&self) -> LabelColors {
        LabelColors {
            inside: self.placeholder_color,
            outside: self.placeholder_color_outside,
        }
    }

    /// Classify what differs between `self` and `other`
    pub fn changes(&self, other: &LabelConfig) -> ConfigChanges {
        let mut changes = ConfigChanges::empty();
        if self.placeholder_text != other.placeholder_text
            || self.font_inner != other.font_inner
            || self.font_outer != other.font_outer
            || self.border_radius != other.border_radius
            || self.effective_border_width() != other.effective_border_width()
        {
            changes |= ConfigChanges::GEOMETRY;
        }
        if self.transition != other.transition {
            changes |= ConfigChanges::TRANSITION;
        }
        if self.placeholder_color != other.placeholder_color
            || self.placeholder_color_outside != other.placeholder_color_outside
            || self.background_color != other.background_color
        {
            changes |= ConfigChanges::COLORS;
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LabelConfig::new("Test");
        assert_eq!(config.placeholder_text, "Test");
        assert_eq!(config.transition.duration_ms, 250.0);
        assert_eq!(config.transition.timing, TimingFunction::EaseInOutCubic);
        assert_eq!(config.placeholder_color_outside, None);
        assert_eq!(config.background_color, Color::WHITE);
        assert_eq!(config.border_width, 1);
        assert_eq!(config.border_radius, 0);
        assert_eq!(config.focused_border_width, None);
        assert_eq!(config.effective_border_width(), 1);
    }

    #[test]
    fn focused_border_width_overrides() {
        let config = LabelConfig::new("Test").border_width(1).focused_border_width(3);
        assert_eq!(config.effective_border_width(), 3);
    }

    #[test]
    fn color_changes_skip_geometry() {
        let before = LabelConfig::new("Test");
        let after = before.clone().placeholder_color(Color::BLACK);
        assert_eq!(before.changes(&after), ConfigChanges::COLORS);
    }

    #[test]
    fn layout_changes_need_geometry() {
        let before = LabelConfig::new("Test");
        assert_eq!(
            before.changes(&before.clone().font_sizes(14.0, 9.0)),
            ConfigChanges::GEOMETRY
        );
        assert_eq!(
            before.changes(&before.clone().border_radius(8)),
            ConfigChanges::GEOMETRY
        );
        assert_eq!(
            before.changes(&before.clone().placeholder_text("Other")),
            ConfigChanges::GEOMETRY
        );
        // unfocused border width only matters without a focused override
        let overridden = before.clone().focused_border_width(2);
        assert_eq!(
            overridden.changes(&overridden.clone().border_width(4)),
            ConfigChanges::empty()
        );
    }

    #[test]
    fn transition_changes() {
        let before = LabelConfig::new("Test");
        let after = before.clone().duration(150.0).italic(true);
        assert_eq!(
            before.changes(&after),
            ConfigChanges::TRANSITION | ConfigChanges::GEOMETRY
        );
    }

    #[test]
    fn unchanged_config_has_no_changes() {
        let config = LabelConfig::new("Test").bold(true);
        assert!(config.changes(&config.clone()).is_empty());
    }
}
