use super::TextMeasurer;
use crate::widgets::{Font, Size};

/// Deterministic measurer where every character advances by the same amount.
///
/// Widths are `chars * point_size * advance`, heights are
/// `point_size * line_height`. Useful for headless hosts and for tests that
/// need exact pixel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    advance: f32,
    line_height: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.5, 1.5)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        let size = font.point_size.max(0.0);
        let chars = text.chars().count() as f32;
        Size::new(chars * size * self.advance, size * self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::FontFamily;

    #[test]
    fn measures_fixed_advance() {
        let mut measurer = MonospaceMeasurer::new(0.75, 2.0);
        let size = measurer.measure("Username", &Font::new(FontFamily::Monospace, 10.0));
        assert_eq!(size, Size::new(60.0, 20.0));
    }

    #[test]
    fn empty_text_keeps_line_height() {
        let mut measurer = MonospaceMeasurer::default();
        let size = measurer.measure("", &Font::new(FontFamily::Monospace, 10.0));
        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 15.0);
    }
}
