use cosmic_text::{Buffer, FontSystem, Metrics, Shaping};

use super::TextMeasurer;
use crate::widgets::{Font, Size};

/// Line height as a multiple of the point size
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// [`TextMeasurer`] backed by cosmic-text shaping against the system fonts.
pub struct CosmicTextMeasurer {
    font_system: FontSystem,
}

impl CosmicTextMeasurer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Use an existing font system, e.g. one with bundled fonts loaded
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }

    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }
}

impl Default for CosmicTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        let font_size = font.point_size.max(0.0);
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        // Single line: no wrapping width
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            &font.to_attrs(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, true);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        // Ensure minimum height for empty text
        if height == 0.0 {
            height = font_size * LINE_HEIGHT_FACTOR;
        }

        Size::new(width, height)
    }
}
