//! Font description used for the inside and outside placeholder label.

use cosmic_text::{Attrs, Family, Style, Weight};

/// Font family selection.
///
/// # Examples
///
/// ```
/// use floating_label::widgets::{Font, FontFamily};
///
/// let font = Font::new(FontFamily::Name("Inter".into()), 10.0);
/// assert_eq!(font.family, FontFamily::Name("Inter".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Sans-serif font (default system sans-serif)
    #[default]
    SansSerif,
    /// Serif font (default system serif)
    Serif,
    /// Monospace font (default system monospace)
    Monospace,
    /// Custom font by name
    Name(String),
}

impl FontFamily {
    /// Convert to cosmic-text Family type for shaping.
    pub fn to_cosmic(&self) -> Family<'_> {
        match self {
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
            FontFamily::Name(name) => Family::Name(name),
        }
    }
}

/// Font weight on a 100-900 scale, matching CSS font-weight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal/regular weight (400) - default
    pub const NORMAL: Self = Self(400);
    /// Bold weight (700)
    pub const BOLD: Self = Self(700);

    /// Convert to cosmic-text Weight type for shaping.
    pub fn to_cosmic(self) -> Weight {
        Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Default point size of the inside label
pub const DEFAULT_INNER_POINT_SIZE: f32 = 11.0;

/// Default point size of the outside label
pub const DEFAULT_OUTER_POINT_SIZE: f32 = 9.0;

/// A concrete font: family, point size and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub point_size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    pub fn new(family: FontFamily, point_size: f32) -> Self {
        Self {
            family,
            point_size,
            weight: FontWeight::NORMAL,
            italic: false,
        }
    }

    /// Toggle between [`FontWeight::BOLD`] and [`FontWeight::NORMAL`]
    pub fn bold(mut self, bold: bool) -> Self {
        self.weight = if bold {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        };
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight.0 >= FontWeight::BOLD.0
    }

    /// Same family and style at a different size
    pub fn with_point_size(&self, point_size: f32) -> Self {
        Self {
            point_size,
            ..self.clone()
        }
    }

    /// cosmic-text attributes for this font
    pub fn to_attrs(&self) -> Attrs<'_> {
        let style = if self.italic {
            Style::Italic
        } else {
            Style::Normal
        };
        Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
            .style(style)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::default(), DEFAULT_INNER_POINT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_family_default() {
        assert_eq!(FontFamily::default(), FontFamily::SansSerif);
    }

    #[test]
    fn font_weight_default() {
        assert_eq!(FontWeight::default(), FontWeight(400));
    }

    #[test]
    fn bold_toggles_weight() {
        let font = Font::default().bold(true);
        assert!(font.is_bold());
        assert_eq!(font.weight, FontWeight::BOLD);
        assert!(!font.bold(false).is_bold());
    }

    #[test]
    fn with_point_size_keeps_style() {
        let font = Font::new(FontFamily::Serif, 12.0).italic(true).bold(true);
        let smaller = font.with_point_size(8.0);
        assert_eq!(smaller.point_size, 8.0);
        assert_eq!(smaller.family, FontFamily::Serif);
        assert!(smaller.italic);
        assert!(smaller.is_bold());
    }
}
