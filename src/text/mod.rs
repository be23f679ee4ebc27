//! Text measurement services the label geometry depends on.
//!
//! The geometry only needs two things from a font engine: the bounding box of
//! a string and right elision to a maximum width. [`TextMeasurer`] captures
//! both, with elision provided on top of measurement.

mod cosmic;
mod monospace;

pub use cosmic::CosmicTextMeasurer;
pub use monospace::MonospaceMeasurer;

use crate::widgets::{Font, Size};

/// Marker appended to elided text
pub const ELLIPSIS: &str = "\u{2026}";

pub trait TextMeasurer {
    /// Bounding box of `text` laid out on a single line
    fn measure(&mut self, text: &str, font: &Font) -> Size;

    /// Shorten `text` with a trailing ellipsis so it fits `max_width`.
    ///
    /// Text that already fits is returned unchanged; a non-positive width
    /// yields an empty string.
    fn elide(&mut self, text: &str, font: &Font, max_width: f32) -> String {
        elide_right(self, text, font, max_width)
    }
}

/// Right elision by binary search over character prefixes.
pub fn elide_right<M: TextMeasurer + ?Sized>(
    measurer: &mut M,
    text: &str,
    font: &Font,
    max_width: f32,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if measurer.measure(text, font).width <= max_width {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let candidate = |len: usize| -> String {
        let mut s: String = chars[..len].iter().collect();
        s.push_str(ELLIPSIS);
        s
    };

    // Largest prefix whose elided form still fits
    let mut low = 0;
    let mut high = chars.len().saturating_sub(1);
    while low < high {
        let mid = (low + high + 1) / 2;
        if measurer.measure(&candidate(mid), font).width <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let elided = candidate(low);
    if measurer.measure(&elided, font).width <= max_width {
        elided
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::FontFamily;

    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer::new(0.75, 1.2)
    }

    #[test]
    fn fitting_text_is_unchanged() {
        let font = Font::new(FontFamily::Monospace, 10.0);
        assert_eq!(measurer().elide("Username", &font, 60.0), "Username");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let font = Font::new(FontFamily::Monospace, 10.0);
        let mut m = measurer();
        let elided = m.elide("Username", &font, 40.0);
        assert_eq!(elided, "User\u{2026}");
        assert!(elided.ends_with(ELLIPSIS));
        assert!(m.measure(&elided, &font).width <= 40.0);
    }

    #[test]
    fn only_ellipsis_fits() {
        let font = Font::new(FontFamily::Monospace, 10.0);
        assert_eq!(measurer().elide("Username", &font, 8.0), ELLIPSIS);
    }

    #[test]
    fn nothing_fits() {
        let font = Font::new(FontFamily::Monospace, 10.0);
        assert_eq!(measurer().elide("Username", &font, 5.0), "");
    }

    #[test]
    fn non_positive_width_elides_to_empty() {
        let font = Font::new(FontFamily::Monospace, 10.0);
        assert_eq!(measurer().elide("Username", &font, 0.0), "");
        assert_eq!(measurer().elide("Username", &font, -12.0), "");
    }

    #[test]
    fn multibyte_text_elides_on_char_boundaries() {
        let font = Font::new(FontFamily::Monospace, 10.0);
        let elided = measurer().elide("Benutzername\u{00e4}\u{00f6}", &font, 30.0);
        assert_eq!(elided, "Ben\u{2026}");
    }
}
