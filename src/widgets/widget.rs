use super::font::Font;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned by [`Color::parse_hex`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 3, 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex color: {0}")]
    InvalidDigit(String),
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn parse_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || ParseColorError::InvalidDigit(input.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
                Ok(Self::from_rgb8(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                ))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_hex(value))
            }
            8 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let mut color = Self::from_hex(value >> 8);
                color.a = (value & 0xFF) as f32 / 255.0;
                Ok(color)
            }
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Integer pixel position relative to the widget's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A one pixel wide horizontal or vertical stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// Notifications delivered by the host text entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Entry gained keyboard focus
    FocusIn,
    /// Entry lost keyboard focus
    FocusOut,
    /// Entry was resized
    Resize { width: i32, height: i32 },
    /// Entry content changed
    TextChanged { is_empty: bool },
}

/// Drawing primitives the host surface provides for the label.
///
/// Implementations paint in widget-local coordinates.
pub trait LabelPainter {
    fn draw_line(&mut self, line: Line, color: Color);

    /// Draw `text` with its baseline-left corner at `anchor`
    fn draw_text(&mut self, anchor: Point, text: &str, font: &Font, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        let color = Color::parse_hex("#FFFFFF").unwrap();
        assert_eq!(color, Color::WHITE);
        assert_eq!("646464".parse::<Color>().unwrap(), Color::from_hex(0x646464));
    }

    #[test]
    fn parse_short_and_alpha_hex() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        let translucent = Color::parse_hex("#00000080").unwrap();
        assert_eq!(translucent.r, 0.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_hex_errors() {
        assert_eq!(
            Color::parse_hex("#12345"),
            Err(ParseColorError::InvalidLength(5))
        );
        assert_eq!(
            Color::parse_hex("#zzzzzz"),
            Err(ParseColorError::InvalidDigit("#zzzzzz".into()))
        );
    }

    #[test]
    fn from_rgb8_matches_from_hex() {
        assert_eq!(Color::from_rgb8(100, 100, 100), Color::from_hex(0x646464));
    }
}
