//! Static layout of the placeholder label.
//!
//! Everything here is a pure function of the label text, both fonts, the
//! widget size and the border metrics. The snapshot is replaced wholesale
//! whenever one of those inputs changes.

use crate::text::TextMeasurer;
use crate::widgets::{Font, Line, Point, Size};

/// Minimum horizontal inset of the label text
const MIN_TEXT_START: i32 = 15;

/// Extra inset beyond the border radius so rounded corners stay clear
const RADIUS_CLEARANCE: i32 = 10;

/// Horizontal overhang of the cutout stroke on each side of the outside label
const CUTOUT_PADDING: i32 = 5;

/// Inputs of a geometry recompute
#[derive(Debug, Clone, Copy)]
pub struct GeometryInput<'a> {
    pub text: &'a str,
    pub font_inner: &'a Font,
    pub font_outer: &'a Font,
    pub width: i32,
    pub height: i32,
    pub border_radius: i32,
    /// Border width while focused, which is when the label sits outside
    pub border_width: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeometrySnapshot {
    pub text_start_x: i32,
    pub position_inner: Point,
    pub position_outer: Point,
    /// Top content margin of the entry, and the y of the cutout stroke
    pub top_offset: i32,
    pub elided_text_inner: String,
    pub elided_text_outer: String,
    /// Bounding box of `elided_text_outer` in the outer font
    pub outer_text_width: i32,
    pub outer_text_height: i32,
    /// Bounding box height of `elided_text_inner` in the inner font
    pub inner_text_height: i32,
    pub available_width: i32,
    pub border_width: i32,
    /// Number of cutout strokes: the border width, at most the widget height
    pub cutout_rows: i32,
}

impl GeometrySnapshot {
    pub fn compute<M: TextMeasurer + ?Sized>(measurer: &mut M, input: &GeometryInput<'_>) -> Self {
        let text_start_x = MIN_TEXT_START.max(input.border_radius.saturating_add(RADIUS_CLEARANCE));
        let available_width = input.width.saturating_sub(text_start_x.saturating_mul(2));

        let elided_text_inner = measurer.elide(input.text, input.font_inner, available_width as f32);
        let elided_text_outer = measurer.elide(input.text, input.font_outer, available_width as f32);

        let inner = pixel_size(measurer.measure(&elided_text_inner, input.font_inner));
        let outer = pixel_size(measurer.measure(&elided_text_outer, input.font_outer));

        let top_offset = ceil_half(outer.1.saturating_sub(input.border_width));
        let below_top = input.height.saturating_sub(top_offset);
        let inner_y = top_offset
            .saturating_add(below_top.saturating_sub(ceil_half(below_top.saturating_sub(inner.1))));

        let snapshot = Self {
            text_start_x,
            position_inner: Point::new(text_start_x, inner_y),
            position_outer: Point::new(text_start_x, outer.1),
            top_offset,
            elided_text_inner,
            elided_text_outer,
            outer_text_width: outer.0,
            outer_text_height: outer.1,
            inner_text_height: inner.1,
            available_width,
            border_width: input.border_width,
            cutout_rows: input.border_width.clamp(0, input.height.max(0)),
        };
        log::debug!(
            "label geometry for {}x{}: inner {:?}, outer {:?}, top offset {}",
            input.width,
            input.height,
            snapshot.position_inner,
            snapshot.position_outer,
            snapshot.top_offset
        );
        snapshot
    }

    /// Strokes in the background color that punch the outside label through
    /// the entry border, one per pixel of border width.
    pub fn cutout_lines(&self) -> Vec<Line> {
        let left = self.text_start_x.saturating_sub(CUTOUT_PADDING);
        let right = self
            .text_start_x
            .saturating_add(self.outer_text_width)
            .saturating_add(CUTOUT_PADDING);
        (0..self.cutout_rows)
            .map(|i| {
                let y = self.top_offset.saturating_add(i);
                Line {
                    from: Point::new(left, y),
                    to: Point::new(right, y),
                }
            })
            .collect()
    }
}

/// Round a measured box up to whole pixels
fn pixel_size(size: Size) -> (i32, i32) {
    (size.width.ceil() as i32, size.height.ceil() as i32)
}

/// `ceil(value / 2)` for integers, including negative values
fn ceil_half(value: i32) -> i32 {
    (value as f32 / 2.0).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{MonospaceMeasurer, ELLIPSIS};
    use crate::widgets::FontFamily;

    fn fonts() -> (Font, Font) {
        (
            Font::new(FontFamily::Monospace, 10.0),
            Font::new(FontFamily::Monospace, 8.0),
        )
    }

    fn input<'a>(inner: &'a Font, outer: &'a Font, width: i32) -> GeometryInput<'a> {
        GeometryInput {
            text: "Username",
            font_inner: inner,
            font_outer: outer,
            width,
            height: 35,
            border_radius: 0,
            border_width: 1,
        }
    }

    #[test]
    fn anchors_follow_text_bounds() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let geometry = GeometrySnapshot::compute(&mut measurer, &input(&inner, &outer, 200));

        assert_eq!(geometry.text_start_x, 15);
        assert_eq!(geometry.available_width, 170);
        assert_eq!(geometry.elided_text_inner, "Username");
        assert_eq!(geometry.elided_text_outer, "Username");
        // outer: 8pt * 1.5 = 12 high, (12 - 1) / 2 rounded up
        assert_eq!(geometry.top_offset, 6);
        assert_eq!(geometry.position_outer, Point::new(15, 12));
        // inner: 15 high, centered in the 29px below the offset
        assert_eq!(geometry.position_inner, Point::new(15, 28));
        assert_eq!(geometry.outer_text_width, 48);
    }

    #[test]
    fn border_radius_pushes_text_start() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let mut params = input(&inner, &outer, 200);
        params.border_radius = 2;
        assert_eq!(GeometrySnapshot::compute(&mut measurer, &params).text_start_x, 15);
        params.border_radius = 12;
        let geometry = GeometrySnapshot::compute(&mut measurer, &params);
        assert_eq!(geometry.text_start_x, 22);
        assert_eq!(geometry.position_inner.x, 22);
        assert_eq!(geometry.position_outer.x, 22);
    }

    #[test]
    fn recompute_is_idempotent() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let params = input(&inner, &outer, 73);
        let first = GeometrySnapshot::compute(&mut measurer, &params);
        let second = GeometrySnapshot::compute(&mut measurer, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn elides_to_available_width() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        // 70 - 2 * 15 leaves 40 units; "Username" is 60 units at 10pt
        let geometry = GeometrySnapshot::compute(&mut measurer, &input(&inner, &outer, 70));

        assert_eq!(geometry.available_width, 40);
        assert!(geometry.elided_text_inner.ends_with(ELLIPSIS));
        assert!(measurer.measure(&geometry.elided_text_inner, &inner).width <= 40.0);
        // the smaller outer font elides independently: 6 units per char at 8pt
        assert_eq!(geometry.elided_text_outer, "Usern\u{2026}");
    }

    #[test]
    fn degenerate_width_elides_to_empty() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let geometry = GeometrySnapshot::compute(&mut measurer, &input(&inner, &outer, 0));
        assert_eq!(geometry.elided_text_inner, "");
        assert_eq!(geometry.elided_text_outer, "");

        let geometry = GeometrySnapshot::compute(&mut measurer, &input(&inner, &outer, -40));
        assert_eq!(geometry.elided_text_inner, "");
    }

    #[test]
    fn cutout_has_one_line_per_border_pixel() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let mut params = input(&inner, &outer, 200);
        params.border_width = 3;
        let geometry = GeometrySnapshot::compute(&mut measurer, &params);
        let lines = geometry.cutout_lines();

        // (12 - 3) / 2 rounded up
        assert_eq!(geometry.top_offset, 5);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].from, Point::new(10, 5));
        assert_eq!(lines[0].to, Point::new(68, 5));
        assert_eq!(lines[2].from.y, 7);
    }

    #[test]
    fn oversized_border_radius_leaves_no_room() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let mut params = input(&inner, &outer, 200);
        for radius in [1_100_000_000, i32::MAX] {
            params.border_radius = radius;
            let geometry = GeometrySnapshot::compute(&mut measurer, &params);
            assert!(geometry.available_width < 0);
            assert_eq!(geometry.elided_text_inner, "");
            assert_eq!(geometry.elided_text_outer, "");
            assert_eq!(geometry.outer_text_width, 0);
        }
    }

    #[test]
    fn cutout_rows_capped_at_widget_height() {
        let (inner, outer) = fonts();
        let mut measurer = MonospaceMeasurer::new(0.75, 1.5);
        let mut params = input(&inner, &outer, 200);
        params.border_width = i32::MAX;
        let geometry = GeometrySnapshot::compute(&mut measurer, &params);
        assert_eq!(geometry.cutout_rows, 35);
        assert_eq!(geometry.cutout_lines().len(), 35);

        params.border_width = -4;
        assert!(GeometrySnapshot::compute(&mut measurer, &params)
            .cutout_lines()
            .is_empty());
    }

    #[test]
    fn ceil_half_handles_negatives() {
        assert_eq!(ceil_half(11), 6);
        assert_eq!(ceil_half(10), 5);
        assert_eq!(ceil_half(-1), 0);
        assert_eq!(ceil_half(-3), -1);
    }
}
