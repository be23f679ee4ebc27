//! Drives two labels through a focus cycle without a window and prints every
//! frame. Run with `RUST_LOG=debug` to see the transition log.

use std::time::Duration;

use floating_label::prelude::*;

/// Frame interval of a 60Hz host
const FRAME: Duration = Duration::from_millis(16);

struct PrintPainter<'a> {
    name: &'a str,
}

impl LabelPainter for PrintPainter<'_> {
    fn draw_line(&mut self, line: Line, _color: Color) {
        println!(
            "  [{}] cutout ({}, {}) -> ({}, {})",
            self.name, line.from.x, line.from.y, line.to.x, line.to.y
        );
    }

    fn draw_text(&mut self, anchor: Point, text: &str, font: &Font, color: Color) {
        println!(
            "  [{}] {:?} at ({}, {}) {}pt rgb({:.2}, {:.2}, {:.2})",
            self.name, text, anchor.x, anchor.y, font.point_size, color.r, color.g, color.b
        );
    }
}

fn run_until_idle(name: &str, label: &mut FloatingLabel) {
    let mut painter = PrintPainter { name };
    label.paint(&mut painter);
    while label.is_animating() {
        if let AdvanceResult::Changed(frame) = label.tick(FRAME) {
            frame.paint(&mut painter);
        }
    }
}

fn main() {
    env_logger::init();

    let highlight = Color::from_hex(0x3daee9);
    let config = |text: &str| {
        LabelConfig::new(text)
            .border_radius(2)
            .font_sizes(10.0, 8.0)
            .placeholder_color_outside(highlight)
    };

    let mut username = FloatingLabel::new(config("Username"), CosmicTextMeasurer::new(), 120, 35);
    let mut password = FloatingLabel::new(config("Password"), CosmicTextMeasurer::new(), 120, 35);
    println!(
        "top margin: username {}, password {}",
        username.content_margin_top(),
        password.content_margin_top()
    );

    println!("focus username");
    username.handle_event(&Event::FocusIn);
    run_until_idle("username", &mut username);

    println!("type into username, focus password");
    username.handle_event(&Event::TextChanged { is_empty: false });
    if !username.handle_event(&Event::FocusOut) {
        println!("username keeps its floated label");
    }
    password.handle_event(&Event::FocusIn);
    run_until_idle("password", &mut password);

    println!("password loses focus and regains it mid-transition");
    password.handle_event(&Event::FocusOut);
    password.tick(FRAME * 5);
    password.handle_event(&Event::FocusIn);
    run_until_idle("password", &mut password);

    println!("shrink password");
    password.handle_event(&Event::Resize {
        width: 60,
        height: 35,
    });
    run_until_idle("password", &mut password);
}
