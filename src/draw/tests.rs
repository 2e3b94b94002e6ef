use std::cell::RefCell;

use super::{
    Color, DrawingSurface, FontSlant, FontWeight, color::*, draw_line, draw_rect, draw_text,
    fill_background,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetSource(Color),
    Rectangle(f64, f64, f64, f64),
    Fill,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    LineWidth(f64),
    Stroke,
    FontFace(String, FontSlant, FontWeight),
    FontSize(f64),
    ShowText(String),
}

#[derive(Default)]
struct RecordingSurface {
    calls: RefCell<Vec<Call>>,
}

impl RecordingSurface {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_source_color(&self, color: Color) {
        self.push(Call::SetSource(color));
    }

    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) {
        self.push(Call::Rectangle(x, y, width, height));
    }

    fn fill(&self) {
        self.push(Call::Fill);
    }

    fn move_to(&self, x: f64, y: f64) {
        self.push(Call::MoveTo(x, y));
    }

    fn line_to(&self, x: f64, y: f64) {
        self.push(Call::LineTo(x, y));
    }

    fn set_line_width(&self, width: f64) {
        self.push(Call::LineWidth(width));
    }

    fn stroke(&self) {
        self.push(Call::Stroke);
    }

    fn select_font_face(&self, family: &str, slant: FontSlant, weight: FontWeight) {
        self.push(Call::FontFace(family.to_string(), slant, weight));
    }

    fn set_font_size(&self, size: f64) {
        self.push(Call::FontSize(size));
    }

    fn show_text(&self, text: &str) {
        self.push(Call::ShowText(text.to_string()));
    }
}

const NO_SURFACE: Option<&RecordingSurface> = None;

#[test]
fn fill_background_covers_origin_rect() {
    let surface = RecordingSurface::default();
    fill_background(Some(&surface), 40.0, 30.0, "white");
    assert_eq!(
        surface.calls(),
        vec![
            Call::SetSource(WHITE),
            Call::Rectangle(0.0, 0.0, 40.0, 30.0),
            Call::Fill,
        ]
    );
}

#[test]
fn fill_background_skips_degenerate_sizes() {
    let surface = RecordingSurface::default();
    fill_background(Some(&surface), 0.0, 10.0, "white");
    fill_background(Some(&surface), 10.0, -1.0, "white");
    fill_background(Some(&surface), f64::NAN, 10.0, "white");
    assert!(surface.calls().is_empty());
}

#[test]
fn operations_without_context_are_noops() {
    let surface = RecordingSurface::default();

    fill_background(NO_SURFACE, 10.0, 10.0, "white");
    draw_line(NO_SURFACE, 0.0, 0.0, 10.0, 10.0, "red");
    draw_rect(Some(&surface), 1.0, 1.0, 2.0, 2.0, "blue");
    draw_text(NO_SURFACE, 0.0, 13.0, "ignored", "green");
    draw_rect(NO_SURFACE, 0.0, 0.0, 5.0, 5.0, "red");

    // Only the call with a context reached a surface.
    assert_eq!(
        surface.calls(),
        vec![
            Call::SetSource(BLUE),
            Call::Rectangle(1.0, 1.0, 2.0, 2.0),
            Call::Fill,
        ]
    );
}

#[test]
fn draw_line_strokes_one_unit_path() {
    let surface = RecordingSurface::default();
    draw_line(Some(&surface), 1.0, 2.0, 30.0, 40.0, "#00f");
    assert_eq!(
        surface.calls(),
        vec![
            Call::SetSource(BLUE),
            Call::LineWidth(1.0),
            Call::MoveTo(1.0, 2.0),
            Call::LineTo(30.0, 40.0),
            Call::Stroke,
        ]
    );
}

#[test]
fn draw_line_accepts_zero_length() {
    let surface = RecordingSurface::default();
    draw_line(Some(&surface), 5.0, 5.0, 5.0, 5.0, "red");
    assert_eq!(surface.calls().len(), 5);
}

#[test]
fn draw_text_uses_sans_13() {
    let surface = RecordingSurface::default();
    draw_text(Some(&surface), 8.0, 20.0, "hello", "RED");
    assert_eq!(
        surface.calls(),
        vec![
            Call::SetSource(RED),
            Call::FontFace("Sans".to_string(), FontSlant::Normal, FontWeight::Normal),
            Call::FontSize(13.0),
            Call::MoveTo(8.0, 20.0),
            Call::ShowText("hello".to_string()),
        ]
    );
}

#[test]
fn draw_text_with_unknown_color_uses_black() {
    let surface = RecordingSurface::default();
    draw_text(Some(&surface), 0.0, 0.0, "", "chartreuse");
    assert_eq!(surface.calls()[0], Call::SetSource(BLACK));
}

#[test]
fn draw_rect_fills_rect() {
    let surface = RecordingSurface::default();
    draw_rect(Some(&surface), 3.0, 4.0, 5.0, 6.0, "#00ff0080");
    assert_eq!(
        surface.calls(),
        vec![
            Call::SetSource(Color::new(0.0, 1.0, 0.0, 128.0 / 255.0)),
            Call::Rectangle(3.0, 4.0, 5.0, 6.0),
            Call::Fill,
        ]
    );
}

#[test]
fn draw_rect_skips_degenerate_sizes() {
    let surface = RecordingSurface::default();
    draw_rect(Some(&surface), 0.0, 0.0, -5.0, 6.0, "red");
    draw_rect(Some(&surface), 0.0, 0.0, 5.0, 0.0, "red");
    assert!(surface.calls().is_empty());
}

#[test]
fn calls_are_issued_in_invocation_order() {
    let surface = RecordingSurface::default();
    fill_background(Some(&surface), 10.0, 10.0, "white");
    draw_rect(Some(&surface), 1.0, 1.0, 2.0, 2.0, "red");
    let calls = surface.calls();
    assert_eq!(calls[0], Call::SetSource(WHITE));
    assert_eq!(calls[3], Call::SetSource(RED));
}

#[test]
fn works_through_trait_object() {
    let surface = RecordingSurface::default();
    let dynamic: &dyn DrawingSurface = &surface;
    draw_rect(Some(dynamic), 0.0, 0.0, 1.0, 1.0, "green");
    assert_eq!(surface.calls()[0], Call::SetSource(GREEN));
}
