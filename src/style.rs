use iced::{button, container, Background, Color, Vector};

const ACCENT: Color = Color {
    r: 0.325,
    g: 0.510,
    b: 0.631,
    a: 1.0,
};

const CREAM: Color = Color {
    r: 1.0,
    g: 0.973,
    b: 0.941,
    a: 1.0,
};

const INK: Color = Color {
    r: 0.176,
    g: 0.165,
    b: 0.149,
    a: 1.0,
};

pub struct Button;

impl button::StyleSheet for Button {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(ACCENT)),
            border_radius: 4.0,
            text_color: Color::WHITE,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            shadow_offset: Vector::new(0.0, 1.0),
            background: Some(Background::Color(INK)),
            ..self.active()
        }
    }
}

pub struct Container;

impl container::StyleSheet for Container {
    fn style(&self) -> container::Style {
        container::Style {
            text_color: Some(INK),
            background: Some(Background::Color(CREAM)),
            ..container::Style::default()
        }
    }
}

/// The card holding an open detail entry.
pub struct Dialog;

impl container::StyleSheet for Dialog {
    fn style(&self) -> container::Style {
        container::Style {
            text_color: Some(INK),
            background: Some(Background::Color(Color::WHITE)),
            border_radius: 8.0,
            border_width: 1.0,
            border_color: ACCENT,
            ..container::Style::default()
        }
    }
}
