// src/draw/cell_draw.rs
//
// Turns cell state into nannou draw calls: border square, face, and the
// two hands as rectangles rotated about the cell centre.

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::models::DIGIT_COLS;
use crate::utilities::parse_hex_color;
use crate::views::{ClockCell, DigitDisplay};

/// Resolved drawing parameters, parsed once from the config.
#[derive(Debug, Clone)]
pub struct CellStyle {
    pub cell_size: f32,
    pub border_size: f32,
    pub hand_thickness: f32,
    pub background: Rgb<f32>,
    pub border: Rgb<f32>,
    pub hand: Rgb<f32>,
}

impl CellStyle {
    pub fn from_config(style: &StyleConfig) -> Option<Self> {
        Some(Self {
            cell_size: style.cell_size,
            border_size: style.border_size,
            hand_thickness: style.hand_thickness,
            background: parse_hex_color(&style.background_color)?,
            border: parse_hex_color(&style.border_color)?,
            hand: parse_hex_color(&style.hand_color)?,
        })
    }
}

pub fn draw_display(draw: &Draw, display: &DigitDisplay, style: &CellStyle) {
    for (i, cell) in display.cells().iter().enumerate() {
        let row = i / DIGIT_COLS;
        let col = i % DIGIT_COLS;
        let center = pt2(
            display.origin.x + (col as f32 + 0.5) * style.cell_size,
            display.origin.y - (row as f32 + 0.5) * style.cell_size,
        );
        draw_cell(draw, cell, center, style);
    }
}

pub fn draw_cell(draw: &Draw, cell: &ClockCell, center: Point2, style: &CellStyle) {
    let inner = style.cell_size - 2.0 * style.border_size;

    draw.rect()
        .x_y(center.x, center.y)
        .w_h(style.cell_size, style.cell_size)
        .color(style.border);
    draw.rect()
        .x_y(center.x, center.y)
        .w_h(inner, inner)
        .color(style.background);

    let length = inner / 2.0;
    draw_hand(draw, center, length, style, cell.hour_angle);
    draw_hand(draw, center, length, style, cell.minute_angle);
}

// Hand angles are degrees clockwise from 12 o'clock; nannou rotations are
// counter-clockwise radians, hence the sign flip.
fn draw_hand(draw: &Draw, center: Point2, length: f32, style: &CellStyle, angle_degrees: f32) {
    let hand = draw
        .x_y(center.x, center.y)
        .rotate(-deg_to_rad(angle_degrees));
    hand.rect()
        .x_y(0.0, length / 2.0)
        .w_h(style.hand_thickness, length)
        .color(style.hand);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_style_config() -> StyleConfig {
        StyleConfig {
            cell_size: 50.0,
            border_size: 3.75,
            hand_thickness: 1.25,
            background_color: "#161616".to_string(),
            border_color: "#2e2e2e".to_string(),
            hand_color: "#e0ff55".to_string(),
            digit_gap: 10.0,
            group_gap: 30.0,
        }
    }

    #[test]
    fn test_style_resolves_from_config() {
        let style = CellStyle::from_config(&test_style_config()).unwrap();
        assert_eq!(style.cell_size, 50.0);
        assert_eq!(style.hand.green, 1.0);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let mut config = test_style_config();
        config.hand_color = "yellow".to_string();
        assert!(CellStyle::from_config(&config).is_none());
    }
}
