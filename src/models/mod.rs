// src/models/mod.rs

pub mod glyph_model;
pub mod time_model;

pub use glyph_model::{
    pattern_for, DigitPattern, Glyph, HandAngles, CELLS_PER_DIGIT, DIGIT_COLS, DIGIT_ROWS,
};
pub use time_model::TimeDigits;
