// src/draw/mod.rs
// The cell drawing module

pub mod cell_draw;

pub use cell_draw::{draw_cell, draw_display, CellStyle};
