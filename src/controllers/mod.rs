// src/controllers/mod.rs

pub mod clock_controller;

pub use clock_controller::{ClockController, DISPLAY_COUNT};
