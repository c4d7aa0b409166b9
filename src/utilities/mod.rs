// src/utilities/mod.rs

pub mod color;
pub mod easing;

pub use color::parse_hex_color;
pub use easing::ease_out_cubic;
