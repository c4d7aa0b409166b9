// src/utilities/color.rs
//
// "#rrggbb" strings from the config file into nannou colors

use nannou::prelude::*;

pub fn parse_hex_color(hex: &str) -> Option<Rgb<f32>> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;

    let r = ((value >> 16) & 0xff) as f32 / 255.0;
    let g = ((value >> 8) & 0xff) as f32 / 255.0;
    let b = (value & 0xff) as f32 / 255.0;
    Some(rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#e0ff55").unwrap();
        assert_eq!(color.red, 224.0 / 255.0);
        assert_eq!(color.green, 1.0);
        assert_eq!(color.blue, 85.0 / 255.0);
    }

    #[test]
    fn test_parse_grey() {
        let color = parse_hex_color("#161616").unwrap();
        assert_eq!(color.red, 22.0 / 255.0);
        assert_eq!(color.green, color.red);
        assert_eq!(color.blue, color.red);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_hex_color("161616").is_none());
        assert!(parse_hex_color("#16161").is_none());
        assert!(parse_hex_color("#16161g").is_none());
    }
}
