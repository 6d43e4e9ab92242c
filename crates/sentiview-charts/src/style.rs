//! Colors, fonts and canvas sizes shared by both charts.

use plotters::style::RGBColor;

/// Pie chart canvas size in pixels.
pub const PIE_SIZE: (u32, u32) = (600, 600);
/// Bar chart canvas size in pixels.
pub const BAR_SIZE: (u32, u32) = (600, 400);

pub(crate) const FONT_FAMILY: &str = "sans-serif";
pub(crate) const TITLE_FONT_SIZE: u32 = 22;
pub(crate) const LABEL_FONT_SIZE: u32 = 16;

/// Background for both charts.
pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);

/// Parses a `#RRGGBB` color. Anything else yields black.
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_colors() {
        assert_eq!(parse_color("#4CAF50"), RGBColor(0x4C, 0xAF, 0x50));
        assert_eq!(parse_color("#f44336"), RGBColor(0xF4, 0x43, 0x36));
    }

    #[test]
    fn test_invalid_colors_fall_back_to_black() {
        for input in ["", "#", "4CAF50", "#4CAF5", "#GGGGGG", "#4CAF500", "#ééé"] {
            assert_eq!(parse_color(input), RGBColor(0, 0, 0), "input {input:?}");
        }
    }
}
