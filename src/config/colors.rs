//! Color configuration for rendered screens.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Colors applied to rendered screens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub header_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub header_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selected_item: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub unselected_item: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub author: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub footer: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(0x7c, 0x3a, 0xed),
            selected_item: Color::White,
            unselected_item: Color::DarkGray,
            author: Color::Yellow,
            footer: Color::DarkGray,
            error: Color::LightRed,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a named color ("DarkGray", "lightblue", ...) or a hex code
/// ("#7c3aed", "#fff") into a ratatui [`Color`].
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| format!("Invalid hex color: {}", s));
    }

    let color = match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => return Err(format!("Unknown color: {}", s)),
    };
    Ok(color)
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // #RGB expands each digit: f -> ff
        3 => Some(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_ignore_case_and_separators() {
        assert_eq!(parse_color_string("DarkGray").unwrap(), Color::DarkGray);
        assert_eq!(parse_color_string("dark_gray").unwrap(), Color::DarkGray);
        assert_eq!(parse_color_string("LIGHT-RED").unwrap(), Color::LightRed);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            parse_color_string("#7c3aed").unwrap(),
            Color::Rgb(0x7c, 0x3a, 0xed)
        );
        assert_eq!(parse_color_string("#fff").unwrap(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color_string("purple-ish").is_err());
        assert!(parse_color_string("#GGGGGG").is_err());
        assert!(parse_color_string("#1234").is_err());
        assert!(parse_color_string("#ééé").is_err());
    }

    #[test]
    fn test_default_header_matches_brand_purple() {
        let colors = ColorConfig::default();
        assert_eq!(colors.header_bg, Color::Rgb(0x7c, 0x3a, 0xed));
    }
}
