//! Hex color parsing with silent fallback

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default placeholder background.
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    /// Default placeholder foreground.
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as uppercase `RRGGBB` (no leading `#`).
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

/// Parse a hex color code given without its leading `#`.
///
/// Accepts `RRGGBB` and the `RGB` shorthand (each digit doubled), in any
/// case. Every other input yields `fallback`; this never fails.
pub fn parse_color(input: &str, fallback: Color) -> Color {
    parse_hex(input).unwrap_or(fallback)
}

fn parse_hex(input: &str) -> Option<Color> {
    let digits: Vec<u8> = input
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;

    match digits.as_slice() {
        [r, g, b] => Some(Color::rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Some(Color::rgb(
            r1 * 16 + r2,
            g1 * 16 + g2,
            b1 * 16 + b2,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: Color = Color::rgb(1, 2, 3);

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_color("FF0000", FALLBACK), Color::rgb(255, 0, 0));
        assert_eq!(parse_color("00ff00", FALLBACK), Color::rgb(0, 255, 0));
        assert_eq!(parse_color("1a2B3c", FALLBACK), Color::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(parse_color("000000", FALLBACK), Color::rgb(0, 0, 0));
    }

    #[test]
    fn expands_shorthand() {
        assert_eq!(parse_color("F08", FALLBACK), Color::rgb(0xff, 0x00, 0x88));
        assert_eq!(parse_color("abc", FALLBACK), Color::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn malformed_input_falls_back() {
        for bad in [
            "", "F", "FF", "FFFF", "FFFFF", "FFFFFFF", "FFFFFFFF", "zzzzzz", "GG0000", "+FFFFF",
            "-FFFFF", " FFFFF", "FF00 0", "#FF000", "ＦＦ0000", "é12345",
        ] {
            assert_eq!(parse_color(bad, FALLBACK), FALLBACK, "input {bad:?}");
        }
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::rgb(255, 0, 16).to_hex(), "FF0010");
        assert_eq!(Color::LIGHT_GRAY.to_hex(), "D3D3D3");
        assert_eq!(parse_color(&Color::DARK_GRAY.to_hex(), FALLBACK), Color::DARK_GRAY);
    }
}
