//! RGBA color type, palette constants and the textual color resolver.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use paintkit::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(Color::resolve(" #F00 "), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Resolves a textual color description into a color.
    ///
    /// Accepted forms (case-insensitive, surrounding whitespace ignored):
    /// - `#rgb`: each digit is doubled, alpha is opaque
    /// - `#rrggbb`: alpha is opaque
    /// - `#rrggbbaa`
    /// - `white`, `red`, `green`, `blue`
    ///
    /// A malformed hex form falls through to the palette lookup. Anything that
    /// matches neither resolves to opaque [`BLACK`], so this never fails.
    pub fn resolve(spec: &str) -> Self {
        let spec = spec.trim().to_lowercase();

        if let Some(hex) = spec.strip_prefix('#')
            && let Some(color) = parse_hex(hex)
        {
            return color;
        }

        name_to_color(&spec).unwrap_or(BLACK)
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

/// Parses the digits after `#`. Returns `None` for any length other than
/// 3, 6 or 8, or when a pair is not two hex digits.
fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.as_bytes();
    match digits.len() {
        3 => Some(Color {
            r: parse_hex_byte(digits[0], digits[0])?,
            g: parse_hex_byte(digits[1], digits[1])?,
            b: parse_hex_byte(digits[2], digits[2])?,
            a: 1.0,
        }),
        6 => Some(Color {
            r: parse_hex_byte(digits[0], digits[1])?,
            g: parse_hex_byte(digits[2], digits[3])?,
            b: parse_hex_byte(digits[4], digits[5])?,
            a: 1.0,
        }),
        8 => Some(Color {
            r: parse_hex_byte(digits[0], digits[1])?,
            g: parse_hex_byte(digits[2], digits[3])?,
            b: parse_hex_byte(digits[4], digits[5])?,
            a: parse_hex_byte(digits[6], digits[7])?,
        }),
        _ => None,
    }
}

/// Combines two hex digits into a channel value normalized to 0.0-1.0.
fn parse_hex_byte(hi: u8, lo: u8) -> Option<f64> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as f64 / 255.0)
}

/// Maps palette names to colors. Expects an already lowercased name.
fn name_to_color(name: &str) -> Option<Color> {
    match name {
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        _ => None,
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Opaque black, the fallback for anything the resolver does not recognize.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
