//! Color parsing utilities for hex color strings
//!
//! Supports the following formats:
//! - Hex: `#RGB`, `#RRGGBB`
//!
//! The configuration surface only ever carries the two RGB sentinels
//! (border and background), so this is deliberately smaller than a full
//! CSS color parser.

use image::Rgb;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3 or 6 hex chars after #)
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into an RGB color.
///
/// # Supported Formats
///
/// - `#RGB` - 3-digit hex, each digit is doubled (e.g., `#F00` -> red)
/// - `#RRGGBB` - 6-digit hex
///
/// # Examples
///
/// ```
/// use spriterot::color::parse_color;
///
/// let red = parse_color("#F00").unwrap();
/// assert_eq!(red, image::Rgb([255, 0, 0]));
///
/// let silver = parse_color("#C0C0C0").unwrap();
/// assert_eq!(silver, image::Rgb([192, 192, 192]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_color(s: &str) -> Result<Rgb<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if !s.starts_with('#') {
        return Err(ColorError::MissingHash);
    }

    let hex = &s[1..];

    // Validate all characters are hex before any byte slicing
    for c in hex.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidHex(c));
        }
    }

    match hex.len() {
        3 => {
            // #RGB -> #RRGGBB (doubled digits)
            let mut chars = hex.chars();
            let r = parse_hex_digit(next_digit(&mut chars))? * 17;
            let g = parse_hex_digit(next_digit(&mut chars))? * 17;
            let b = parse_hex_digit(next_digit(&mut chars))? * 17;
            Ok(Rgb([r, g, b]))
        }
        6 => {
            let r = parse_hex_pair(&hex[0..2])?;
            let g = parse_hex_pair(&hex[2..4])?;
            let b = parse_hex_pair(&hex[4..6])?;
            Ok(Rgb([r, g, b]))
        }
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Format an RGB color back to `#RRGGBB` notation (used by `presets` output).
pub fn format_color(color: Rgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0[0], color.0[1], color.0[2])
}

fn next_digit(chars: &mut std::str::Chars<'_>) -> char {
    // Length is checked by the caller before indexing
    chars.next().unwrap_or('\0')
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = parse_hex_digit(next_digit(&mut chars))?;
    let low = parse_hex_digit(next_digit(&mut chars))?;
    Ok(high * 16 + low)
}
