//! 8-bit RGBA pixel type
//!
//! Every bitmap in the pipeline stores straight (non-premultiplied) RGBA
//! with one byte per channel.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A single pixel with four 8-bit channels.
///
/// Alpha is straight, not premultiplied: the color channels hold the full
/// color value regardless of opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// The zero pixel (0, 0, 0, 0).
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    ///
    /// # Example
    /// ```
    /// use pixel_art::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true when the alpha channel is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(pixel: Rgba) -> Self {
        pixel.to_bytes()
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#RRGGBBAA`, the form accepted back by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a pixel from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBBAA` - 8-digit hex with explicit alpha
    /// - `#RRGGBB` - 6-digit hex, opaque
    /// - `#RGB` - shorthand 3-digit hex (expands to RRGGBB), opaque
    ///
    /// The leading `#` is optional. Parsing is case-insensitive and
    /// surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_art::Rgba;
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgba::opaque(255, 0, 0));
    ///
    /// let clear: Rgba = "00000000".parse().unwrap();
    /// assert_eq!(clear, Rgba::TRANSPARENT);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Every character must be a hex digit; a sign such as "+F" is not
        let digits = s
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ParseColorError::BadDigit(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        let channel = |i: usize| digits[i] << 4 | digits[i + 1];

        match digits.len() {
            // 0xF -> 0xFF
            3 => Ok(Self::opaque(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::opaque(channel(0), channel(2), channel(4))),
            8 => Ok(Self::new(channel(0), channel(2), channel(4), channel(6))),
            n => Err(ParseColorError::WrongDigitCount(n)),
        }
    }
}
