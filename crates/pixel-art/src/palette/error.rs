//! Errors raised while reading colors and building palettes.

use std::fmt;

/// Why a string is not a valid `#RGB`, `#RRGGBB` or `#RRGGBBAA` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after stripping `#` was not 3, 6 or 8
    WrongDigitCount(usize),
    /// A character other than `0-9`, `a-f` or `A-F`
    BadDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::WrongDigitCount(n) => {
                write!(f, "expected 3, 6 or 8 hex digits, found {}", n)
            }
            ParseColorError::BadDigit(c) => write!(f, "{:?} is not a hex digit", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// A hex entry could not be parsed
    InvalidEntry {
        /// Position of the offending entry
        index: usize,
        /// Why it failed to parse
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::InvalidEntry { index, source } => {
                write!(f, "invalid color at palette index {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::InvalidEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}
