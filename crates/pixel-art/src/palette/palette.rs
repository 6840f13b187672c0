//! Palette struct with ordered entries and nearest-color matching.

use super::error::PaletteError;
use crate::color::{distance, Rgba};

/// The ten colors the pixelise tool ships with.
const DEFAULT_PIXEL_ART: [Rgba; 10] = [
    Rgba::opaque(255, 0, 0),     // red
    Rgba::opaque(255, 255, 0),   // yellow
    Rgba::opaque(0, 255, 0),     // green
    Rgba::opaque(255, 128, 0),   // orange
    Rgba::opaque(0, 0, 255),     // blue
    Rgba::opaque(0, 255, 255),   // cyan
    Rgba::opaque(255, 0, 127),   // magenta
    Rgba::opaque(255, 0, 255),   // pink
    Rgba::opaque(0, 0, 0),       // black
    Rgba::opaque(255, 255, 255), // white
];

/// An ordered, non-empty list of colors to quantize against.
///
/// Order matters only for tie-breaking: when two entries are equally close
/// to a pixel, the one that appears first wins. Palettes are small (tens of
/// entries), so matching is a linear scan.
///
/// # Example
///
/// ```
/// use pixel_art::{Palette, Rgba};
///
/// let palette = Palette::new(&[Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
/// let (idx, _) = palette.find_nearest(Rgba::opaque(200, 200, 200));
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// Accepts every format [`Rgba`]'s `FromStr` accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_art::{Palette, Rgba};
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF", "#FF000080"]).unwrap();
    /// assert_eq!(palette.get(2), Rgba::new(255, 0, 0, 128));
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.parse::<Rgba>()
                    .map_err(|source| PaletteError::InvalidEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// The ten-color palette used by default: red, yellow, green, orange,
    /// blue, cyan, magenta, pink, black and white.
    pub fn default_pixel_art() -> Self {
        Self {
            colors: DEFAULT_PIXEL_ART.to_vec(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Returns `(index, distance)` using the truncated RGB distance from
    /// [`distance`](crate::color::distance). Alpha is ignored for matching.
    /// On a tie the earliest entry is kept.
    pub fn find_nearest(&self, color: Rgba) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = distance(entry, color);
            // Strict less-than keeps the first entry on ties.
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }

    /// The palette entry closest to `color`, returned verbatim (alpha included).
    #[inline]
    pub fn nearest_color(&self, color: Rgba) -> Rgba {
        self.colors[self.find_nearest(color).0]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_pixel_art()
    }
}
