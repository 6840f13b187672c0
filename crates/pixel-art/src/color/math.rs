//! Pure color arithmetic: averaging, RGB distance and inversion.

use super::rgba::Rgba;

/// Running per-channel sum for averaging a stream of pixels.
///
/// Totals are kept in `u64`, so even a block covering an entire 8-bit
/// image cannot overflow. The mean is computed once, with truncating
/// integer division, after all samples have been added.
///
/// # Example
///
/// ```
/// use pixel_art::color::ChannelSum;
/// use pixel_art::Rgba;
///
/// let mut sum = ChannelSum::new();
/// sum.add(Rgba::new(0, 0, 0, 255));
/// sum.add(Rgba::new(255, 255, 255, 255));
/// assert_eq!(sum.mean(), Rgba::new(127, 127, 127, 255));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSum {
    r: u64,
    g: u64,
    b: u64,
    a: u64,
    count: u64,
}

impl ChannelSum {
    /// Create an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample.
    #[inline]
    pub fn add(&mut self, pixel: Rgba) {
        self.r += u64::from(pixel.r);
        self.g += u64::from(pixel.g);
        self.b += u64::from(pixel.b);
        self.a += u64::from(pixel.a);
        self.count += 1;
    }

    /// Number of samples added so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncated per-channel mean, or the zero pixel if nothing was added.
    pub fn mean(&self) -> Rgba {
        if self.count == 0 {
            return Rgba::TRANSPARENT;
        }
        // Each mean is <= 255 because every sample is.
        Rgba::new(
            (self.r / self.count) as u8,
            (self.g / self.count) as u8,
            (self.b / self.count) as u8,
            (self.a / self.count) as u8,
        )
    }
}

impl Extend<Rgba> for ChannelSum {
    fn extend<I: IntoIterator<Item = Rgba>>(&mut self, iter: I) {
        for pixel in iter {
            self.add(pixel);
        }
    }
}

impl FromIterator<Rgba> for ChannelSum {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}

/// Average a set of samples channel by channel.
///
/// Uses truncating integer division. An empty slice yields
/// [`Rgba::TRANSPARENT`].
///
/// ```
/// use pixel_art::color::average;
/// use pixel_art::Rgba;
///
/// let ramp: Vec<Rgba> = (1..=5).map(|v| Rgba::new(v, v, v, v)).collect();
/// assert_eq!(average(&ramp), Rgba::new(3, 3, 3, 3));
/// assert_eq!(average(&[]), Rgba::TRANSPARENT);
/// ```
pub fn average(samples: &[Rgba]) -> Rgba {
    samples.iter().copied().collect::<ChannelSum>().mean()
}

/// Euclidean distance over the R, G and B channels, truncated to an integer.
///
/// Alpha does not participate. The largest possible value is
/// `sqrt(3 * 255²) ≈ 441`.
#[inline]
pub fn distance(a: Rgba, b: Rgba) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    let squared = (dr * dr + dg * dg + db * db) as f64;
    squared.sqrt() as u32
}

/// Invert the color channels, leaving alpha untouched.
#[inline]
pub fn invert(pixel: Rgba) -> Rgba {
    Rgba::new(255 - pixel.r, 255 - pixel.g, 255 - pixel.b, pixel.a)
}
