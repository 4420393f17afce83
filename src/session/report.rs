use crate::draw::{Hsl, Rgb};
use crate::sample;
use serde::Serialize;
use url::Url;

/// Default page used to break a color down into paint mixes.
pub const DEFAULT_UNMIXER_URL: &str = "https://trycolors.com/unmixer";

/// Averaged color of a selection plus its derived representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorReport {
    /// Mean color of the sampled pixels
    pub color: Rgb,
    /// `#rrggbb` form of `color`
    pub hex: String,
    /// HSL form of `color`
    pub hsl: Hsl,
    /// Number of pixels that contributed to the mean
    pub pixel_count: usize,
}

impl ColorReport {
    /// Builds a report for an already averaged color.
    pub fn from_color(color: Rgb, pixel_count: usize) -> Self {
        Self {
            color,
            hex: color.to_hex(),
            hsl: color.to_hsl(),
            pixel_count,
        }
    }

    /// Averages `pixels` and builds a report; `None` when there are none.
    pub fn from_pixels(pixels: &[Rgb]) -> Option<Self> {
        sample::aggregate(pixels).map(|color| Self::from_color(color, pixels.len()))
    }

    /// CSS `rgb(r, g, b)` string.
    pub fn rgb_css(&self) -> String {
        self.color.to_string()
    }

    /// CSS `hsl(h, s%, l%)` string.
    pub fn hsl_css(&self) -> String {
        self.hsl.to_string()
    }

    /// Link to the unmixer page at `base` with this color as the fragment.
    ///
    /// # Errors
    /// Returns an error if `base` is not an absolute URL.
    pub fn unmixer_url(&self, base: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base)?;
        url.set_fragment(Some(self.hex.trim_start_matches('#')));
        Ok(url)
    }
}
