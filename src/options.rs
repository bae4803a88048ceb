use crate::error::Error;

pub const DEFAULT_COLOR_COUNT: usize = 10;
pub const DEFAULT_QUALITY: usize = 10;
pub const MIN_COLOR_COUNT: usize = 2;
pub const MAX_COLOR_COUNT: usize = 20;

/// The color count used by [`crate::PaletteService::get_color`] when it asks for a palette.
pub const SINGLE_COLOR_PALETTE_SIZE: f64 = 5.0;

/// Validated options for a single palette request.
///
/// `color_count` is validated but does not limit the length of the resulting palette; it is carried along on
/// [`crate::Palette::requested_colors`] so callers can truncate the palette themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    color_count: usize,
    quality: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl Options {
    /// Validate caller supplied options.
    ///
    /// - A missing or fractional `color_count` becomes [`DEFAULT_COLOR_COUNT`]. A count of exactly 1 is rejected, use
    ///   [`crate::PaletteService::get_color`] for a single color. Anything else is clamped between
    ///   [`MIN_COLOR_COUNT`] and [`MAX_COLOR_COUNT`].
    /// - A missing **or whole-number** `quality` becomes [`DEFAULT_QUALITY`], as does a fractional quality below 1.
    ///   Only a fractional quality of at least 1 is kept, truncated to a whole stride. Infinite and NaN qualities
    ///   become a stride that only visits the first pixel.
    pub fn validate(color_count: Option<f64>, quality: Option<f64>) -> Result<Options, Error> {
        let color_count = match color_count {
            Some(count) if is_integer(count) && count == 1.0 => {
                return Err(Error::InvalidArgument(
                    "color count should be between 2 and 20, call get_color() instead of get_palette() to get a \
                     single color"
                        .to_owned(),
                ))
            }
            Some(count) if is_integer(count) => {
                count.clamp(MIN_COLOR_COUNT as f64, MAX_COLOR_COUNT as f64) as usize
            }
            _ => DEFAULT_COLOR_COUNT,
        };

        let quality = match quality {
            None => DEFAULT_QUALITY,
            Some(quality) if is_integer(quality) => DEFAULT_QUALITY,
            Some(quality) if quality < 1.0 => DEFAULT_QUALITY,
            // NaN and infinity never get past the first pixel
            Some(quality) if !quality.is_finite() => usize::MAX,
            Some(quality) => quality.trunc() as usize,
        };

        Ok(Options { color_count, quality })
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn quality(&self) -> usize {
        self.quality
    }

    /// Set the sampling stride directly, skipping the request validation. A quality of 0 is treated as 1.
    pub fn with_quality(self, quality: usize) -> Self {
        Self {
            quality: quality.max(1),
            ..self
        }
    }
}

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
