// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the most prevalent colors from an image.
//!
//! Pixels are sampled with a fixed stride, mostly transparent and near-white pixels are skipped, and the remaining
//! colors are ranked by how many sampled pixels had exactly that color. No clustering of similar colors is done, so an
//! image with smooth gradients produces a long palette of near-duplicates.
//!
//! ```no_run
//! # async fn run() -> Result<(), prevalence::Error> {
//! let service: prevalence::PaletteService = prevalence::PaletteService::default();
//! let palette = service.get_palette("cover.png", None, None).await?;
//! let dominant = service.get_color("cover.png", None).await?;
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod decoder;
mod error;
mod filter;
mod options;
mod raw_image;
mod sampler;
mod swatch;

pub use crate::{
    aggregator::PaletteAggregator,
    decoder::{Decoder, ImageDecoder, ImageSource},
    error::{DecodeError, Error},
    filter::{DefaultFilter, Filter, MIN_ALPHA, NEAR_WHITE_THRESHOLD},
    options::{Options, DEFAULT_COLOR_COUNT, DEFAULT_QUALITY, MAX_COLOR_COUNT, MIN_COLOR_COUNT},
    raw_image::{Channels, RawImage},
    sampler::PixelSampler,
    swatch::Swatch,
};
pub use image;

use options::SINGLE_COLOR_PALETTE_SIZE;

/// The colors of an image, most prevalent first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
    requested_colors: usize,
}

impl Palette {
    /// Generate a palette from already decoded pixels using the [`DefaultFilter`].
    pub fn from_raw_image(image: &RawImage, options: &Options) -> Palette {
        let filters: [Box<dyn Filter>; 1] = [Box::new(DefaultFilter)];
        Self::generate(image, options, &filters)
    }

    fn generate(image: &RawImage, options: &Options, filters: &[Box<dyn Filter>]) -> Palette {
        let aggregator: PaletteAggregator = PixelSampler::new(image, options.quality(), filters).collect();
        log::trace!(
            "sampled {} distinct colors from {} pixels with quality {}",
            aggregator.distinct_colors(),
            image.pixel_count(),
            options.quality()
        );

        Self {
            swatches: aggregator.into_swatches(),
            requested_colors: options.color_count(),
        }
    }

    /// Every distinct sampled color, ordered by population. Colors with equal populations are in the order they were
    /// first sampled.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn colors(&self) -> Vec<(u8, u8, u8)> {
        self.swatches.iter().map(|swatch| swatch.rgb()).collect()
    }

    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.swatches.first().map(|swatch| swatch.rgb())
    }

    /// The validated color count of the request that produced this palette.
    ///
    /// The palette is **not** truncated to this length; use [`Palette::truncated`] to do so.
    pub fn requested_colors(&self) -> usize {
        self.requested_colors
    }

    pub fn truncated(mut self) -> Palette {
        self.swatches.truncate(self.requested_colors);
        self
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

impl From<Palette> for Vec<(u8, u8, u8)> {
    fn from(palette: Palette) -> Self {
        palette.colors()
    }
}

/// Decodes images and extracts their palettes.
///
/// The service holds no per-request state, so a single instance can serve any number of concurrent requests.
pub struct PaletteService<D = ImageDecoder>
where
    D: Decoder,
{
    decoder: D,
    filters: Vec<Box<dyn Filter>>,
}

impl Default for PaletteService<ImageDecoder> {
    fn default() -> Self {
        Self::new(ImageDecoder)
    }
}

impl<D> PaletteService<D>
where
    D: Decoder,
{
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            filters: vec![Box::new(DefaultFilter)],
        }
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    /// Decode an image and return every distinct sampled color, most prevalent first.
    ///
    /// `color_count` and `quality` are validated with [`Options::validate`] before the image is decoded. Note that
    /// `color_count` does not limit the length of the palette.
    pub async fn get_palette<S>(
        &self,
        source: S,
        color_count: Option<f64>,
        quality: Option<f64>,
    ) -> Result<Palette, Error>
    where
        S: Into<ImageSource>,
    {
        let options = Options::validate(color_count, quality)?;
        log::debug!("generating palette with {:?}", options);

        let image = self.decoder.decode(&source.into()).await?;

        Ok(self.palette_from_raw(&image, options))
    }

    /// Decode an image and return its single most prevalent color.
    pub async fn get_color<S>(&self, source: S, quality: Option<f64>) -> Result<(u8, u8, u8), Error>
    where
        S: Into<ImageSource>,
    {
        let palette = self
            .get_palette(source, Some(SINGLE_COLOR_PALETTE_SIZE), quality)
            .await?;

        palette.dominant_color().ok_or(Error::EmptyPalette)
    }

    /// Generate a palette from already decoded pixels using this service's filters.
    pub fn palette_from_raw(&self, image: &RawImage, options: Options) -> Palette {
        Palette::generate(image, &options, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_image_palette_uses_default_filter() {
        let image = RawImage::rgba(3, 1, vec![1, 2, 3, 255, 250, 250, 250, 255, 1, 2, 3, 255]).unwrap();
        let palette = Palette::from_raw_image(&image, &Options::default().with_quality(1));

        assert_eq!(palette.swatches(), &[Swatch::new((1, 2, 3), 2)]);
        assert_eq!(palette.dominant_color(), Some((1, 2, 3)));
        assert_eq!(palette.requested_colors(), DEFAULT_COLOR_COUNT);
    }

    #[test]
    fn service_filters_apply_to_raw_images() {
        let service = PaletteService::new(ImageDecoder).clear_filters();
        let image = RawImage::rgba(1, 1, vec![250, 250, 250, 0]).unwrap();

        let palette = service.palette_from_raw(&image, Options::default().with_quality(1));

        assert_eq!(palette.colors(), vec![(250, 250, 250)]);
    }
}
