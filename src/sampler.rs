use crate::{filter::Filter, raw_image::RawImage};
use std::{iter::StepBy, ops::Range};

/// Walks the pixels of a [`RawImage`] with a fixed stride, yielding the colors of the visited pixels that pass every
/// filter.
///
/// Only every `quality`-th pixel is visited, starting from the first one. The alpha channel is dropped from the
/// yielded colors.
pub struct PixelSampler<'a> {
    pixels: &'a [u8],
    channels: usize,
    indices: StepBy<Range<usize>>,
    filters: &'a [Box<dyn Filter>],
}

impl<'a> PixelSampler<'a> {
    pub fn new(image: &'a RawImage, quality: usize, filters: &'a [Box<dyn Filter>]) -> Self {
        // step_by panics on zero
        let quality = quality.max(1);

        Self {
            pixels: image.pixels(),
            channels: image.channels().count(),
            indices: (0..image.pixel_count()).step_by(quality),
            filters,
        }
    }

    fn read(&self, index: usize) -> ((u8, u8, u8), Option<u8>) {
        let offset = index * self.channels;
        let pixel = &self.pixels[offset..offset + self.channels];
        let alpha = if self.channels == 4 { Some(pixel[3]) } else { None };

        ((pixel[0], pixel[1], pixel[2]), alpha)
    }
}

impl Iterator for PixelSampler<'_> {
    type Item = (u8, u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let index = self.indices.next()?;
            let (rgb, alpha) = self.read(index);

            if self.filters.iter().all(|filter| filter.is_allowed(rgb, alpha)) {
                return Some(rgb);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.indices.size_hint().1)
    }
}
