use crate::error::DecodeError;

/// The channel layout of a [`RawImage`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }

    pub fn from_count(count: usize) -> Option<Channels> {
        match count {
            3 => Some(Channels::Rgb),
            4 => Some(Channels::Rgba),
            _ => None,
        }
    }
}

/// A decoded image: a flat, row-major buffer of 8-bit RGB or RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    channels: Channels,
    pixels: Vec<u8>,
}

impl RawImage {
    /// Wrap a pixel buffer. The buffer has to be exactly `width * height * channels` bytes long.
    pub fn new(width: u32, height: u32, channels: Channels, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|count| count.checked_mul(channels.count()))
            .ok_or_else(|| DecodeError::Malformed(format!("{}x{} image is too large", width, height)))?;

        if pixels.len() != expected {
            return Err(DecodeError::Malformed(format!(
                "expected {} bytes for a {}x{}x{} image, got {}",
                expected,
                width,
                height,
                channels.count(),
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    pub fn rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        Self::new(width, height, Channels::Rgba, pixels)
    }

    pub fn rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        Self::new(width, height, Channels::Rgb, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<image::RgbaImage> for RawImage {
    fn from(buf: image::RgbaImage) -> Self {
        let (width, height) = buf.dimensions();
        Self {
            width,
            height,
            channels: Channels::Rgba,
            pixels: buf.into_raw(),
        }
    }
}

impl From<image::RgbImage> for RawImage {
    fn from(buf: image::RgbImage) -> Self {
        let (width, height) = buf.dimensions();
        Self {
            width,
            height,
            channels: Channels::Rgb,
            pixels: buf.into_raw(),
        }
    }
}

impl From<image::DynamicImage> for RawImage {
    fn from(img: image::DynamicImage) -> Self {
        if img.color().has_alpha() {
            img.to_rgba8().into()
        } else {
            img.to_rgb8().into()
        }
    }
}
