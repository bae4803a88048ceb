use crate::{error::DecodeError, raw_image::RawImage};
use std::{future::Future, path::PathBuf};

/// Where the image to decode comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A path to an encoded image file on disk.
    Path(PathBuf),
    /// An encoded image held in memory.
    Bytes(Vec<u8>),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(path.into())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

/// Turns an [`ImageSource`] into raw pixels.
///
/// Implement this to plug a different image loader into [`crate::PaletteService`], or to feed synthetic pixel buffers
/// in tests.
pub trait Decoder: Send + Sync {
    fn decode(&self, source: &ImageSource) -> impl Future<Output = Result<RawImage, DecodeError>> + Send;
}

/// The default [`Decoder`], backed by the `image` crate.
///
/// Decoding is CPU bound, so it runs on tokio's blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl ImageDecoder {
    fn decode_blocking(source: ImageSource) -> Result<RawImage, DecodeError> {
        let img = match source {
            ImageSource::Path(path) => image::open(path)?,
            ImageSource::Bytes(bytes) => image::load_from_memory(&bytes)?,
        };

        Ok(img.into())
    }
}

impl Decoder for ImageDecoder {
    async fn decode(&self, source: &ImageSource) -> Result<RawImage, DecodeError> {
        let source = source.clone();

        let image = tokio::task::spawn_blocking(move || Self::decode_blocking(source))
            .await
            .map_err(|e| DecodeError::Task(e.to_string()))??;

        log::debug!(
            "decoded {}x{} image with {} channels",
            image.width(),
            image.height(),
            image.channels().count()
        );

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(img: image::DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn decodes_png_bytes_with_alpha() {
        let buf = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 40]));
        let bytes = encode_png(image::DynamicImage::ImageRgba8(buf));

        let raw = ImageDecoder.decode(&ImageSource::Bytes(bytes)).await.unwrap();

        assert_eq!((raw.width(), raw.height()), (3, 2));
        assert_eq!(raw.channels().count(), 4);
        assert_eq!(&raw.pixels()[..4], &[10, 20, 30, 40]);
    }

    #[tokio::test]
    async fn decodes_png_bytes_without_alpha() {
        let buf = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
        let bytes = encode_png(image::DynamicImage::ImageRgb8(buf));

        let raw = ImageDecoder.decode(&ImageSource::from(bytes)).await.unwrap();

        assert_eq!(raw.channels().count(), 3);
        assert_eq!(raw.pixels().len(), 12);
    }

    #[tokio::test]
    async fn garbage_bytes_fail() {
        let result = ImageDecoder.decode(&ImageSource::Bytes(b"not an image".to_vec())).await;
        assert!(matches!(result, Err(DecodeError::Image(_))));
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let result = ImageDecoder.decode(&ImageSource::from("/nonexistent/image.png")).await;
        assert!(result.is_err());
    }
}
