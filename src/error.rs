/// Errors returned by [`crate::PaletteService`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("no pixels left after sampling, the image is fully transparent or near-white")]
    EmptyPalette,
}

/// Errors produced while turning an [`crate::ImageSource`] into a [`crate::RawImage`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("malformed pixel buffer: {0}")]
    Malformed(String),

    #[error("decoding task failed: {0}")]
    Task(String),
}
