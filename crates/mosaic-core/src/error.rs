use thiserror::Error;

#[derive(Error, Debug)]
pub enum MosaicError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error(
        "Template ({template_height}x{template_width}) exceeds reference ({reference_height}x{reference_width})"
    )]
    TemplateTooLarge {
        template_height: usize,
        template_width: usize,
        reference_height: usize,
        reference_width: usize,
    },

    #[error("Channel count mismatch: {left} vs {right}")]
    ChannelMismatch { left: usize, right: usize },

    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannelCount(usize),

    #[error("Empty image sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, MosaicError>;
