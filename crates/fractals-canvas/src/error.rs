//! Error types for canvas allocation and encoding.

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// Width or height was zero.
    #[error("canvas must be at least 1×1 pixels, got {width}×{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
