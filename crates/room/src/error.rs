//! Room loading and validation errors.

#[derive(thiserror::Error, Debug)]
pub enum RoomError {
    #[error("anchor {anchor} boundary has {vertices} vertices, at least 3 are required")]
    DegenerateBoundary { anchor: u32, vertices: usize },
    #[error("anchor {anchor} has non-finite geometry")]
    NonFinite { anchor: u32 },
    #[error("anchor {anchor} volume has min greater than max")]
    InvertedBounds { anchor: u32 },
    #[error("I/O while reading room layout: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}
