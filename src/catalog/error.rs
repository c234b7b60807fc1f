use thiserror::Error;

/// Errors raised while decoding a compiled catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is too small to hold a header ({0} bytes)")]
    TooSmall(usize),

    #[error("Invalid catalog magic number: 0x{0:08x}")]
    InvalidMagic(u32),

    #[error("Unsupported catalog revision: {0}")]
    UnsupportedRevision(u32),

    #[error("Catalog {0} out of bounds")]
    OutOfBounds(&'static str),

    #[error("Catalog string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
