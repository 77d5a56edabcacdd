use thiserror::Error;

/// Structural failures when interpreting a buffer as a full multipart
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The part carries no `Content-Type` header at all.
    #[error("part is missing a Content-Type header")]
    MissingContentType,
    /// The `Content-Type` header has no `boundary` parameter.
    #[error("Content-Type `{content_type}` has no boundary parameter")]
    MissingBoundary {
        /// The offending `Content-Type` value.
        content_type: String,
    },
}

/// Boundary validity failures, surfaced only when serializing.
///
/// Constructing or parsing with an invalid boundary is permitted; only
/// rendering it fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BoundaryError {
    /// The boundary is empty.
    #[error("multipart boundary cannot be empty")]
    Empty,
    /// The boundary exceeds the RFC 2046 length limit.
    #[error("multipart boundary cannot exceed 70 bytes (got {len})")]
    TooLong {
        /// Actual boundary length in bytes.
        len: usize,
    },
    /// The boundary ends with a space.
    #[error("multipart boundary cannot end with a space")]
    TrailingSpace,
    /// The boundary contains a byte outside the RFC 2046 character class.
    #[error("multipart boundary contains invalid byte 0x{byte:02x} at offset {offset}")]
    InvalidByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the first invalid byte.
        offset: usize,
    },
}

/// Umbrella error for callers mixing parse and serialize failure domains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MultipartError {
    /// Structural failure while parsing a full multipart message.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Boundary validity failure while serializing.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}
