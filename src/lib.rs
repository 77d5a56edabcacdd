#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Codec for RFC 2046 multipart MIME messages.
//!
//! Serializes a tree of named, headered byte segments into a single
//! boundary-delimited byte stream, and parses such a stream back into the
//! same tree. A part's body may itself be a nested multipart message, so
//! both directions are recursive.
//!
//! Parsing is deliberately lenient (any byte buffer parses, possibly into a
//! degenerate result) while generation is strict (an invalid boundary fails
//! at serialization time). All operations are synchronous transformations
//! over fully materialized in-memory buffers.
//!
//! ```
//! use multimime::{Multipart, Part, PartNode};
//!
//! let part = Part::from_blob("text/plain", "hello");
//! let mut message = Multipart::new(vec![PartNode::Part(part)]);
//! message.set_boundary("gc0pJq0M:08jU534c0p");
//!
//! let wire = message.to_bytes().expect("valid boundary");
//! let parsed = Multipart::parse(&wire).expect("well-formed message");
//! assert_eq!(parsed.parts().len(), 1);
//! ```

/// Error types exposed by this crate.
pub mod error;
/// High-level multipart composite type.
pub mod multipart;
/// Low-level parser components.
pub mod parser;
/// Leaf part type.
pub mod part;

pub use error::{BoundaryError, FormatError, MultipartError};
pub use multipart::{Multipart, PartNode};
pub use parser::{ContentDisposition, ContentType};
pub use part::Part;
