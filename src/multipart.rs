use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::error::{BoundaryError, FormatError};
use crate::parser::boundary::{
    find_boundary_bounds, random_boundary, render_boundary_param, validate_boundary,
};
use crate::parser::headers::parse_content_type;
use crate::parser::search::concat;
use crate::part::{header_block, Part};

const CRLF: &[u8] = b"\r\n";
const DEFAULT_MEDIA_TYPE: &str = "multipart/mixed";

/// A leaf part or a nested multipart, usable anywhere a part is expected.
///
/// This is what makes nesting possible: a [`Multipart`] can appear as a
/// child of another [`Multipart`], sharing the capability set of exposing
/// headers, a body view, and a serialized form.
#[derive(Debug, Clone, PartialEq)]
pub enum PartNode {
    /// A leaf part with a stored body.
    Part(Part),
    /// A nested multipart whose body is computed from its children.
    Multipart(Multipart),
}

impl PartNode {
    /// Returns the node's header collection.
    pub fn headers(&self) -> &HeaderMap {
        match self {
            Self::Part(part) => part.headers(),
            Self::Multipart(multipart) => multipart.headers(),
        }
    }

    /// Returns the node's header collection for mutation.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        match self {
            Self::Part(part) => part.headers_mut(),
            Self::Multipart(multipart) => multipart.headers_mut(),
        }
    }

    /// Returns the node's body bytes.
    ///
    /// For a nested multipart the body is computed from its children and
    /// can fail on an invalid boundary.
    pub fn body(&self) -> Result<Bytes, BoundaryError> {
        match self {
            Self::Part(part) => Ok(part.body().clone()),
            Self::Multipart(multipart) => multipart.body(),
        }
    }

    /// Serializes the node as headers, a blank line, and the body.
    pub fn to_bytes(&self) -> Result<Bytes, BoundaryError> {
        match self {
            Self::Part(part) => Ok(part.to_bytes()),
            Self::Multipart(multipart) => multipart.to_bytes(),
        }
    }
}

impl From<Part> for PartNode {
    fn from(part: Part) -> Self {
        Self::Part(part)
    }
}

impl From<Multipart> for PartNode {
    fn from(multipart: Multipart) -> Self {
        Self::Multipart(multipart)
    }
}

/// An ordered composite of parts, serialized with boundary delimiters.
///
/// The `Content-Type` header is derived state: it is regenerated eagerly
/// whenever the boundary or media type changes, and must not be edited by
/// hand. Construction never validates the boundary; only serialization
/// does.
#[derive(Debug, Clone, PartialEq)]
pub struct Multipart {
    boundary: String,
    media_type: String,
    parts: Vec<PartNode>,
    headers: HeaderMap,
}

impl Multipart {
    /// Creates a multipart with a fresh random boundary and the
    /// `multipart/mixed` media type.
    pub fn new(parts: Vec<PartNode>) -> Self {
        Self::with_boundary(parts, random_boundary(), DEFAULT_MEDIA_TYPE)
    }

    /// Creates a multipart with an explicit boundary and media type.
    pub fn with_boundary(
        parts: Vec<PartNode>,
        boundary: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        let mut multipart = Self {
            boundary: boundary.into(),
            media_type: media_type.into(),
            parts,
            headers: HeaderMap::new(),
        };
        multipart.regenerate_content_type();
        multipart
    }

    /// Returns the current boundary.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Replaces the boundary and regenerates the `Content-Type` header.
    pub fn set_boundary(&mut self, boundary: impl Into<String>) {
        self.boundary = boundary.into();
        self.regenerate_content_type();
    }

    /// Returns the current media type.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Replaces the media type and regenerates the `Content-Type` header.
    pub fn set_media_type(&mut self, media_type: impl Into<String>) {
        self.media_type = media_type.into();
        self.regenerate_content_type();
    }

    /// Returns the ordered child parts.
    pub fn parts(&self) -> &[PartNode] {
        &self.parts
    }

    /// Returns the ordered child parts for mutation.
    pub fn parts_mut(&mut self) -> &mut Vec<PartNode> {
        &mut self.parts
    }

    /// Appends a child part.
    pub fn push(&mut self, part: impl Into<PartNode>) {
        self.parts.push(part.into());
    }

    /// Returns the header collection, including the derived `Content-Type`.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the header collection for mutation.
    ///
    /// The `Content-Type` entry is derived from the boundary and media
    /// type; edit those through [`Multipart::set_boundary`] and
    /// [`Multipart::set_media_type`] instead.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Serializes the delimited body.
    ///
    /// Fails when the current boundary violates the RFC 2046
    /// character-class or length rule.
    pub fn body(&self) -> Result<Bytes, BoundaryError> {
        validate_boundary(self.boundary.as_bytes())?;

        let opening = format!("--{}\r\n", self.boundary);
        let mut chunks: Vec<Bytes> = Vec::with_capacity(self.parts.len() * 3 + 1);
        for node in &self.parts {
            chunks.push(Bytes::from(opening.clone()));
            chunks.push(node.to_bytes()?);
            chunks.push(Bytes::from_static(CRLF));
        }
        chunks.push(Bytes::from(format!("--{}--\r\n", self.boundary)));

        Ok(concat(chunks))
    }

    /// Serializes the multipart as its own headers, a blank line, and the
    /// delimited body. Propagates the boundary-validity error.
    pub fn to_bytes(&self) -> Result<Bytes, BoundaryError> {
        Ok(concat([header_block(&self.headers), self.body()?]))
    }

    /// Parses a delimited body into child parts using a known boundary.
    ///
    /// Parsing is total: an invalid boundary is an advisory condition only,
    /// and a buffer with no recognizable delimiters yields zero parts. The
    /// media type defaults to `multipart/mixed`.
    pub fn parse_body(data: &[u8], boundary: impl Into<String>, media_type: Option<&str>) -> Self {
        let boundary = boundary.into();
        if let Err(err) = validate_boundary(boundary.as_bytes()) {
            warn!(%err, boundary = %boundary, "parsing body against a noncompliant boundary");
        }

        let media_type = media_type.unwrap_or(DEFAULT_MEDIA_TYPE);
        // Prefixing an artificial CRLF lets a delimiter at offset 0 match
        // the same `CRLF -- boundary` needle as every other delimiter.
        let buffer = concat([CRLF, data]);
        let closing = format!("{boundary}--");

        let mut parts = Vec::new();
        let mut cursor = match find_boundary_bounds(&buffer, boundary.as_bytes(), 0) {
            Some((_, after_open)) => after_open,
            None => return Self::with_boundary(parts, boundary, media_type),
        };

        loop {
            if let Some((next_start, next_end)) =
                find_boundary_bounds(&buffer, boundary.as_bytes(), cursor)
            {
                parts.push(PartNode::Part(Part::parse(&buffer[cursor..next_start])));
                cursor = next_end;
            } else if let Some((close_start, _)) =
                find_boundary_bounds(&buffer, closing.as_bytes(), cursor)
            {
                parts.push(PartNode::Part(Part::parse(&buffer[cursor..close_start])));
                break;
            } else {
                // No further delimiter of either kind: keep what we have.
                break;
            }
        }

        debug!(parts = parts.len(), boundary = %boundary, "parsed multipart body");
        Self::with_boundary(parts, boundary, media_type)
    }

    /// Reinterprets an already parsed part as a full multipart message.
    ///
    /// The part must carry a `Content-Type` header with a `boundary`
    /// parameter.
    pub fn from_part(part: &Part) -> Result<Self, FormatError> {
        let value = part
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .ok_or(FormatError::MissingContentType)?;

        let content_type = parse_content_type(value);
        let Some(boundary) = content_type.boundary else {
            return Err(FormatError::MissingBoundary {
                content_type: value.to_owned(),
            });
        };

        Ok(Self::parse_body(
            &part.to_bytes(),
            boundary,
            Some(&content_type.media_type),
        ))
    }

    /// Parses a full multipart message: a headers section naming the
    /// boundary, then the delimited body.
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        Self::from_part(&Part::parse(data))
    }

    fn regenerate_content_type(&mut self) {
        let rendered = format!(
            "{}; boundary={}",
            self.media_type,
            render_boundary_param(&self.boundary)
        );
        match HeaderValue::from_str(&rendered) {
            Ok(value) => {
                self.headers.insert(header::CONTENT_TYPE, value);
            }
            // A value the header map cannot hold would otherwise go stale.
            Err(_) => {
                self.headers.remove(header::CONTENT_TYPE);
            }
        }
    }
}
