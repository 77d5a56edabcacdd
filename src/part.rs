use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue};

use crate::parser::headers::{parse_content_disposition, ContentDisposition};
use crate::parser::search::{concat, find_sequence};

const CRLF: &[u8] = b"\r\n";
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// A header collection paired with a byte body, the atomic unit inside a
/// multipart message.
///
/// The body is fixed once constructed; headers remain mutable through
/// [`Part::headers_mut`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Part {
    headers: HeaderMap,
    body: Bytes,
}

impl Part {
    /// Creates a part from a header collection and a body.
    pub fn new(headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            headers,
            body: body.into(),
        }
    }

    /// Lifts an externally obtained byte source into a part with a single
    /// inferred `Content-Type` header.
    ///
    /// An empty or unparseable media type hint falls back to
    /// `application/octet-stream`.
    pub fn from_blob(media_type_hint: &str, data: impl Into<Bytes>) -> Self {
        let media_type = media_type_hint
            .trim()
            .parse::<mime::Mime>()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(media_type.as_ref()) {
            headers.insert(header::CONTENT_TYPE, value);
        }

        Self {
            headers,
            body: data.into(),
        }
    }

    /// Parses raw bytes as a headers section, a blank line, and a body.
    ///
    /// A leading CRLF means the headers section is empty. Header lines
    /// without a `:`, with an empty name, or with a name the header map
    /// rejects are silently skipped. Never fails.
    pub fn parse(data: &[u8]) -> Self {
        if data.starts_with(CRLF) {
            return Self {
                headers: HeaderMap::new(),
                body: Bytes::copy_from_slice(&data[CRLF.len()..]),
            };
        }

        let (header_section, body) = match find_sequence(data, HEADER_TERMINATOR, 0) {
            Some(split) => (&data[..split], &data[split + HEADER_TERMINATOR.len()..]),
            None => (data, &[][..]),
        };

        let mut headers = HeaderMap::new();
        let text = String::from_utf8_lossy(header_section);
        for line in text.split("\r\n") {
            let Some((raw_name, raw_value)) = line.split_once(':') else {
                continue;
            };
            let Ok(name) = raw_name.trim().parse::<HeaderName>() else {
                continue;
            };
            let Ok(value) = HeaderValue::from_str(raw_value.trim()) else {
                continue;
            };
            headers.append(name, value);
        }

        Self {
            headers,
            body: Bytes::copy_from_slice(body),
        }
    }

    /// Returns the header collection.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the header collection for mutation.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Returns the body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the decomposed `Content-Disposition` header, when one is
    /// present and readable as a string.
    pub fn content_disposition(&self) -> Option<ContentDisposition> {
        self.headers
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(parse_content_disposition)
    }

    /// Serializes the part as header lines, a blank line, and the body.
    pub fn to_bytes(&self) -> Bytes {
        concat([header_block(&self.headers), self.body.clone()])
    }
}

/// Renders a header collection as `name: value` CRLF lines followed by the
/// blank terminating line.
pub(crate) fn header_block(headers: &HeaderMap) -> Bytes {
    let mut chunks: Vec<Vec<u8>> = Vec::with_capacity(headers.len() + 1);
    for (name, value) in headers {
        let mut line = Vec::with_capacity(name.as_str().len() + value.len() + 4);
        line.extend_from_slice(name.as_str().as_bytes());
        line.extend_from_slice(b": ");
        line.extend_from_slice(value.as_bytes());
        line.extend_from_slice(CRLF);
        chunks.push(line);
    }
    chunks.push(CRLF.to_vec());
    concat(chunks)
}
