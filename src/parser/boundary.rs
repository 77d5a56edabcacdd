//! Boundary validity, quoting, and the delimiter-line scanner.

use crate::error::BoundaryError;
use crate::parser::search::find_sequence;

/// RFC 2046 maximum boundary length in bytes.
pub const MAX_BOUNDARY_LEN: usize = 70;

const CRLF: &[u8] = b"\r\n";

/// Checks a boundary against the RFC 2046 character-class and length rule.
///
/// A valid boundary is 1 to 70 bytes from the class
/// `DIGIT / ALPHA / ' ( ) + _ , - . / : = ?` plus space, and must not end
/// with a space.
pub fn validate_boundary(boundary: &[u8]) -> Result<(), BoundaryError> {
    if boundary.is_empty() {
        return Err(BoundaryError::Empty);
    }

    if boundary.len() > MAX_BOUNDARY_LEN {
        return Err(BoundaryError::TooLong {
            len: boundary.len(),
        });
    }

    if boundary.ends_with(b" ") {
        return Err(BoundaryError::TrailingSpace);
    }

    if let Some(offset) = boundary.iter().position(|byte| !is_boundary_byte(*byte)) {
        return Err(BoundaryError::InvalidByte {
            byte: boundary[offset],
            offset,
        });
    }

    Ok(())
}

/// Renders a boundary as a `Content-Type` parameter value.
///
/// The value is emitted bare unless it contains a byte that requires the
/// quoted-string form, in which case it is wrapped in double quotes with
/// internal `"` escaped.
pub fn render_boundary_param(boundary: &str) -> String {
    if !boundary.bytes().any(needs_quoting) {
        return boundary.to_owned();
    }

    let mut quoted = String::with_capacity(boundary.len() + 2);
    quoted.push('"');
    for ch in boundary.chars() {
        if ch == '"' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Generates a fresh random boundary from the valid character class.
pub fn random_boundary() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Locates the next genuine delimiter line `CRLF "--" boundary [LWSP] CRLF`
/// at or after `start`, returning the match start and the index just past
/// the terminating CRLF.
///
/// Trailing space/tab transport padding between the boundary and its line
/// break is tolerated. A candidate followed by any other byte is a false
/// positive (boundary text inside literal part content); the scan resumes
/// two bytes past the candidate start so the cursor always moves strictly
/// forward.
pub fn find_boundary_bounds(data: &[u8], boundary: &[u8], start: usize) -> Option<(usize, usize)> {
    let mut needle = Vec::with_capacity(boundary.len() + 4);
    needle.extend_from_slice(CRLF);
    needle.extend_from_slice(b"--");
    needle.extend_from_slice(boundary);

    let mut cursor = start;
    loop {
        let found = find_sequence(data, &needle, cursor)?;

        let mut end = found + needle.len();
        while data
            .get(end)
            .is_some_and(|byte| *byte == b' ' || *byte == b'\t')
        {
            end += 1;
        }

        if data[end..].starts_with(CRLF) {
            return Some((found, end + 2));
        }

        // Unterminated candidate. Skip just its leading CRLF and rescan.
        cursor = found + 2;
    }
}

fn is_boundary_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'\'' | b'(' | b')' | b'+' | b'_' | b',' | b'-' | b'.' | b'/' | b':' | b'=' | b'?' | b' '
        )
}

fn needs_quoting(byte: u8) -> bool {
    matches!(
        byte,
        b'\t' | b' ' | b'"' | b'(' | b')' | b',' | b'/' | b':'..=b'@' | b'['..=b']' | b'{' | b'}'
    )
}
