use bytes::{BufMut, Bytes, BytesMut};

/// Concatenates byte chunks into a single contiguous buffer, preserving order.
pub fn concat<I, T>(chunks: I) -> Bytes
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut out = BytesMut::new();
    for chunk in chunks {
        out.put_slice(chunk.as_ref());
    }
    out.freeze()
}

/// Finds the first occurrence of `needle` in `haystack` at or after `start`.
///
/// A `start` beyond the end of `haystack` never matches. An empty needle
/// matches immediately at `start`. Needle lengths up to the full haystack
/// length are supported.
pub fn find_sequence(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    if start >= haystack.len() {
        return None;
    }

    if needle.is_empty() {
        return Some(start);
    }

    let window = &haystack[start..];
    if needle.len() > window.len() {
        return None;
    }

    window
        .windows(needle.len())
        .position(|candidate| candidate == needle)
        .map(|offset| start + offset)
}
