#![allow(missing_docs)]

use http::{header, HeaderMap, HeaderValue};
use multimime::Part;

#[test]
fn parses_headers_blank_line_and_body() {
    let part = Part::parse(b"content-type: text/plain\r\nx-custom: value\r\n\r\nbody bytes");

    assert_eq!(part.headers().len(), 2);
    assert_eq!(
        part.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(&b"text/plain"[..])
    );
    assert_eq!(&part.body()[..], b"body bytes");
}

#[test]
fn leading_crlf_means_no_headers() {
    let part = Part::parse(b"\r\nraw body");
    assert!(part.headers().is_empty());
    assert_eq!(&part.body()[..], b"raw body");
}

#[test]
fn missing_header_terminator_treats_everything_as_headers() {
    let part = Part::parse(b"x-one: 1\r\nx-two: 2");
    assert_eq!(part.headers().len(), 2);
    assert!(part.body().is_empty());
}

#[test]
fn malformed_header_lines_are_silently_skipped() {
    let part = Part::parse(b"no colon here\r\n: empty name\r\ngood: yes\r\n\r\nB");
    assert_eq!(part.headers().len(), 1);
    assert_eq!(
        part.headers().get("good").map(|v| v.as_bytes()),
        Some(&b"yes"[..])
    );
    assert_eq!(&part.body()[..], b"B");
}

#[test]
fn serializes_headers_in_insertion_order() {
    let mut headers = HeaderMap::new();
    headers.insert("x-first", HeaderValue::from_static("1"));
    headers.insert("x-second", HeaderValue::from_static("2"));
    let part = Part::new(headers, "payload");

    assert_eq!(
        &part.to_bytes()[..],
        b"x-first: 1\r\nx-second: 2\r\n\r\npayload"
    );
}

#[test]
fn parse_then_serialize_is_byte_identical() {
    let wire = b"x-first: 1\r\nx-second: 2\r\n\r\npayload";
    assert_eq!(&Part::parse(wire).to_bytes()[..], &wire[..]);
}

#[test]
fn empty_part_round_trips_to_a_single_line_break() {
    let part = Part::parse(b"\r\n");
    assert!(part.headers().is_empty());
    assert!(part.body().is_empty());
    assert_eq!(&part.to_bytes()[..], b"\r\n");

    assert_eq!(&Part::default().to_bytes()[..], b"\r\n");
}

#[test]
fn body_defaults_to_empty() {
    let part = Part::new(HeaderMap::new(), Vec::new());
    assert!(part.body().is_empty());
}

#[test]
fn blob_lift_infers_a_single_content_type_header() {
    let part = Part::from_blob("text/plain", "hello");
    assert_eq!(part.headers().len(), 1);
    assert_eq!(
        part.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(&b"text/plain"[..])
    );
    assert_eq!(&part.body()[..], b"hello");
}

#[test]
fn blob_lift_defaults_to_octet_stream() {
    for hint in ["", "   ", "not a media type"] {
        let part = Part::from_blob(hint, "data");
        assert_eq!(
            part.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"application/octet-stream"[..]),
            "hint `{hint}` should fall back to octet-stream"
        );
    }
}

#[test]
fn content_disposition_view_exposes_form_data_fields() {
    let mut part = Part::new(HeaderMap::new(), "payload");
    part.headers_mut().insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("form-data; name=\"avatar\"; filename=\"a.png\""),
    );

    let disposition = part.content_disposition().expect("header is present");
    assert!(disposition.is_form_data);
    assert_eq!(disposition.name.as_deref(), Some("avatar"));
    assert_eq!(disposition.filename.as_deref(), Some("a.png"));
}

#[test]
fn content_disposition_view_is_absent_without_the_header() {
    assert!(Part::default().content_disposition().is_none());
}

#[test]
fn header_mutation_goes_through_the_owning_part() {
    let mut part = Part::new(HeaderMap::new(), "body");
    part.headers_mut()
        .insert("x-note", HeaderValue::from_static("kept"));
    assert_eq!(&part.to_bytes()[..], b"x-note: kept\r\n\r\nbody");
}
