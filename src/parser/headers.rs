//! Derived views over `Content-Type` and `Content-Disposition` values.

use crate::parser::params::{parameter, parse_parameters};

/// Decomposed `Content-Type` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Media type, the segment before the first `;`.
    pub media_type: String,
    /// The `boundary` parameter, when present.
    pub boundary: Option<String>,
}

/// Decomposed `Content-Disposition` header value, the read-only view
/// consumed by form-data adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    /// The `name` parameter, when present.
    pub name: Option<String>,
    /// The `filename` parameter, when present.
    pub filename: Option<String>,
    /// Whether the bare `form-data` marker token is present.
    pub is_form_data: bool,
}

/// Splits a `Content-Type` value into its media type and boundary parameter.
///
/// Never fails; a value with no `;` is all media type.
pub fn parse_content_type(value: &str) -> ContentType {
    let (media_type, rest) = match value.split_once(';') {
        Some((essence, rest)) => (essence, rest),
        None => (value, ""),
    };

    let params = parse_parameters(rest);
    ContentType {
        media_type: media_type.trim().to_owned(),
        boundary: parameter(&params, "boundary").map(str::to_owned),
    }
}

/// Extracts the form-data fields of a `Content-Disposition` value.
///
/// Never fails; missing parameters are simply absent.
pub fn parse_content_disposition(value: &str) -> ContentDisposition {
    let params = parse_parameters(value);

    let is_form_data = params
        .iter()
        .any(|(key, param_value)| key.eq_ignore_ascii_case("form-data") && param_value.is_empty());

    ContentDisposition {
        name: parameter(&params, "name").map(str::to_owned),
        filename: parameter(&params, "filename").map(str::to_owned),
        is_form_data,
    }
}
