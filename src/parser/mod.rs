/// Boundary validity, quoting, and delimiter scanning.
pub mod boundary;
/// `Content-Type` / `Content-Disposition` decomposition.
pub mod headers;
/// Header-parameter state machine.
pub mod params;
/// Raw byte-buffer concatenation and sequence search.
pub mod search;

pub use boundary::{find_boundary_bounds, render_boundary_param, validate_boundary};
pub use headers::{parse_content_disposition, parse_content_type, ContentDisposition, ContentType};
pub use params::{parameter, parse_parameters};
pub use search::{concat, find_sequence};
