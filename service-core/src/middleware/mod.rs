pub mod security_headers;
pub mod tracing;

pub use security_headers::security_headers_middleware;
pub use tracing::{REQUEST_ID_HEADER, http_request_span, request_id_middleware};
