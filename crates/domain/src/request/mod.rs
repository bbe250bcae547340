//! Outbound request types

mod method;
mod spec;

pub use method::HttpMethod;
pub use spec::{JSON_CONTENT_TYPE, RequestSpec};
