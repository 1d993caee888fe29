/// HTTP middleware
pub mod errors;

pub use errors::redact_internal_errors;
