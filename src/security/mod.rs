//! Security Module
//!
//! Request hardening for the public API:
//! - Request validation (length limits, email format, identifiers)
//! - Security headers, content-type and body-size middleware
//! - CORS policy

pub mod middleware;
pub mod validation;

pub use middleware::{cors_layer, security_headers_middleware, validation_middleware};
pub use validation::{RequestValidator, Sanitizable, Validatable, ValidatedRequest, ValidationError};
