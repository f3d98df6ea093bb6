//! Security Module
//!
//! - Request Validation
//! - Security Middleware

pub mod middleware;
pub mod validation;

pub use middleware::{cors_layer, security_headers_middleware};
pub use validation::{Validatable, ValidationError, ValidationResult};
