//! Authentication and authorization
//!
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - authenticated employee context
//! - [`require_auth`] - authentication middleware
//! - [`require_manager`] - management-role middleware
//! - [`AccessScope`] - record-visibility policy

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod policy;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_manager};
pub use policy::AccessScope;
