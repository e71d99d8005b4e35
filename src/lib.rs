//! Roster Server - workforce management backend
//!
//! # Architecture
//!
//! A single-binary JSON-over-HTTP service backed by an embedded SurrealDB
//! store:
//!
//! - **API** (`api`): axum routers and handlers, one module per resource
//! - **Auth** (`auth`): JWT + Argon2 authentication, role-based access policy
//! - **Database** (`db`): models and repositories over embedded SurrealDB
//! - **Scheduling** (`scheduling`): shift-hour arithmetic and weekly-cap rules
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth, access policy
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models + repositories
//! ├── scheduling/    # hour calculator, weekly cap validator
//! └── utils/         # errors, logging, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod scheduling;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured fields on auth-relevant events
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
