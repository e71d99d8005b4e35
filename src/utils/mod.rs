//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error channel
//! - [`logger`] - tracing setup
//! - [`time`] - date parsing and business-timezone helpers
//! - [`validation`] - text length and format validation

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
