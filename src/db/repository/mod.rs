//! Repository Module
//!
//! CRUD and workflow operations for the SurrealDB tables.

pub mod employee;
pub mod leave_request;
pub mod shift;
pub mod shift_offer;
pub mod swap_request;

pub use employee::EmployeeRepository;
pub use leave_request::LeaveRequestRepository;
pub use shift::ShiftRepository;
pub use shift_offer::ShiftOfferRepository;
pub use swap_request::SwapRequestRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Like [`surrealdb::Response::check`], but for transactions with THROW
/// guards: a fired guard cancels the transaction, so the lowest-index
/// statement error is the generic "query not executed" marker rather than
/// the thrown message. Prefer the thrown message so guard mapping sees it.
pub(crate) fn check_transaction(
    mut response: surrealdb::Response,
) -> Result<surrealdb::Response, surrealdb::Error> {
    let errors = response.take_errors();
    if errors.is_empty() {
        return Ok(response);
    }
    let mut entries: Vec<_> = errors.into_iter().collect();
    entries.sort_by_key(|(index, _)| *index);
    let mut fallback = None;
    for (_, error) in entries {
        let generic = matches!(
            &error,
            surrealdb::Error::Db(surrealdb::error::Db::QueryNotExecuted)
        );
        if !generic {
            return Err(error);
        }
        fallback.get_or_insert(error);
    }
    Err(fallback.expect("at least one error"))
}

// =============================================================================
// ID convention: the whole stack uses the "table:id" string format.
//
// surrealdb::RecordId handles all IDs:
//   - parse:  let id: RecordId = "employee:abc".parse()?;
//   - build:  RecordId::from_table_key("employee", "abc")
//   - table:  id.table()
//   - key:    id.key().to_string()
//   - CRUD:   db.select(id) / db.delete(id) take RecordId directly
// =============================================================================

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Parse a "table:id" string, rejecting IDs that point at another table.
    pub fn parse_id(&self, id: &str, table: &str) -> RepoResult<surrealdb::RecordId> {
        let record: surrealdb::RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if record.table() != table {
            return Err(RepoError::Validation(format!(
                "Expected a {} ID, got: {}",
                table, id
            )));
        }
        Ok(record)
    }
}
