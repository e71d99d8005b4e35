//! Swap Request Repository
//!
//! Approval exchanges the owners of both shifts and resolves the request in
//! one transaction. The `WHERE status = 'pending'` predicate on the request
//! update doubles as the concurrency guard.

use super::{BaseRepository, RepoError, RepoResult, check_transaction};
use crate::db::models::SwapRequest;
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const GUARD_REQUEST_NOT_PENDING: &str = "request_not_pending";

#[derive(Clone)]
pub struct SwapRequestRepository {
    base: BaseRepository,
}

impl SwapRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find request by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<SwapRequest>> {
        let thing = self.base.parse_id(id, "swap_request")?;
        let request: Option<SwapRequest> = self.base.db().select(thing).await?;
        Ok(request)
    }

    /// Pending requests touching a shift on either side
    pub async fn find_pending_by_shift(&self, shift: &RecordId) -> RepoResult<Vec<SwapRequest>> {
        let requests: Vec<SwapRequest> = self
            .base
            .db()
            .query(
                "SELECT * FROM swap_request \
                 WHERE status = 'pending' \
                   AND (requester_shift = $shift OR requested_shift = $shift)",
            )
            .bind(("shift", shift.clone()))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Create a pending swap request. Rejects a duplicate pending request
    /// for the same shift pair by the same employee.
    pub async fn create(
        &self,
        requester: RecordId,
        requester_shift: RecordId,
        requested_shift: RecordId,
    ) -> RepoResult<SwapRequest> {
        let mut existing = self
            .base
            .db()
            .query(
                "SELECT * FROM swap_request \
                 WHERE status = 'pending' \
                   AND requester = $requester \
                   AND requester_shift = $requester_shift \
                   AND requested_shift = $requested_shift \
                 LIMIT 1",
            )
            .bind(("requester", requester.clone()))
            .bind(("requester_shift", requester_shift.clone()))
            .bind(("requested_shift", requested_shift.clone()))
            .await?;
        let duplicates: Vec<SwapRequest> = existing.take(0)?;
        if !duplicates.is_empty() {
            return Err(RepoError::Duplicate(
                "A pending swap request for these shifts already exists".to_string(),
            ));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE swap_request SET
                    requester = $requester,
                    requester_shift = $requester_shift,
                    requested_shift = $requested_shift,
                    status = 'pending',
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("requester", requester))
            .bind(("requester_shift", requester_shift))
            .bind(("requested_shift", requested_shift))
            .bind(("now", now_millis()))
            .await?;

        let created: Option<SwapRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create swap request".to_string()))
    }

    /// Approve a pending request, exchanging the two shifts' employees.
    pub async fn approve(&self, id: &str) -> RepoResult<SwapRequest> {
        let thing = self.base.parse_id(id, "swap_request")?;
        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $resolved = (
                    UPDATE $request SET status = 'approved', updated_at = $now
                    WHERE status = 'pending'
                    RETURN AFTER
                );
                IF array::len($resolved) = 0 { THROW "request_not_pending" };
                LET $a = (SELECT * FROM ONLY $resolved[0].requester_shift);
                LET $b = (SELECT * FROM ONLY $resolved[0].requested_shift);
                UPDATE $a.id SET employee = $b.employee, updated_at = $now;
                UPDATE $b.id SET employee = $a.employee, updated_at = $now;
                COMMIT TRANSACTION;"#,
            )
            .bind(("request", thing))
            .bind(("now", now_millis()))
            .await
            .map_err(map_guard_error)
            .and_then(|response| check_transaction(response).map_err(map_guard_error))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Swap request {} not found", id)))
    }

    /// Decline a pending request, leaving both shifts untouched.
    pub async fn decline(&self, id: &str) -> RepoResult<SwapRequest> {
        let thing = self.base.parse_id(id, "swap_request")?;
        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $resolved = (
                    UPDATE $request SET status = 'declined', updated_at = $now
                    WHERE status = 'pending'
                    RETURN AFTER
                );
                IF array::len($resolved) = 0 { THROW "request_not_pending" };
                COMMIT TRANSACTION;"#,
            )
            .bind(("request", thing))
            .bind(("now", now_millis()))
            .await
            .map_err(map_guard_error)
            .and_then(|response| check_transaction(response).map_err(map_guard_error))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Swap request {} not found", id)))
    }
}

fn map_guard_error(err: surrealdb::Error) -> RepoError {
    let text = err.to_string();
    if text.contains(GUARD_REQUEST_NOT_PENDING) {
        RepoError::Conflict("Swap request has already been resolved".to_string())
    } else {
        RepoError::Database(text)
    }
}
