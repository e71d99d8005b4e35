//! Leave Request Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{LeaveRequest, LeaveRequestCreate, LeaveStatus};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const GUARD_NOT_PENDING: &str = "leave_not_pending";

#[derive(Clone)]
pub struct LeaveRequestRepository {
    base: BaseRepository,
}

impl LeaveRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find request by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<LeaveRequest>> {
        let thing = self.base.parse_id(id, "leave_request")?;
        let request: Option<LeaveRequest> = self.base.db().select(thing).await?;
        Ok(request)
    }

    /// All requests, newest first (management view)
    pub async fn find_all(&self) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM leave_request ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Requests raised by one employee, newest first
    pub async fn find_by_employee(&self, employee: &RecordId) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query(
                "SELECT * FROM leave_request WHERE employee = $employee ORDER BY created_at DESC",
            )
            .bind(("employee", employee.clone()))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Create a pending leave request. Per-type time validation happens in
    /// the handler before this is called.
    pub async fn create(
        &self,
        employee: RecordId,
        data: LeaveRequestCreate,
    ) -> RepoResult<LeaveRequest> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE leave_request SET
                    employee = $employee,
                    leave_type = $leave_type,
                    start_date = $start_date,
                    end_date = $end_date,
                    start_time = $start_time,
                    end_time = $end_time,
                    reason = $reason,
                    status = 'pending',
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("employee", employee))
            .bind(("leave_type", data.leave_type))
            .bind(("start_date", data.start_date))
            .bind(("end_date", data.end_date))
            .bind(("start_time", data.start_time))
            .bind(("end_time", data.end_time))
            .bind(("reason", data.reason))
            .bind(("now", now_millis()))
            .await?;

        let created: Option<LeaveRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create leave request".to_string()))
    }

    /// Resolve a pending request. The `WHERE status = 'pending'` predicate
    /// makes two concurrent resolutions settle to one winner.
    pub async fn update_status(&self, id: &str, status: LeaveStatus) -> RepoResult<LeaveRequest> {
        if status == LeaveStatus::Pending {
            return Err(RepoError::Validation(
                "Leave requests cannot be moved back to pending".to_string(),
            ));
        }
        let thing = self.base.parse_id(id, "leave_request")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Leave request {} not found", id)))?;

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $resolved = (
                    UPDATE $request SET status = $status, updated_at = $now
                    WHERE status = 'pending'
                    RETURN AFTER
                );
                IF array::len($resolved) = 0 { THROW "leave_not_pending" };
                COMMIT TRANSACTION;"#,
            )
            .bind(("request", thing))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await
            .map_err(map_guard_error)
            .and_then(|response| check_transaction(response).map_err(map_guard_error))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Leave request {} not found", id)))
    }

    /// Hard delete a request
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "leave_request")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Leave request {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}

fn map_guard_error(err: surrealdb::Error) -> RepoError {
    let text = err.to_string();
    if text.contains(GUARD_NOT_PENDING) {
        RepoError::Conflict("Leave request has already been resolved".to_string())
    } else {
        RepoError::Database(text)
    }
}
