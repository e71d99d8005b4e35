//! Shift Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{JobRole, Shift, ShiftUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct ShiftRepository {
    base: BaseRepository,
}

impl ShiftRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find shift by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Shift>> {
        let thing = self.base.parse_id(id, "shift")?;
        let shift: Option<Shift> = self.base.db().select(thing).await?;
        Ok(shift)
    }

    /// Shifts within an inclusive date range. `shift_date` is stored as
    /// YYYY-MM-DD, so string comparison orders correctly.
    pub async fn find_in_range(
        &self,
        from: &str,
        to: &str,
        employee: Option<&RecordId>,
    ) -> RepoResult<Vec<Shift>> {
        let mut result = match employee {
            Some(employee) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM shift \
                         WHERE shift_date >= $from AND shift_date <= $to AND employee = $employee \
                         ORDER BY shift_date, start_time",
                    )
                    .bind(("from", from.to_string()))
                    .bind(("to", to.to_string()))
                    .bind(("employee", employee.clone()))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM shift \
                         WHERE shift_date >= $from AND shift_date <= $to \
                         ORDER BY shift_date, start_time",
                    )
                    .bind(("from", from.to_string()))
                    .bind(("to", to.to_string()))
                    .await?
            }
        };
        let shifts: Vec<Shift> = result.take(0)?;
        Ok(shifts)
    }

    /// Shifts in a date range held by other employees in the same job role.
    /// Week-view candidate pool for swap browsing. Shifts with an open offer
    /// are excluded until the offer resolves.
    pub async fn find_candidates_in_range(
        &self,
        viewer: &RecordId,
        job_role: JobRole,
        from: &str,
        to: &str,
    ) -> RepoResult<Vec<Shift>> {
        let shifts: Vec<Shift> = self
            .base
            .db()
            .query(
                "SELECT * FROM shift \
                 WHERE employee != $viewer \
                   AND employee.job_role = $job_role \
                   AND shift_date >= $from AND shift_date <= $to \
                   AND status = 'scheduled' \
                   AND is_offered = false \
                 ORDER BY shift_date, start_time",
            )
            .bind(("viewer", viewer.clone()))
            .bind(("job_role", job_role))
            .bind(("from", from.to_string()))
            .bind(("to", to.to_string()))
            .await?
            .take(0)?;
        Ok(shifts)
    }

    /// Scheduled future shifts held by other employees in the same job role.
    /// Candidate pool for swap requests. Shifts with an open offer are
    /// excluded until the offer resolves.
    pub async fn find_swap_candidates(
        &self,
        requester: &RecordId,
        job_role: JobRole,
        from_date: &str,
    ) -> RepoResult<Vec<Shift>> {
        let shifts: Vec<Shift> = self
            .base
            .db()
            .query(
                "SELECT * FROM shift \
                 WHERE employee != $requester \
                   AND employee.job_role = $job_role \
                   AND shift_date >= $from \
                   AND status = 'scheduled' \
                   AND is_offered = false \
                 ORDER BY shift_date, start_time",
            )
            .bind(("requester", requester.clone()))
            .bind(("job_role", job_role))
            .bind(("from", from_date.to_string()))
            .await?
            .take(0)?;
        Ok(shifts)
    }

    /// Create a shift. Weekly-cap validation happens in the handler before
    /// this is called.
    pub async fn create(
        &self,
        employee: RecordId,
        shift_date: String,
        start_time: String,
        end_time: String,
    ) -> RepoResult<Shift> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE shift SET
                    employee = $employee,
                    shift_date = $shift_date,
                    start_time = $start_time,
                    end_time = $end_time,
                    is_approved = false,
                    status = 'scheduled',
                    is_offered = false,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("employee", employee))
            .bind(("shift_date", shift_date))
            .bind(("start_time", start_time))
            .bind(("end_time", end_time))
            .bind(("now", now_millis()))
            .await?;

        let created: Option<Shift> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create shift".to_string()))
    }

    /// Update a shift
    pub async fn update(&self, id: &str, data: ShiftUpdate) -> RepoResult<Shift> {
        let thing = self.base.parse_id(id, "shift")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Shift {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    shift_date = $shift_date OR shift_date,
                    start_time = $start_time OR start_time,
                    end_time = $end_time OR end_time,
                    is_approved = IF $has_approved THEN $is_approved ELSE is_approved END,
                    status = IF $has_status THEN $status ELSE status END,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("shift_date", data.shift_date))
            .bind(("start_time", data.start_time))
            .bind(("end_time", data.end_time))
            .bind(("has_approved", data.is_approved.is_some()))
            .bind(("is_approved", data.is_approved))
            .bind(("has_status", data.status.is_some()))
            .bind(("status", data.status))
            .bind(("now", now_millis()))
            .await?;

        result
            .take::<Option<Shift>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Shift {} not found", id)))
    }

    /// Hard delete a shift
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "shift")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Shift {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
