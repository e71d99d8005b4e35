//! Shift Offer Repository
//!
//! Offer creation and acceptance both touch the offer and its shift, so they
//! run as single SurrealDB transactions with THROW guards. A guard firing
//! surfaces as a query error which is mapped to [`RepoError::Conflict`], so
//! two concurrent accepts resolve to exactly one winner.

use super::{BaseRepository, RepoError, RepoResult, check_transaction};
use crate::db::models::{JobRole, ShiftOffer};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const GUARD_SHIFT_UNAVAILABLE: &str = "shift_unavailable";
const GUARD_OFFER_NOT_OPEN: &str = "offer_not_open";
const GUARD_OWNER_CHANGED: &str = "shift_owner_changed";

#[derive(Clone)]
pub struct ShiftOfferRepository {
    base: BaseRepository,
}

impl ShiftOfferRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find offer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ShiftOffer>> {
        let thing = self.base.parse_id(id, "shift_offer")?;
        let offer: Option<ShiftOffer> = self.base.db().select(thing).await?;
        Ok(offer)
    }

    /// The open offer for a shift, if one exists
    pub async fn find_open_by_shift(&self, shift: &RecordId) -> RepoResult<Option<ShiftOffer>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM shift_offer WHERE shift = $shift AND status = 'open' LIMIT 1")
            .bind(("shift", shift.clone()))
            .await?;
        let offers: Vec<ShiftOffer> = result.take(0)?;
        Ok(offers.into_iter().next())
    }

    /// Open offers visible to one employee: future shifts in the same job
    /// role, excluding the employee's own offers.
    pub async fn find_open_for_employee(
        &self,
        viewer: &RecordId,
        job_role: JobRole,
        from_date: &str,
    ) -> RepoResult<Vec<ShiftOffer>> {
        let offers: Vec<ShiftOffer> = self
            .base
            .db()
            .query(
                "SELECT * FROM shift_offer \
                 WHERE status = 'open' \
                   AND owner != $viewer \
                   AND owner.job_role = $job_role \
                   AND shift.shift_date >= $from \
                 ORDER BY shift.shift_date",
            )
            .bind(("viewer", viewer.clone()))
            .bind(("job_role", job_role))
            .bind(("from", from_date.to_string()))
            .await?
            .take(0)?;
        Ok(offers)
    }

    /// All open offers on future shifts (management view)
    pub async fn find_open_all(&self, from_date: &str) -> RepoResult<Vec<ShiftOffer>> {
        let offers: Vec<ShiftOffer> = self
            .base
            .db()
            .query(
                "SELECT * FROM shift_offer \
                 WHERE status = 'open' AND shift.shift_date >= $from \
                 ORDER BY shift.shift_date",
            )
            .bind(("from", from_date.to_string()))
            .await?
            .take(0)?;
        Ok(offers)
    }

    /// Open an offer on a shift.
    ///
    /// Transaction: flip the shift's `is_offered` flag only while it is
    /// unset, then create the offer record. A shift with an open offer
    /// already (or one that is not scheduled) trips the guard.
    pub async fn open_offer(&self, shift: RecordId, owner: RecordId) -> RepoResult<ShiftOffer> {
        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $locked = (
                    UPDATE shift SET is_offered = true, updated_at = $now
                    WHERE id = $shift AND is_offered = false AND status = 'scheduled'
                    RETURN AFTER
                );
                IF array::len($locked) = 0 { THROW "shift_unavailable" };
                CREATE shift_offer SET
                    shift = $shift,
                    owner = $owner,
                    new_employee = NONE,
                    status = 'open',
                    created_at = $now,
                    updated_at = $now;
                COMMIT TRANSACTION;"#,
            )
            .bind(("shift", shift.clone()))
            .bind(("owner", owner))
            .bind(("now", now_millis()))
            .await
            .map_err(map_guard_error)
            .and_then(|response| check_transaction(response).map_err(map_guard_error))?;

        self.find_open_by_shift(&shift)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create shift offer".to_string()))
    }

    /// Accept an open offer, reassigning the shift to the accepter.
    ///
    /// Transaction: the status update carries a `WHERE status = 'open'`
    /// predicate, so a second concurrent accept matches zero rows and the
    /// guard throws instead of double-assigning the shift. The shift update
    /// is likewise predicated on the offer owner still holding the shift, so
    /// an accept cannot take over a shift the owner lost in the meantime.
    pub async fn accept(&self, id: &str, accepter: RecordId) -> RepoResult<ShiftOffer> {
        let thing = self.base.parse_id(id, "shift_offer")?;
        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $accepted = (
                    UPDATE $offer SET
                        status = 'accepted',
                        new_employee = $accepter,
                        updated_at = $now
                    WHERE status = 'open'
                    RETURN AFTER
                );
                IF array::len($accepted) = 0 { THROW "offer_not_open" };
                LET $moved = (
                    UPDATE $accepted[0].shift SET
                        employee = $accepter,
                        is_offered = false,
                        updated_at = $now
                    WHERE employee = $accepted[0].owner
                    RETURN AFTER
                );
                IF array::len($moved) = 0 { THROW "shift_owner_changed" };
                COMMIT TRANSACTION;"#,
            )
            .bind(("offer", thing))
            .bind(("accepter", accepter))
            .bind(("now", now_millis()))
            .await
            .map_err(map_guard_error)
            .and_then(|response| check_transaction(response).map_err(map_guard_error))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Shift offer {} not found", id)))
    }

    /// Withdraw an open offer, releasing the shift.
    pub async fn close(&self, id: &str) -> RepoResult<ShiftOffer> {
        let thing = self.base.parse_id(id, "shift_offer")?;
        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $closed = (
                    UPDATE $offer SET status = 'closed', updated_at = $now
                    WHERE status = 'open'
                    RETURN AFTER
                );
                IF array::len($closed) = 0 { THROW "offer_not_open" };
                UPDATE $closed[0].shift SET is_offered = false, updated_at = $now;
                COMMIT TRANSACTION;"#,
            )
            .bind(("offer", thing))
            .bind(("now", now_millis()))
            .await
            .map_err(map_guard_error)
            .and_then(|response| check_transaction(response).map_err(map_guard_error))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Shift offer {} not found", id)))
    }
}

/// THROW guards arrive as generic query errors; recover the guard token.
fn map_guard_error(err: surrealdb::Error) -> RepoError {
    let text = err.to_string();
    if text.contains(GUARD_SHIFT_UNAVAILABLE) {
        RepoError::Conflict("Shift already has an open offer or is not scheduled".to_string())
    } else if text.contains(GUARD_OFFER_NOT_OPEN) {
        RepoError::Conflict("Offer is no longer open".to_string())
    } else if text.contains(GUARD_OWNER_CHANGED) {
        RepoError::Conflict("Shift no longer belongs to the offer owner".to_string())
    } else {
        RepoError::Database(text)
    }
}
