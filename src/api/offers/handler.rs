//! Shift Offer API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::{AccessScope, CurrentUser};
use crate::core::ServerState;
use crate::db::models::{JobRole, OfferStatus, Shift, ShiftOffer};
use crate::utils::time::{format_date, today_in};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CreateOfferRequest {
    pub shift_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AcceptOfferRequest {
    pub offer_id: String,
}

/// An open offer joined with its shift for display
#[derive(Debug, Serialize)]
pub struct OfferView {
    pub offer: ShiftOffer,
    pub shift: Shift,
}

/// Put one of your shifts up for offer.
///
/// The shift must belong to the caller; a shift with an open offer already
/// is rejected with a conflict.
pub async fn create_offer(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<CreateOfferRequest>,
) -> AppResult<(StatusCode, Json<ShiftOffer>)> {
    let shift = state
        .shifts()
        .find_by_id(&req.shift_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Shift {} not found", req.shift_id)))?;

    if shift.employee.to_string() != user.id {
        return Err(AppError::forbidden("You can only offer your own shifts"));
    }

    let owner = shift.employee.clone();
    let shift_id = shift
        .id
        .ok_or_else(|| AppError::internal("Shift record missing ID"))?;

    let offer = state.shift_offers().open_offer(shift_id, owner).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// Eligibility checks for accepting an offer: it must still be open, the
/// accepter cannot be its owner, and both must share a job role.
fn ensure_acceptable(
    offer: &ShiftOffer,
    owner_job_role: JobRole,
    user: &CurrentUser,
) -> Result<(), AppError> {
    if offer.status != OfferStatus::Open {
        return Err(AppError::conflict("Offer is no longer open"));
    }
    if offer.owner.to_string() == user.id {
        return Err(AppError::business_rule("You cannot accept your own offer"));
    }
    if owner_job_role != user.job_role {
        return Err(AppError::business_rule(
            "Offers can only be accepted within the same job role",
        ));
    }
    Ok(())
}

/// Accept an open offer, taking over its shift.
///
/// Rejected when the caller owns the offer or works a different job role
/// than the owner. Two concurrent accepts resolve to one winner; the loser
/// receives a conflict.
pub async fn accept_offer(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<AcceptOfferRequest>,
) -> AppResult<Json<ShiftOffer>> {
    let offer = state
        .shift_offers()
        .find_by_id(&req.offer_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Offer {} not found", req.offer_id)))?;

    let owner = state
        .employees()
        .find_by_id(&offer.owner.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("Offer owner no longer exists"))?;

    ensure_acceptable(&offer, owner.job_role, &user)?;

    let accepter = user
        .id
        .parse()
        .map_err(|_| AppError::internal("Malformed employee ID in token"))?;

    let accepted = state.shift_offers().accept(&req.offer_id, accepter).await?;
    Ok(Json(accepted))
}

/// List open offers on future shifts.
///
/// Management sees every open offer; an employee sees offers from others in
/// their own job role.
pub async fn list_offered(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<OfferView>>> {
    let from = format_date(today_in(state.config.timezone));

    let offers = match user.access_scope() {
        AccessScope::All => state.shift_offers().find_open_all(&from).await?,
        AccessScope::SelfOnly => {
            let viewer = user
                .id
                .parse()
                .map_err(|_| AppError::internal("Malformed employee ID in token"))?;
            state
                .shift_offers()
                .find_open_for_employee(&viewer, user.job_role, &from)
                .await?
        }
    };

    let mut views = Vec::with_capacity(offers.len());
    for offer in offers {
        let shift = state.shifts().find_by_id(&offer.shift.to_string()).await?;
        // Offers whose shift vanished are skipped rather than failing the list
        if let Some(shift) = shift {
            views.push(OfferView { offer, shift });
        }
    }

    Ok(Json(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::UserRole;
    use surrealdb::RecordId;

    fn offer(owner: &str, status: OfferStatus) -> ShiftOffer {
        ShiftOffer {
            id: None,
            shift: RecordId::from(("shift", "s1")),
            owner: RecordId::from(("employee", owner)),
            new_employee: None,
            status,
            created_at: None,
            updated_at: None,
        }
    }

    fn employee(id: &str, job_role: JobRole) -> CurrentUser {
        CurrentUser {
            id: format!("employee:{id}"),
            name: "Test".to_string(),
            role: UserRole::Employee,
            job_role,
        }
    }

    #[test]
    fn owner_cannot_accept_their_own_offer() {
        let user = employee("alice", JobRole::Cashier);
        let result = ensure_acceptable(&offer("alice", OfferStatus::Open), JobRole::Cashier, &user);
        assert!(matches!(result, Err(AppError::BusinessRule(_))));
    }

    #[test]
    fn cross_job_role_acceptance_is_rejected() {
        let user = employee("bob", JobRole::Kitchen);
        let result = ensure_acceptable(&offer("alice", OfferStatus::Open), JobRole::Cashier, &user);
        assert!(matches!(result, Err(AppError::BusinessRule(_))));
    }

    #[test]
    fn non_open_offers_cannot_be_accepted() {
        let user = employee("bob", JobRole::Cashier);
        for status in [OfferStatus::Accepted, OfferStatus::Closed] {
            let result = ensure_acceptable(&offer("alice", status), JobRole::Cashier, &user);
            assert!(matches!(result, Err(AppError::Conflict(_))));
        }
    }

    #[test]
    fn same_role_colleague_can_accept() {
        let user = employee("bob", JobRole::Cashier);
        let result = ensure_acceptable(&offer("alice", OfferStatus::Open), JobRole::Cashier, &user);
        assert!(result.is_ok());
    }
}
