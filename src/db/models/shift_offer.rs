//! Shift Offer Model
//!
//! An offer makes a shift available for another eligible employee to claim.
//! Lifecycle: `open` → `accepted` (terminal). `closed` marks an offer
//! withdrawn without acceptance.

use super::serde_helpers;
use super::InvalidTransition;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ShiftOfferId = RecordId;

/// Offer status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    Open,
    Accepted,
    Closed,
}

impl OfferStatus {
    /// Central transition check: only `open` offers may move
    pub fn transition(self, to: OfferStatus) -> Result<OfferStatus, InvalidTransition> {
        match (self, to) {
            (OfferStatus::Open, OfferStatus::Accepted) => Ok(to),
            (OfferStatus::Open, OfferStatus::Closed) => Ok(to),
            _ => Err(InvalidTransition {
                entity: "shift offer",
                from: self.as_str(),
                to: to.as_str(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OfferStatus::Open => "open",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Closed => "closed",
        }
    }
}

/// Shift offer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftOffer {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ShiftOfferId>,

    /// Shift being offered
    #[serde(with = "serde_helpers::record_id")]
    pub shift: RecordId,

    /// Original owner at offer time
    #[serde(with = "serde_helpers::record_id")]
    pub owner: RecordId,

    /// Employee who accepted the offer
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub new_employee: Option<RecordId>,

    #[serde(default)]
    pub status: OfferStatus,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_offers_can_be_accepted_or_closed() {
        assert!(OfferStatus::Open.transition(OfferStatus::Accepted).is_ok());
        assert!(OfferStatus::Open.transition(OfferStatus::Closed).is_ok());
    }

    #[test]
    fn accepted_is_terminal() {
        assert!(OfferStatus::Accepted.transition(OfferStatus::Open).is_err());
        assert!(
            OfferStatus::Accepted
                .transition(OfferStatus::Closed)
                .is_err()
        );
        assert!(OfferStatus::Closed.transition(OfferStatus::Accepted).is_err());
    }
}
