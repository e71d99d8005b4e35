//! End-to-end workflow tests against an embedded database
//!
//! Each test opens a fresh RocksDB store in a temp directory and drives the
//! repository layer directly.

use roster_server::db::DbService;
use roster_server::db::models::{
    EmployeeCreate, EmploymentType, JobRole, LeaveRequestCreate, LeaveStatus, LeaveType,
    OfferStatus, SwapStatus, UserRole,
};
use roster_server::db::repository::{
    EmployeeRepository, LeaveRequestRepository, RepoError, ShiftOfferRepository, ShiftRepository,
    SwapRequestRepository,
};

struct TestDb {
    _tmp: tempfile::TempDir,
    db: surrealdb::Surreal<surrealdb::engine::local::Db>,
}

async fn test_db() -> TestDb {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();
    TestDb {
        _tmp: tmp,
        db: service.db,
    }
}

fn employee_payload(name: &str, email: &str, job_role: JobRole) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        role: UserRole::Employee,
        job_role,
        employment_type: EmploymentType::FullTime,
        mobile: "0123456789".to_string(),
        address: None,
    }
}

#[tokio::test]
async fn employee_create_and_duplicate_email() {
    let t = test_db().await;
    let repo = EmployeeRepository::new(t.db.clone());

    let created = repo
        .create(employee_payload("Alice", "alice@example.com", JobRole::Cashier))
        .await
        .unwrap();
    assert!(created.id.is_some());
    assert!(created.is_active);

    // Same email, different case: rejected
    let dup = repo
        .create(employee_payload("Alice 2", "Alice@Example.com", JobRole::Cashier))
        .await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));

    // Lookup by email is case-insensitive on the stored lowercase form
    let found = repo.find_by_email("ALICE@EXAMPLE.COM").await.unwrap();
    assert!(found.is_some());
    assert!(found.unwrap().verify_password("secret1").unwrap());
}

#[tokio::test]
async fn offer_lifecycle_single_winner() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());
    let offers = ShiftOfferRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let bob = employees
        .create(employee_payload("Bob", "bob@example.com", JobRole::Cashier))
        .await
        .unwrap();

    let alice_id = alice.id.unwrap();
    let bob_id = bob.id.unwrap();

    let shift = shifts
        .create(
            alice_id.clone(),
            "2026-09-07".to_string(),
            "09:00 AM".to_string(),
            "05:00 PM".to_string(),
        )
        .await
        .unwrap();
    let shift_id = shift.id.clone().unwrap();

    let offer = offers
        .open_offer(shift_id.clone(), alice_id.clone())
        .await
        .unwrap();
    assert_eq!(offer.status, OfferStatus::Open);

    // The shift is flagged while the offer is open
    let flagged = shifts.find_by_id(&shift_id.to_string()).await.unwrap().unwrap();
    assert!(flagged.is_offered);

    // A second offer on the same shift is rejected
    let second = offers.open_offer(shift_id.clone(), alice_id.clone()).await;
    assert!(matches!(second, Err(RepoError::Conflict(_))));

    // Accept reassigns the shift and clears the flag
    let offer_id = offer.id.clone().unwrap().to_string();
    let accepted = offers.accept(&offer_id, bob_id.clone()).await.unwrap();
    assert_eq!(accepted.status, OfferStatus::Accepted);
    assert_eq!(accepted.new_employee, Some(bob_id.clone()));

    let reassigned = shifts.find_by_id(&shift_id.to_string()).await.unwrap().unwrap();
    assert_eq!(reassigned.employee, bob_id);
    assert!(!reassigned.is_offered);

    // A second accept loses the race
    let again = offers.accept(&offer_id, alice_id).await;
    assert!(matches!(again, Err(RepoError::Conflict(_))));
}

#[tokio::test]
async fn closing_an_offer_releases_the_shift() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());
    let offers = ShiftOfferRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Kitchen))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();

    let shift = shifts
        .create(
            alice_id.clone(),
            "2026-09-08".to_string(),
            "10:00 AM".to_string(),
            "02:00 PM".to_string(),
        )
        .await
        .unwrap();
    let shift_id = shift.id.clone().unwrap();

    let offer = offers
        .open_offer(shift_id.clone(), alice_id.clone())
        .await
        .unwrap();
    let closed = offers
        .close(&offer.id.clone().unwrap().to_string())
        .await
        .unwrap();
    assert_eq!(closed.status, OfferStatus::Closed);

    let released = shifts.find_by_id(&shift_id.to_string()).await.unwrap().unwrap();
    assert!(!released.is_offered);

    // The shift can be offered again after release
    assert!(offers.open_offer(shift_id, alice_id).await.is_ok());
}

#[tokio::test]
async fn swap_approval_exchanges_owners() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());
    let swaps = SwapRequestRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::FoodPacker))
        .await
        .unwrap();
    let bob = employees
        .create(employee_payload("Bob", "bob@example.com", JobRole::FoodPacker))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();
    let bob_id = bob.id.unwrap();

    let shift_a = shifts
        .create(
            alice_id.clone(),
            "2026-09-09".to_string(),
            "09:00 AM".to_string(),
            "05:00 PM".to_string(),
        )
        .await
        .unwrap();
    let shift_b = shifts
        .create(
            bob_id.clone(),
            "2026-09-10".to_string(),
            "01:00 PM".to_string(),
            "09:00 PM".to_string(),
        )
        .await
        .unwrap();

    let a_id = shift_a.id.unwrap();
    let b_id = shift_b.id.unwrap();

    let request = swaps
        .create(alice_id.clone(), a_id.clone(), b_id.clone())
        .await
        .unwrap();
    assert_eq!(request.status, SwapStatus::Pending);

    // Duplicate pending request is rejected
    let dup = swaps.create(alice_id.clone(), a_id.clone(), b_id.clone()).await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));

    let request_id = request.id.unwrap().to_string();
    let approved = swaps.approve(&request_id).await.unwrap();
    assert_eq!(approved.status, SwapStatus::Approved);

    // Exactly the two owners exchanged
    let a_after = shifts.find_by_id(&a_id.to_string()).await.unwrap().unwrap();
    let b_after = shifts.find_by_id(&b_id.to_string()).await.unwrap().unwrap();
    assert_eq!(a_after.employee, bob_id);
    assert_eq!(b_after.employee, alice_id);

    // Resolved requests are immutable
    let again = swaps.decline(&request_id).await;
    assert!(matches!(again, Err(RepoError::Conflict(_))));
}

#[tokio::test]
async fn swap_decline_leaves_shifts_untouched() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());
    let swaps = SwapRequestRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let bob = employees
        .create(employee_payload("Bob", "bob@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();
    let bob_id = bob.id.unwrap();

    let shift_a = shifts
        .create(
            alice_id.clone(),
            "2026-09-11".to_string(),
            "09:00 AM".to_string(),
            "01:00 PM".to_string(),
        )
        .await
        .unwrap();
    let shift_b = shifts
        .create(
            bob_id.clone(),
            "2026-09-12".to_string(),
            "02:00 PM".to_string(),
            "06:00 PM".to_string(),
        )
        .await
        .unwrap();

    let a_id = shift_a.id.unwrap();
    let b_id = shift_b.id.unwrap();

    let request = swaps
        .create(alice_id.clone(), a_id.clone(), b_id.clone())
        .await
        .unwrap();
    let declined = swaps
        .decline(&request.id.unwrap().to_string())
        .await
        .unwrap();
    assert_eq!(declined.status, SwapStatus::Declined);

    let a_after = shifts.find_by_id(&a_id.to_string()).await.unwrap().unwrap();
    let b_after = shifts.find_by_id(&b_id.to_string()).await.unwrap().unwrap();
    assert_eq!(a_after.employee, alice_id);
    assert_eq!(b_after.employee, bob_id);
}

#[tokio::test]
async fn leave_request_lifecycle() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let leaves = LeaveRequestRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Kitchen))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();

    let request = leaves
        .create(
            alice_id.clone(),
            LeaveRequestCreate {
                employee_id: alice_id.to_string(),
                leave_type: LeaveType::FullDay,
                start_date: "2026-09-14".to_string(),
                end_date: "2026-09-15".to_string(),
                start_time: None,
                end_time: None,
                reason: "family event".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(request.status, LeaveStatus::Pending);

    let id = request.id.unwrap().to_string();
    let approved = leaves.update_status(&id, LeaveStatus::Approved).await.unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    // A resolved request cannot be overwritten
    let again = leaves.update_status(&id, LeaveStatus::Rejected).await;
    assert!(matches!(again, Err(RepoError::Conflict(_))));

    // Moving back to pending is invalid input regardless of state
    let back = leaves.update_status(&id, LeaveStatus::Pending).await;
    assert!(matches!(back, Err(RepoError::Validation(_))));

    assert!(leaves.delete(&id).await.unwrap());
    assert!(leaves.find_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn week_range_listing_is_inclusive() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();

    // Sunday, Saturday, and the Sunday of the following week
    for date in ["2026-09-06", "2026-09-12", "2026-09-13"] {
        shifts
            .create(
                alice_id.clone(),
                date.to_string(),
                "09:00 AM".to_string(),
                "05:00 PM".to_string(),
            )
            .await
            .unwrap();
    }

    let week = shifts
        .find_in_range("2026-09-06", "2026-09-12", Some(&alice_id))
        .await
        .unwrap();
    assert_eq!(week.len(), 2);
    assert!(week.iter().all(|s| s.shift_date != "2026-09-13"));
}

#[tokio::test]
async fn offered_shifts_leave_the_swap_candidate_pool() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());
    let offers = ShiftOfferRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let bob = employees
        .create(employee_payload("Bob", "bob@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();
    let bob_id = bob.id.unwrap();

    let shift = shifts
        .create(
            bob_id.clone(),
            "2026-09-16".to_string(),
            "09:00 AM".to_string(),
            "05:00 PM".to_string(),
        )
        .await
        .unwrap();
    let shift_id = shift.id.unwrap();

    let before = shifts
        .find_swap_candidates(&alice_id, JobRole::Cashier, "2026-09-01")
        .await
        .unwrap();
    assert_eq!(before.len(), 1);

    offers.open_offer(shift_id, bob_id).await.unwrap();

    let after = shifts
        .find_swap_candidates(&alice_id, JobRole::Cashier, "2026-09-01")
        .await
        .unwrap();
    assert!(after.is_empty());
}

#[tokio::test]
async fn accept_fails_when_the_shift_changed_hands() {
    let t = test_db().await;
    let employees = EmployeeRepository::new(t.db.clone());
    let shifts = ShiftRepository::new(t.db.clone());
    let offers = ShiftOfferRepository::new(t.db.clone());

    let alice = employees
        .create(employee_payload("Alice", "alice@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let bob = employees
        .create(employee_payload("Bob", "bob@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let carol = employees
        .create(employee_payload("Carol", "carol@example.com", JobRole::Cashier))
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();
    let bob_id = bob.id.unwrap();
    let carol_id = carol.id.unwrap();

    let shift = shifts
        .create(
            alice_id.clone(),
            "2026-09-17".to_string(),
            "09:00 AM".to_string(),
            "05:00 PM".to_string(),
        )
        .await
        .unwrap();
    let shift_id = shift.id.clone().unwrap();

    let offer = offers
        .open_offer(shift_id.clone(), alice_id)
        .await
        .unwrap();

    // The shift moves to someone else while the offer is still open
    t.db.query("UPDATE $shift SET employee = $carol")
        .bind(("shift", shift_id.clone()))
        .bind(("carol", carol_id.clone()))
        .await
        .unwrap();

    let result = offers
        .accept(&offer.id.unwrap().to_string(), bob_id)
        .await;
    assert!(matches!(result, Err(RepoError::Conflict(_))));

    // Carol keeps the shift
    let after = shifts.find_by_id(&shift_id.to_string()).await.unwrap().unwrap();
    assert_eq!(after.employee, carol_id);
}
