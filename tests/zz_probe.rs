//! Temporary diagnostic probe — delete before finishing.

use roster_server::db::DbService;
use roster_server::db::models::{EmployeeCreate, EmploymentType, JobRole, UserRole};
use roster_server::db::repository::{EmployeeRepository, ShiftOfferRepository, ShiftRepository};

#[tokio::test]
async fn probe_second_offer() {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();
    let db = service.db;
    let employees = EmployeeRepository::new(db.clone());
    let shifts = ShiftRepository::new(db.clone());
    let offers = ShiftOfferRepository::new(db.clone());

    let alice = employees
        .create(EmployeeCreate {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "secret1".into(),
            role: UserRole::Employee,
            job_role: JobRole::Cashier,
            employment_type: EmploymentType::FullTime,
            mobile: "0123456789".into(),
            address: None,
        })
        .await
        .unwrap();
    let alice_id = alice.id.unwrap();

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

    let first = offers.open_offer(shift_id.clone(), alice_id.clone()).await;
    eprintln!("FIRST OFFER: {:?}", first.map(|o| o.status));

    let flagged = shifts
        .find_by_id(&shift_id.to_string())
        .await
        .unwrap()
        .unwrap();
    eprintln!("SHIFT is_offered after first: {:?}", flagged.is_offered);

    let second = offers.open_offer(shift_id.clone(), alice_id.clone()).await;
    eprintln!("SECOND OFFER RESULT: {:?}", second.map(|o| o.status));

    // Raw query to see what the guard path does
    let raw = db
        .query(
            r#"BEGIN TRANSACTION;
            LET $locked = (
                UPDATE shift SET is_offered = true
                WHERE id = $shift AND is_offered = false AND status = 'scheduled'
                RETURN AFTER
            );
            IF array::len($locked) = 0 { THROW "shift_unavailable" };
            COMMIT TRANSACTION;"#,
        )
        .bind(("shift", shift_id.clone()))
        .await;
    match raw {
        Ok(mut resp) => {
            let errs = resp.take_errors();
            for (i, e) in errs {
                eprintln!("RAW ERR[{i}]: {e}");
            }
        }
        Err(e) => eprintln!("RAW QUERY Err: {e}"),
    }
    panic!("probe done");
}
