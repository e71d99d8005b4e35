//! HTTP contract tests driven through the full router stack

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

use roster_server::auth::{JwtConfig, JwtService};
use roster_server::core::{Config, ServerState};
use roster_server::db::DbService;
use roster_server::db::models::{EmployeeCreate, EmploymentType, JobRole, UserRole};
use roster_server::db::repository::{EmployeeRepository, ShiftRepository};

struct TestApp {
    _tmp: tempfile::TempDir,
    app: Router,
    state: ServerState,
    manager_id: String,
    manager_token: String,
}

async fn test_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();

    let jwt = JwtConfig {
        secret: "0123456789abcdef0123456789abcdef".to_string(),
        expiration_minutes: 60,
        issuer: "roster-server".to_string(),
        audience: "roster-clients".to_string(),
    };
    let config = Config {
        work_dir: tmp.path().to_string_lossy().into_owned(),
        http_port: 0,
        timezone: chrono_tz::UTC,
        jwt: jwt.clone(),
        environment: "development".to_string(),
        admin_email: "admin@localhost".to_string(),
        admin_password: None,
    };
    let jwt_service = Arc::new(JwtService::with_config(jwt));
    let state = ServerState::new(config, service.db.clone(), jwt_service.clone());

    let manager = EmployeeRepository::new(service.db)
        .create(EmployeeCreate {
            name: "Manager".to_string(),
            email: "manager@example.com".to_string(),
            password: "secret1".to_string(),
            role: UserRole::Admin,
            job_role: JobRole::Cashier,
            employment_type: EmploymentType::FullTime,
            mobile: "0123456789".to_string(),
            address: None,
        })
        .await
        .unwrap();
    let manager_id = manager.id.unwrap().to_string();
    let manager_token = jwt_service
        .generate_token(&manager_id, "Manager", UserRole::Admin, JobRole::Cashier)
        .unwrap();

    TestApp {
        _tmp: tmp,
        app: roster_server::api::build_app(state.clone()),
        state,
        manager_id,
        manager_token,
    }
}

fn post(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn creation_endpoints_report_created() {
    let t = test_app().await;

    let response = t
        .app
        .clone()
        .oneshot(post(
            "/api/employees",
            &t.manager_token,
            json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "secret1",
                "role": "employee",
                "job_role": "cashier",
                "employment_type": "Full Time",
                "mobile": "0123456789"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = t
        .app
        .clone()
        .oneshot(post(
            "/api/leaves",
            &t.manager_token,
            json!({
                "employee_id": t.manager_id,
                "leave_type": "full-day",
                "start_date": "2026-09-21",
                "end_date": "2026-09-22",
                "reason": "family event"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let shift = ShiftRepository::new(t.state.db.clone())
        .create(
            t.manager_id.parse().unwrap(),
            "2026-09-23".to_string(),
            "09:00 AM".to_string(),
            "05:00 PM".to_string(),
        )
        .await
        .unwrap();
    let response = t
        .app
        .clone()
        .oneshot(post(
            "/api/shifts/offer",
            &t.manager_token,
            json!({ "shift_id": shift.id.unwrap().to_string() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let t = test_app().await;

    let response = t
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/employees")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
