use axum::http::StatusCode;
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use slotbook_core::models::appointment::{Appointment, AppointmentStatus};
use slotbook_core::models::slot::Slot;
use slotbook_db::mock::MockAppointmentRepo;
use slotbook_api::middleware::error_handling::INTERNAL_ERROR_MESSAGE;

use crate::test_utils::TestContext;

const OPERATOR: &str = "ServiceOperator0";

async fn book(ctx: &TestContext, operator: &str, start: i32, end: i32) -> axum_test::TestResponse {
    ctx.server
        .post("/appointment/book")
        .json(&json!({ "operator": operator, "start_time": start, "end_time": end }))
        .await
}

#[tokio::test]
async fn test_get_appointments_empty() {
    let ctx = TestContext::new();

    let response = ctx.server.get(&format!("/appointments/{}", OPERATOR)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[test_log::test(tokio::test)]
async fn test_book_conflict_list_cancel_flow() {
    let ctx = TestContext::new();

    let response = book(&ctx, OPERATOR, 10, 11).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let appointment = response.json::<Value>();
    assert_eq!(appointment["operator"], json!(OPERATOR));
    assert_eq!(appointment["start_time"], json!(10));
    assert_eq!(appointment["end_time"], json!(11));
    assert!(appointment["created_at"].is_string());
    assert!(appointment["updated_at"].is_null());
    assert!(appointment["deleted_at"].is_null());

    let response = book(&ctx, OPERATOR, 10, 11).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Appointment conflicts with an existing appointment" })
    );

    let response = ctx.server.get(&format!("/appointments/{}", OPERATOR)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let appointments = response.json::<Vec<Value>>();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["start_time"], json!(10));
    let id = appointments[0]["id"].as_i64().expect("id should be an integer");

    let response = ctx.server.delete(&format!("/appointment/cancel/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.json::<Value>()["deleted_at"].is_null());

    let response = ctx.server.get(&format!("/appointments/{}", OPERATOR)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[rstest]
#[case(10, 12)]
#[case(10, 10)]
#[case(-1, 0)]
#[case(24, 25)]
#[tokio::test]
async fn test_book_rejects_invalid_slots(#[case] start: i32, #[case] end: i32) {
    let ctx = TestContext::new();

    let response = book(&ctx, OPERATOR, start, end).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_book_wrong_duration_message() {
    let ctx = TestContext::new();

    let response = book(&ctx, OPERATOR, 10, 12).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Appointments must be exactly 1 hour long." })
    );
}

#[tokio::test]
async fn test_book_missing_field_is_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/appointment/book")
        .json(&json!({ "operator": OPERATOR, "start_time": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"]
        .as_str()
        .expect("error should be a string")
        .to_string();
    assert!(error.contains("end_time"), "unexpected error: {}", error);

    let response = ctx.server.get(&format!("/appointments/{}", OPERATOR)).await;
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_malformed_requests_are_bad_request() {
    let ctx = TestContext::new();

    let response = ctx.server.delete("/appointment/cancel/abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let response = ctx
        .server
        .put("/appointment/reschedule/abc")
        .json(&json!({ "start_time": 1, "end_time": 2 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let response = ctx
        .server
        .put("/appointment/reschedule/1")
        .json(&json!({ "start_time": "ten", "end_time": 11 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_free_slots_empty_day() {
    let ctx = TestContext::new();

    let response = ctx.server.get(&format!("/free_slots/{}", OPERATOR)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([{ "start_time": 0, "end_time": 24 }])
    );
}

#[tokio::test]
async fn test_free_slots_around_bookings() {
    let ctx = TestContext::new();
    book(&ctx, OPERATOR, 14, 15).await;
    book(&ctx, OPERATOR, 9, 10).await;

    let response = ctx.server.get(&format!("/free_slots/{}", OPERATOR)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Vec<Slot>>(),
        vec![Slot::new(0, 9), Slot::new(10, 14), Slot::new(15, 24)]
    );
}

#[tokio::test]
async fn test_reschedule_flow() {
    let ctx = TestContext::new();
    let first = book(&ctx, OPERATOR, 10, 11).await.json::<Value>();
    book(&ctx, OPERATOR, 12, 13).await;
    let id = first["id"].as_i64().unwrap();

    // Onto its own slot
    let response = ctx
        .server
        .put(&format!("/appointment/reschedule/{}", id))
        .json(&json!({ "start_time": 10, "end_time": 11 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // Onto another appointment
    let response = ctx
        .server
        .put(&format!("/appointment/reschedule/{}", id))
        .json(&json!({ "start_time": 12, "end_time": 13 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Wrong duration
    let response = ctx
        .server
        .put(&format!("/appointment/reschedule/{}", id))
        .json(&json!({ "start_time": 1, "end_time": 3 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .put(&format!("/appointment/reschedule/{}", id))
        .json(&json!({ "start_time": 15, "end_time": 16 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let moved = response.json::<Value>();
    assert_eq!(moved["id"], json!(id));
    assert_eq!(moved["start_time"], json!(15));
    assert_eq!(moved["end_time"], json!(16));
    assert!(moved["updated_at"].is_string());
}

#[tokio::test]
async fn test_unknown_or_cancelled_ids_are_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .put("/appointment/reschedule/404")
        .json(&json!({ "start_time": 1, "end_time": 2 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = ctx.server.delete("/appointment/cancel/404").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Appointment not found" })
    );

    let id = book(&ctx, OPERATOR, 5, 6).await.json::<Value>()["id"]
        .as_i64()
        .unwrap();
    ctx.server.delete(&format!("/appointment/cancel/{}", id)).await;

    let response = ctx
        .server
        .put(&format!("/appointment/reschedule/{}", id))
        .json(&json!({ "start_time": 6, "end_time": 7 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_twice_returns_same_record() {
    let ctx = TestContext::new();
    let id = book(&ctx, OPERATOR, 5, 6).await.json::<Value>()["id"]
        .as_i64()
        .unwrap();

    let first = ctx
        .server
        .delete(&format!("/appointment/cancel/{}", id))
        .await
        .json::<Value>();
    let second = ctx.server.delete(&format!("/appointment/cancel/{}", id)).await;

    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(second.json::<Value>()["deleted_at"], first["deleted_at"]);
}

#[tokio::test]
async fn test_storage_failure_is_generic_500() {
    let mut repo = MockAppointmentRepo::new();
    repo.expect_active_for()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let ctx = TestContext::with_mock(repo);

    for path in ["/appointments/op", "/free_slots/op"] {
        let response = ctx.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": INTERNAL_ERROR_MESSAGE })
        );
    }

    let response = book(&ctx, "op", 1, 2).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_conflict_is_checked_before_insert() {
    let now = Utc::now();
    let mut repo = MockAppointmentRepo::new();
    repo.expect_active_for().returning(move |operator| {
        Ok(vec![Appointment {
            id: 1,
            operator: operator.to_string(),
            slot: Slot::new(10, 11),
            created_at: now,
            updated_at: None,
            status: AppointmentStatus::Active,
        }])
    });
    repo.expect_insert().times(0);

    let ctx = TestContext::with_mock(repo);

    let response = book(&ctx, OPERATOR, 10, 11).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cancel_failure_during_write_is_500() {
    let now = Utc::now();
    let mut repo = MockAppointmentRepo::new();
    repo.expect_get()
        .with(predicate::eq(7))
        .returning(move |id| {
            Ok(Some(Appointment {
                id,
                operator: OPERATOR.to_string(),
                slot: Slot::new(3, 4),
                created_at: now,
                updated_at: None,
                status: AppointmentStatus::Active,
            }))
        });
    repo.expect_soft_delete()
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("disk full")));

    let ctx = TestContext::with_mock(repo);

    let response = ctx.server.delete("/appointment/cancel/7").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_and_version() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));

    let response = ctx.server.get("/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Value>()["version"].is_string());
}
