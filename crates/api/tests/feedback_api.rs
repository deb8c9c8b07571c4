//! HTTP-level tests for the feedback log.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, build_test_app, get_auth, manager_token, post_json_auth,
    seed_employee, token_for,
};
use epms_core::roles::Role;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feedback_is_rounded_and_readable_immediately(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", Some("MGR1")).await;
    let token = manager_token("MGR1");

    let created = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/manager/feedback",
        &token,
        json!({ "empId": emp_id, "managerId": "MGR1", "score": 8.456, "comments": "Strong" }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let feedback = body_json(created).await["data"].clone();
    assert_eq!(feedback["score"], 8.46);
    assert_eq!(feedback["comments"], "Strong");
    let feedback_id = feedback["id"].as_i64().unwrap();

    let listed = get_auth(
        build_test_app(pool),
        &format!("/api/v1/manager/feedback/{emp_id}"),
        &token,
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let json = body_json(listed).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], feedback_id);
    assert_eq!(rows[0]["score"], 8.46);
    assert_eq!(rows[0]["managerId"], "MGR1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_default_to_empty(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", Some("MGR1")).await;

    let created = post_json_auth(
        build_test_app(pool),
        "/api/v1/manager/feedback",
        &manager_token("MGR1"),
        json!({ "empId": emp_id, "managerId": "MGR1", "score": "7" }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let feedback = body_json(created).await["data"].clone();
    assert_eq!(feedback["comments"], "");
    assert_eq!(feedback["score"], 7.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feedback_validation(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", Some("MGR1")).await;

    for body in [
        json!({ "managerId": "MGR1", "score": 5 }),
        json!({ "empId": emp_id, "score": 5 }),
        json!({ "empId": emp_id, "managerId": "MGR1" }),
        json!({ "empId": emp_id, "managerId": "MGR1", "score": null }),
        json!({ "empId": emp_id, "managerId": "MGR1", "score": 10.5 }),
        json!({ "empId": emp_id, "managerId": "MGR1", "score": "great" }),
    ] {
        let response = post_json_auth(
            build_test_app(pool.clone()),
            "/api/v1/manager/feedback",
            &manager_token("MGR1"),
            body.clone(),
        )
        .await;
        assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feedback_for_unknown_employee_is_404(pool: PgPool) {
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/manager/feedback",
        &manager_token("MGR1"),
        json!({ "empId": 9999, "managerId": "MGR1", "score": 5 }),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_emp_id_in_path_is_400(pool: PgPool) {
    let response = get_auth(
        build_test_app(pool),
        "/api/v1/manager/feedback/abc",
        &manager_token("MGR1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_positive_emp_id_in_path_is_bad_request(pool: PgPool) {
    for emp_id in ["0", "-3"] {
        let response = get_auth(
            build_test_app(pool.clone()),
            &format!("/api/v1/manager/feedback/{emp_id}"),
            &manager_token("MGR1"),
        )
        .await;
        let message = assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
        assert_eq!(message, format!("empId must be a positive integer, got {emp_id}"));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employees_cannot_record_feedback(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", Some("MGR1")).await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/manager/feedback",
        &token_for("EMP1", Role::Employee),
        json!({ "empId": emp_id, "managerId": "EMP1", "score": 10 }),
    )
    .await;
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}
