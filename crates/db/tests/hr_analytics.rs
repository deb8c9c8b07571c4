//! Integration tests for the HR dashboard reads.

use epms_core::feedback::NewFeedback;
use epms_db::models::employee::CreateEmployeeDetails;
use epms_db::models::user::CreateUser;
use epms_db::repositories::{DepartmentRepo, EmployeeRepo, FeedbackRepo, HrAnalyticsRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, user_id: &str, role: &str, first: &str, last: &str) {
    UserRepo::create(
        pool,
        &CreateUser {
            user_id: user_id.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: role.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: None,
        },
    )
    .await
    .unwrap();
}

async fn seed_employee(pool: &PgPool, user_id: &str, dept_id: Option<i64>, manager: &str) -> i64 {
    EmployeeRepo::create(
        pool,
        &CreateEmployeeDetails {
            user_id: user_id.to_string(),
            dept_id,
            manager_id: Some(manager.to_string()),
            job_title: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn add_feedback(pool: &PgPool, emp_id: i64, score: f64) {
    let input = NewFeedback::new(Some(emp_id), Some("MGR1"), Some(score), None).unwrap();
    FeedbackRepo::create(pool, &input).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kpis_on_empty_database(pool: PgPool) {
    let kpis = HrAnalyticsRepo::workforce_kpis(&pool).await.unwrap();
    assert_eq!(kpis.total_employees, 0);
    assert_eq!(kpis.average_score, 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kpis_count_workforce_roles_and_round_mean(pool: PgPool) {
    seed_user(&pool, "EMP1", "Employee", "Ada", "Lovelace").await;
    seed_user(&pool, "EMP2", "Employee", "Alan", "Turing").await;
    seed_user(&pool, "MGR1", "Manager", "Grace", "Hopper").await;
    seed_user(&pool, "HR1", "HR", "Hedy", "Lamarr").await;
    seed_user(&pool, "ADMIN", "Admin", "Root", "User").await;

    let e1 = seed_employee(&pool, "EMP1", None, "MGR1").await;
    let e2 = seed_employee(&pool, "EMP2", None, "MGR1").await;
    add_feedback(&pool, e1, 7.0).await;
    add_feedback(&pool, e1, 8.0).await;
    add_feedback(&pool, e2, 8.0).await;

    let kpis = HrAnalyticsRepo::workforce_kpis(&pool).await.unwrap();
    assert_eq!(kpis.total_employees, 3);
    assert_eq!(kpis.average_score, 7.67);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_headcount_adds_distinct_managers(pool: PgPool) {
    let sales = DepartmentRepo::create(&pool, "Sales").await.unwrap();
    let eng = DepartmentRepo::create(&pool, "Engineering").await.unwrap();
    DepartmentRepo::create(&pool, "Audit").await.unwrap();

    seed_employee(&pool, "EMP1", Some(eng.id), "MGR1").await;
    seed_employee(&pool, "EMP2", Some(eng.id), "MGR1").await;
    seed_employee(&pool, "EMP3", Some(eng.id), "MGR2").await;
    seed_employee(&pool, "EMP4", Some(sales.id), "MGR1").await;

    let rows = HrAnalyticsRepo::headcount_by_department(&pool).await.unwrap();
    let pairs: Vec<(String, i64)> = rows.into_iter().map(|r| (r.dept_name, r.headcount)).collect();

    assert_eq!(
        pairs,
        vec![
            ("Audit".to_string(), 0),
            ("Engineering".to_string(), 5),
            ("Sales".to_string(), 2),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revenue_defaults_to_zero_and_upserts(pool: PgPool) {
    let sales = DepartmentRepo::create(&pool, "Sales").await.unwrap();
    DepartmentRepo::create(&pool, "Audit").await.unwrap();

    DepartmentRepo::set_revenue(&pool, sales.id, 1000.0).await.unwrap();
    DepartmentRepo::set_revenue(&pool, sales.id, 2500.555).await.unwrap();

    let rows = HrAnalyticsRepo::revenue_by_department(&pool).await.unwrap();
    let pairs: Vec<(String, f64)> = rows.into_iter().map(|r| (r.dept_name, r.value)).collect();
    assert_eq!(
        pairs,
        vec![("Audit".to_string(), 0.0), ("Sales".to_string(), 2500.56)]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revenue_for_unknown_department_is_fk_violation(pool: PgPool) {
    let err = DepartmentRepo::set_revenue(&pool, 777, 1.0).await.unwrap_err();
    assert!(epms_db::is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_feed_joins_names_and_falls_back_to_user_id(pool: PgPool) {
    let eng = DepartmentRepo::create(&pool, "Engineering").await.unwrap();
    seed_user(&pool, "EMP1", "Employee", "Ada", "Lovelace").await;

    let named = seed_employee(&pool, "EMP1", Some(eng.id), "MGR1").await;
    let orphan = seed_employee(&pool, "GHOST", None, "MGR1").await;
    add_feedback(&pool, named, 9.0).await;
    add_feedback(&pool, orphan, 4.5).await;

    let feed = HrAnalyticsRepo::recent_feedback(&pool, 20).await.unwrap();
    assert_eq!(feed.len(), 2);

    assert_eq!(feed[0].emp_name, "GHOST");
    assert_eq!(feed[0].department, None);
    assert_eq!(feed[0].score, 4.5);

    assert_eq!(feed[1].emp_name, "Ada Lovelace");
    assert_eq!(feed[1].department.as_deref(), Some("Engineering"));
    assert_eq!(feed[1].manager_name, "MGR1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_feed_is_limited(pool: PgPool) {
    let emp = seed_employee(&pool, "EMP1", None, "MGR1").await;
    for i in 0..25 {
        add_feedback(&pool, emp, f64::from(i % 10)).await;
    }

    let feed = HrAnalyticsRepo::recent_feedback(&pool, 20).await.unwrap();
    assert_eq!(feed.len(), 20);
    assert!(feed.windows(2).all(|w| w[0].id > w[1].id));
}
