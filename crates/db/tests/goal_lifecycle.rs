//! Integration tests for `GoalRepo`.

use epms_core::goals::{CompletionPercent, NewGoal, STATUS_COMPLETE, STATUS_IN_PROGRESS};
use epms_db::models::employee::CreateEmployeeDetails;
use epms_db::repositories::{EmployeeRepo, GoalRepo};
use sqlx::PgPool;

async fn seed_employee(pool: &PgPool, user_id: &str, manager_id: Option<&str>) -> i64 {
    EmployeeRepo::create(
        pool,
        &CreateEmployeeDetails {
            user_id: user_id.to_string(),
            dept_id: None,
            manager_id: manager_id.map(str::to_string),
            job_title: None,
        },
    )
    .await
    .expect("employee insert should succeed")
    .id
}

fn new_goal(emp_id: i64, title: &str) -> NewGoal {
    NewGoal::new(Some(emp_id), Some(title), Some("MGR1"), None).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_starts_in_progress_at_zero(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", Some("MGR1")).await;

    let goal = GoalRepo::create(&pool, &new_goal(emp_id, "Improve X"))
        .await
        .unwrap();

    assert!(goal.id > 0);
    assert_eq!(goal.emp_id, emp_id);
    assert_eq!(goal.title, "Improve X");
    assert_eq!(goal.assigned_by, "MGR1");
    assert_eq!(goal.completion_percent, 0.0);
    assert_eq!(goal.status, STATUS_IN_PROGRESS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_update_recomputes_status(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", None).await;
    let goal = GoalRepo::create(&pool, &new_goal(emp_id, "Ship it"))
        .await
        .unwrap();

    let done = GoalRepo::update_progress(&pool, goal.id, CompletionPercent::new(100.0).unwrap())
        .await
        .unwrap()
        .expect("goal exists");
    assert_eq!(done.completion_percent, 100.0);
    assert_eq!(done.status, STATUS_COMPLETE);

    let reopened = GoalRepo::update_progress(&pool, goal.id, CompletionPercent::new(99.5).unwrap())
        .await
        .unwrap()
        .expect("goal exists");
    assert_eq!(reopened.completion_percent, 99.5);
    assert_eq!(reopened.status, STATUS_IN_PROGRESS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_of_missing_goal(pool: PgPool) {
    let updated = GoalRepo::update_progress(&pool, 9999, CompletionPercent::new(10.0).unwrap())
        .await
        .unwrap();
    assert!(updated.is_none());

    assert!(!GoalRepo::delete(&pool, 9999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_goal(pool: PgPool) {
    let emp_id = seed_employee(&pool, "EMP1", None).await;
    let goal = GoalRepo::create(&pool, &new_goal(emp_id, "Temp"))
        .await
        .unwrap();

    assert!(GoalRepo::delete(&pool, goal.id).await.unwrap());
    assert!(GoalRepo::find_by_id(&pool, goal.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_for_unknown_employee_is_fk_violation(pool: PgPool) {
    let err = GoalRepo::create(&pool, &new_goal(4242, "Orphan"))
        .await
        .unwrap_err();
    assert!(epms_db::is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orderings(pool: PgPool) {
    let a = seed_employee(&pool, "EMP1", Some("MGR1")).await;
    let b = seed_employee(&pool, "EMP2", Some("MGR1")).await;

    let first = GoalRepo::create(&pool, &new_goal(a, "First")).await.unwrap();
    let second = GoalRepo::create(&pool, &new_goal(a, "Second")).await.unwrap();
    let third = GoalRepo::create(&pool, &new_goal(b, "Third")).await.unwrap();

    let own = GoalRepo::list_for_employee(&pool, a).await.unwrap();
    let own_ids: Vec<i64> = own.iter().map(|g| g.id).collect();
    assert_eq!(own_ids, vec![first.id, second.id]);

    let team = GoalRepo::list_for_employees(&pool, &[a, b]).await.unwrap();
    let team_ids: Vec<i64> = team.iter().map(|g| g.id).collect();
    assert_eq!(team_ids, vec![third.id, second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_no_employees_is_empty(pool: PgPool) {
    let goals = GoalRepo::list_for_employees(&pool, &[]).await.unwrap();
    assert!(goals.is_empty());
}
