//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Every method is a single statement; no
//! repository opens a transaction.

pub mod department_repo;
pub mod employee_repo;
pub mod feedback_repo;
pub mod goal_repo;
pub mod hr_analytics_repo;
pub mod user_repo;

pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use feedback_repo::FeedbackRepo;
pub use goal_repo::GoalRepo;
pub use hr_analytics_repo::HrAnalyticsRepo;
pub use user_repo::UserRepo;
