//! Domain logic for the performance management service.
//!
//! This crate holds no database or HTTP dependencies; callers pass plain
//! values in and persist whatever comes out.

pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod goals;
pub mod roles;
pub mod types;
pub mod validation;
