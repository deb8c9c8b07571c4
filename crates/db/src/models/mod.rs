//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and, where the row is written by the application, a create DTO.
//! Entities that leave the service serialize with camelCase field names.

pub mod department;
pub mod employee;
pub mod feedback;
pub mod goal;
pub mod hr;
pub mod user;
