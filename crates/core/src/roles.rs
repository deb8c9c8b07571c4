//! Well-known role names.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20250101000001_create_users.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_EMPLOYEE: &str = "Employee";
pub const ROLE_MANAGER: &str = "Manager";
pub const ROLE_HR: &str = "HR";
pub const ROLE_ADMIN: &str = "Admin";

/// The four account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Manager,
    #[serde(rename = "HR")]
    Hr,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => ROLE_EMPLOYEE,
            Role::Manager => ROLE_MANAGER,
            Role::Hr => ROLE_HR,
            Role::Admin => ROLE_ADMIN,
        }
    }

    /// Roles counted as organisational headcount on the HR dashboard.
    pub fn is_workforce(self) -> bool {
        matches!(self, Role::Employee | Role::Manager)
    }

    /// Roles allowed to read another employee's goals and dashboard.
    pub fn is_privileged(self) -> bool {
        !matches!(self, Role::Employee)
    }

    /// Roles allowed to set progress on a goal that is not their own.
    pub fn can_progress_any_goal(self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_EMPLOYEE => Ok(Role::Employee),
            ROLE_MANAGER => Ok(Role::Manager),
            ROLE_HR => Ok(Role::Hr),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(CoreError::Validation(format!(
                "Unknown role '{other}'. Expected one of: Employee, Manager, HR, Admin"
            ))),
        }
    }
}
