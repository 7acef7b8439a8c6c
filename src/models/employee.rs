use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update requests. Fields are passed to the store as-is,
/// so a missing `name` is rejected by its NOT NULL constraint.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub department_id: Option<i32>,
}
