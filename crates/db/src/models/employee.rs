//! Employee row model.

use sqlx::FromRow;
use staffing_core::employee::Employee;
use staffing_core::types::DbId;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<DbId>,
    pub active: bool,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: Some(row.id),
            name: row.name,
            age: row.age,
            gender: row.gender,
            salary: row.salary,
            company_id: row.company_id,
            active: row.active,
        }
    }
}
