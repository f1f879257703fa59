//! Repository for the `employees` table.

use async_trait::async_trait;
use staffing_core::employee::Employee;
use staffing_core::paging::Page;
use staffing_core::store::{EmployeeStore, StoreResult};
use staffing_core::types::DbId;

use crate::models::employee::EmployeeRow;
use crate::repositories::sync_id_sequence;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, gender, salary, company_id, active";

/// PostgreSQL-backed [`EmployeeStore`].
#[derive(Clone)]
pub struct EmployeeRepo {
    pool: DbPool,
}

impl EmployeeRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepo {
    /// Insert a new employee, or upsert by id when one is given.
    async fn save(&self, employee: Employee) -> StoreResult<Employee> {
        let row = match employee.id {
            None => {
                let query = format!(
                    "INSERT INTO employees (name, age, gender, salary, company_id, active)
                     VALUES ($1, $2, $3, $4, $5, $6)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, EmployeeRow>(&query)
                    .bind(&employee.name)
                    .bind(employee.age)
                    .bind(&employee.gender)
                    .bind(employee.salary)
                    .bind(employee.company_id)
                    .bind(employee.active)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO employees (id, name, age, gender, salary, company_id, active)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)
                     ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        age = EXCLUDED.age,
                        gender = EXCLUDED.gender,
                        salary = EXCLUDED.salary,
                        company_id = EXCLUDED.company_id,
                        active = EXCLUDED.active,
                        updated_at = NOW()
                     RETURNING {COLUMNS}"
                );
                let row = sqlx::query_as::<_, EmployeeRow>(&query)
                    .bind(id)
                    .bind(&employee.name)
                    .bind(employee.age)
                    .bind(&employee.gender)
                    .bind(employee.salary)
                    .bind(employee.company_id)
                    .bind(employee.active)
                    .fetch_one(&self.pool)
                    .await?;
                sync_id_sequence(&self.pool, "employees").await?;
                row
            }
        };
        tracing::debug!(employee_id = row.id, "Saved employee row");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Employee>> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id");
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_company_id(&self, company_id: DbId) -> StoreResult<Vec<Employee>> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE company_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Employee>> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }
}
