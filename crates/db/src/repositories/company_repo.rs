//! Repository for the `companies` table.

use async_trait::async_trait;
use staffing_core::company::Company;
use staffing_core::paging::Page;
use staffing_core::store::{CompanyStore, StoreResult};
use staffing_core::types::DbId;

use crate::models::company::CompanyRow;
use crate::repositories::sync_id_sequence;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// PostgreSQL-backed [`CompanyStore`].
#[derive(Clone)]
pub struct CompanyRepo {
    pool: DbPool,
}

impl CompanyRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for CompanyRepo {
    /// Insert a new company, or upsert by id when one is given.
    async fn save(&self, company: Company) -> StoreResult<Company> {
        let row = match company.id {
            None => {
                let query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COLUMNS}");
                sqlx::query_as::<_, CompanyRow>(&query)
                    .bind(&company.name)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO companies (id, name) VALUES ($1, $2)
                     ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        updated_at = NOW()
                     RETURNING {COLUMNS}"
                );
                let row = sqlx::query_as::<_, CompanyRow>(&query)
                    .bind(id)
                    .bind(&company.name)
                    .fetch_one(&self.pool)
                    .await?;
                sync_id_sequence(&self.pool, "companies").await?;
                row
            }
        };
        tracing::debug!(company_id = row.id, "Saved company row");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Company>> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        let row = sqlx::query_as::<_, CompanyRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Company::from))
    }

    async fn find_all(&self) -> StoreResult<Vec<Company>> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id");
        let rows = sqlx::query_as::<_, CompanyRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Company>> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, CompanyRow>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    /// Employees of a deleted company are unassigned by the
    /// `ON DELETE SET NULL` foreign key.
    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
