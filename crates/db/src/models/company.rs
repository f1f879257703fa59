//! Company row model.

use sqlx::FromRow;
use staffing_core::company::Company;
use staffing_core::types::DbId;

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyRow {
    pub id: DbId,
    pub name: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: Some(row.id),
            name: row.name,
        }
    }
}
