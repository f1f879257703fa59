//! Repository layer.
//!
//! Each repository wraps a [`DbPool`](crate::DbPool) and implements the
//! matching store trait from `staffing_core::store`.

pub mod company_repo;
pub mod employee_repo;

pub use company_repo::CompanyRepo;
pub use employee_repo::EmployeeRepo;

/// Move a table's id sequence past any explicitly inserted ids so later
/// generated ids do not collide with them.
pub(crate) async fn sync_id_sequence(pool: &crate::DbPool, table: &str) -> Result<(), sqlx::Error> {
    let query = format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
         GREATEST((SELECT MAX(id) FROM {table}), 1))"
    );
    sqlx::query(&query).execute(pool).await?;
    Ok(())
}
