//! Persistence traits the services are written against.
//!
//! Implementations live in `staffing-db` (PostgreSQL and in-memory). The
//! services only ever see `Arc<dyn CompanyStore>` / `Arc<dyn EmployeeStore>`.

use async_trait::async_trait;

use crate::company::Company;
use crate::employee::Employee;
use crate::paging::Page;
use crate::types::DbId;

/// Opaque error from a store backend.
///
/// Kept boxed so the boundary layer can downcast to the concrete driver
/// error (e.g. `sqlx::Error`) when classifying it.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

pub type StoreResult<T> = Result<T, StoreError>;

/// A saved row points at a parent row that does not exist.
///
/// Backends without foreign keys of their own return this so callers see the
/// same failure PostgreSQL reports for a dangling reference.
#[derive(Debug, thiserror::Error)]
#[error("Referenced {entity} {id} does not exist")]
pub struct MissingReference {
    pub entity: &'static str,
    pub id: DbId,
}

/// Persistence for [`Company`] records.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Insert or overwrite a company.
    ///
    /// A company without an id is inserted and receives one; a company with
    /// an id replaces the stored row with that id (or creates it).
    async fn save(&self, company: Company) -> StoreResult<Company>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Company>>;

    /// All companies ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Company>>;

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Company>>;

    /// Remove a company. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;
}

/// Persistence for [`Employee`] records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert or overwrite an employee. Same id semantics as
    /// [`CompanyStore::save`].
    async fn save(&self, employee: Employee) -> StoreResult<Employee>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Employee>>;

    /// All employees ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Employee>>;

    async fn find_by_company_id(&self, company_id: DbId) -> StoreResult<Vec<Employee>>;

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Employee>>;
}
