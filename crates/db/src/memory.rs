//! In-memory store used when no database is configured, and by tests.
//!
//! Mirrors the PostgreSQL repositories: ids come from a per-table sequence
//! that never falls behind explicitly saved ids, results are ordered by id,
//! an employee's `company_id` must name an existing company, and deleting a
//! company unassigns its employees.
//!
//! Locks are always taken companies first, then employees.

use std::collections::BTreeMap;

use async_trait::async_trait;
use staffing_core::company::Company;
use staffing_core::employee::Employee;
use staffing_core::paging::Page;
use staffing_core::store::{CompanyStore, EmployeeStore, MissingReference, StoreResult};
use staffing_core::types::DbId;
use tokio::sync::RwLock;

struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    /// Use `requested` if given, otherwise the next sequence value.
    fn assign_id(&mut self, requested: Option<DbId>) -> DbId {
        let id = requested.unwrap_or(self.last_id + 1);
        self.last_id = self.last_id.max(id);
        id
    }
}

/// Implements both [`CompanyStore`] and [`EmployeeStore`].
#[derive(Default)]
pub struct MemoryStore {
    companies: RwLock<Table<Company>>,
    employees: RwLock<Table<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn save(&self, company: Company) -> StoreResult<Company> {
        let mut table = self.companies.write().await;
        let id = table.assign_id(company.id);
        let saved = Company {
            id: Some(id),
            ..company
        };
        table.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Company>> {
        Ok(self.companies.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Company>> {
        Ok(self.companies.read().await.rows.values().cloned().collect())
    }

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Company>> {
        Ok(page.slice(self.companies.read().await.rows.values().cloned()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut companies = self.companies.write().await;
        let removed = companies.rows.remove(&id).is_some();
        if removed {
            let mut employees = self.employees.write().await;
            for employee in employees.rows.values_mut() {
                if employee.company_id == Some(id) {
                    employee.company_id = None;
                }
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn save(&self, employee: Employee) -> StoreResult<Employee> {
        let companies = self.companies.read().await;
        if let Some(company_id) = employee.company_id {
            if !companies.rows.contains_key(&company_id) {
                return Err(Box::new(MissingReference {
                    entity: "company",
                    id: company_id,
                }));
            }
        }

        let mut table = self.employees.write().await;
        let id = table.assign_id(employee.id);
        let saved = Employee {
            id: Some(id),
            ..employee
        };
        table.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Employee>> {
        Ok(self.employees.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.employees.read().await.rows.values().cloned().collect())
    }

    async fn find_by_company_id(&self, company_id: DbId) -> StoreResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .await
            .rows
            .values()
            .filter(|e| e.company_id == Some(company_id))
            .cloned()
            .collect())
    }

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Employee>> {
        Ok(page.slice(self.employees.read().await.rows.values().cloned()))
    }
}
