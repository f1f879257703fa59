//! Recording fake store for service unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::company::Company;
use crate::employee::Employee;
use crate::paging::Page;
use crate::store::{CompanyStore, EmployeeStore, StoreResult};
use crate::types::DbId;

#[derive(Default)]
struct Tables {
    companies: BTreeMap<DbId, Company>,
    employees: BTreeMap<DbId, Employee>,
    next_id: DbId,
    employee_saves: Vec<Employee>,
}

impl Tables {
    fn assign_id(&mut self, id: Option<DbId>) -> DbId {
        let id = id.unwrap_or(self.next_id + 1);
        self.next_id = self.next_id.max(id);
        id
    }
}

/// Implements both store traits over plain maps and records every employee
/// passed to `save`.
#[derive(Default)]
pub struct FakeStore {
    tables: Mutex<Tables>,
    fail: bool,
}

impl FakeStore {
    /// A store whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub async fn seed_company(&self, company: Company) {
        let mut t = self.tables.lock().unwrap();
        let id = t.assign_id(company.id);
        t.companies.insert(id, Company { id: Some(id), ..company });
    }

    pub async fn seed_employee(&self, employee: Employee) {
        let mut t = self.tables.lock().unwrap();
        let id = t.assign_id(employee.id);
        t.employees.insert(id, Employee { id: Some(id), ..employee });
    }

    pub fn employee_saves(&self) -> usize {
        self.tables.lock().unwrap().employee_saves.len()
    }

    pub fn last_saved_employee(&self) -> Option<Employee> {
        self.tables.lock().unwrap().employee_saves.last().cloned()
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail {
            return Err("fake store failure".into());
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyStore for FakeStore {
    async fn save(&self, company: Company) -> StoreResult<Company> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        let id = t.assign_id(company.id);
        let saved = Company { id: Some(id), ..company };
        t.companies.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Company>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().companies.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Company>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().companies.values().cloned().collect())
    }

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Company>> {
        self.check()?;
        Ok(page.slice(self.tables.lock().unwrap().companies.values().cloned()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        self.check()?;
        Ok(self.tables.lock().unwrap().companies.remove(&id).is_some())
    }
}

#[async_trait]
impl EmployeeStore for FakeStore {
    async fn save(&self, employee: Employee) -> StoreResult<Employee> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        let id = t.assign_id(employee.id);
        let saved = Employee { id: Some(id), ..employee };
        t.employees.insert(id, saved.clone());
        t.employee_saves.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Employee>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().employees.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().employees.values().cloned().collect())
    }

    async fn find_by_company_id(&self, company_id: DbId) -> StoreResult<Vec<Employee>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .employees
            .values()
            .filter(|e| e.company_id == Some(company_id))
            .cloned()
            .collect())
    }

    async fn find_page(&self, page: Page) -> StoreResult<Vec<Employee>> {
        self.check()?;
        Ok(page.slice(self.tables.lock().unwrap().employees.values().cloned()))
    }
}
