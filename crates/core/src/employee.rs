//! Employee entity, partial-update payload, and [`EmployeeService`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::paging::Page;
use crate::store::EmployeeStore;
use crate::types::DbId;

/// Youngest age accepted on create (inclusive).
pub const MIN_EMPLOYEE_AGE: i32 = 18;

/// Oldest age accepted on create (inclusive).
pub const MAX_EMPLOYEE_AGE: i32 = 65;

fn default_active() -> bool {
    true
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the store on first save.
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    #[serde(default)]
    pub company_id: Option<DbId>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Employee {
    /// A new, active, unassigned employee without an id.
    pub fn new(name: impl Into<String>, age: i32, gender: impl Into<String>, salary: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            gender: gender.into(),
            salary,
            company_id: None,
            active: true,
        }
    }

    pub fn with_id(mut self, id: DbId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_company(mut self, company_id: DbId) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Merge `update` into this record field by field.
    ///
    /// `Some` overwrites, `None` keeps the current value. The id is never
    /// touched.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
        if let Some(company_id) = update.company_id {
            self.company_id = Some(company_id);
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}

/// Partial update for an employee. All fields are optional; `None` means
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    pub company_id: Option<DbId>,
    pub active: Option<bool>,
}

/// Optional filters for [`EmployeeService::list`]. An empty filter matches
/// every employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeFilter {
    pub company_id: Option<DbId>,
    pub gender: Option<String>,
    pub active: Option<bool>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        self.company_id.map_or(true, |id| employee.company_id == Some(id))
            && self
                .gender
                .as_deref()
                .map_or(true, |g| employee.gender.eq_ignore_ascii_case(g))
            && self.active.map_or(true, |a| employee.active == a)
    }
}

/// Reject ages outside `[MIN_EMPLOYEE_AGE, MAX_EMPLOYEE_AGE]`.
pub fn validate_age(age: i32) -> CoreResult<()> {
    if (MIN_EMPLOYEE_AGE..=MAX_EMPLOYEE_AGE).contains(&age) {
        Ok(())
    } else {
        Err(CoreError::EmployeeCreate)
    }
}

/// Reject blank names.
pub fn validate_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

/// Creates, reads, lists and partially updates employees.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new employee.
    ///
    /// The age check runs before anything is saved; a rejected employee
    /// never reaches the store. A caller-supplied id must not exist yet.
    pub async fn create(&self, employee: Employee) -> CoreResult<Employee> {
        if let Err(err) = validate_age(employee.age) {
            tracing::warn!(age = employee.age, "Rejected employee outside allowed age range");
            return Err(err);
        }
        validate_name(&employee.name)?;

        // `save` overwrites by id, so a create must never reuse a taken one.
        if let Some(id) = employee.id {
            if self.store.find_by_id(id).await?.is_some() {
                tracing::warn!(employee_id = id, "Rejected employee create with existing id");
                return Err(CoreError::Conflict(format!("Employee id {id} already exists")));
            }
        }

        let saved = self.store.save(employee).await?;
        tracing::info!(employee_id = ?saved.id, company_id = ?saved.company_id, "Employee created");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: DbId) -> CoreResult<Employee> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::EmployeeNotFound)
    }

    /// Read-merge-write partial update. Returns the saved record.
    pub async fn update(&self, id: DbId, update: EmployeeUpdate) -> CoreResult<Employee> {
        let mut employee = self.find_by_id(id).await?;
        employee.apply(update);
        employee.id = Some(id);

        let saved = self.store.save(employee).await?;
        tracing::info!(employee_id = id, "Employee updated");
        Ok(saved)
    }

    /// List employees matching `filter`, ordered by id.
    pub async fn list(&self, filter: &EmployeeFilter) -> CoreResult<Vec<Employee>> {
        let candidates = match filter.company_id {
            Some(company_id) => self.store.find_by_company_id(company_id).await?,
            None => self.store.find_all().await?,
        };
        Ok(candidates
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect())
    }

    pub async fn list_page(&self, page: Page) -> CoreResult<Vec<Employee>> {
        Ok(self.store.find_page(page).await?)
    }

    /// Mark an employee inactive. The record itself is kept.
    pub async fn deactivate(&self, id: DbId) -> CoreResult<Employee> {
        let employee = self
            .update(
                id,
                EmployeeUpdate {
                    active: Some(false),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!(employee_id = id, "Employee deactivated");
        Ok(employee)
    }
}
