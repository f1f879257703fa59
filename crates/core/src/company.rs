//! Company entity and [`CompanyService`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::employee::{validate_name, Employee};
use crate::error::{CoreError, CoreResult};
use crate::paging::Page;
use crate::store::{CompanyStore, EmployeeStore};
use crate::types::DbId;

/// A company record. Its employees are not stored on it; see
/// [`CompanyService::employees_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: DbId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Partial update for a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    pub name: Option<String>,
}

/// A company together with the employees that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyWithEmployees {
    #[serde(flatten)]
    pub company: Company,
    pub employees: Vec<Employee>,
}

/// Creates and reads companies, and resolves their employees through the
/// employee store.
#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyStore>,
    employees: Arc<dyn EmployeeStore>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyStore>, employees: Arc<dyn EmployeeStore>) -> Self {
        Self {
            companies,
            employees,
        }
    }

    pub async fn create(&self, company: Company) -> CoreResult<Company> {
        validate_name(&company.name)?;
        if let Some(id) = company.id {
            if self.companies.find_by_id(id).await?.is_some() {
                return Err(CoreError::Conflict(format!("Company id {id} already exists")));
            }
        }
        let saved = self.companies.save(company).await?;
        tracing::info!(company_id = ?saved.id, "Company created");
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: DbId) -> CoreResult<Company> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or(CoreError::CompanyNotFound)
    }

    pub async fn list(&self) -> CoreResult<Vec<Company>> {
        Ok(self.companies.find_all().await?)
    }

    pub async fn list_page(&self, page: Page) -> CoreResult<Vec<Company>> {
        Ok(self.companies.find_page(page).await?)
    }

    /// Rename a company. An absent name leaves it as is.
    pub async fn update(&self, id: DbId, update: CompanyUpdate) -> CoreResult<Company> {
        let mut company = self.find_by_id(id).await?;
        if let Some(name) = update.name {
            validate_name(&name)?;
            company.name = name;
        }
        company.id = Some(id);

        let saved = self.companies.save(company).await?;
        tracing::info!(company_id = id, "Company updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        if !self.companies.delete(id).await? {
            return Err(CoreError::CompanyNotFound);
        }
        tracing::info!(company_id = id, "Company deleted");
        Ok(())
    }

    /// Employees whose `company_id` is `id`. Fails if the company itself
    /// does not exist.
    pub async fn employees_of(&self, id: DbId) -> CoreResult<Vec<Employee>> {
        self.find_by_id(id).await?;
        Ok(self.employees.find_by_company_id(id).await?)
    }

    pub async fn find_with_employees(&self, id: DbId) -> CoreResult<CompanyWithEmployees> {
        let company = self.find_by_id(id).await?;
        let employees = self.employees.find_by_company_id(id).await?;
        tracing::debug!(company_id = id, count = employees.len(), "Resolved company employees");
        Ok(CompanyWithEmployees { company, employees })
    }
}
