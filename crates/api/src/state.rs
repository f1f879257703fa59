use std::sync::Arc;

use staffing_core::company::CompanyService;
use staffing_core::employee::EmployeeService;
use staffing_db::memory::MemoryStore;
use staffing_db::repositories::{CompanyRepo, EmployeeRepo};
use staffing_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when running on the in-memory store.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub companies: CompanyService,
    pub employees: EmployeeService,
}

impl AppState {
    /// State backed by PostgreSQL repositories.
    pub fn with_pool(pool: DbPool, config: ServerConfig) -> Self {
        let company_repo = Arc::new(CompanyRepo::new(pool.clone()));
        let employee_repo = Arc::new(EmployeeRepo::new(pool.clone()));

        Self {
            pool: Some(pool),
            config: Arc::new(config),
            companies: CompanyService::new(company_repo, employee_repo.clone()),
            employees: EmployeeService::new(employee_repo),
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory(config: ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            pool: None,
            config: Arc::new(config),
            companies: CompanyService::new(store.clone(), store.clone()),
            employees: EmployeeService::new(store),
        }
    }

    /// Short name of the active store backend, reported by `/health`.
    pub fn store_kind(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}
