//! Shared query parameter types for API handlers.

use serde::Deserialize;
use staffing_core::employee::EmployeeFilter;
use staffing_core::paging::Page;
use staffing_core::types::DbId;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped by [`Page::clamped`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// `Some` only when the caller asked for a page.
    pub fn page(&self) -> Option<Page> {
        if self.limit.is_none() && self.offset.is_none() {
            return None;
        }
        Some(Page::clamped(self.limit, self.offset))
    }
}

/// Query parameters for `GET /employees`.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListParams {
    pub company_id: Option<DbId>,
    pub gender: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl EmployeeListParams {
    pub fn filter(&self) -> EmployeeFilter {
        EmployeeFilter {
            company_id: self.company_id,
            gender: self.gender.clone(),
            active: self.active,
        }
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
