//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the matching service in `staffing_core` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod company;
pub mod employee;
