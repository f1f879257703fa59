//! Row structs for the staffing tables.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! a conversion into the domain entity from `staffing_core`.

pub mod company;
pub mod employee;
