//! Domain core for the staffing backend.
//!
//! Holds the Company and Employee entities, the persistence traits the
//! services are written against, and the services themselves. Nothing in
//! this crate performs I/O directly.

pub mod company;
pub mod employee;
pub mod error;
pub mod paging;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;
