//! ETL Probe Application - Use cases and ports
//!
//! This crate holds the test runner, the catalog of ETL service cases and
//! the suite driver. It talks to the outside world only through the ports
//! defined in [`ports`].

pub mod cases;
pub mod error;
pub mod ports;
pub mod runner;
pub mod use_cases;

#[cfg(test)]
mod mocks;

pub use cases::EtlCases;
pub use error::{ApplicationError, ApplicationResult};
pub use runner::TestRunner;
pub use use_cases::RunSuite;
