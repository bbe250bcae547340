//! Use cases - Application business logic
//!
//! Each use case represents a single operation that can be performed
//! by the application.

mod run_suite;

pub use run_suite::RunSuite;
