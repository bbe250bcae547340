//! ETL Probe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;

pub use adapters::{ConsoleReporter, ReqwestHttpClient, SystemClock};
