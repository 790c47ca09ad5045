//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod console;
pub mod sql;

pub use console::{Console, ConsoleApp};
pub use sql::SqlCustomerRepository;
