//! SQL adapters
//!
//! Implementations of repository traits using SeaORM over SQLite or PostgreSQL.

pub mod customer_repo;


pub use customer_repo::SqlCustomerRepository;
