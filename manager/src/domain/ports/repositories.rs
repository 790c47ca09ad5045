//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite/PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerId};
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers ordered by ascending id.
    ///
    /// Bounded by the configured query timeout; exceeding it yields
    /// `DomainError::Timeout`.
    async fn get_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by ID
    async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Persist a new customer, assigning its id and both timestamps
    async fn add(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Overwrite name, kana, phone number and email of an existing customer.
    ///
    /// `created_at` is kept and `updated_at` refreshed. Fails with
    /// `InvalidArgument` for an unassigned id and `NotFound` for a missing row.
    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Hard-delete a customer. Returns false when no such row existed.
    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError>;

    /// Check whether another customer already uses `email`.
    ///
    /// A blank or absent email is never reported as taken. The row with
    /// `exclude_id`, if given, is not counted.
    async fn email_exists(
        &self,
        email: Option<&str>,
        exclude_id: Option<&CustomerId>,
    ) -> Result<bool, DomainError>;
}
