//! SeaORM adapter for CustomerRepository

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{next_write_time, Customer, CustomerId};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// SQL implementation of CustomerRepository (SQLite or PostgreSQL)
pub struct SqlCustomerRepository {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl SqlCustomerRepository {
    pub fn new(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn get_all(&self) -> Result<Vec<Customer>, DomainError> {
        let query = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .all(&self.db);

        let results = tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| {
                DomainError::Timeout(format!(
                    "listing customers took longer than {}s",
                    self.query_timeout.as_secs_f64()
                ))
            })?
            .map_err(DomainError::from_read)?;

        tracing::debug!("Fetched {} customer rows", results.len());
        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(DomainError::from_read)?;

        Ok(result.map(|m| m.into()))
    }

    async fn add(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let now = Utc::now();

        let model = customers::ActiveModel {
            id: NotSet,
            name: Set(customer.name.clone()),
            kana: Set(customer.kana.clone()),
            phone_number: Set(customer.phone_number.clone()),
            email: Set(customer.email.clone()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(DomainError::from_write)?;

        tracing::debug!("Inserted customer row {}", result.id);
        Ok(result.into())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        if !customer.id.is_assigned() {
            return Err(DomainError::InvalidArgument(
                "cannot update a customer without an id".to_string(),
            ));
        }

        let existing = customers::Entity::find_by_id(customer.id.0)
            .one(&self.db)
            .await
            .map_err(DomainError::from_read)?
            .ok_or_else(|| DomainError::NotFound(format!("Customer {}", customer.id)))?;

        let updated_at = next_write_time(existing.updated_at, Utc::now());
        let mut model: customers::ActiveModel = existing.into();
        model.name = Set(customer.name.clone());
        model.kana = Set(customer.kana.clone());
        model.phone_number = Set(customer.phone_number.clone());
        model.email = Set(customer.email.clone());
        model.updated_at = Set(Some(updated_at));

        let result = model
            .update(&self.db)
            .await
            .map_err(DomainError::from_write)?;

        tracing::debug!("Updated customer row {}", result.id);
        Ok(result.into())
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
        let result = customers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(DomainError::from_write)?;

        tracing::debug!("Deleted {} row(s) for customer {}", result.rows_affected, id);
        Ok(result.rows_affected > 0)
    }

    async fn email_exists(
        &self,
        email: Option<&str>,
        exclude_id: Option<&CustomerId>,
    ) -> Result<bool, DomainError> {
        let Some(email) = email.filter(|e| !e.trim().is_empty()) else {
            return Ok(false);
        };

        let mut query = customers::Entity::find().filter(customers::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(customers::Column::Id.ne(id.0));
        }

        let count = query.count(&self.db).await.map_err(DomainError::from_read)?;

        Ok(count > 0)
    }
}
