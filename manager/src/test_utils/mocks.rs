//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use crate::domain::entities::{next_write_time, Customer, CustomerField, CustomerId};
use crate::domain::ports::{
    CustomerEditView, CustomerEditor, CustomerListView, CustomerRepository, EditOutcome,
    EditViewEvent, EventHub, ListViewEvent,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

/// Failure a mock repository can be told to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFailure {
    Database,
    Timeout,
    Duplicate,
}

impl InjectedFailure {
    fn to_error(self) -> DomainError {
        match self {
            InjectedFailure::Database => DomainError::Database("injected failure".to_string()),
            InjectedFailure::Timeout => DomainError::Timeout("injected timeout".to_string()),
            InjectedFailure::Duplicate => {
                DomainError::AlreadyExists("UNIQUE constraint failed: customers.email".to_string())
            }
        }
    }
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
    last_id: Arc<RwLock<i32>>,
    failure: Option<InjectedFailure>,
    write_failure: Option<InjectedFailure>,
    get_all_delay: Duration,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a customer, assigning an id if it has none
    pub fn with_customer(self, mut customer: Customer) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            if !customer.id.is_assigned() {
                customer.id = CustomerId(*last_id + 1);
            }
            *last_id = (*last_id).max(customer.id.0);

            let now = Utc::now();
            customer.created_at.get_or_insert(now);
            customer.updated_at.get_or_insert(now);

            self.customers
                .write()
                .unwrap()
                .insert(customer.id, customer);
        }
        self
    }

    /// Make every storage operation fail
    pub fn failing_with(mut self, failure: InjectedFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Make only `add` and `update` fail
    pub fn failing_writes_with(mut self, failure: InjectedFailure) -> Self {
        self.write_failure = Some(failure);
        self
    }

    /// Delay `get_all` so tests can overlap operations
    pub fn with_get_all_delay(mut self, delay: Duration) -> Self {
        self.get_all_delay = delay;
        self
    }

    pub fn stored(&self, id: CustomerId) -> Option<Customer> {
        self.customers.read().unwrap().get(&id).cloned()
    }

    fn check(&self) -> Result<(), DomainError> {
        match self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), DomainError> {
        self.check()?;
        match self.write_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    fn email_taken(&self, email: &str, exclude_id: Option<CustomerId>) -> bool {
        self.customers
            .read()
            .unwrap()
            .values()
            .any(|c| c.email == email && Some(c.id) != exclude_id)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get_all(&self) -> Result<Vec<Customer>, DomainError> {
        self.check()?;
        if !self.get_all_delay.is_zero() {
            tokio::time::sleep(self.get_all_delay).await;
        }
        Ok(self.customers.read().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        self.check()?;
        Ok(self.stored(*id))
    }

    async fn add(&self, customer: &Customer) -> Result<Customer, DomainError> {
        self.check_write()?;
        if self.email_taken(&customer.email, None) {
            return Err(InjectedFailure::Duplicate.to_error());
        }

        let mut last_id = self.last_id.write().unwrap();
        *last_id += 1;

        let now = Utc::now();
        let stored = Customer {
            id: CustomerId(*last_id),
            created_at: Some(now),
            updated_at: Some(now),
            ..customer.clone()
        };
        self.customers
            .write()
            .unwrap()
            .insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        self.check_write()?;
        if !customer.id.is_assigned() {
            return Err(DomainError::InvalidArgument(
                "customer id is unassigned".to_string(),
            ));
        }
        if self.email_taken(&customer.email, Some(customer.id)) {
            return Err(InjectedFailure::Duplicate.to_error());
        }

        let mut customers = self.customers.write().unwrap();
        let existing = customers
            .get_mut(&customer.id)
            .ok_or_else(|| DomainError::NotFound(format!("Customer {}", customer.id)))?;

        existing.name = customer.name.clone();
        existing.kana = customer.kana.clone();
        existing.phone_number = customer.phone_number.clone();
        existing.email = customer.email.clone();
        existing.updated_at = Some(next_write_time(existing.updated_at, Utc::now()));

        Ok(existing.clone())
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.customers.write().unwrap().remove(id).is_some())
    }

    async fn email_exists(
        &self,
        email: Option<&str>,
        exclude_id: Option<&CustomerId>,
    ) -> Result<bool, DomainError> {
        let Some(email) = email.filter(|e| !e.trim().is_empty()) else {
            return Ok(false);
        };
        self.check()?;
        Ok(self.email_taken(email, exclude_id.copied()))
    }
}

// ============================================================================
// Call-recording repository wrapper
// ============================================================================

/// One call made through a `RecordingRepository`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    GetAll,
    GetById(CustomerId),
    Add(Customer),
    Update(Customer),
    Delete(CustomerId),
    EmailExists(Option<String>, Option<CustomerId>),
}

/// Wraps any repository and records every call made through it
pub struct RecordingRepository<R> {
    inner: R,
    calls: RwLock<Vec<RepositoryCall>>,
}

impl<R: CustomerRepository> RecordingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&RepositoryCall) -> bool) -> usize {
        self.calls.read().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.write().unwrap().push(call);
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerRepository for RecordingRepository<R> {
    async fn get_all(&self) -> Result<Vec<Customer>, DomainError> {
        self.record(RepositoryCall::GetAll);
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        self.record(RepositoryCall::GetById(*id));
        self.inner.get_by_id(id).await
    }

    async fn add(&self, customer: &Customer) -> Result<Customer, DomainError> {
        self.record(RepositoryCall::Add(customer.clone()));
        self.inner.add(customer).await
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        self.record(RepositoryCall::Update(customer.clone()));
        self.inner.update(customer).await
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
        self.record(RepositoryCall::Delete(*id));
        self.inner.delete(id).await
    }

    async fn email_exists(
        &self,
        email: Option<&str>,
        exclude_id: Option<&CustomerId>,
    ) -> Result<bool, DomainError> {
        self.record(RepositoryCall::EmailExists(
            email.map(str::to_string),
            exclude_id.copied(),
        ));
        self.inner.email_exists(email, exclude_id).await
    }
}

// ============================================================================
// Recording List View
// ============================================================================

pub struct RecordingListView {
    events: EventHub<ListViewEvent>,
    shown: RwLock<Vec<Vec<Customer>>>,
    errors: RwLock<Vec<String>>,
    successes: RwLock<Vec<String>>,
    loading: RwLock<Vec<bool>>,
    selected: RwLock<Option<Customer>>,
    confirm: RwLock<bool>,
    confirm_prompts: RwLock<Vec<String>>,
}

impl Default for RecordingListView {
    fn default() -> Self {
        Self {
            events: EventHub::new(),
            shown: RwLock::new(Vec::new()),
            errors: RwLock::new(Vec::new()),
            successes: RwLock::new(Vec::new()),
            loading: RwLock::new(Vec::new()),
            selected: RwLock::new(None),
            confirm: RwLock::new(true),
            confirm_prompts: RwLock::new(Vec::new()),
        }
    }
}

impl RecordingListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, customer: Option<Customer>) {
        *self.selected.write().unwrap() = customer;
    }

    /// Answer for the next delete confirmations
    pub fn confirming(&self, answer: bool) {
        *self.confirm.write().unwrap() = answer;
    }

    pub fn last_shown(&self) -> Option<Vec<Customer>> {
        self.shown.read().unwrap().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.read().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.read().unwrap().clone()
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.loading.read().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.read().unwrap().last().copied().unwrap_or(false)
    }

    pub fn confirm_prompts(&self) -> Vec<String> {
        self.confirm_prompts.read().unwrap().clone()
    }
}

impl CustomerListView for RecordingListView {
    fn show_customers(&self, customers: &[Customer]) {
        self.shown.write().unwrap().push(customers.to_vec());
    }

    fn show_error(&self, message: &str) {
        self.errors.write().unwrap().push(message.to_string());
    }

    fn show_success(&self, message: &str) {
        self.successes.write().unwrap().push(message.to_string());
    }

    fn confirm_delete(&self, customer_name: &str) -> bool {
        self.confirm_prompts
            .write()
            .unwrap()
            .push(customer_name.to_string());
        *self.confirm.read().unwrap()
    }

    fn selected_customer(&self) -> Option<Customer> {
        self.selected.read().unwrap().clone()
    }

    fn set_loading(&self, loading: bool) {
        self.loading.write().unwrap().push(loading);
    }

    fn events(&self) -> &EventHub<ListViewEvent> {
        &self.events
    }
}

// ============================================================================
// Recording Edit View
// ============================================================================

pub struct RecordingEditView {
    events: EventHub<EditViewEvent>,
    edit_mode: RwLock<bool>,
    input: RwLock<Customer>,
    displayed: RwLock<Option<Customer>>,
    field_errors: RwLock<Vec<(CustomerField, String)>>,
    errors: RwLock<Vec<String>>,
    successes: RwLock<Vec<String>>,
    loading: RwLock<Vec<bool>>,
    clear_count: RwLock<usize>,
    close_count: RwLock<usize>,
}

impl Default for RecordingEditView {
    fn default() -> Self {
        Self {
            events: EventHub::new(),
            edit_mode: RwLock::new(false),
            input: RwLock::new(Customer::default()),
            displayed: RwLock::new(None),
            field_errors: RwLock::new(Vec::new()),
            errors: RwLock::new(Vec::new()),
            successes: RwLock::new(Vec::new()),
            loading: RwLock::new(Vec::new()),
            clear_count: RwLock::new(0),
            close_count: RwLock::new(0),
        }
    }
}

impl RecordingEditView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the operator typing `customer` into the form
    pub fn enter(&self, customer: Customer) {
        *self.input.write().unwrap() = customer;
    }

    pub fn displayed(&self) -> Option<Customer> {
        self.displayed.read().unwrap().clone()
    }

    pub fn field_errors(&self) -> Vec<(CustomerField, String)> {
        self.field_errors.read().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.read().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.read().unwrap().clone()
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.loading.read().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        *self.clear_count.read().unwrap()
    }

    pub fn close_count(&self) -> usize {
        *self.close_count.read().unwrap()
    }
}

impl CustomerEditView for RecordingEditView {
    fn is_edit_mode(&self) -> bool {
        *self.edit_mode.read().unwrap()
    }

    fn set_edit_mode(&self, edit_mode: bool) {
        *self.edit_mode.write().unwrap() = edit_mode;
    }

    fn set_customer(&self, customer: &Customer) {
        *self.displayed.write().unwrap() = Some(customer.clone());
    }

    fn customer(&self) -> Customer {
        self.input.read().unwrap().clone()
    }

    fn show_error(&self, message: &str) {
        self.errors.write().unwrap().push(message.to_string());
    }

    fn show_success(&self, message: &str) {
        self.successes.write().unwrap().push(message.to_string());
    }

    fn show_field_error(&self, field: CustomerField, message: &str) {
        self.field_errors
            .write()
            .unwrap()
            .push((field, message.to_string()));
    }

    fn clear_errors(&self) {
        self.field_errors.write().unwrap().clear();
        self.errors.write().unwrap().clear();
        *self.clear_count.write().unwrap() += 1;
    }

    fn set_loading(&self, loading: bool) {
        self.loading.write().unwrap().push(loading);
    }

    fn close_dialog(&self) {
        *self.close_count.write().unwrap() += 1;
    }

    fn events(&self) -> &EventHub<EditViewEvent> {
        &self.events
    }
}

// ============================================================================
// Mock Customer Editor
// ============================================================================

pub struct MockCustomerEditor {
    /// `None` makes the editor fail
    outcome: RwLock<Option<EditOutcome>>,
    requests: RwLock<Vec<Option<Customer>>>,
}

impl Default for MockCustomerEditor {
    fn default() -> Self {
        Self {
            outcome: RwLock::new(Some(EditOutcome::Cancelled)),
            requests: RwLock::new(Vec::new()),
        }
    }
}

impl MockCustomerEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(&self, outcome: EditOutcome) {
        *self.outcome.write().unwrap() = Some(outcome);
    }

    pub fn failing(&self) {
        *self.outcome.write().unwrap() = None;
    }

    pub fn requests(&self) -> Vec<Option<Customer>> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl CustomerEditor for MockCustomerEditor {
    async fn edit(&self, customer: Option<Customer>) -> Result<EditOutcome, DomainError> {
        self.requests.write().unwrap().push(customer);
        let outcome = *self.outcome.read().unwrap();
        outcome.ok_or_else(|| DomainError::Database("editor failed".to_string()))
    }
}

// ============================================================================
// Shared output buffer
// ============================================================================

/// Writer that keeps everything written to it for later inspection
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
