//! View port traits
//!
//! Contracts a front end implements to be driven by a presenter. Methods are
//! synchronous; a view that must marshal onto a UI thread does so itself.

use async_trait::async_trait;

use super::events::EventHub;
use crate::domain::entities::{Customer, CustomerField};
use crate::error::DomainError;

/// Intents raised by the customer list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListViewEvent {
    LoadRequested,
    AddNewRequested,
    EditRequested,
    DeleteRequested,
    RefreshRequested,
    SearchRequested { keyword: String },
}

/// Intents raised by the customer edit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditViewEvent {
    SaveRequested,
    CancelRequested,
}

/// How an edit dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Cancelled,
}

/// Customer list screen
pub trait CustomerListView: Send + Sync {
    fn show_customers(&self, customers: &[Customer]);

    fn show_error(&self, message: &str);

    fn show_success(&self, message: &str);

    /// Ask the operator to confirm deleting `customer_name`
    fn confirm_delete(&self, customer_name: &str) -> bool;

    /// The customer currently selected, if any
    fn selected_customer(&self) -> Option<Customer>;

    /// Disable or re-enable the screen's actions
    fn set_loading(&self, loading: bool);

    fn events(&self) -> &EventHub<ListViewEvent>;
}

/// Customer create/edit dialog
pub trait CustomerEditView: Send + Sync {
    fn is_edit_mode(&self) -> bool;

    fn set_edit_mode(&self, edit_mode: bool);

    /// Populate the form with an existing customer
    fn set_customer(&self, customer: &Customer);

    /// Read the customer currently entered in the form
    fn customer(&self) -> Customer;

    fn show_error(&self, message: &str);

    fn show_success(&self, message: &str);

    fn show_field_error(&self, field: CustomerField, message: &str);

    /// Clear every field and general error shown so far
    fn clear_errors(&self);

    fn set_loading(&self, loading: bool);

    fn close_dialog(&self);

    fn events(&self) -> &EventHub<EditViewEvent>;
}

/// Opens the edit flow on behalf of the list screen
#[async_trait]
pub trait CustomerEditor: Send + Sync {
    /// Run the edit flow for `customer`, or for a new record when `None`
    async fn edit(&self, customer: Option<Customer>) -> Result<EditOutcome, DomainError>;
}
