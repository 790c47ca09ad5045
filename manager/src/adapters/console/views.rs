//! Console implementations of the view ports

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::terminal::Console;
use crate::app::{lock, messages};
use crate::domain::entities::{Customer, CustomerField};
use crate::domain::ports::{
    CustomerEditView, CustomerListView, EditViewEvent, EventHub, ListViewEvent,
};

const PHONE_NOT_SET: &str = "(not set)";

/// Typed at a field prompt to clear an optional value
const CLEAR_FIELD: &str = "-";

// ============================================================================
// List view
// ============================================================================

pub struct ConsoleListView {
    console: Arc<Console>,
    events: EventHub<ListViewEvent>,
    selected: Mutex<Option<Customer>>,
    empty_message: Mutex<&'static str>,
}

impl ConsoleListView {
    pub fn new(console: Arc<Console>) -> Self {
        Self {
            console,
            events: EventHub::new(),
            selected: Mutex::new(None),
            empty_message: Mutex::new(messages::NO_CUSTOMERS),
        }
    }

    /// Choose the customer the next edit or delete applies to
    pub fn select(&self, customer: Option<Customer>) {
        *lock(&self.selected) = customer;
    }

    /// Line printed instead of a table when there is nothing to show
    pub fn set_empty_message(&self, message: &'static str) {
        *lock(&self.empty_message) = message;
    }
}

impl CustomerListView for ConsoleListView {
    fn show_customers(&self, customers: &[Customer]) {
        if customers.is_empty() {
            self.console.println(*lock(&self.empty_message));
            return;
        }

        self.console.print(&render_table(customers));
        self.console.println(&messages::customer_count(customers.len()));
    }

    fn show_error(&self, message: &str) {
        self.console.println(&format!("Error: {}", message));
    }

    fn show_success(&self, message: &str) {
        self.console.println(message);
    }

    fn confirm_delete(&self, customer_name: &str) -> bool {
        self.console.confirm(&messages::confirm_delete(customer_name))
    }

    fn selected_customer(&self) -> Option<Customer> {
        lock(&self.selected).clone()
    }

    fn set_loading(&self, loading: bool) {
        tracing::trace!(loading, "List view loading state changed");
    }

    fn events(&self) -> &EventHub<ListViewEvent> {
        &self.events
    }
}

/// Render customers as an aligned ID / Name / Email / Phone table
pub fn render_table(customers: &[Customer]) -> String {
    let header = ["ID", "Name", "Email", "Phone"];
    let rows: Vec<[String; 4]> = customers
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.email.clone(),
                c.phone_number
                    .clone()
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| PHONE_NOT_SET.to_string()),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        format!("{}\n", padded.join(" | ").trim_end())
    };

    let mut table = format_row(header);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    table.push_str(&format!("{}\n", rule.join("-+-")));
    for row in &rows {
        table.push_str(&format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    table
}

// ============================================================================
// Edit view
// ============================================================================

pub struct ConsoleEditView {
    console: Arc<Console>,
    events: EventHub<EditViewEvent>,
    edit_mode: AtomicBool,
    /// Values offered as defaults at the next form prompt
    form: Mutex<Customer>,
    closed: AtomicBool,
}

impl ConsoleEditView {
    pub fn new(console: Arc<Console>) -> Self {
        Self {
            console,
            events: EventHub::new(),
            edit_mode: AtomicBool::new(false),
            form: Mutex::new(Customer::default()),
            closed: AtomicBool::new(false),
        }
    }

    /// Prompt for every field, keeping the current value on an empty answer.
    ///
    /// Returns false if input ran out before the form was complete.
    pub fn fill_form(&self) -> bool {
        let mut form = lock(&self.form).clone();

        let Some(name) = self.prompt_required(CustomerField::Name, &form.name) else {
            return false;
        };
        let Some(kana) = self.prompt_optional(CustomerField::Kana, form.kana.as_deref()) else {
            return false;
        };
        let Some(phone_number) =
            self.prompt_optional(CustomerField::PhoneNumber, form.phone_number.as_deref())
        else {
            return false;
        };
        let Some(email) = self.prompt_required(CustomerField::Email, &form.email) else {
            return false;
        };

        form.name = name;
        form.kana = kana;
        form.phone_number = phone_number;
        form.email = email;
        *lock(&self.form) = form;
        true
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn prompt_required(&self, field: CustomerField, current: &str) -> Option<String> {
        let answer = self.console.prompt(&field_label(field, Some(current)))?;
        Some(match answer.as_str() {
            "" => current.to_string(),
            CLEAR_FIELD => String::new(),
            _ => answer,
        })
    }

    fn prompt_optional(
        &self,
        field: CustomerField,
        current: Option<&str>,
    ) -> Option<Option<String>> {
        let answer = self.console.prompt(&field_label(field, current))?;
        Some(match answer.as_str() {
            "" => current.map(str::to_string),
            CLEAR_FIELD => None,
            _ => Some(answer),
        })
    }
}

fn field_label(field: CustomerField, current: Option<&str>) -> String {
    match current.filter(|value| !value.is_empty()) {
        Some(value) => format!("{} [{}]: ", field.label(), value),
        None => format!("{}: ", field.label()),
    }
}

impl CustomerEditView for ConsoleEditView {
    fn is_edit_mode(&self) -> bool {
        self.edit_mode.load(Ordering::SeqCst)
    }

    fn set_edit_mode(&self, edit_mode: bool) {
        self.edit_mode.store(edit_mode, Ordering::SeqCst);
    }

    fn set_customer(&self, customer: &Customer) {
        *lock(&self.form) = customer.clone();
    }

    fn customer(&self) -> Customer {
        let form = lock(&self.form);
        Customer {
            name: form.name.clone(),
            kana: form.kana.clone(),
            phone_number: form.phone_number.clone(),
            email: form.email.clone(),
            ..Default::default()
        }
    }

    fn show_error(&self, message: &str) {
        self.console.println(&format!("Error: {}", message));
    }

    fn show_success(&self, message: &str) {
        self.console.println(message);
    }

    fn show_field_error(&self, field: CustomerField, message: &str) {
        self.console
            .println(&format!("  {}: {}", field.label(), message));
    }

    fn clear_errors(&self) {}

    fn set_loading(&self, loading: bool) {
        if loading {
            self.console.println("Saving...");
        }
    }

    fn close_dialog(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn events(&self) -> &EventHub<EditViewEvent> {
        &self.events
    }
}
