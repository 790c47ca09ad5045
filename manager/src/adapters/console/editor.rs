//! Console edit flow
//!
//! Runs one edit dialog per request: a fresh view and presenter, a form
//! prompt, and a retry prompt after a rejected save.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::terminal::Console;
use super::views::ConsoleEditView;
use crate::app::CustomerEditPresenter;
use crate::domain::entities::Customer;
use crate::domain::ports::{
    CustomerEditView, CustomerEditor, CustomerRepository, EditOutcome, EditViewEvent,
};
use crate::error::DomainError;

pub struct ConsoleCustomerEditor<R: CustomerRepository> {
    console: Arc<Console>,
    repository: Arc<R>,
    success_delay: Duration,
}

impl<R: CustomerRepository> ConsoleCustomerEditor<R> {
    pub fn new(console: Arc<Console>, repository: Arc<R>, success_delay: Duration) -> Self {
        Self {
            console,
            repository,
            success_delay,
        }
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerEditor for ConsoleCustomerEditor<R> {
    async fn edit(&self, customer: Option<Customer>) -> Result<EditOutcome, DomainError> {
        let view = Arc::new(ConsoleEditView::new(self.console.clone()));
        let mut presenter =
            CustomerEditPresenter::new(view.clone(), self.repository.clone(), self.success_delay);

        match customer {
            Some(customer) => {
                self.console
                    .println(&format!("\nEdit customer #{} (Enter keeps, - clears)", customer.id));
                view.set_edit_mode(true);
                presenter.set_customer(customer);
            }
            None => self.console.println("\nNew customer"),
        }

        loop {
            let event = if view.fill_form() {
                EditViewEvent::SaveRequested
            } else {
                EditViewEvent::CancelRequested
            };
            view.events().raise(event);
            presenter.process_pending().await;

            if view.is_closed() {
                break;
            }
            if !self.console.confirm("Try again?") {
                view.events().raise(EditViewEvent::CancelRequested);
                presenter.process_pending().await;
                break;
            }
        }

        Ok(presenter.outcome().unwrap_or(EditOutcome::Cancelled))
    }
}
