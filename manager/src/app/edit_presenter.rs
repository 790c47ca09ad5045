//! Customer edit presenter
//!
//! Drives the create/edit dialog: validate, check for a duplicate email,
//! create or update, then confirm and close.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::validation_service::ValidationService;
use super::{lock, messages};
use crate::domain::entities::{Customer, CustomerField};
use crate::domain::ports::{
    CustomerEditView, CustomerRepository, EditOutcome, EditViewEvent, Subscription,
};
use crate::error::DomainError;

/// Presenter for a single customer edit dialog
pub struct CustomerEditPresenter<V, R>
where
    V: CustomerEditView,
    R: CustomerRepository,
{
    view: Arc<V>,
    repository: Arc<R>,
    validation: ValidationService,
    success_delay: Duration,
    original: Mutex<Option<Customer>>,
    outcome: Mutex<Option<EditOutcome>>,
    busy: tokio::sync::Mutex<()>,
    subscription: Option<Subscription<EditViewEvent>>,
}

impl<V, R> CustomerEditPresenter<V, R>
where
    V: CustomerEditView,
    R: CustomerRepository,
{
    /// Create the presenter and subscribe to the view's events
    pub fn new(view: Arc<V>, repository: Arc<R>, success_delay: Duration) -> Self {
        let subscription = view.events().subscribe();

        Self {
            view,
            repository,
            validation: ValidationService::new(),
            success_delay,
            original: Mutex::new(None),
            outcome: Mutex::new(None),
            busy: tokio::sync::Mutex::new(()),
            subscription: Some(subscription),
        }
    }

    /// Set the customer being edited and show it in the view
    pub fn set_customer(&self, customer: Customer) {
        self.view.set_customer(&customer);
        *lock(&self.original) = Some(customer);
    }

    /// How the dialog was closed, once it has been
    pub fn outcome(&self) -> Option<EditOutcome> {
        *lock(&self.outcome)
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub async fn handle(&self, event: EditViewEvent) {
        match event {
            EditViewEvent::SaveRequested => self.save().await,
            EditViewEvent::CancelRequested => {
                tracing::debug!("Edit cancelled");
                self.finish(EditOutcome::Cancelled);
            }
        }
    }

    /// Handle every event the view has raised so far. Returns how many ran.
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.next_pending() {
            self.handle(event).await;
            handled += 1;
        }
        handled
    }

    /// Handle events until the dialog closes or the presenter is disposed
    pub async fn run(&mut self) -> EditOutcome {
        while self.outcome().is_none() {
            let next = match self.subscription.as_mut() {
                Some(subscription) => subscription.recv().await,
                None => None,
            };
            let Some(event) = next else {
                break;
            };
            self.handle(event).await;
        }

        self.outcome().unwrap_or(EditOutcome::Cancelled)
    }

    /// Unsubscribe from the view. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.view.events().unsubscribe(subscription.id());
        }
    }

    fn next_pending(&mut self) -> Option<EditViewEvent> {
        self.subscription.as_mut()?.try_recv()
    }

    async fn save(&self) {
        let Ok(_guard) = self.busy.try_lock() else {
            tracing::warn!("Save already in progress, ignoring request");
            return;
        };

        self.view.set_loading(true);
        self.view.clear_errors();

        match self.try_save().await {
            Ok(()) => {}
            // Lost a race with another writer after the duplicate pre-check
            Err(DomainError::AlreadyExists(detail)) => {
                tracing::warn!("Unique constraint rejected save: {}", detail);
                self.view
                    .show_field_error(CustomerField::Email, messages::EMAIL_DUPLICATE);
            }
            Err(e) => {
                tracing::error!("Failed to save customer: {}", e);
                self.view.show_error(messages::SAVE_FAILED);
            }
        }

        self.view.set_loading(false);
    }

    async fn try_save(&self) -> Result<(), DomainError> {
        let mut customer = self.view.customer();

        let validation = self.validation.validate(&customer);
        if !validation.is_valid() {
            tracing::debug!("Customer input rejected: {}", validation.summary());
            for (field, message) in validation.errors() {
                self.view.show_field_error(*field, message);
            }
            return Ok(());
        }

        let original = if self.view.is_edit_mode() {
            lock(&self.original).clone()
        } else {
            None
        };
        let exclude_id = original.as_ref().map(|c| c.id);

        if self
            .repository
            .email_exists(Some(&customer.email), exclude_id.as_ref())
            .await?
        {
            self.view
                .show_field_error(CustomerField::Email, messages::EMAIL_DUPLICATE);
            return Ok(());
        }

        let message = match original {
            Some(original) => {
                customer.id = original.id;
                customer.created_at = original.created_at;
                let saved = self.repository.update(&customer).await?;
                tracing::info!("Updated customer {}", saved.id);
                messages::CUSTOMER_UPDATED
            }
            None => {
                let saved = self.repository.add(&customer).await?;
                tracing::info!("Created customer {}", saved.id);
                messages::CUSTOMER_CREATED
            }
        };

        self.view.show_success(message);
        tokio::time::sleep(self.success_delay).await;
        self.finish(EditOutcome::Saved);

        Ok(())
    }

    fn finish(&self, outcome: EditOutcome) {
        *lock(&self.outcome) = Some(outcome);
        self.view.close_dialog();
    }
}

impl<V, R> Drop for CustomerEditPresenter<V, R>
where
    V: CustomerEditView,
    R: CustomerRepository,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
