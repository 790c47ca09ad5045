//! Customer list presenter
//!
//! Handles the list screen's load, refresh, search, add, edit and delete
//! intents. One intent runs at a time; intents that arrive while another is in
//! flight are dropped.

use std::sync::Arc;

use super::messages;
use crate::domain::entities::Customer;
use crate::domain::ports::{
    CustomerEditor, CustomerListView, CustomerRepository, EditOutcome, ListViewEvent,
    Subscription,
};
use crate::error::DomainError;

/// Presenter for the customer list screen
pub struct CustomerListPresenter<V, R, E>
where
    V: CustomerListView,
    R: CustomerRepository,
    E: CustomerEditor,
{
    view: Arc<V>,
    repository: Arc<R>,
    editor: Arc<E>,
    busy: tokio::sync::Mutex<()>,
    subscription: Option<Subscription<ListViewEvent>>,
}

impl<V, R, E> CustomerListPresenter<V, R, E>
where
    V: CustomerListView,
    R: CustomerRepository,
    E: CustomerEditor,
{
    /// Create the presenter and subscribe to the view's events
    pub fn new(view: Arc<V>, repository: Arc<R>, editor: Arc<E>) -> Self {
        let subscription = view.events().subscribe();

        Self {
            view,
            repository,
            editor,
            busy: tokio::sync::Mutex::new(()),
            subscription: Some(subscription),
        }
    }

    /// Initial load when the screen opens
    pub async fn initialize(&self) {
        self.handle(ListViewEvent::LoadRequested).await;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub async fn handle(&self, event: ListViewEvent) {
        let Ok(_guard) = self.busy.try_lock() else {
            tracing::warn!("Ignoring {:?}: another operation is in progress", event);
            return;
        };

        match event {
            ListViewEvent::LoadRequested | ListViewEvent::RefreshRequested => {
                self.load_customers().await
            }
            ListViewEvent::AddNewRequested => self.open_editor(None).await,
            ListViewEvent::EditRequested => self.edit_selected().await,
            ListViewEvent::DeleteRequested => self.delete_selected().await,
            ListViewEvent::SearchRequested { keyword } => self.search(&keyword).await,
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

    /// Handle events until the presenter is disposed
    pub async fn run(&mut self) {
        loop {
            let next = match self.subscription.as_mut() {
                Some(subscription) => subscription.recv().await,
                None => None,
            };
            let Some(event) = next else {
                break;
            };
            self.handle(event).await;
        }
    }

    /// Unsubscribe from the view. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.view.events().unsubscribe(subscription.id());
        }
    }

    fn next_pending(&mut self) -> Option<ListViewEvent> {
        self.subscription.as_mut()?.try_recv()
    }

    async fn load_customers(&self) {
        self.view.set_loading(true);

        match self.repository.get_all().await {
            Ok(customers) => {
                tracing::debug!("Loaded {} customers", customers.len());
                self.view.show_customers(&customers);
            }
            Err(e) => self.report_load_error(e),
        }

        self.view.set_loading(false);
    }

    async fn search(&self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.view.show_error(messages::SEARCH_KEYWORD_REQUIRED);
            return;
        }

        self.view.set_loading(true);

        match self.repository.get_all().await {
            Ok(customers) => {
                let hits: Vec<Customer> =
                    customers.into_iter().filter(|c| c.matches(keyword)).collect();
                tracing::debug!("Search {:?} matched {} customers", keyword, hits.len());
                self.view.show_customers(&hits);
            }
            Err(e) => self.report_load_error(e),
        }

        self.view.set_loading(false);
    }

    async fn edit_selected(&self) {
        let Some(customer) = self.view.selected_customer() else {
            self.view.show_error(messages::SELECT_CUSTOMER_TO_EDIT);
            return;
        };

        self.open_editor(Some(customer)).await;
    }

    async fn open_editor(&self, customer: Option<Customer>) {
        match self.editor.edit(customer).await {
            Ok(EditOutcome::Saved) => self.load_customers().await,
            Ok(EditOutcome::Cancelled) => {}
            Err(e) => {
                tracing::error!("Edit flow failed: {}", e);
                self.view.show_error(messages::SAVE_FAILED);
            }
        }
    }

    async fn delete_selected(&self) {
        let Some(customer) = self.view.selected_customer() else {
            self.view.show_error(messages::SELECT_CUSTOMER_TO_DELETE);
            return;
        };

        if !self.view.confirm_delete(&customer.name) {
            tracing::debug!("Delete of customer {} declined", customer.id);
            return;
        }

        self.view.set_loading(true);

        match self.repository.delete(&customer.id).await {
            Ok(true) => {
                tracing::info!("Deleted customer {}", customer.id);
                self.view.show_success(messages::CUSTOMER_DELETED);
                self.load_customers().await;
            }
            Ok(false) => {
                tracing::warn!("Customer {} was already gone", customer.id);
                self.view.show_error(messages::DELETE_FAILED);
            }
            Err(e) => {
                tracing::error!("Failed to delete customer {}: {}", customer.id, e);
                self.view.show_error(messages::DELETE_FAILED);
            }
        }

        self.view.set_loading(false);
    }

    fn report_load_error(&self, error: DomainError) {
        match error {
            DomainError::Timeout(detail) => {
                tracing::warn!("Loading customers timed out: {}", detail);
                self.view.show_error(messages::LOAD_TIMED_OUT);
            }
            e => {
                tracing::error!("Failed to load customers: {}", e);
                self.view.show_error(messages::LOAD_FAILED);
            }
        }
    }
}

impl<V, R, E> Drop for CustomerListPresenter<V, R, E>
where
    V: CustomerListView,
    R: CustomerRepository,
    E: CustomerEditor,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
