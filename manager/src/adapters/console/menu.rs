//! Interactive console menu
//!
//! The operator's entry point: list, add, edit, delete and search customers
//! through a numbered menu driving the list presenter.

use std::sync::Arc;
use std::time::Duration;

use super::editor::ConsoleCustomerEditor;
use super::terminal::Console;
use super::views::ConsoleListView;
use crate::app::{messages, CustomerListPresenter};
use crate::domain::entities::CustomerId;
use crate::domain::ports::{CustomerListView, CustomerRepository, ListViewEvent};

type ListPresenter<R> = CustomerListPresenter<ConsoleListView, R, ConsoleCustomerEditor<R>>;

pub struct ConsoleApp<R: CustomerRepository> {
    console: Arc<Console>,
    view: Arc<ConsoleListView>,
    repository: Arc<R>,
    presenter: ListPresenter<R>,
}

impl<R: CustomerRepository> ConsoleApp<R> {
    pub fn new(console: Arc<Console>, repository: Arc<R>, success_delay: Duration) -> Self {
        let view = Arc::new(ConsoleListView::new(console.clone()));
        let editor = Arc::new(ConsoleCustomerEditor::new(
            console.clone(),
            repository.clone(),
            success_delay,
        ));
        let presenter = CustomerListPresenter::new(view.clone(), repository.clone(), editor);

        Self {
            console,
            view,
            repository,
            presenter,
        }
    }

    /// Show the customer list, then serve menu choices until exit or end of input
    pub async fn run(&mut self) {
        self.console.println("=== Customer Manager ===");
        self.presenter.initialize().await;

        loop {
            self.print_menu();
            let Some(choice) = self.console.prompt("Select (0-5): ") else {
                break;
            };

            self.view.set_empty_message(messages::NO_CUSTOMERS);
            let event = match choice.as_str() {
                "0" => break,
                "1" => ListViewEvent::RefreshRequested,
                "2" => ListViewEvent::AddNewRequested,
                "3" => {
                    if !self.select_customer("ID of the customer to edit: ").await {
                        continue;
                    }
                    ListViewEvent::EditRequested
                }
                "4" => {
                    if !self.select_customer("ID of the customer to delete: ").await {
                        continue;
                    }
                    ListViewEvent::DeleteRequested
                }
                "5" => {
                    let keyword = self.console.prompt("Keyword: ").unwrap_or_default();
                    self.view.set_empty_message(messages::NO_SEARCH_RESULTS);
                    ListViewEvent::SearchRequested { keyword }
                }
                other => {
                    self.console
                        .println(&format!("Unknown choice {:?}, enter 0-5.", other));
                    continue;
                }
            };

            self.view.events().raise(event);
            self.presenter.process_pending().await;
        }

        self.presenter.dispose();
        self.console.println("Goodbye.");
    }

    fn print_menu(&self) {
        self.console.println("");
        self.console.println("1. List customers");
        self.console.println("2. Add customer");
        self.console.println("3. Edit customer");
        self.console.println("4. Delete customer");
        self.console.println("5. Search customers");
        self.console.println("0. Exit");
    }

    /// Resolve an entered id into the view's selection.
    ///
    /// Returns false when storage could not be read; an unknown or malformed
    /// id leaves nothing selected and lets the presenter report it.
    async fn select_customer(&self, label: &str) -> bool {
        let id = self
            .console
            .prompt(label)
            .and_then(|raw| raw.parse::<CustomerId>().ok());

        let selected = match id {
            Some(id) => match self.repository.get_by_id(&id).await {
                Ok(found) => found,
                Err(e) => {
                    tracing::error!("Failed to look up customer {}: {}", id, e);
                    self.view.show_error(messages::LOAD_FAILED);
                    return false;
                }
            },
            None => None,
        };

        self.view.select(selected);
        true
    }
}
