//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod events;
pub mod repositories;
pub mod views;

pub use events::{EventHub, Subscription, SubscriptionId};
pub use repositories::CustomerRepository;
pub use views::{
    CustomerEditView, CustomerEditor, CustomerListView, EditOutcome, EditViewEvent, ListViewEvent,
};
