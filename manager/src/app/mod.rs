//! Application layer
//!
//! Contains use cases and presenter orchestration.
//! Presenters coordinate between view ports, validation and the repository.

use std::sync::{Mutex, MutexGuard};

pub mod edit_presenter;
pub mod list_presenter;
pub mod messages;
pub mod validation_service;

pub use edit_presenter::CustomerEditPresenter;
pub use list_presenter::CustomerListPresenter;
#[allow(unused_imports)]
pub use validation_service::{ValidationResult, ValidationService};

/// Lock a presenter-owned mutex, recovering the data if a holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
