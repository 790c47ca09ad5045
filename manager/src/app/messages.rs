//! User-facing messages
//!
//! Every string a presenter or front end shows to the operator lives here.

// Storage
pub const LOAD_FAILED: &str = "Failed to load customers. Check the database connection.";
pub const LOAD_TIMED_OUT: &str =
    "Loading customers timed out. Check that the database server is reachable.";
pub const SAVE_FAILED: &str = "An error occurred while saving the customer. Please try again.";
pub const DELETE_FAILED: &str = "An error occurred while deleting the customer.";

// Selection
pub const SELECT_CUSTOMER_TO_EDIT: &str = "Select a customer to edit.";
pub const SELECT_CUSTOMER_TO_DELETE: &str = "Select a customer to delete.";

// Validation
pub const EMAIL_DUPLICATE: &str = "This email address is already in use.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_TOO_LONG: &str = "Name must be 255 characters or fewer.";
pub const KANA_TOO_LONG: &str = "Kana must be 255 characters or fewer.";
pub const PHONE_NUMBER_TOO_LONG: &str = "Phone number must be 20 characters or fewer.";
pub const PHONE_NUMBER_FORMAT: &str =
    "Phone number may only contain digits, hyphens, parentheses and spaces.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_TOO_LONG: &str = "Email must be 255 characters or fewer.";
pub const EMAIL_FORMAT: &str = "Enter a valid email address.";

// Success
pub const CUSTOMER_CREATED: &str = "Customer created.";
pub const CUSTOMER_UPDATED: &str = "Customer updated.";
pub const CUSTOMER_DELETED: &str = "Customer deleted.";

// Search
pub const SEARCH_KEYWORD_REQUIRED: &str = "Enter a keyword to search for.";
pub const NO_CUSTOMERS: &str = "No customers registered.";
pub const NO_SEARCH_RESULTS: &str = "No matching customers found.";

/// Delete confirmation prompt for `name`
pub fn confirm_delete(name: &str) -> String {
    format!("Delete customer \"{}\"? This cannot be undone.", name)
}

/// Footer line for a customer listing
pub fn customer_count(count: usize) -> String {
    format!("Total: {} customer(s)", count)
}
