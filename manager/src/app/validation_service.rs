//! Customer validation
//!
//! Field rules checked before anything touches storage. Uniqueness is not
//! checked here because it needs the repository.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::messages;
use crate::domain::entities::{Customer, CustomerField};

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_KANA_LEN: usize = 255;
pub const MAX_PHONE_NUMBER_LEN: usize = 20;
pub const MAX_EMAIL_LEN: usize = 255;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid email regex pattern")
});

static PHONE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\-()\s]+$").expect("Invalid phone number regex pattern"));

/// Outcome of validating a customer: one message per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<CustomerField, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<CustomerField, String> {
        &self.errors
    }

    pub fn error(&self, field: CustomerField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Join all messages, e.g. for a single-line summary
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn reject(&mut self, field: CustomerField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Stateless validator for customer input
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Check every field rule; errors accumulate across fields
    pub fn validate(&self, customer: &Customer) -> ValidationResult {
        let mut result = ValidationResult::default();

        validate_name(&customer.name, &mut result);
        validate_kana(customer.kana.as_deref(), &mut result);
        validate_phone_number(customer.phone_number.as_deref(), &mut result);
        validate_email(&customer.email, &mut result);

        result
    }
}

fn validate_name(name: &str, result: &mut ValidationResult) {
    if name.trim().is_empty() {
        result.reject(CustomerField::Name, messages::NAME_REQUIRED);
    } else if name.chars().count() > MAX_NAME_LEN {
        result.reject(CustomerField::Name, messages::NAME_TOO_LONG);
    }
}

fn validate_kana(kana: Option<&str>, result: &mut ValidationResult) {
    if kana.is_some_and(|kana| kana.chars().count() > MAX_KANA_LEN) {
        result.reject(CustomerField::Kana, messages::KANA_TOO_LONG);
    }
}

fn validate_phone_number(phone_number: Option<&str>, result: &mut ValidationResult) {
    // Optional field: blank is fine
    let Some(phone_number) = phone_number.filter(|p| !p.trim().is_empty()) else {
        return;
    };

    if !PHONE_NUMBER_PATTERN.is_match(phone_number) {
        result.reject(CustomerField::PhoneNumber, messages::PHONE_NUMBER_FORMAT);
    } else if phone_number.chars().count() > MAX_PHONE_NUMBER_LEN {
        result.reject(CustomerField::PhoneNumber, messages::PHONE_NUMBER_TOO_LONG);
    }
}

fn validate_email(email: &str, result: &mut ValidationResult) {
    if email.trim().is_empty() {
        result.reject(CustomerField::Email, messages::EMAIL_REQUIRED);
    } else if email.chars().count() > MAX_EMAIL_LEN {
        result.reject(CustomerField::Email, messages::EMAIL_TOO_LONG);
    } else if !EMAIL_PATTERN.is_match(email) {
        result.reject(CustomerField::Email, messages::EMAIL_FORMAT);
    }
}
