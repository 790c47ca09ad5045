//! Customer domain entity
//!
//! Represents a person's contact record managed by the operator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned identifier for a customer.
///
/// `CustomerId::UNASSIGNED` marks a record that has not been persisted yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CustomerId(pub i32);

impl CustomerId {
    pub const UNASSIGNED: CustomerId = CustomerId(0);

    /// Whether storage has assigned this id
    pub fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(id) if id > 0 => Ok(CustomerId(id)),
            _ => Err(format!("Invalid customer id: {}", s)),
        }
    }
}

/// Editable customer fields, used to key validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    Name,
    Kana,
    PhoneNumber,
    Email,
}

impl CustomerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerField::Name => "name",
            CustomerField::Kana => "kana",
            CustomerField::PhoneNumber => "phone_number",
            CustomerField::Email => "email",
        }
    }

    /// Human-readable label for prompts and messages
    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::Name => "Name",
            CustomerField::Kana => "Kana",
            CustomerField::PhoneNumber => "Phone number",
            CustomerField::Email => "Email",
        }
    }
}

impl std::fmt::Display for CustomerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CustomerField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(CustomerField::Name),
            "kana" => Ok(CustomerField::Kana),
            "phone_number" | "phonenumber" | "phone" => Ok(CustomerField::PhoneNumber),
            "email" => Ok(CustomerField::Email),
            _ => Err(format!("Unknown customer field: {}", s)),
        }
    }
}

/// A customer contact record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Phonetic reading of the name
    pub kana: Option<String>,
    pub phone_number: Option<String>,
    pub email: String,
    /// Set once when the record is first persisted
    pub created_at: Option<DateTime<Utc>>,
    /// Refreshed on every successful write
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Build an unsaved customer from the two required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_kana(mut self, kana: impl Into<String>) -> Self {
        self.kana = Some(kana.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Case-insensitive keyword match over name, email and kana
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return false;
        }

        self.name.to_lowercase().contains(&keyword)
            || self.email.to_lowercase().contains(&keyword)
            || self
                .kana
                .as_deref()
                .is_some_and(|kana| kana.to_lowercase().contains(&keyword))
    }
}

/// Timestamp for a write that replaces `previous`.
///
/// Always strictly later than `previous`, even when the clock has not moved
/// since the last write.
pub fn next_write_time(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(previous) if now <= previous => previous + chrono::Duration::microseconds(1),
        _ => now,
    }
}
