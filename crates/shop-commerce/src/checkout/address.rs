//! Checkout address.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// The checkout form's address fields, used for both billing and
/// shipping. Validation mirrors the storefront's form rules; anything
/// stricter is the backend's call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address_1: String,
    pub country: String,
    pub postcode: String,
    pub phone: String,
}

impl Address {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validate the form rules, naming the first offending field.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.first_name.trim().len() < 2 {
            return Err(field_error("first_name", "must be at least 2 characters"));
        }
        if self.last_name.trim().len() < 2 {
            return Err(field_error("last_name", "must be at least 2 characters"));
        }
        if !is_plausible_email(&self.email) {
            return Err(field_error("email", "must be a valid email address"));
        }
        if self.address_1.trim().len() < 5 {
            return Err(field_error("address_1", "must be at least 5 characters"));
        }
        if self.country.trim().len() < 2 {
            return Err(field_error("country", "is required"));
        }
        if !is_valid_postcode(&self.postcode) {
            return Err(field_error("postcode", "must be a valid postal code"));
        }
        if !is_valid_phone(&self.phone) {
            return Err(field_error("phone", "must be a valid phone number"));
        }
        Ok(())
    }
}

fn field_error(field: &str, problem: &str) -> CommerceError {
    CommerceError::Validation(format!("{} {}", field, problem))
}

fn is_plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Five digits, optionally followed by a dash and four more.
fn is_valid_postcode(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Digits plus common separators, at least 10 characters.
fn is_valid_phone(s: &str) -> bool {
    s.len() >= 10
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}
