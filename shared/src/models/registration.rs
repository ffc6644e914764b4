//! Registration Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Stored registration row (write-only from the site's perspective)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: String,
    pub message: Option<String>,
    pub registration_date: DateTime<Utc>,
}

impl Record for Registration {
    const TABLE: &'static str = "registrations";
}

/// Registration form payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub reason: String,
    pub message: Option<String>,
}

/// Row inserted into `registrations`
///
/// `id` and `registration_date` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: String,
    pub message: Option<String>,
}

impl From<RegistrationInput> for NewRegistration {
    fn from(input: RegistrationInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: non_empty(input.phone),
            reason: input.reason.trim().to_string(),
            message: non_empty(input.message),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optionals_become_null() {
        let row = NewRegistration::from(RegistrationInput {
            name: " Kavya ".into(),
            email: "kavya@vit.ac.in".into(),
            phone: Some("".into()),
            reason: "Second year".into(),
            message: Some("   ".into()),
        });
        assert_eq!(row.name, "Kavya");
        assert!(row.phone.is_none());
        assert!(row.message.is_none());

        let json = serde_json::to_value(&row).unwrap();
        assert!(json["phone"].is_null());
    }

    #[test]
    fn test_input_defaults_missing_fields() {
        let input: RegistrationInput = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert!(input.name.is_empty());
        assert!(input.reason.is_empty());
    }
}
