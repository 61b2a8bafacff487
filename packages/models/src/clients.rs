use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fields;

/// Registration form payload. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistration {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub tax_number: String,
    pub amount: String,
}

impl ClientRegistration {
    /// Value of the field identified by `key`, if the form has such a field.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            fields::COMPANY_NAME => Some(self.company_name.as_str()),
            fields::CONTACT_NAME => Some(self.contact_name.as_str()),
            fields::EMAIL => Some(self.email.as_str()),
            fields::PHONE => Some(self.phone.as_str()),
            fields::TAX_NUMBER => Some(self.tax_number.as_str()),
            fields::AMOUNT => Some(self.amount.as_str()),
            _ => None,
        }
    }

    /// Builds a registration from `(key, value)` pairs; missing keys stay empty
    /// and unknown keys are ignored.
    pub fn from_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut registration = Self::default();
        for (key, value) in values {
            let slot = match key {
                fields::COMPANY_NAME => &mut registration.company_name,
                fields::CONTACT_NAME => &mut registration.contact_name,
                fields::EMAIL => &mut registration.email,
                fields::PHONE => &mut registration.phone,
                fields::TAX_NUMBER => &mut registration.tax_number,
                fields::AMOUNT => &mut registration.amount,
                _ => continue,
            };
            *slot = value.to_string();
        }
        registration
    }
}

/// A registered client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tax_number: String,
    pub amount: String,
    pub created_at: DateTime<Utc>,
}
