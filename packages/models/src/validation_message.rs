use serde::{Deserialize, Serialize};

/// One server-reported error tied to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessage {
    pub field_id: String,
    pub error_msg: String,
}

impl ValidationMessage {
    pub fn new(field_id: impl Into<String>, error_msg: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            error_msg: error_msg.into(),
        }
    }
}
