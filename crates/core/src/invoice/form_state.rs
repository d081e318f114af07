use serde::{Deserialize, Serialize};

use super::FieldErrors;

pub const DELETED_INVOICE: &str = "Deleted Invoice.";

/// The mutation an invoice form performs. Drives the wording of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceAction {
    Create,
    Update,
    Delete,
}

impl InvoiceAction {
    fn verb(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

/// State handed back to an invoice form after a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(default)]
    pub message: Option<String>,
}

impl FormState {
    /// Validation failed: field errors plus a summary message.
    pub fn validation(errors: FieldErrors, action: InvoiceAction) -> Self {
        Self {
            errors,
            message: Some(format!(
                "Missing Fields. Failed to {} Invoice.",
                action.verb()
            )),
        }
    }

    /// The store rejected the statement. The cause is deliberately not exposed.
    pub fn database(action: InvoiceAction) -> Self {
        Self::message(format!(
            "Database Error: Failed to {} Invoice.",
            action.verb()
        ))
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::default(),
            message: Some(message.into()),
        }
    }
}
