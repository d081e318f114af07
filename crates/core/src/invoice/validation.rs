//! Invoice form validation.
//!
//! Every field of a submitted form arrives in one of three states: absent,
//! present but invalid, or valid. Validation checks all fields and collects a
//! message per failing field, so the form can show every problem at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{dollars_to_cents, InvoiceStatus};

pub const SELECT_CUSTOMER: &str = "Please select a customer.";
pub const AMOUNT_GREATER_THAN_ZERO: &str = "Please enter an amount greater than $0.";
pub const SELECT_STATUS: &str = "Please select an invoice status.";

/// Raw invoice form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
    #[serde(default, rename = "customerId", alias = "customer_id")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Form fields that can carry validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceField {
    CustomerId,
    Amount,
    Status,
}

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<InvoiceField, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: InvoiceField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: InvoiceField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: InvoiceField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A form that passed validation, ready to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidInvoice {
    pub customer_id: Uuid,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

/// Validates a submitted invoice form.
///
/// The amount is read as dollars and converted to cents. Returns every field
/// error found, never just the first one.
pub fn validate_invoice_form(form: &InvoiceForm) -> Result<ValidInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = parse_customer_id(form.customer_id.as_deref());
    if customer_id.is_none() {
        errors.add(InvoiceField::CustomerId, SELECT_CUSTOMER);
    }

    let amount_in_cents = parse_amount(form.amount.as_deref());
    if amount_in_cents.is_none() {
        errors.add(InvoiceField::Amount, AMOUNT_GREATER_THAN_ZERO);
    }

    let status = form.status.as_deref().and_then(InvoiceStatus::parse);
    if status.is_none() {
        errors.add(InvoiceField::Status, SELECT_STATUS);
    }

    match (customer_id, amount_in_cents, status) {
        (Some(customer_id), Some(amount_in_cents), Some(status)) => Ok(ValidInvoice {
            customer_id,
            amount_in_cents,
            status,
        }),
        _ => Err(errors),
    }
}

fn parse_customer_id(raw: Option<&str>) -> Option<Uuid> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

/// Amount in cents, only when strictly positive after rounding and
/// no larger than [`MAX_AMOUNT_IN_CENTS`](super::MAX_AMOUNT_IN_CENTS).
fn parse_amount(raw: Option<&str>) -> Option<i64> {
    let dollars: f64 = raw?.trim().parse().ok()?;
    if dollars <= 0.0 {
        return None;
    }
    dollars_to_cents(dollars).filter(|cents| *cents > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::MAX_AMOUNT_IN_CENTS;

    const CUSTOMER: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";

    fn form(customer_id: Option<&str>, amount: Option<&str>, status: Option<&str>) -> InvoiceForm {
        InvoiceForm {
            customer_id: customer_id.map(String::from),
            amount: amount.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let valid = validate_invoice_form(&form(Some(CUSTOMER), Some("157.95"), Some("paid")))
            .expect("form should validate");

        assert_eq!(valid.customer_id, Uuid::parse_str(CUSTOMER).unwrap());
        assert_eq!(valid.amount_in_cents, 15_795);
        assert_eq!(valid.status, InvoiceStatus::Paid);
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_invoice_form(&InvoiceForm::default()).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(InvoiceField::CustomerId),
            Some(&[SELECT_CUSTOMER.to_string()][..])
        );
        assert_eq!(
            errors.get(InvoiceField::Amount),
            Some(&[AMOUNT_GREATER_THAN_ZERO.to_string()][..])
        );
        assert_eq!(
            errors.get(InvoiceField::Status),
            Some(&[SELECT_STATUS.to_string()][..])
        );
    }

    #[test]
    fn zero_amount_is_rejected() {
        let errors =
            validate_invoice_form(&form(Some(CUSTOMER), Some("0"), Some("pending"))).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains(InvoiceField::Amount));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let errors =
            validate_invoice_form(&form(Some(CUSTOMER), Some("-12.5"), Some("pending")))
                .unwrap_err();
        assert!(errors.contains(InvoiceField::Amount));
    }

    #[test]
    fn amount_rounding_to_zero_cents_is_rejected() {
        let errors =
            validate_invoice_form(&form(Some(CUSTOMER), Some("0.001"), Some("pending")))
                .unwrap_err();
        assert!(errors.contains(InvoiceField::Amount));
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        for amount in ["", "   ", "abc", "NaN", "inf", "12,50"] {
            let errors =
                validate_invoice_form(&form(Some(CUSTOMER), Some(amount), Some("paid")))
                    .unwrap_err();
            assert!(
                errors.contains(InvoiceField::Amount),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn amount_is_trimmed_before_parsing() {
        let valid =
            validate_invoice_form(&form(Some(CUSTOMER), Some(" 20 "), Some("paid"))).unwrap();
        assert_eq!(valid.amount_in_cents, 2_000);
    }

    #[test]
    fn exponent_amounts_within_range_are_accepted() {
        let valid =
            validate_invoice_form(&form(Some(CUSTOMER), Some("1.5e3"), Some("paid"))).unwrap();
        assert_eq!(valid.amount_in_cents, 150_000);

        let valid =
            validate_invoice_form(&form(Some(CUSTOMER), Some("1e9"), Some("paid"))).unwrap();
        assert_eq!(valid.amount_in_cents, MAX_AMOUNT_IN_CENTS);
    }

    #[test]
    fn huge_amounts_are_rejected() {
        for amount in ["1e300", "1e10", "1000000000.01", "9223372036854775807"] {
            let errors =
                validate_invoice_form(&form(Some(CUSTOMER), Some(amount), Some("paid")))
                    .unwrap_err();
            assert_eq!(errors.len(), 1, "amount {amount:?}");
            assert_eq!(
                errors.get(InvoiceField::Amount),
                Some(&[AMOUNT_GREATER_THAN_ZERO.to_string()][..]),
                "amount {amount:?}"
            );
        }
    }

    #[test]
    fn blank_or_malformed_customer_is_rejected() {
        for customer in ["", "  ", "not-a-uuid"] {
            let errors =
                validate_invoice_form(&form(Some(customer), Some("10"), Some("paid")))
                    .unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(InvoiceField::CustomerId));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let errors =
            validate_invoice_form(&form(Some(CUSTOMER), Some("10"), Some("overdue"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(InvoiceField::Status));
    }

    #[test]
    fn field_errors_serialize_with_form_field_names() {
        let errors = validate_invoice_form(&InvoiceForm::default()).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json["customerId"][0], SELECT_CUSTOMER);
        assert_eq!(json["amount"][0], AMOUNT_GREATER_THAN_ZERO);
        assert_eq!(json["status"][0], SELECT_STATUS);
    }

    #[test]
    fn form_accepts_snake_case_customer_field() {
        let json = r#"{"customer_id": "3958dc9e-712f-4377-85e9-fec4b6a6442a", "amount": "1", "status": "paid"}"#;
        let parsed: InvoiceForm = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.customer_id.as_deref(), Some(CUSTOMER));
    }
}
