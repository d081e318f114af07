//! Invoice domain: types, form validation and money helpers.

mod form_state;
mod money;
mod types;
mod validation;

pub use form_state::{FormState, InvoiceAction, DELETED_INVOICE};
pub use money::{cents_to_dollars, dollars_to_cents, format_currency, MAX_AMOUNT_IN_CENTS};
pub use types::{Customer, Invoice, InvoiceStatus, InvoiceWithCustomer};
pub use validation::{
    validate_invoice_form, FieldErrors, InvoiceField, InvoiceForm, ValidInvoice,
    AMOUNT_GREATER_THAN_ZERO, SELECT_CUSTOMER, SELECT_STATUS,
};
