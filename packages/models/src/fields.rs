//! Field keys of the client registration form.
//!
//! The same keys identify a field in the static rule registry, in
//! server-reported validation messages and in client-side form state.

pub const COMPANY_NAME: &str = "companyName";
pub const CONTACT_NAME: &str = "contactName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const TAX_NUMBER: &str = "taxNumber";
pub const AMOUNT: &str = "amount";

/// Registration form fields in display order.
pub const CLIENT_REGISTRATION: [&str; 6] =
    [COMPANY_NAME, CONTACT_NAME, EMAIL, PHONE, TAX_NUMBER, AMOUNT];
