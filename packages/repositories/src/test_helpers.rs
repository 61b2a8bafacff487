use models::ClientRegistration;
use uuid::Uuid;

pub fn generate_unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, Uuid::new_v4())
}

pub fn registration_with_email(email: &str) -> ClientRegistration {
    ClientRegistration {
        company_name: "Acme Ltd".to_string(),
        contact_name: "Jo Doe".to_string(),
        email: email.to_string(),
        phone: String::new(),
        tax_number: "123456789".to_string(),
        amount: "25000".to_string(),
    }
}
