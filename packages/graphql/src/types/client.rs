use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(SimpleObject)]
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

impl From<models::Client> for Client {
    fn from(c: models::Client) -> Self {
        Client {
            id: c.id,
            company_name: c.company_name,
            contact_name: c.contact_name,
            email: c.email,
            phone: c.phone,
            tax_number: c.tax_number,
            amount: c.amount,
            created_at: c.created_at,
        }
    }
}
