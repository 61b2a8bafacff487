use crate::errors::ValidationFailed;
use crate::types::client::Client as ClientType;
use async_graphql::{Context, InputObject, Object, Result, Union};
use models::ClientRegistration;

mod register_client;

#[derive(Union)]
pub enum ClientMutationResult {
    Client(ClientType),
    ValidationFailed(ValidationFailed),
}

#[derive(InputObject)]
struct RegisterClientInput {
    company_name: String,
    contact_name: String,
    email: String,
    phone: Option<String>,
    tax_number: String,
    amount: String,
}

impl From<RegisterClientInput> for ClientRegistration {
    fn from(input: RegisterClientInput) -> Self {
        ClientRegistration {
            company_name: input.company_name,
            contact_name: input.contact_name,
            email: input.email,
            phone: input.phone.unwrap_or_default(),
            tax_number: input.tax_number,
            amount: input.amount,
        }
    }
}

#[derive(Default)]
pub struct ClientMutation;

#[Object]
impl ClientMutation {
    /// Validate and store a client registration. Field failures come back as
    /// `ValidationFailed` with one error per field.
    async fn register_client(
        &self,
        ctx: &Context<'_>,
        input: RegisterClientInput,
    ) -> Result<ClientMutationResult> {
        register_client::register_client(ctx, input).await
    }
}
