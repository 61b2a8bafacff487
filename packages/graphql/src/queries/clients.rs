use async_graphql::{Context, Object, Result};
use repositories::ClientRepository;
use services::validation::ValidatorRegistry;
use uuid::Uuid;

use crate::types::client::Client as ClientType;

#[derive(Default)]
pub struct ClientQueries;

#[Object]
impl ClientQueries {
    /// Registered clients, oldest first
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<ClientType>> {
        let repository = ctx.data::<ClientRepository>()?;
        Ok(repository.list().into_iter().map(ClientType::from).collect())
    }

    async fn client(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<ClientType>> {
        let repository = ctx.data::<ClientRepository>()?;
        Ok(repository.find_by_id(&id).map(ClientType::from))
    }

    async fn client_count(&self, ctx: &Context<'_>) -> Result<usize> {
        Ok(ctx.data::<ClientRepository>()?.count())
    }

    /// Field keys the server validates
    async fn form_fields(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let registry = ctx.data::<ValidatorRegistry>()?;
        Ok(registry.keys().into_iter().map(str::to_string).collect())
    }
}
