use async_graphql::{EmptySubscription, Schema};
use repositories::ClientRepository;
use services::validation::ValidatorRegistry;

pub mod errors;
pub mod mutations;
pub mod queries;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

pub type AppSchema = Schema<queries::Queries, mutations::Mutations, EmptySubscription>;

/// Schema with the client store and the validation rules as shared data.
pub fn build_schema(repository: ClientRepository, registry: ValidatorRegistry) -> AppSchema {
    Schema::build(
        queries::Queries::default(),
        mutations::Mutations::default(),
        EmptySubscription,
    )
    .data(repository)
    .data(registry)
    .finish()
}
