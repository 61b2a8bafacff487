use async_graphql::MergedObject;
mod clients;

#[derive(MergedObject, Default)]
pub struct Mutations(clients::ClientMutation);
