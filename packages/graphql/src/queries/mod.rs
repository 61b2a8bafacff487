use async_graphql::MergedObject;
mod clients;

#[derive(MergedObject, Default)]
pub struct Queries(clients::ClientQueries);
