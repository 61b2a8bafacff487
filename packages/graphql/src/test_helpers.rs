use async_graphql::Request;
use models::ValidationMessage;
use repositories::ClientRepository;
use services::validation::ValidatorRegistry;
use uuid::Uuid;

use crate::AppSchema;

pub type TestSchema = AppSchema;

pub fn create_test_schema() -> (TestSchema, ClientRepository) {
    let repository = ClientRepository::new();
    let schema = crate::build_schema(repository.clone(), ValidatorRegistry::client_registration());
    (schema, repository)
}

pub fn generate_unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, Uuid::new_v4())
}

pub fn register_client_query(email: &str, tax_number: &str, amount: &str) -> String {
    format!(
        r#"mutation {{
            registerClient(input: {{
                companyName: "Acme Ltd",
                contactName: "Jo Doe",
                email: "{}",
                taxNumber: "{}",
                amount: "{}"
            }}) {{
                __typename
                ... on Client {{ id email phone }}
                ... on ValidationFailed {{ errors {{ fieldId errorMsg }} }}
            }}
        }}"#,
        email, tax_number, amount
    )
}

/// Runs a query that must succeed and returns its data as JSON.
pub async fn execute_json(schema: &TestSchema, query: &str) -> serde_json::Value {
    let res = schema.execute(Request::new(query)).await;
    assert!(res.errors.is_empty(), "unexpected errors: {:?}", res.errors);
    res.data.into_json().unwrap()
}

/// Field errors of a `ValidationFailed` result, in the backend's wire format.
pub fn field_errors(result: &serde_json::Value) -> Vec<ValidationMessage> {
    serde_json::from_value(result["errors"].clone()).unwrap()
}
