use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use models::{fields, Client, ClientRegistration, ValidationMessage};
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq)]
pub enum RepositoryError {
    DuplicateEmail(String),
}

impl RepositoryError {
    /// The form field this error belongs to, as a message the form can show.
    pub fn field_message(&self) -> ValidationMessage {
        match self {
            RepositoryError::DuplicateEmail(_) => {
                ValidationMessage::new(
                    fields::EMAIL,
                    "A client with this email is already registered",
                )
            }
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::DuplicateEmail(email) => {
                write!(f, "A client with email {} is already registered", email)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

struct StoredClient {
    seq: u64,
    client: Client,
}

/// In-memory client store. Clones share the same data.
#[derive(Clone, Default)]
pub struct ClientRepository {
    clients: Arc<DashMap<Uuid, StoredClient>>,
    emails: Arc<DashMap<String, Uuid>>,
    next_seq: Arc<AtomicU64>,
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.clients.len()
    }

    /// Stores a new client. The e-mail reservation stays locked until the
    /// client is inserted, so `find_by_email` never sees a reserved address
    /// without its client.
    pub fn create(&self, registration: ClientRegistration) -> Result<Client, RepositoryError> {
        let email = registration.email.trim().to_string();

        let slot = match self.emails.entry(email_key(&email)) {
            Entry::Occupied(_) => return Err(RepositoryError::DuplicateEmail(email)),
            Entry::Vacant(slot) => slot,
        };

        let id = Uuid::new_v4();
        let phone = registration.phone.trim();
        let client = Client {
            id,
            company_name: registration.company_name.trim().to_string(),
            contact_name: registration.contact_name.trim().to_string(),
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            tax_number: registration.tax_number.trim().to_string(),
            amount: registration.amount.trim().to_string(),
            created_at: Utc::now(),
        };
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.clients.insert(
            id,
            StoredClient {
                seq,
                client: client.clone(),
            },
        );
        slot.insert(id);

        tracing::debug!(client_id = %id, "client stored");
        Ok(client)
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<Client> {
        self.clients.get(id).map(|stored| stored.client.clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<Client> {
        let id = *self.emails.get(&email_key(email))?;
        self.find_by_id(&id)
    }

    /// All clients, oldest first.
    pub fn list(&self) -> Vec<Client> {
        let mut stored: Vec<(u64, Client)> = self
            .clients
            .iter()
            .map(|entry| (entry.seq, entry.client.clone()))
            .collect();
        stored.sort_unstable_by_key(|(seq, _)| *seq);
        stored.into_iter().map(|(_, client)| client).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientRepository, RepositoryError};
    use crate::test_helpers::*;
    use models::fields;

    #[test]
    fn test_create_stores_fields() {
        let repository = ClientRepository::new();
        let email = generate_unique_email("create");
        let mut registration = registration_with_email(&email);
        registration.company_name = "  Acme Ltd ".to_string();

        let client = repository.create(registration).unwrap();

        assert_eq!(client.company_name, "Acme Ltd");
        assert_eq!(client.email, email);
        assert_eq!(client.phone, None);
        assert_eq!(repository.find_by_id(&client.id), Some(client));
    }

    #[test]
    fn test_phone_is_kept_when_given() {
        let repository = ClientRepository::new();
        let mut registration = registration_with_email(&generate_unique_email("phone"));
        registration.phone = "+1 555 010 2030".to_string();

        let client = repository.create(registration).unwrap();

        assert_eq!(client.phone.as_deref(), Some("+1 555 010 2030"));
    }

    #[test]
    fn test_duplicate_email_is_rejected_case_insensitively() {
        let repository = ClientRepository::new();
        repository.create(registration_with_email("Ops@Acme.test")).unwrap();

        let err = repository
            .create(registration_with_email(" ops@acme.TEST"))
            .unwrap_err();

        assert_eq!(err, RepositoryError::DuplicateEmail("ops@acme.TEST".to_string()));
        assert_eq!(err.field_message().field_id, fields::EMAIL);
        assert_eq!(repository.count(), 1);
    }

    #[test]
    fn test_find_by_email() {
        let repository = ClientRepository::new();
        let email = generate_unique_email("find");
        let client = repository.create(registration_with_email(&email)).unwrap();

        assert_eq!(repository.find_by_email(&email.to_uppercase()).map(|c| c.id), Some(client.id));
        assert_eq!(repository.find_by_email("missing@example.com"), None);
    }

    fn create_with_unique_email(repository: &ClientRepository, prefix: &str) -> models::Client {
        repository
            .create(registration_with_email(&generate_unique_email(prefix)))
            .unwrap()
    }

    #[test]
    fn test_list_is_oldest_first() {
        let repository = ClientRepository::new();
        let first = create_with_unique_email(&repository, "a");
        let second = create_with_unique_email(&repository, "b");
        let third = create_with_unique_email(&repository, "c");

        let ids: Vec<_> = repository.list().into_iter().map(|client| client.id).collect();

        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_keep_email_unique() {
        let repository = ClientRepository::new();
        let email = generate_unique_email("race");

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repository = repository.clone();
                let email = email.clone();
                tokio::spawn(async move {
                    match repository.create(registration_with_email(&email)) {
                        Ok(_) => true,
                        Err(RepositoryError::DuplicateEmail(_)) => {
                            // A rejected address is always backed by a stored client
                            assert!(repository.find_by_email(&email).is_some());
                            false
                        }
                    }
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repository.count(), 1);
    }
}
