use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use models::ValidationMessage;

use super::rules::Validator;

/// Receives the field ids of every batch published to an [`ErrorRelay`].
#[cfg_attr(test, mockall::automock)]
pub trait ErrorObserver: Send + Sync {
    fn errors_published(&self, field_ids: &[String]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone)]
struct RelayEntry {
    error_msg: String,
    /// Value the error was last confirmed against. `None` until the bound
    /// field is first checked after the batch arrived.
    original_value: Option<String>,
}

/// Bridges a batch of server-reported field errors into per-field validators.
///
/// Clones share state. Each publish replaces the whole set of held errors. A
/// field's error stays visible while its value is unchanged since the error
/// was first checked, and disappears once the user enters something else.
/// Resolved entries are not removed; they are dropped by the next publish.
#[derive(Clone, Default)]
pub struct ErrorRelay {
    entries: Arc<DashMap<String, RelayEntry>>,
    observers: Arc<DashMap<SubscriptionId, Arc<dyn ErrorObserver>>>,
    next_subscription: Arc<AtomicU64>,
}

impl ErrorRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every held error with `messages` and notifies observers.
    ///
    /// Messages without a field id are dropped. When a field id repeats, its
    /// last message is kept. Returns the number of errors now held.
    pub fn publish_errors(&self, messages: Vec<ValidationMessage>) -> usize {
        self.entries.clear();
        for message in messages {
            if message.field_id.trim().is_empty() {
                tracing::warn!(
                    error_msg = %message.error_msg,
                    "dropping validation message without field id"
                );
                continue;
            }
            self.entries.insert(
                message.field_id,
                RelayEntry {
                    error_msg: message.error_msg,
                    original_value: None,
                },
            );
        }

        let field_ids = self.field_ids();
        tracing::debug!(count = field_ids.len(), "published validation errors");

        // Observers may call back into the relay; don't hold a shard lock.
        let observers: Vec<Arc<dyn ErrorObserver>> = self
            .observers
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for observer in observers {
            observer.errors_published(&field_ids);
        }

        field_ids.len()
    }

    /// Validator surfacing the held error for `field_id`.
    pub fn validator_for(&self, field_id: impl Into<String>) -> Validator {
        let entries = Arc::clone(&self.entries);
        let field_id = field_id.into();
        Arc::new(move |value: &str| {
            let Some(mut entry) = entries.get_mut(&field_id) else {
                return String::new();
            };
            let edited = matches!(&entry.original_value, Some(original) if original != value);
            if edited {
                return String::new();
            }
            entry.original_value = Some(value.to_string());
            entry.error_msg.clone()
        })
    }

    /// Message held for `field_id`, whether or not it has since been resolved.
    pub fn query(&self, field_id: &str) -> Option<String> {
        self.entries.get(field_id).map(|entry| entry.error_msg.clone())
    }

    pub fn subscribe(&self, observer: Arc<dyn ErrorObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers.insert(id, observer);
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub fn field_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.iter().map(|entry| entry.key().clone()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ErrorRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRelay")
            .field("field_ids", &self.field_ids())
            .field("observers", &self.observers.len())
            .finish()
    }
}
