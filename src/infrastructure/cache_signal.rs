use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Cached views that go stale after an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheKey {
    Contacts,
    ContactLists,
}

impl CacheKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::Contacts => "contacts",
            CacheKey::ContactLists => "contact-lists",
        }
    }
}

/// Tells whoever owns cached contact/list data that it must be refreshed.
/// Refreshing is not the caller's business.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, keys: &[CacheKey]);
}

/// Fans invalidations out to any number of subscribed views
pub struct BroadcastInvalidator {
    sender: broadcast::Sender<CacheKey>,
}

impl BroadcastInvalidator {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheKey> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastInvalidator {
    fn default() -> Self {
        Self::new(16)
    }
}

impl CacheInvalidator for BroadcastInvalidator {
    fn invalidate(&self, keys: &[CacheKey]) {
        for key in keys {
            // No subscribers is fine: nothing is cached yet
            if self.sender.send(*key).is_err() {
                tracing::debug!("No listeners for {} invalidation", key.as_str());
            }
        }
    }
}
