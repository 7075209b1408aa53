//! Session repository and per-conversation serialization.
use super::{ConversationKey, Session};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Keyed session repository. Swap the in-memory map for an external keyed store
/// when running several instances.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, key: ConversationKey) -> Option<Session>;
    async fn save(&self, key: ConversationKey, session: Session);
    async fn remove(&self, key: ConversationKey);
    async fn len(&self) -> usize;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<ConversationKey, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, key: ConversationKey) -> Option<Session> {
        self.sessions.read().await.get(&key).cloned()
    }

    async fn save(&self, key: ConversationKey, session: Session) {
        self.sessions.write().await.insert(key, session);
    }

    async fn remove(&self, key: ConversationKey) {
        self.sessions.write().await.remove(&key);
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

const PRUNE_THRESHOLD: usize = 1024;

/// One async mutex per conversation so updates for the same conversation run
/// one at a time while other conversations proceed.
#[derive(Default)]
pub struct KeyedLocks {
    locks: Mutex<HashMap<ConversationKey, Arc<Mutex<()>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, key: ConversationKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.locks.lock().await;
            if map.len() >= PRUNE_THRESHOLD {
                // Only this map holds idle entries.
                map.retain(|_, m| Arc::strong_count(m) > 1);
            }
            map.entry(key).or_default().clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_key_runs_one_at_a_time() {
        let locks = Arc::new(KeyedLocks::new());
        let log = Arc::new(Mutex::new(Vec::new()));
        let key = ConversationKey::new(1, 2);

        let first = locks.acquire(key).await;
        let task = {
            let (locks, log) = (locks.clone(), log.clone());
            tokio::spawn(async move {
                let _g = locks.acquire(key).await;
                log.lock().await.push("second");
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        log.lock().await.push("first");
        drop(first);
        task.await.expect("task");
        assert_eq!(*log.lock().await, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn other_keys_are_not_blocked() {
        let locks = KeyedLocks::new();
        let _a = locks.acquire(ConversationKey::new(1, 1)).await;
        let b = tokio::time::timeout(
            Duration::from_millis(100),
            locks.acquire(ConversationKey::new(1, 2)),
        )
        .await;
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn store_round_trip() {
        let store = InMemorySessionStore::new();
        let key = ConversationKey::new(3, 4);
        assert!(store.load(key).await.is_none());
        let mut session = Session::new(4);
        session.last_query = Some("port:22".into());
        store.save(key, session.clone()).await;
        assert_eq!(store.load(key).await, Some(session));
        assert_eq!(store.len().await, 1);
        store.remove(key).await;
        assert_eq!(store.len().await, 0);
    }
}
