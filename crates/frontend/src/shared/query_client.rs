use std::collections::HashMap;

use contracts::shared::cache::{keys, CacheKeys};
use leptos::prelude::*;

/// Reactive wrapper around [`CacheKeys`].
///
/// Readers call [`QueryClient::watch`] inside an `Effect`; the effect reruns
/// (and refetches) whenever a mutation invalidates that key. Each key has its
/// own trigger, so invalidating one key never wakes readers of another.
#[derive(Clone, Copy)]
pub struct QueryClient {
    keys: StoredValue<CacheKeys>,
    triggers: StoredValue<HashMap<String, ArcTrigger>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            keys: StoredValue::new(CacheKeys::new()),
            triggers: StoredValue::new(HashMap::new()),
        }
    }

    fn trigger(&self, key: &str) -> ArcTrigger {
        if let Some(trigger) = self.triggers.with_value(|t| t.get(key).cloned()) {
            return trigger;
        }
        let trigger = ArcTrigger::new();
        self.triggers.update_value(|t| {
            t.insert(key.to_string(), trigger.clone());
        });
        trigger
    }

    /// Subscribe to a key and return its generation
    pub fn watch(&self, key: &str) -> u64 {
        self.keys.update_value(|k| k.register(key));
        self.trigger(key).track();
        self.keys.with_value(|k| k.generation(key))
    }

    pub fn generation(&self, key: &str) -> u64 {
        self.keys.with_value(|k| k.generation(key))
    }

    pub fn invalidate(&self, key: &str) {
        let mut generation = 0;
        self.keys.update_value(|k| generation = k.invalidate(key));
        self.notify(key);
        log::debug!("cache key {} invalidated (generation {})", key, generation);
    }

    pub fn invalidate_prefix(&self, prefix: &str) {
        let mut touched = Vec::new();
        self.keys.update_value(|k| touched = k.invalidate_prefix(prefix));
        for key in &touched {
            self.notify(key);
        }
        log::debug!("cache keys {:?} invalidated", touched);
    }

    /// Role assignments changed: role lists and every resolved role are stale
    pub fn invalidate_roles(&self) {
        for key in keys::ROLE_MUTATION_KEYS {
            self.invalidate(key);
        }
        self.invalidate_prefix(keys::USER_ROLE_PREFIX);
    }

    fn notify(&self, key: &str) {
        if let Some(trigger) = self.triggers.with_value(|t| t.get(key).cloned()) {
            trigger.notify();
        }
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Memo reading `key` through the client, with a counter of its runs
    fn counted_reader(queries: QueryClient, key: &'static str) -> (Memo<u64>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let memo = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            queries.watch(key)
        });
        (memo, runs)
    }

    #[test]
    fn test_invalidate_reruns_only_readers_of_that_key() {
        let owner = Owner::new();
        owner.set();

        let queries = QueryClient::new();
        let (role_reader, role_runs) = counted_reader(queries, "user-role:u1");
        let (products_reader, products_runs) = counted_reader(queries, keys::PRODUCTS);

        assert_eq!(role_reader.get(), 0);
        assert_eq!(products_reader.get(), 0);

        queries.invalidate(keys::PRODUCTS);
        assert_eq!(role_reader.get(), 0);
        assert_eq!(products_reader.get(), 1);
        assert_eq!(role_runs.load(Ordering::SeqCst), 1);
        assert_eq!(products_runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalidate_roles_reaches_resolved_roles_only() {
        let owner = Owner::new();
        owner.set();

        let queries = QueryClient::new();
        let (role_reader, role_runs) = counted_reader(queries, "user-role:u1");
        let (suppliers_reader, suppliers_runs) = counted_reader(queries, keys::SUPPLIERS);
        assert_eq!(role_reader.get(), 0);
        assert_eq!(suppliers_reader.get(), 0);

        queries.invalidate_roles();
        assert_eq!(role_reader.get(), 1);
        assert_eq!(suppliers_reader.get(), 0);
        assert_eq!(role_runs.load(Ordering::SeqCst), 2);
        assert_eq!(suppliers_runs.load(Ordering::SeqCst), 1);
        assert_eq!(queries.generation(keys::USER_ROLES), 1);
        assert_eq!(queries.generation(keys::ADMIN_USERS), 1);
    }

    #[test]
    fn test_prefix_reaches_keys_registered_by_watch() {
        let owner = Owner::new();
        owner.set();

        let queries = QueryClient::new();
        let (first, _) = counted_reader(queries, "user-role:a");
        let (second, _) = counted_reader(queries, "user-role:b");
        assert_eq!(first.get() + second.get(), 0);

        queries.invalidate_prefix(keys::USER_ROLE_PREFIX);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
        assert_eq!(queries.generation(keys::PRODUCTS), 0);
    }
}
