//! Query cache keys and their invalidation generations
//!
//! Every list the client fetches is cached under a logical key. A key's
//! generation starts at zero and is bumped by each invalidation; a reader
//! that observes a new generation must fetch again.

use std::collections::HashMap;

/// Logical cache keys used by the screens
pub mod keys {
    pub const PRODUCTS: &str = "products";
    pub const SUPPLIERS: &str = "suppliers";
    pub const CATEGORIES: &str = "categories";
    pub const USER_ROLES: &str = "user-roles";
    pub const ALL_USERS: &str = "all-users";
    pub const ADMIN_USERS: &str = "admin-users";
    pub const DASHBOARD_STATS: &str = "dashboard-stats";

    pub const USER_ROLE_PREFIX: &str = "user-role:";

    /// Key of one user's resolved role
    pub fn user_role(user_id: &str) -> String {
        format!("{}{}", USER_ROLE_PREFIX, user_id)
    }

    /// Keys touched by any change to role assignments
    pub const ROLE_MUTATION_KEYS: &[&str] = &[USER_ROLES, ADMIN_USERS];
}

#[derive(Debug, Clone, Default)]
pub struct CacheKeys {
    generations: HashMap<String, u64>,
}

impl CacheKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation; unknown keys are at zero
    pub fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }

    /// Make a key known so prefix invalidation can reach it
    pub fn register(&mut self, key: &str) {
        self.generations.entry(key.to_string()).or_insert(0);
    }

    /// Force the next read of `key` to refetch; returns the new generation
    pub fn invalidate(&mut self, key: &str) -> u64 {
        let generation = self.generations.entry(key.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    /// Invalidate every known key starting with `prefix`; returns them sorted
    pub fn invalidate_prefix(&mut self, prefix: &str) -> Vec<String> {
        let mut touched: Vec<String> = self
            .generations
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        touched.sort();
        for key in &touched {
            if let Some(generation) = self.generations.get_mut(key) {
                *generation += 1;
            }
        }
        touched
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_starts_at_zero() {
        let cache = CacheKeys::new();
        assert_eq!(cache.generation(keys::PRODUCTS), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_touches_only_target() {
        let mut cache = CacheKeys::new();
        cache.register(keys::PRODUCTS);
        cache.register(keys::SUPPLIERS);
        assert_eq!(cache.invalidate(keys::PRODUCTS), 1);
        assert_eq!(cache.invalidate(keys::PRODUCTS), 2);
        assert_eq!(cache.generation(keys::SUPPLIERS), 0);
    }

    #[test]
    fn test_prefix_invalidation() {
        let mut cache = CacheKeys::new();
        cache.register(&keys::user_role("b"));
        cache.register(&keys::user_role("a"));
        cache.register(keys::USER_ROLES);

        let touched = cache.invalidate_prefix(keys::USER_ROLE_PREFIX);
        assert_eq!(touched, vec!["user-role:a".to_string(), "user-role:b".to_string()]);
        assert_eq!(cache.generation("user-role:a"), 1);
        assert_eq!(cache.generation(keys::USER_ROLES), 0);
    }
}
