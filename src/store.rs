//! In-memory user store.
//!
//! The store owns every committed [`User`] and hands out copies. IDs come from
//! a monotonic counter that starts at 1 and never goes backwards, so an ID
//! freed by a delete is never issued again.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::models::user::User;

/// Shared handle passed to the router as state.
pub type SharedStore = Arc<UserStore>;

/// Errors raised by store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(u64),

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Concurrency-safe mapping from user ID to record.
///
/// Records are kept in a `BTreeMap`, so [`UserStore::list`] yields them in
/// ascending ID order, which is also allocation order.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        UserStore {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Insert an already validated record and return its new ID.
    pub fn create(&self, user: User) -> Result<u64, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(id, user);

        Ok(id)
    }

    pub fn get(&self, id: u64) -> Result<User, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;

        users.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Snapshot of every record, ordered by ID.
    pub fn list(&self) -> Result<Vec<(u64, User)>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;

        Ok(users
            .iter()
            .map(|(id, user)| (*id, user.clone()))
            .collect())
    }

    /// Replace the record stored under `id`. Never inserts.
    pub fn update(&self, id: u64, user: User) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        match users.get_mut(&id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Number of records currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;

        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn user(name: &str, age: Option<i64>) -> User {
        User {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn create_then_get_returns_equal_record() {
        let store = UserStore::new();

        let id = store.create(user("Ada", Some(36))).unwrap();

        assert_eq!(id, 1);
        assert_eq!(store.get(id).unwrap(), user("Ada", Some(36)));
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = UserStore::new();

        let first = store.create(user("A", None)).unwrap();
        store.delete(first).unwrap();
        let second = store.create(user("B", None)).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
    }

    #[test]
    fn update_replaces_whole_record() {
        let store = UserStore::new();
        let id = store.create(user("Ada", Some(36))).unwrap();

        store.update(id, user("Grace", None)).unwrap();

        assert_eq!(store.get(id).unwrap(), user("Grace", None));
    }

    #[test]
    fn update_of_missing_id_does_not_insert() {
        let store = UserStore::new();

        assert_eq!(
            store.update(7, user("Ghost", None)),
            Err(StoreError::NotFound(7))
        );
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn len_tracks_creates_and_deletes() {
        let store = UserStore::new();
        assert_eq!(store.len(), Ok(0));

        let id = store.create(user("Ada", None)).unwrap();
        store.create(user("Grace", None)).unwrap();
        assert_eq!(store.len(), Ok(2));

        store.delete(id).unwrap();
        assert_eq!(store.len(), Ok(1));
    }

    #[test]
    fn second_delete_reports_not_found() {
        let store = UserStore::new();
        let id = store.create(user("Ada", None)).unwrap();

        assert_eq!(store.delete(id), Ok(()));
        assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = UserStore::new();
        for name in ["a", "b", "c"] {
            store.create(user(name, None)).unwrap();
        }
        store.delete(2).unwrap();

        let ids: Vec<u64> = store.list().unwrap().into_iter().map(|(id, _)| id).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn returned_records_are_copies() {
        let store = UserStore::new();
        let id = store.create(user("Ada", None)).unwrap();

        let mut copy = store.get(id).unwrap();
        copy.name.push_str(" Byron");

        assert_eq!(store.get(id).unwrap().name, "Ada");
    }

    #[test]
    fn concurrent_creates_issue_distinct_ids() {
        let store = UserStore::new();

        let ids: Vec<u64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..100)
                .map(|i| {
                    let store = &store;
                    scope.spawn(move || store.create(user(&format!("user-{i}"), None)).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let distinct: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(distinct.len(), 100);
        assert_eq!(store.len().unwrap(), 100);
        assert_eq!(distinct, (1..=100).collect());
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let store = UserStore::new();

        let _ = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = store.users.write().unwrap();
                    panic!("writer died");
                })
                .join()
        });

        assert_eq!(
            store.create(user("Ada", None)),
            Err(StoreError::LockPoisoned("create"))
        );
        assert_eq!(store.len(), Err(StoreError::LockPoisoned("len")));
    }
}
