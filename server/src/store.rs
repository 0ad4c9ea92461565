//! In-memory user store
//!
//! Records live in a single table kept in insertion order. An id index points
//! into that table, so lookups and listings always see the same records.

use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Default)]
pub struct UserTable {
    records: Vec<User>,
    index: HashMap<Uuid, usize>,
}

impl UserTable {
    pub fn get(&self, id: &Uuid) -> Option<&User> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut User> {
        match self.index.get(id) {
            Some(&pos) => self.records.get_mut(pos),
            None => None,
        }
    }

    /// Case-insensitive email lookup. Linear in the number of users.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let needle = email.to_lowercase();
        self.records
            .iter()
            .find(|user| user.email.to_lowercase() == needle)
    }

    /// Inserts a new record at the end, or replaces the record with the same id in place.
    pub fn upsert(&mut self, user: User) {
        match self.index.get(&user.id) {
            Some(&pos) => self.records[pos] = user,
            None => {
                self.index.insert(user.id, self.records.len());
                self.records.push(user);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Process-wide user store, built once at startup and shared through `AppState`
#[derive(Debug, Default)]
pub struct UserStore {
    table: RwLock<UserTable>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, UserTable> {
        self.table.read().await
    }

    /// Every check-then-mutate sequence must run under a single write guard.
    pub async fn write(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.table.write().await
    }
}
