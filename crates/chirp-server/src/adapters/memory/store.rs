//! Shared in-memory user table

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use chirp::User;

/// Process-local storage for users and the tweets they own.
///
/// Cloning shares the same table. Every read-modify-write runs under the
/// write guard, so a follow edge is never visible half-applied.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) async fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, User>> {
        self.users.read().await
    }

    pub(super) async fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, User>> {
        self.users.write().await
    }
}
