use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use common::types::{Id, UserId};

use crate::{models::UserRecord, Error, Result, UserStore};

/// Store, which keeps users in memory. Can be switched to failing mode to
/// emulate unavailable database
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<BTreeMap<Id, UserRecord>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().values().cloned().collect()
    }
    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<Id, UserRecord>> {
        self.users.lock().unwrap_or_else(|e| e.into_inner())
    }
    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Unavailable("memory store is in failing mode".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserRecord>> {
        self.check_available()?;
        let id: Id = user_id.into();
        Ok(self.lock().get(&id).cloned())
    }
    async fn insert_user(&self, user: &UserRecord) -> Result<bool> {
        self.check_available()?;
        let mut users = self.lock();
        if users.contains_key(&user.user_id()) {
            return Ok(false);
        }
        users.insert(user.user_id(), user.clone());
        Ok(true)
    }
}
