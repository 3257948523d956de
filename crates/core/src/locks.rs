use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per operator. Holding the guard serialises the
/// read-check-write sequence on that operator's timeline; other operators
/// are unaffected.
#[derive(Debug, Default)]
pub struct OperatorLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl OperatorLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, operator: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(operator.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
