//! Per-drone write serialization.
//!
//! Mission replace, mission clear and drone delete for the same drone must not
//! interleave, while work on different drones proceeds independently. `DroneLocks`
//! hands out one async mutex per drone ID and drops entries nobody holds.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-drone async mutexes.
///
/// Cloning shares the registry.
#[derive(Clone, Default)]
pub struct DroneLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl DroneLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `drone_id`.
    ///
    /// The returned guard releases the drone when dropped. Entries for drones whose
    /// guards have all been dropped are pruned on each call.
    ///
    /// # Arguments
    /// - `drone_id` - Drone to serialize writes for
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Held until the write completes
    pub async fn acquire(&self, drone_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|id, lock| *id == drone_id || Arc::strong_count(lock) > 1);
            locks.entry(drone_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Number of drones currently tracked by the registry.
    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
