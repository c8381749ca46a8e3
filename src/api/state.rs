use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{PlannerError, Result},
    storage::{self, GardenRepository, KeyValueStore, MemoryStore, PlantRepository},
};

/// Shared handler state. Each repository sits behind its own lock: reads
/// share it, and a mutation holds the write side for its whole
/// load-change-save cycle.
pub struct AppState {
    plants: RwLock<PlantRepository>,
    gardens: RwLock<GardenRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            plants: RwLock::new(PlantRepository::new(store.clone())),
            gardens: RwLock::new(GardenRepository::new(store)),
        }
    }

    /// In-memory state holding the seed catalogue and sample gardens.
    pub fn seeded() -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        storage::initialize(store.as_ref())?;
        Ok(Self::new(store))
    }

    pub fn plants(&self) -> Result<RwLockReadGuard<'_, PlantRepository>> {
        self.plants.read().map_err(|_| PlannerError::LockPoisoned)
    }

    pub fn plants_mut(&self) -> Result<RwLockWriteGuard<'_, PlantRepository>> {
        self.plants.write().map_err(|_| PlannerError::LockPoisoned)
    }

    pub fn gardens(&self) -> Result<RwLockReadGuard<'_, GardenRepository>> {
        self.gardens.read().map_err(|_| PlannerError::LockPoisoned)
    }

    pub fn gardens_mut(&self) -> Result<RwLockWriteGuard<'_, GardenRepository>> {
        self.gardens.write().map_err(|_| PlannerError::LockPoisoned)
    }
}
