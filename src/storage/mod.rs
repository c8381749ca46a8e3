//! Key-value persistence: whole collections stored as JSON arrays under a
//! fixed key, read, changed and written back on every mutation.

pub mod file;
pub mod memory;
pub mod repository;

use crate::{
    data::{gardens::seed_gardens, plants::seed_plants},
    error::Result,
};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{GardenRepository, PlantRepository, Record, Repository};

pub const PLANTS_KEY: &str = "plants";
pub const GARDENS_KEY: &str = "gardens";
pub const INITIALIZED_KEY: &str = "initialized";

/// Raw string blobs by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Writes the seed catalogue and sample gardens into a store that has never
/// been initialised. Returns whether seeding happened.
pub fn initialize(store: &dyn KeyValueStore) -> Result<bool> {
    if store.get(INITIALIZED_KEY)?.is_some() {
        log::debug!("Store already initialised, skipping seed data");
        return Ok(false);
    }
    log::info!("Initialising store with seed data");
    let plants = seed_plants();
    let gardens = seed_gardens();
    store.set(PLANTS_KEY, &serde_json::to_string(&plants)?)?;
    store.set(GARDENS_KEY, &serde_json::to_string(&gardens)?)?;
    store.set(INITIALIZED_KEY, "true")?;
    log::info!(
        "Seeded {} plants and {} gardens",
        plants.len(),
        gardens.len()
    );
    Ok(true)
}
