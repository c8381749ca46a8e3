use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{garden::Garden, plant::Plant},
    storage::{KeyValueStore, GARDENS_KEY, PLANTS_KEY},
};

/// An entity kept as one JSON array under a fixed store key.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KIND: &'static str;
    const KEY: &'static str;

    fn id(&self) -> &str;

    /// Runs on every record read back from the store.
    fn check_loaded(&self) -> Result<()>;
}

impl Record for Plant {
    const KIND: &'static str = "Plant";
    const KEY: &'static str = PLANTS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn check_loaded(&self) -> Result<()> {
        if let Some((activity, month)) = self.growing_info.out_of_range_month() {
            log::warn!(
                "Plant '{}' has out-of-range month {} in {}; keeping it as stored",
                self.id,
                month,
                activity.field_name()
            );
        }
        Ok(())
    }
}

impl Record for Garden {
    const KIND: &'static str = "Garden";
    const KEY: &'static str = GARDENS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn check_loaded(&self) -> Result<()> {
        self.validate()
    }
}

/// CRUD over one collection. Each call goes back to the store; nothing is cached.
pub struct Repository<T> {
    store: Arc<dyn KeyValueStore>,
    _record: PhantomData<fn() -> T>,
}

pub type PlantRepository = Repository<Plant>;
pub type GardenRepository = Repository<Garden>;

impl<T: Record> Repository<T> {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Records that pass [`Record::check_loaded`]. Failing ones are logged
    /// and skipped but stay in the store, where `delete` can still reach them.
    pub fn all(&self) -> Result<Vec<T>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|item| match item.check_loaded() {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Skipping stored {} '{}': {e}", T::KIND, item.id());
                    false
                }
            })
            .collect())
    }

    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.all()?.into_iter().find(|item| item.id() == id))
    }

    pub fn add(&self, item: T) -> Result<T> {
        let mut items = self.load()?;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(PlannerError::duplicate(T::KIND, item.id()));
        }
        items.push(item.clone());
        self.save(&items)?;
        log::info!("Added {} '{}'", T::KIND, item.id());
        Ok(item)
    }

    pub fn update(&self, item: T) -> Result<T> {
        let mut items = self.load()?;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or_else(|| PlannerError::not_found(T::KIND, item.id()))?;
        *slot = item.clone();
        self.save(&items)?;
        log::debug!("Updated {} '{}'", T::KIND, item.id());
        Ok(item)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(PlannerError::not_found(T::KIND, id));
        }
        self.save(&items)?;
        log::info!("Deleted {} '{id}'", T::KIND);
        Ok(())
    }

    /// Every stored record, unchecked. Mutations go through here so a write
    /// never drops records that fail their check.
    fn load(&self) -> Result<Vec<T>> {
        match self.store.get(T::KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[T]) -> Result<()> {
        self.store.set(T::KEY, &serde_json::to_string(items)?)
    }
}
