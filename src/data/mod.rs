//! Seed catalogue and sample gardens written to an empty store.

pub mod gardens;
pub mod plants;
