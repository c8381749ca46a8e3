use std::{env, path::PathBuf};

use crate::error::{PlannerError, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Server settings, read from the environment (and `.env`, loaded by `main`).
///
/// - `GARDEN_BIND_ADDR`: listen address, default `0.0.0.0:8080`
/// - `GARDEN_DATA_DIR`: directory for the file store; unset keeps data in memory
/// - `GARDEN_SEED`: `true`/`false`, seed an empty store (default `true`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    pub data_dir: Option<PathBuf>,
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_dir: None,
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let bind_addr = lookup("GARDEN_BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let data_dir = lookup("GARDEN_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let seed = match lookup("GARDEN_SEED") {
            None => defaults.seed,
            Some(raw) => parse_bool(&raw).ok_or_else(|| PlannerError::Configuration {
                message: format!("GARDEN_SEED must be true or false, got '{raw}'"),
            })?,
        };
        Ok(Self {
            bind_addr,
            data_dir,
            seed,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
