//! Gardening planner: a plant catalogue with growing calendars, grid gardens
//! with one plant per cell, and a JSON API over both.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;
pub mod storage;

pub use error::{PlannerError, Result};
