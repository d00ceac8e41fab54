// src/config/mod.rs

pub mod launch;
pub mod settings;

pub use launch::{projectile_id, LaunchEntry, LaunchRecord};
pub use settings::{EvaluationSettings, SettingsFile, DEFAULT_MIN_FLIGHT_TIME};
