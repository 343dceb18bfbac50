//! Settings module - per-user preferences.

mod settings_model;

pub use settings_model::{UserSettings, UserSettingsUpdate};
