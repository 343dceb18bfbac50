//! User settings models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_THEME};

/// Display and currency preferences, one record per user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,
    pub theme: String,
    pub currency: String,
    /// Opaque key-value map owned by the client
    #[serde(default)]
    pub preferences: Map<String, Value>,
}

impl UserSettings {
    /// The record a user gets before they change anything.
    pub fn defaults(id: String, user_id: &str) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            theme: DEFAULT_THEME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            preferences: Map::new(),
        }
    }

    /// Overlays the provided fields. `preferences` is replaced as a whole.
    pub fn apply_update(&mut self, update: UserSettingsUpdate) {
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
    }
}

/// Partial settings update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsUpdate {
    pub theme: Option<String>,
    pub currency: Option<String>,
    pub preferences: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = UserSettings::defaults("s1".to_string(), "u1");
        assert_eq!(settings.user_id, "u1");
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.currency, "USD");
        assert!(settings.preferences.is_empty());
    }

    #[test]
    fn test_apply_update_replaces_preferences_wholesale() {
        let mut settings = UserSettings::defaults("s1".to_string(), "u1");
        settings.preferences.insert("compact".to_string(), json!(true));

        let mut prefs = Map::new();
        prefs.insert("chartRange".to_string(), json!("1M"));
        settings.apply_update(UserSettingsUpdate {
            theme: Some("dark".to_string()),
            currency: None,
            preferences: Some(prefs),
        });

        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.preferences.len(), 1);
        assert_eq!(settings.preferences["chartRange"], json!("1M"));
    }

    #[test]
    fn test_settings_wire_format() {
        let settings = UserSettings::defaults("s1".to_string(), "default_user");
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "s1",
                "userId": "default_user",
                "theme": "light",
                "currency": "USD",
                "preferences": {}
            })
        );
    }
}
