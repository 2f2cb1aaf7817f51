use serde::{Deserialize, Serialize};

use crate::store::StorageKey;

/// How much gore the tile artwork is allowed to show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoreLevel {
    Mild,
    Moderate,
    Extreme,
}

/// Player preferences. Loaded once at startup, saved best-effort after every
/// change; missing or unreadable data falls back to these defaults.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: bool,
    pub haptics: bool,
    pub gore_level: GoreLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            haptics: true,
            gore_level: GoreLevel::Extreme,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "spotto:settings:v1";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_feedback_and_extreme_gore() {
        let settings = Settings::default();
        assert!(settings.sound);
        assert!(settings.haptics);
        assert_eq!(settings.gore_level, GoreLevel::Extreme);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"sound":false}"#).unwrap();
        assert!(!settings.sound);
        assert!(settings.haptics);
        assert_eq!(settings.gore_level, GoreLevel::Extreme);
    }

    #[test]
    fn settings_blob_lives_under_a_versioned_key() {
        assert_eq!(<Settings as StorageKey>::KEY, "spotto:settings:v1");
    }
}
