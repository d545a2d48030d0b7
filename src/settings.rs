//! User preferences
//!
//! Persisted in LocalStorage as JSON. Query parameters such as
//! `?variant=plain` override the stored values and are saved back.

use serde::{Deserialize, Serialize};

use crate::sim::SceneVariant;

/// Scene preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which scene flavour to run
    pub variant: SceneVariant,
    /// Draw the line from the player to the pointer
    pub show_trajectory: bool,
    /// Fixed placement seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: SceneVariant::Sprites,
            show_trajectory: true,
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "circle_chase_settings";

    /// Parse stored JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Apply a URL query string such as `?variant=plain&seed=42`.
    ///
    /// `seed=random` clears a fixed seed.
    pub fn apply_query(&mut self, query: &str) {
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "variant" => match SceneVariant::from_str(value) {
                    Some(variant) => self.variant = variant,
                    None => log::warn!("Unknown scene variant '{}'", value),
                },
                "seed" => match value {
                    "random" | "none" => self.seed = None,
                    _ => match value.parse() {
                        Ok(seed) => self.seed = Some(seed),
                        Err(_) => log::warn!("Invalid seed '{}'", value),
                    },
                },
                "trajectory" => self.show_trajectory = !matches!(value, "0" | "false" | "off"),
                _ => {}
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_ok() {
                        log::info!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Could not serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip_keeps_fields() {
        let settings = Settings {
            variant: SceneVariant::Plain,
            show_trajectory: false,
            seed: Some(42),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"variant":"plain"}"#);
        assert_eq!(settings.variant, SceneVariant::Plain);
        assert!(settings.show_trajectory);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_garbage_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_query_overrides() {
        let mut settings = Settings::default();
        settings.apply_query("?variant=plain&seed=7&trajectory=off&other=1");
        assert_eq!(settings.variant, SceneVariant::Plain);
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.show_trajectory);
    }

    #[test]
    fn test_variant_stored_lowercase() {
        let settings = Settings {
            variant: SceneVariant::Sprites,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""variant":"sprites""#));
        assert_eq!(
            SceneVariant::from_str(SceneVariant::Sprites.as_str()),
            Some(SceneVariant::Sprites)
        );
    }

    #[test]
    fn test_query_random_seed_clears_fixed_seed() {
        let mut settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        settings.apply_query("?seed=random");
        assert_eq!(settings.seed, None);

        settings.apply_query("?seed=9");
        settings.apply_query("?variant=plain");
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_query_ignores_bad_values() {
        let mut settings = Settings::default();
        settings.apply_query("variant=hexagons&seed=abc&flag");
        assert_eq!(settings, Settings::default());
    }
}
