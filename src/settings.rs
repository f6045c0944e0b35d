//! User preferences
//!
//! Persisted in LocalStorage on wasm; the simulation state itself is never
//! stored.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BALL_RADIUS, REDRAW_INTERVAL_MS};
use crate::surface::DrawColor;

/// Playground preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Radius for spawned balls
    pub ball_radius: f32,
    /// Redraw loop period in milliseconds
    pub redraw_interval_ms: u32,
    /// Fill color for spawned balls
    pub ball_color: DrawColor,
    /// Pick a random palette color per spawn instead of `ball_color`
    pub random_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_radius: DEFAULT_BALL_RADIUS,
            redraw_interval_ms: REDRAW_INTERVAL_MS,
            ball_color: DrawColor::Black,
            random_colors: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "bouncing_ball_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
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
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
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
