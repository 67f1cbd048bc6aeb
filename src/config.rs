//! Engine configuration.
//!
//! Timing and layout constants for the enhancement layer. Every field has a
//! default matching the original page behavior, so an empty JSON object is a
//! valid config. Nothing is persisted — the config is built in code or parsed
//! from a JSON string supplied by the embedder.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Result;

/// Tunable timings and layout constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxConfig {
    /// Delay before a tooltip hides after the pointer leaves, in ms.
    #[serde(default = "default_hover_hide_delay_ms")]
    pub hover_hide_delay_ms: u64,
    /// Horizontal gap between an element edge and the tooltip, in pixels.
    #[serde(default = "default_tooltip_gap")]
    pub tooltip_gap: f32,
    /// Delay before the overlay's content is cleared after close, in ms.
    #[serde(default = "default_overlay_clear_delay_ms")]
    pub overlay_clear_delay_ms: u64,
    /// How long a toast stays fully shown, in ms.
    #[serde(default = "default_toast_visible_ms")]
    pub toast_visible_ms: u64,
    /// How long a toast's exit transition runs before removal, in ms.
    #[serde(default = "default_toast_exit_ms")]
    pub toast_exit_ms: u64,
    /// Text copied by a copy button that carries no explicit payload.
    #[serde(default = "default_copy_payload")]
    pub default_copy_payload: String,
}

fn default_hover_hide_delay_ms() -> u64 { 100 }
fn default_tooltip_gap() -> f32 { 15.0 }
fn default_overlay_clear_delay_ms() -> u64 { 300 }
fn default_toast_visible_ms() -> u64 { 2000 }
fn default_toast_exit_ms() -> u64 { 300 }
fn default_copy_payload() -> String { "2127920388".into() }

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            hover_hide_delay_ms: default_hover_hide_delay_ms(),
            tooltip_gap: default_tooltip_gap(),
            overlay_clear_delay_ms: default_overlay_clear_delay_ms(),
            toast_visible_ms: default_toast_visible_ms(),
            toast_exit_ms: default_toast_exit_ms(),
            default_copy_payload: default_copy_payload(),
        }
    }
}

impl FxConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn hover_hide_delay(&self) -> Duration {
        Duration::from_millis(self.hover_hide_delay_ms)
    }

    pub fn overlay_clear_delay(&self) -> Duration {
        Duration::from_millis(self.overlay_clear_delay_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }
}
