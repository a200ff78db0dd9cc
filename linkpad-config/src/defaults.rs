//! Default values for every configuration field.
//!
//! Free functions so they can double as `#[serde(default = "…")]` targets
//! on the option structs and as the backfill source for the codec. An
//! absent or invalid URL value always falls back to one of these, never to
//! an error state.

use crate::types::{Theme, WordWrap};

/// Default color theme.
pub fn theme() -> Theme {
    Theme::Vs
}

/// Default font size in points.
pub fn font_size() -> u32 {
    20
}

/// Default line-wrap mode.
pub fn word_wrap() -> WordWrap {
    WordWrap::On
}

/// Minimap visibility default.
pub fn minimap_enabled() -> bool {
    true
}

/// Language used when the URL names none.
pub fn language() -> String {
    "plaintext".to_string()
}

/// Monospace fallback stack, first available family wins.
pub fn font_family() -> String {
    "\"JetBrains Mono\",\"HarmonyOS Sans SC\",\"Cascadia Code\",\"Consolas\",\"Menlo\",\"Twemoji Mozilla\",\"monospace\"".to_string()
}

/// Widgets track their container size by default.
pub fn automatic_layout() -> bool {
    true
}

/// Allow scrolling past the final line.
pub fn scroll_beyond_last_line() -> bool {
    true
}

/// The original (left) side of a comparison editor accepts edits.
pub fn original_editable() -> bool {
    true
}

/// Comparison editors render side by side rather than inline.
pub fn render_side_by_side() -> bool {
    true
}
