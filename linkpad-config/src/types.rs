//! Configuration types for the editor widget.
//!
//! Variant and field names serialize to the exact identifiers used by the
//! URL parameter vocabulary and the widget's construction options
//! (camelCase keys, kebab-case theme ids), so a serialized [`EditorOptions`]
//! is directly consumable by the widget.

use serde::{Deserialize, Serialize};

/// Color theme for the editor chrome and syntax highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Light theme
    #[default]
    Vs,
    /// Dark theme
    VsDark,
    /// High-contrast dark theme
    HcBlack,
    /// High-contrast light theme
    HcLight,
}

impl Theme {
    /// The wire identifier used in URLs and widget options.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Vs => "vs",
            Theme::VsDark => "vs-dark",
            Theme::HcBlack => "hc-black",
            Theme::HcLight => "hc-light",
        }
    }

    /// Parse a URL parameter value.
    ///
    /// Returns `None` for anything that is not exactly one of the four
    /// known identifiers; the caller falls back to the default.
    pub fn parse_param(value: &str) -> Option<Self> {
        match value {
            "vs" => Some(Theme::Vs),
            "vs-dark" => Some(Theme::VsDark),
            "hc-black" => Some(Theme::HcBlack),
            "hc-light" => Some(Theme::HcLight),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line-wrap mode.
///
/// `WordWrapColumn` and `Bounded` wrap at the widget's configured wrap
/// column; the column itself is not exposed through the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum WordWrap {
    /// Wrap at the viewport edge
    #[default]
    On,
    /// Never wrap
    Off,
    /// Wrap at the configured wrap column
    WordWrapColumn,
    /// Wrap at the viewport edge or the wrap column, whichever is smaller
    Bounded,
}

impl WordWrap {
    /// The wire identifier used in URLs and widget options.
    pub fn as_str(self) -> &'static str {
        match self {
            WordWrap::On => "on",
            WordWrap::Off => "off",
            WordWrap::WordWrapColumn => "wordWrapColumn",
            WordWrap::Bounded => "bounded",
        }
    }

    /// Parse a URL parameter value; `None` for unknown identifiers.
    pub fn parse_param(value: &str) -> Option<Self> {
        match value {
            "on" => Some(WordWrap::On),
            "off" => Some(WordWrap::Off),
            "wordWrapColumn" => Some(WordWrap::WordWrapColumn),
            "bounded" => Some(WordWrap::Bounded),
            _ => None,
        }
    }
}

impl std::fmt::Display for WordWrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which editor surface a page load constructs.
///
/// Fixed at construction time and never mutated afterward; switching kinds
/// requires a reload with a different `editorType` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    /// Single-document editor
    #[default]
    Normal,
    /// Side-by-side comparison editor
    Diff,
}

impl EditorKind {
    /// The wire identifier used in URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            EditorKind::Normal => "normal",
            EditorKind::Diff => "diff",
        }
    }

    /// Parse a URL parameter value; `None` for unknown identifiers.
    pub fn parse_param(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(EditorKind::Normal),
            "diff" => Some(EditorKind::Diff),
            _ => None,
        }
    }
}

impl std::fmt::Display for EditorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimap section of the widget construction options.
///
/// The widget nests minimap settings one level deep; only visibility is
/// exposed through the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimapOptions {
    /// Whether the minimap is rendered.
    #[serde(default = "crate::defaults::minimap_enabled")]
    pub enabled: bool,
}

impl Default for MinimapOptions {
    fn default() -> Self {
        Self {
            enabled: crate::defaults::minimap_enabled(),
        }
    }
}

/// Merged construction options handed to the widget.
///
/// The URL-controlled fields (`language`, `theme`, `font_size`,
/// `word_wrap`, `minimap`) are overlaid on these defaults by the codec; the
/// remaining fields are ambient presentation defaults that are not exposed
/// through the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Language identifier from the widget's language registry.
    #[serde(default = "crate::defaults::language")]
    pub language: String,

    /// Color theme.
    #[serde(default)]
    pub theme: Theme,

    /// Font size in points.
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: u32,

    /// Line-wrap mode.
    #[serde(default)]
    pub word_wrap: WordWrap,

    /// Monospace fallback stack; the widget resolves the first available
    /// family.
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Let the widget track its container size.
    #[serde(default = "crate::defaults::automatic_layout")]
    pub automatic_layout: bool,

    /// Minimap settings.
    #[serde(default)]
    pub minimap: MinimapOptions,

    /// Allow scrolling past the final line.
    #[serde(default = "crate::defaults::scroll_beyond_last_line")]
    pub scroll_beyond_last_line: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            language: crate::defaults::language(),
            theme: Theme::default(),
            font_size: crate::defaults::font_size(),
            word_wrap: WordWrap::default(),
            font_family: crate::defaults::font_family(),
            automatic_layout: crate::defaults::automatic_layout(),
            minimap: MinimapOptions::default(),
            scroll_beyond_last_line: crate::defaults::scroll_beyond_last_line(),
        }
    }
}

/// Comparison-mode construction options.
///
/// Only meaningful when the editor kind is [`EditorKind::Diff`]; in normal
/// mode the codec ignores the corresponding URL parameters entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOptions {
    /// Whether the original (left) side accepts edits.
    #[serde(default = "crate::defaults::original_editable")]
    pub original_editable: bool,

    /// Side-by-side rendering; `false` renders an inline diff.
    #[serde(default = "crate::defaults::render_side_by_side")]
    pub render_side_by_side: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            original_editable: crate::defaults::original_editable(),
            render_side_by_side: crate::defaults::render_side_by_side(),
        }
    }
}
