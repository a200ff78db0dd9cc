//! Translation between query strings and editor configuration.
//!
//! Decoding applies a validate-or-default policy per field: malformed or
//! hand-edited URLs must never break editor construction, so there are no
//! error paths here at all. Encoding merges the authoritative state back
//! into a copy of the previous query, carrying unrecognized keys through
//! verbatim and re-serializing `editorType` then `language` as the final
//! two parameters.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::query::Query;
use crate::types::{DiffOptions, EditorKind, EditorOptions, MinimapOptions, Theme, WordWrap};

/// Recognized URL parameter keys. Case-sensitive.
pub const KEY_THEME: &str = "theme";
pub const KEY_FONT_SIZE: &str = "fontSize";
pub const KEY_WORD_WRAP: &str = "wordWrap";
pub const KEY_MINIMAP: &str = "minimap";
pub const KEY_ORIGINAL_EDITABLE: &str = "originalEditable";
pub const KEY_RENDER_SIDE_BY_SIDE: &str = "renderSideBySide";
pub const KEY_EDITOR_TYPE: &str = "editorType";
pub const KEY_LANGUAGE: &str = "language";

/// Everything the URL round trip captures for one editor instance.
///
/// `diff` is `Some` exactly when `kind` is [`EditorKind::Diff`]; the
/// comparison-only options are ignored by decoding (and scrubbed from
/// rewrites) in normal mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkState {
    pub theme: Theme,
    pub font_size: u32,
    pub word_wrap: WordWrap,
    /// Minimap visibility.
    pub minimap: bool,
    pub kind: EditorKind,
    pub language: String,
    pub diff: Option<DiffOptions>,
}

impl Default for LinkState {
    fn default() -> Self {
        Self {
            theme: defaults::theme(),
            font_size: defaults::font_size(),
            word_wrap: defaults::word_wrap(),
            minimap: defaults::minimap_enabled(),
            kind: EditorKind::default(),
            language: defaults::language(),
            diff: None,
        }
    }
}

impl LinkState {
    /// Merged construction options for the widget, overlaying the
    /// URL-controlled fields on the ambient presentation defaults.
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            language: self.language.clone(),
            theme: self.theme,
            font_size: self.font_size,
            word_wrap: self.word_wrap,
            minimap: MinimapOptions {
                enabled: self.minimap,
            },
            ..EditorOptions::default()
        }
    }

    /// Comparison options for diff construction; defaults when the URL
    /// supplied none.
    pub fn diff_options(&self) -> DiffOptions {
        self.diff.unwrap_or_default()
    }
}

/// Result of [`decode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The decoded, fully defaulted state.
    pub state: LinkState,
    /// True when a required key (`theme`, `fontSize`, `editorType`,
    /// `language`) was absent from the query. The caller should rewrite the
    /// URL so copied links carry the now-explicit defaults. A
    /// present-but-invalid value does not set this; it decoded, just to the
    /// default.
    pub backfilled: bool,
}

/// Decode a query string into editor state.
///
/// Every recognized key follows the same policy: accept the value iff it
/// is valid for the field, otherwise fall back to the default. Unrecognized
/// keys are left alone for [`encode`] to carry through verbatim.
pub fn decode(query: &Query) -> Decoded {
    let mut state = LinkState::default();

    if let Some(value) = query.get(KEY_EDITOR_TYPE) {
        match EditorKind::parse_param(value) {
            Some(kind) => state.kind = kind,
            // Invalid kinds coerce to normal rather than being dropped.
            None => log::debug!("coercing invalid {KEY_EDITOR_TYPE} value '{value}' to normal"),
        }
    }

    if let Some(value) = query.get(KEY_THEME) {
        match Theme::parse_param(value) {
            Some(theme) => state.theme = theme,
            None => log::debug!("ignoring invalid {KEY_THEME} value '{value}'"),
        }
    }

    if let Some(value) = query.get(KEY_FONT_SIZE) {
        match value.parse::<u32>() {
            Ok(size) if size > 0 => state.font_size = size,
            _ => log::debug!("ignoring invalid {KEY_FONT_SIZE} value '{value}'"),
        }
    }

    if let Some(value) = query.get(KEY_WORD_WRAP) {
        match WordWrap::parse_param(value) {
            Some(wrap) => state.word_wrap = wrap,
            None => log::debug!("ignoring invalid {KEY_WORD_WRAP} value '{value}'"),
        }
    }

    if let Some(value) = query.get(KEY_MINIMAP) {
        match parse_bool_param(value) {
            Some(enabled) => state.minimap = enabled,
            None => log::debug!("ignoring invalid {KEY_MINIMAP} value '{value}'"),
        }
    }

    if state.kind == EditorKind::Diff {
        let mut diff = DiffOptions::default();
        if let Some(value) = query.get(KEY_ORIGINAL_EDITABLE) {
            match parse_bool_param(value) {
                Some(editable) => diff.original_editable = editable,
                None => log::debug!("ignoring invalid {KEY_ORIGINAL_EDITABLE} value '{value}'"),
            }
        }
        if let Some(value) = query.get(KEY_RENDER_SIDE_BY_SIDE) {
            match parse_bool_param(value) {
                Some(side_by_side) => diff.render_side_by_side = side_by_side,
                None => log::debug!("ignoring invalid {KEY_RENDER_SIDE_BY_SIDE} value '{value}'"),
            }
        }
        state.diff = Some(diff);
    }

    if let Some(language) = query.get(KEY_LANGUAGE) {
        state.language = language.to_string();
    }

    let backfilled = [KEY_THEME, KEY_FONT_SIZE, KEY_EDITOR_TYPE, KEY_LANGUAGE]
        .iter()
        .any(|key| !query.contains(key));

    Decoded { state, backfilled }
}

/// Merge `state` into a copy of `previous`, producing the rewritten query.
///
/// Always-present keys (`theme`, `fontSize`) are updated in place or
/// appended. Optional keys are updated in place when already explicit, but
/// only appended when the value differs from the built-in default, keeping
/// shareable links minimal. A present-but-invalid value of a recognized key
/// is normalized to the active value by the in-place update. `editorType`
/// and `language` are re-appended last, in that order, so `language` ends
/// every serialized query.
pub fn encode(state: &LinkState, previous: &Query) -> Query {
    let mut query = previous.clone();
    query.remove(KEY_EDITOR_TYPE);
    query.remove(KEY_LANGUAGE);

    query.set(KEY_THEME, state.theme.as_str());
    query.set(KEY_FONT_SIZE, &state.font_size.to_string());

    set_optional(
        &mut query,
        KEY_WORD_WRAP,
        state.word_wrap.as_str(),
        defaults::word_wrap().as_str(),
    );
    set_optional(
        &mut query,
        KEY_MINIMAP,
        bool_str(state.minimap),
        bool_str(defaults::minimap_enabled()),
    );

    match state.kind {
        EditorKind::Diff => {
            let diff = state.diff_options();
            set_optional(
                &mut query,
                KEY_ORIGINAL_EDITABLE,
                bool_str(diff.original_editable),
                bool_str(defaults::original_editable()),
            );
            set_optional(
                &mut query,
                KEY_RENDER_SIDE_BY_SIDE,
                bool_str(diff.render_side_by_side),
                bool_str(defaults::render_side_by_side()),
            );
        }
        EditorKind::Normal => {
            // Comparison-only keys never survive a normal-mode rewrite.
            query.remove(KEY_ORIGINAL_EDITABLE);
            query.remove(KEY_RENDER_SIDE_BY_SIDE);
        }
    }

    query.append(KEY_EDITOR_TYPE, state.kind.as_str());
    query.append(KEY_LANGUAGE, &state.language);
    query
}

/// Rewrite only the `language` parameter, moving it to the end.
///
/// Every other pair keeps its value and relative order untouched.
pub fn encode_language(language: &str, previous: &Query) -> Query {
    let mut query = previous.clone();
    query.remove(KEY_LANGUAGE);
    query.append(KEY_LANGUAGE, language);
    query
}

/// Boolean parameters accept exactly `true` or `false`.
fn parse_bool_param(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Update an optional key: replace in place when already explicit, append
/// only when the value differs from the built-in default, and otherwise
/// leave it absent so shareable links stay minimal.
fn set_optional(query: &mut Query, key: &str, value: &str, default: &str) {
    if query.contains(key) || value != default {
        query.set(key, value);
    }
}
