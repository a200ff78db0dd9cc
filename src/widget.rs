//! Widget collaborator contract.
//!
//! The editing widget itself is an external collaborator; the controller
//! reaches it only through these traits, so it can be exercised against
//! scriptable doubles. Change notifications are drained through
//! [`CodeEditor::try_recv`] pull semantics. None of the traits exposes a
//! reconfiguration surface to the controller, so URL rewrites can never
//! feed back into the widget.

use linkpad_config::{DiffOptions, EditorOptions, WordWrap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::host::MountPoint;

/// A text model bound into an editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Initial contents.
    pub text: String,
    /// Language identifier from the widget's language registry.
    pub language: String,
}

impl Document {
    /// Empty document in the given language.
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            language: language.into(),
        }
    }
}

/// Live option values as currently observed on an editor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveOptions {
    pub font_size: u32,
    pub word_wrap: WordWrap,
    /// Minimap visibility.
    pub minimap: bool,
}

/// Comparison-mode option values as currently observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLiveOptions {
    pub original_editable: bool,
    pub render_side_by_side: bool,
}

/// Change notification delivered by an editor instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A live option changed through the widget's own UI or API; the
    /// handler reads the current values off the instance.
    OptionsChanged,
    /// The active document's language changed; carries the new identifier.
    LanguageChanged(String),
}

/// Construction failure reported by the external widget.
///
/// Outside the degrade-to-defaults taxonomy: configuration problems never
/// produce one of these, only collaborator faults do.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The widget could not attach to the mount element.
    #[error("editor construction failed: {0}")]
    Construction(String),

    /// The collaborator does not provide the requested editor kind.
    #[error("unsupported editor kind: {0}")]
    Unsupported(&'static str),
}

/// A live single-editor instance, or the modified side of a comparison
/// editor.
pub trait CodeEditor {
    /// Current live option values.
    fn live_options(&self) -> LiveOptions;

    /// Language identifier of the active document.
    fn language_id(&self) -> String;

    /// Next pending change notification, if any. Non-blocking.
    fn try_recv(&mut self) -> Option<WidgetEvent>;
}

/// A live side-by-side comparison instance.
pub trait DiffEditor {
    /// Bind the two independent text models.
    fn bind(&mut self, original: Document, modified: Document);

    /// The modified-side sub-editor. The only notification source the
    /// controller observes in comparison mode; edits on the original side
    /// reach the URL solely through the editability flag fixed at
    /// construction.
    fn modified(&mut self) -> &mut dyn CodeEditor;

    /// Current comparison option values.
    fn diff_options(&self) -> DiffLiveOptions;
}

/// Constructs widget instances on a mount point.
pub trait WidgetFactory {
    /// Construct a single editor with the merged options.
    fn create_editor(
        &mut self,
        mount: MountPoint,
        options: &EditorOptions,
    ) -> Result<Box<dyn CodeEditor>, WidgetError>;

    /// Construct a comparison editor with the merged options plus the
    /// comparison-specific ones.
    fn create_diff_editor(
        &mut self,
        mount: MountPoint,
        options: &EditorOptions,
        diff: &DiffOptions,
    ) -> Result<Box<dyn DiffEditor>, WidgetError>;
}
