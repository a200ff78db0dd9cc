//! Sync controller: one-time construction, then live URL synchronization.
//!
//! One instance per page load, two phases, no transitions back. Bootstrap
//! decodes the query string, constructs the widget, and backfills the URL
//! so every copied link is a complete snapshot of the active configuration;
//! afterwards [`SyncController::pump`] drains the widget's change
//! notifications into history rewrites. Handlers are synchronous,
//! idempotent, and only ever touch the URL, never the widget.

use anyhow::{Context, Result};
use linkpad_config::{
    Decoded, DiffOptions, EditorKind, LinkState, Query, decode, encode, encode_language,
};

use crate::host::PageHost;
use crate::widget::{CodeEditor, DiffEditor, Document, WidgetEvent, WidgetFactory};

/// The constructed widget, by kind.
enum EditorHandle {
    Single(Box<dyn CodeEditor>),
    Diff(Box<dyn DiffEditor>),
}

/// Owns the page-host handle and the widget instance, and keeps the URL in
/// step with the widget's live configuration.
///
/// All state is held here explicitly rather than as ambient globals, so the
/// whole flow runs against an in-memory host and a fake widget in tests.
pub struct SyncController<H: PageHost> {
    host: H,
    state: LinkState,
    editor: EditorHandle,
}

impl<H: PageHost> std::fmt::Debug for SyncController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<H: PageHost> SyncController<H> {
    /// Decode the URL, construct the widget, and backfill the URL.
    ///
    /// Returns `Ok(None)` when the page exposes no mount point: no widget,
    /// no sync, no error. Widget construction failures are propagated; they
    /// are collaborator faults, not configuration problems (those degrade
    /// to defaults inside the codec and never fail).
    pub fn bootstrap(mut host: H, factory: &mut dyn WidgetFactory) -> Result<Option<Self>> {
        let query = Query::parse(&host.query_string());
        let Decoded { state, backfilled } = decode(&query);

        let Some(mount) = host.mount_point() else {
            log::warn!("mount element missing, skipping editor construction");
            return Ok(None);
        };

        let options = state.editor_options();
        let editor = match state.kind {
            EditorKind::Normal => {
                let editor = factory
                    .create_editor(mount, &options)
                    .context("constructing single editor")?;
                EditorHandle::Single(editor)
            }
            EditorKind::Diff => {
                let diff_options = state.diff_options();
                let mut editor = factory
                    .create_diff_editor(mount, &options, &diff_options)
                    .context("constructing comparison editor")?;
                editor.bind(
                    Document::empty(state.language.clone()),
                    Document::empty(state.language.clone()),
                );
                EditorHandle::Diff(editor)
            }
        };
        log::info!(
            "constructed {} editor: language '{}', theme '{}', font size {}",
            state.kind,
            state.language,
            state.theme,
            state.font_size
        );

        let mut controller = Self {
            host,
            state,
            editor,
        };
        if backfilled {
            // Make the defaulted parameters explicit so the first copied
            // link already reproduces the active configuration.
            controller.rewrite(&query);
        }
        Ok(Some(controller))
    }

    /// Drain pending widget notifications into URL rewrites.
    ///
    /// Call whenever the widget may have signaled. Returns the number of
    /// notifications handled. Rewrites are strictly ordered by the event
    /// sequence; the last observed change wins.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.next_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// State the controller currently considers authoritative.
    pub fn state(&self) -> &LinkState {
        &self.state
    }

    fn next_event(&mut self) -> Option<WidgetEvent> {
        match &mut self.editor {
            EditorHandle::Single(editor) => editor.try_recv(),
            EditorHandle::Diff(editor) => editor.modified().try_recv(),
        }
    }

    fn handle_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::OptionsChanged => {
                let (live, diff, language) = match &mut self.editor {
                    EditorHandle::Single(editor) => {
                        (editor.live_options(), None, editor.language_id())
                    }
                    EditorHandle::Diff(editor) => {
                        let diff = editor.diff_options();
                        let modified = editor.modified();
                        (modified.live_options(), Some(diff), modified.language_id())
                    }
                };
                self.state.font_size = live.font_size;
                self.state.word_wrap = live.word_wrap;
                self.state.minimap = live.minimap;
                self.state.language = language;
                if let Some(diff) = diff {
                    self.state.diff = Some(DiffOptions {
                        original_editable: diff.original_editable,
                        render_side_by_side: diff.render_side_by_side,
                    });
                }
                let previous = Query::parse(&self.host.query_string());
                self.rewrite(&previous);
            }
            WidgetEvent::LanguageChanged(language) => {
                self.state.language = language;
                let previous = Query::parse(&self.host.query_string());
                let rewritten = encode_language(&self.state.language, &previous);
                self.replace(rewritten);
            }
        }
    }

    fn rewrite(&mut self, previous: &Query) {
        let rewritten = encode(&self.state, previous);
        self.replace(rewritten);
    }

    fn replace(&mut self, query: Query) {
        let serialized = query.to_query_string();
        log::trace!("replacing query string: {serialized}");
        self.host.replace_query_string(&serialized);
    }
}
