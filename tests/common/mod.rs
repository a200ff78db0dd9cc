//! Shared integration test doubles for linkpad.
//!
//! Provides an in-memory page host and scriptable fake widgets used across
//! the `tests/` integration test suite. The controller takes ownership of
//! the host and the constructed editors, so every double hands out a
//! cloneable observation handle (`Rc<RefCell<…>>`) the test keeps for
//! itself.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{FakePageHost, FakeWidgetFactory};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use linkpad::config::{DiffOptions, EditorOptions};
use linkpad::{
    CodeEditor, DiffEditor, DiffLiveOptions, Document, LiveOptions, MOUNT_ELEMENT_ID, MountPoint,
    PageHost, WidgetError, WidgetEvent, WidgetFactory,
};

// ---------------------------------------------------------------------------
// Page host double
// ---------------------------------------------------------------------------

struct PageState {
    query: String,
    replacements: usize,
}

/// Observation handle onto a [`FakePageHost`], kept by the test after the
/// controller takes ownership of the host itself.
#[derive(Clone)]
pub struct PageHandle {
    inner: Rc<RefCell<PageState>>,
}

impl PageHandle {
    /// Current query string of the fake page.
    pub fn query(&self) -> String {
        self.inner.borrow().query.clone()
    }

    /// How many times the history entry has been replaced.
    pub fn replacements(&self) -> usize {
        self.inner.borrow().replacements
    }
}

/// In-memory page double with a single mount element.
pub struct FakePageHost {
    inner: Rc<RefCell<PageState>>,
    mounted: bool,
}

impl FakePageHost {
    /// A page whose mount element exists, loaded with `query` (leading `?`
    /// accepted). Returns the host plus the observation handle.
    pub fn new(query: &str) -> (Self, PageHandle) {
        let inner = Rc::new(RefCell::new(PageState {
            query: query.trim_start_matches('?').to_string(),
            replacements: 0,
        }));
        let handle = PageHandle {
            inner: Rc::clone(&inner),
        };
        (
            Self {
                inner,
                mounted: true,
            },
            handle,
        )
    }

    /// A page without the expected mount element.
    pub fn unmounted(query: &str) -> (Self, PageHandle) {
        let (mut host, handle) = Self::new(query);
        host.mounted = false;
        (host, handle)
    }
}

impl PageHost for FakePageHost {
    fn query_string(&self) -> String {
        self.inner.borrow().query.clone()
    }

    fn replace_query_string(&mut self, query: &str) {
        let mut state = self.inner.borrow_mut();
        state.query = query.to_string();
        state.replacements += 1;
    }

    fn mount_point(&mut self) -> Option<MountPoint> {
        self.mounted.then(|| MountPoint::new(MOUNT_ELEMENT_ID))
    }
}

// ---------------------------------------------------------------------------
// Widget doubles
// ---------------------------------------------------------------------------

struct FakeEditorState {
    live: LiveOptions,
    language: String,
    pending: VecDeque<WidgetEvent>,
}

impl FakeEditorState {
    fn new() -> Self {
        Self {
            live: LiveOptions {
                font_size: 20,
                word_wrap: linkpad::config::WordWrap::On,
                minimap: true,
            },
            language: "plaintext".to_string(),
            pending: VecDeque::new(),
        }
    }
}

/// Scripting handle onto the fake editor (or the modified side of the fake
/// comparison editor). Used to simulate user-driven changes after the
/// controller owns the instance.
#[derive(Clone)]
pub struct FakeEditorHandle {
    inner: Rc<RefCell<FakeEditorState>>,
}

impl FakeEditorHandle {
    /// Simulate the user changing live options through the widget's own
    /// UI: updates the observed values and queues a notification.
    pub fn change_options(&self, live: LiveOptions) {
        let mut state = self.inner.borrow_mut();
        state.live = live;
        state.pending.push_back(WidgetEvent::OptionsChanged);
    }

    /// Simulate a language switch on the active document.
    pub fn change_language(&self, language: &str) {
        let mut state = self.inner.borrow_mut();
        state.language = language.to_string();
        state
            .pending
            .push_back(WidgetEvent::LanguageChanged(language.to_string()));
    }

    /// Live options currently observed on the fake instance.
    pub fn live_options(&self) -> LiveOptions {
        self.inner.borrow().live
    }
}

/// Fake single editor (also serves as the modified side of the fake
/// comparison editor).
pub struct FakeEditor {
    inner: Rc<RefCell<FakeEditorState>>,
}

impl CodeEditor for FakeEditor {
    fn live_options(&self) -> LiveOptions {
        self.inner.borrow().live
    }

    fn language_id(&self) -> String {
        self.inner.borrow().language.clone()
    }

    fn try_recv(&mut self) -> Option<WidgetEvent> {
        self.inner.borrow_mut().pending.pop_front()
    }
}

/// Fake comparison editor.
pub struct FakeDiffEditor {
    modified: FakeEditor,
    diff: Rc<RefCell<DiffLiveOptions>>,
    bound: Rc<RefCell<Option<(Document, Document)>>>,
}

impl DiffEditor for FakeDiffEditor {
    fn bind(&mut self, original: Document, modified: Document) {
        *self.bound.borrow_mut() = Some((original, modified));
    }

    fn modified(&mut self) -> &mut dyn CodeEditor {
        &mut self.modified
    }

    fn diff_options(&self) -> DiffLiveOptions {
        *self.diff.borrow()
    }
}

/// Factory double. Records every construction and shares state with the
/// instances it hands out, so tests can keep scripting them through
/// [`FakeWidgetFactory::editor`] after bootstrap.
pub struct FakeWidgetFactory {
    editor: Rc<RefCell<FakeEditorState>>,
    diff: Rc<RefCell<DiffLiveOptions>>,
    bound: Rc<RefCell<Option<(Document, Document)>>>,
    /// Options of every single-editor construction, in order.
    pub single_constructions: Vec<EditorOptions>,
    /// Options of every comparison-editor construction, in order.
    pub diff_constructions: Vec<(EditorOptions, DiffOptions)>,
}

impl FakeWidgetFactory {
    pub fn new() -> Self {
        Self {
            editor: Rc::new(RefCell::new(FakeEditorState::new())),
            diff: Rc::new(RefCell::new(DiffLiveOptions {
                original_editable: true,
                render_side_by_side: true,
            })),
            bound: Rc::new(RefCell::new(None)),
            single_constructions: Vec::new(),
            diff_constructions: Vec::new(),
        }
    }

    /// Scripting handle onto the (future) editor instance; valid both
    /// before and after construction.
    pub fn editor(&self) -> FakeEditorHandle {
        FakeEditorHandle {
            inner: Rc::clone(&self.editor),
        }
    }

    /// Documents bound into the comparison editor, if any were.
    pub fn bound_documents(&self) -> Option<(Document, Document)> {
        self.bound.borrow().clone()
    }

    /// Overwrite the comparison flags the fake instance reports.
    pub fn set_diff_live(&self, diff: DiffLiveOptions) {
        *self.diff.borrow_mut() = diff;
    }

    fn seed_editor_state(&self, options: &EditorOptions) {
        let mut state = self.editor.borrow_mut();
        state.live = LiveOptions {
            font_size: options.font_size,
            word_wrap: options.word_wrap,
            minimap: options.minimap.enabled,
        };
        state.language = options.language.clone();
    }
}

impl Default for FakeWidgetFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetFactory for FakeWidgetFactory {
    fn create_editor(
        &mut self,
        _mount: MountPoint,
        options: &EditorOptions,
    ) -> Result<Box<dyn CodeEditor>, WidgetError> {
        self.seed_editor_state(options);
        self.single_constructions.push(options.clone());
        Ok(Box::new(FakeEditor {
            inner: Rc::clone(&self.editor),
        }))
    }

    fn create_diff_editor(
        &mut self,
        _mount: MountPoint,
        options: &EditorOptions,
        diff: &DiffOptions,
    ) -> Result<Box<dyn DiffEditor>, WidgetError> {
        self.seed_editor_state(options);
        *self.diff.borrow_mut() = DiffLiveOptions {
            original_editable: diff.original_editable,
            render_side_by_side: diff.render_side_by_side,
        };
        self.diff_constructions.push((options.clone(), *diff));
        Ok(Box::new(FakeDiffEditor {
            modified: FakeEditor {
                inner: Rc::clone(&self.editor),
            },
            diff: Rc::clone(&self.diff),
            bound: Rc::clone(&self.bound),
        }))
    }
}

/// Factory whose constructions always fail, for error-propagation tests.
pub struct FailingFactory;

impl WidgetFactory for FailingFactory {
    fn create_editor(
        &mut self,
        _mount: MountPoint,
        _options: &EditorOptions,
    ) -> Result<Box<dyn CodeEditor>, WidgetError> {
        Err(WidgetError::Construction("mount detached".to_string()))
    }

    fn create_diff_editor(
        &mut self,
        _mount: MountPoint,
        _options: &EditorOptions,
        _diff: &DiffOptions,
    ) -> Result<Box<dyn DiffEditor>, WidgetError> {
        Err(WidgetError::Unsupported("diff"))
    }
}
