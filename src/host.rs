//! Page-host contract.
//!
//! The controller never touches the surrounding page directly; everything
//! it needs goes through [`PageHost`], which keeps the synchronization
//! logic testable against an in-memory double.

/// Element id the host page is expected to expose as the mount point.
pub const MOUNT_ELEMENT_ID: &str = "editor-main";

/// Owned handle to the page's single expected mount element.
///
/// Consumed by widget construction, so a mount hosts at most one widget per
/// page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    element_id: String,
}

impl MountPoint {
    /// Handle to the element with the given id. Host implementations call
    /// this after verifying the element exists.
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    /// Id of the element the widget attaches to.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}

/// Access to the page surrounding the editor.
///
/// Contract for implementations bridging to a real page environment:
///
/// - `replace_query_string` must swap the current history entry without
///   navigating, and must preserve the page path and fragment.
/// - `mount_point` returns `None` when the expected element is missing; the
///   controller treats that as a tolerated environment precondition and
///   skips construction, it is not an error to report.
pub trait PageHost {
    /// Current query string, without the leading `?`.
    fn query_string(&self) -> String;

    /// Replace the query string in the current history entry, without
    /// navigation. `query` carries no leading `?`.
    fn replace_query_string(&mut self, query: &str);

    /// The mount element, if the page exposes one.
    fn mount_point(&mut self) -> Option<MountPoint>;
}
