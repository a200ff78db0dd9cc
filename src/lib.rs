//! URL-driven configuration and live synchronization for embeddable code
//! editors.
//!
//! linkpad reads key/value options from a page URL's query string, applies
//! them as editor configuration, constructs either a single editor or a
//! side-by-side comparison editor through the widget collaborator contract,
//! and keeps the URL synchronized (without navigation) as the user changes
//! settings interactively. The pure codec half lives in the
//! `linkpad-config` crate; this crate owns the side-effecting half:
//!
//! - The page-host contract (query access, history replacement, mount point)
//! - The widget collaborator contract and its change-notification stream
//! - The sync controller orchestrating bootstrap and URL rewrites

/// Library version (root crate version, for use by embedders).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod host;
pub mod sync;
pub mod widget;

pub use host::{MOUNT_ELEMENT_ID, MountPoint, PageHost};
pub use sync::SyncController;
pub use widget::{
    CodeEditor, DiffEditor, DiffLiveOptions, Document, LiveOptions, WidgetError, WidgetEvent,
    WidgetFactory,
};

// Re-export the codec crate under the name embedders consume it by.
pub use linkpad_config as config;
