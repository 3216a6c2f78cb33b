//! Scoped style injection.
//!
//! Models the document-head slot the playground owns: a single style
//! container with a fixed id. `apply` removes any previous owned container
//! before inserting the new one, so at most one exists at any time, and the
//! returned handle removes exactly the container it created when released.
//!
//! Ownership is tracked by a serial number rather than the container id, so a
//! stale handle dropped after a newer `apply` never tears down the newer
//! container.

use crate::sheet::build_style_sheet;
use crate::theme::PreviewTheme;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Fixed id of the one container the playground owns.
pub const STYLE_CONTAINER_ID: &str = "playground-style-container";

/// One injected style container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleContainer {
    pub id: String,
    pub css: String,
    serial: u64,
}

#[derive(Default)]
struct RegistryInner {
    containers: Vec<StyleContainer>,
    next_serial: u64,
}

/// The playground's view of the document head.
///
/// Single-threaded by contract; all mutation happens through `apply` and
/// handle release on the UI thread.
#[derive(Clone, Default)]
pub struct StyleRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the style sheet for `(theme, custom_styles)`.
    ///
    /// Any previously owned container is removed first; the registry never
    /// holds two owned containers, no matter how many times this is called.
    pub fn apply(&self, theme: PreviewTheme, custom_styles: &str) -> ScopedStyleHandle {
        let css = build_style_sheet(theme, custom_styles);
        let mut inner = self.inner.borrow_mut();

        let removed = inner.containers.len();
        inner.containers.retain(|c| c.id != STYLE_CONTAINER_ID);
        if removed != inner.containers.len() {
            debug!(id = STYLE_CONTAINER_ID, "Replaced existing style container");
        }

        let serial = inner.next_serial;
        inner.next_serial += 1;
        inner.containers.push(StyleContainer {
            id: STYLE_CONTAINER_ID.to_owned(),
            css,
            serial,
        });
        debug!(id = STYLE_CONTAINER_ID, serial, theme = theme.name(), "Attached style container");

        ScopedStyleHandle {
            registry: Rc::downgrade(&self.inner),
            serial,
        }
    }

    /// Number of live containers (0 or 1 under the ownership discipline).
    pub fn container_count(&self) -> usize {
        self.inner.borrow().containers.len()
    }

    /// The currently attached container, if any.
    pub fn container(&self) -> Option<StyleContainer> {
        self.inner.borrow().containers.last().cloned()
    }

    /// Full injected CSS, empty when nothing is attached.
    pub fn rendered_css(&self) -> String {
        self.inner
            .borrow()
            .containers
            .iter()
            .map(|c| c.css.as_str())
            .collect()
    }
}

/// Release handle for one injected container.
///
/// Dropping it removes the container it created, and only that one: if a
/// newer `apply` already replaced the container, the drop is a no-op.
#[must_use = "dropping the handle immediately removes the injected styles"]
pub struct ScopedStyleHandle {
    registry: Weak<RefCell<RegistryInner>>,
    serial: u64,
}

impl ScopedStyleHandle {
    /// True while the container this handle created is still attached.
    pub fn is_attached(&self) -> bool {
        self.registry
            .upgrade()
            .map(|inner| {
                inner
                    .borrow()
                    .containers
                    .iter()
                    .any(|c| c.serial == self.serial)
            })
            .unwrap_or(false)
    }

    /// Remove the injected styles now instead of at scope end.
    pub fn release(self) {}
}

impl Drop for ScopedStyleHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut inner = inner.borrow_mut();
            let before = inner.containers.len();
            let serial = self.serial;
            inner.containers.retain(|c| c.serial != serial);
            if inner.containers.len() != before {
                debug!(serial, "Released style container");
            }
        }
    }
}
