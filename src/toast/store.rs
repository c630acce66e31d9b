use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use super::{Toast, ToastError, ToastId, ToastKind};

/// Shared, observable list of active toasts
///
/// Insertion order is display order. Cloning is cheap and every clone
/// refers to the same list. Subscribers are notified only when the list
/// actually changes.
#[derive(Clone, Debug)]
pub struct ToastStore {
    inner: Arc<watch::Sender<Vec<Toast>>>,
}

impl PartialEq for ToastStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        ToastStore {
            inner: Arc::new(tx),
        }
    }

    /// Append a new toast and return its generated id
    pub fn add(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let toast = Toast::new(kind, message);
        let id = toast.id.clone();
        debug!("Adding {} toast {}", kind, id);
        self.inner.send_modify(|list| list.push(toast));
        id
    }

    /// Append a caller-built toast, rejecting ids already in the list
    pub fn push(&self, toast: Toast) -> Result<(), ToastError> {
        let id = toast.id.clone();
        let added = self.inner.send_if_modified(|list| {
            if list.iter().any(|existing| existing.id == toast.id) {
                false
            } else {
                list.push(toast);
                true
            }
        });

        if added {
            debug!("Pushed toast {}", id);
            Ok(())
        } else {
            Err(ToastError::DuplicateId(id))
        }
    }

    /// Remove the toast with `id`. Unknown ids are a no-op and return false.
    pub fn remove(&self, id: &ToastId) -> bool {
        let removed = self.inner.send_if_modified(|list| {
            let before = list.len();
            list.retain(|toast| &toast.id != id);
            list.len() != before
        });
        if removed {
            debug!("Removed toast {}", id);
        }
        removed
    }

    pub fn clear(&self) {
        self.inner.send_if_modified(|list| {
            if list.is_empty() {
                false
            } else {
                list.clear();
                true
            }
        });
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn contains(&self, id: &ToastId) -> bool {
        self.inner.borrow().iter().any(|toast| &toast.id == id)
    }

    /// Receive the full list every time it changes
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.subscribe()
    }
}
