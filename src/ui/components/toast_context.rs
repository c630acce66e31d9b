use crate::toast::{Toast, ToastId, ToastKind, ToastStore};
use dioxus::prelude::*;
use tracing::debug;

/// Toast list as seen by components, plus the store it mirrors
#[derive(Clone)]
pub struct ToastState {
    toasts: Signal<Vec<Toast>>,
    store: ToastStore,
}

impl ToastState {
    /// Active toasts, in display order
    pub fn toasts(&self) -> ReadOnlySignal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Request removal of a toast. Unknown ids are ignored.
    pub fn remove_toast(&self, id: &ToastId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            let mut toasts = self.toasts;
            toasts.set(self.store.snapshot());
        }
        removed
    }

    pub fn add_toast(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = self.store.add(kind, message);
        let mut toasts = self.toasts;
        toasts.set(self.store.snapshot());
        id
    }

    pub fn clear(&self) {
        self.store.clear();
        let mut toasts = self.toasts;
        toasts.set(Vec::new());
    }

    pub fn store(&self) -> ToastStore {
        self.store.clone()
    }
}

/// Provider component to make the toast list available throughout the app
#[component]
pub fn ToastProvider(store: ToastStore, children: Element) -> Element {
    let store = use_hook(move || store);
    let toasts = use_signal(|| store.snapshot());
    let state = ToastState {
        toasts,
        store: store.clone(),
    };

    use_context_provider(|| state.clone());

    // Mirror store changes made outside the UI (feed thread, other handles)
    use_effect({
        let store = store.clone();
        move || {
            let store = store.clone();
            let mut toasts = toasts;
            spawn(async move {
                let mut rx = store.subscribe();
                toasts.set(rx.borrow_and_update().clone());
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    debug!("Toast store changed, {} active", next.len());
                    toasts.set(next);
                }
            });
        }
    });

    rsx! {
        {children}
    }
}

/// Hook to access the active toasts and the removal operation
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

/// Hook to access the underlying store, for producers
pub fn use_toast_store() -> ToastStore {
    use_toasts().store()
}
