use crate::toast::{Toast, ToastId, ToastKind, ToastLayout};
use dioxus::prelude::*;
use tracing::debug;

use super::toast_context::use_toasts;

/// Overlay classes for the container. The container ignores pointer events
/// so only the toasts themselves intercept clicks.
pub fn container_class(layout: ToastLayout) -> &'static str {
    match layout {
        ToastLayout::FloatingCompact => {
            "fixed bottom-4 right-4 z-[4000] flex flex-col gap-2 max-w-sm w-full pointer-events-none"
        }
        ToastLayout::StackedBanner => {
            "fixed top-0 inset-x-0 z-[4000] flex flex-col pointer-events-none"
        }
    }
}

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600 text-white",
        ToastKind::Error => "bg-red-600 text-white",
        ToastKind::Info => "bg-blue-600 text-white",
    }
}

pub fn toast_class(layout: ToastLayout, kind: ToastKind) -> String {
    let shape = match layout {
        ToastLayout::FloatingCompact => {
            "pointer-events-auto cursor-pointer px-4 py-3 rounded-lg shadow-lg text-sm"
        }
        ToastLayout::StackedBanner => {
            "pointer-events-auto cursor-pointer w-full px-6 py-3 text-center font-medium border-b border-black/10"
        }
    };
    format!("{} {}", shape, kind_class(kind))
}

/// Renders every active toast, in order. Clicking a toast dismisses it.
#[component]
pub fn ToastContainer(#[props(default)] layout: ToastLayout) -> Element {
    let state = use_toasts();
    let toasts = state.toasts();
    let on_dismiss = use_callback(move |id: ToastId| {
        state.remove_toast(&id);
    });

    debug!("Rendering toast container with {} toasts", toasts.read().len());

    rsx! {
        div {
            class: container_class(layout),
            "aria-live": "polite",
            "data-toast-layout": layout.as_str(),
            for toast in toasts.read().iter() {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    layout,
                    on_dismiss,
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, layout: ToastLayout, on_dismiss: EventHandler<ToastId>) -> Element {
    let id = toast.id.clone();

    rsx! {
        div {
            class: toast_class(layout, toast.kind),
            role: "status",
            "data-toast-id": "{toast.id}",
            "data-toast-kind": toast.kind.as_str(),
            onclick: move |_| on_dismiss.call(id.clone()),
            "{toast.message}"
        }
    }
}
