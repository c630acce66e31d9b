use crate::toast::ToastKind;
use dioxus::prelude::*;

use super::toast_context::use_toasts;

/// Buttons that raise sample toasts
#[component]
pub fn DemoControls() -> Element {
    let toasts = use_toasts();
    let mut counter = use_signal(|| 0u32);
    let toasts_for_clear = toasts.clone();

    let raise = move |kind: ToastKind| {
        counter += 1;
        let text = match kind {
            ToastKind::Success => "Saved",
            ToastKind::Error => "Failed",
            ToastKind::Info => "Heads up",
        };
        toasts.add_toast(kind, format!("{} #{}", text, counter()));
    };

    rsx! {
        div { class: "container mx-auto p-6 max-w-2xl",
            h1 { class: "text-3xl font-bold mb-6", "Notifications" }
            p { class: "text-gray-400 mb-4", "Click a toast to dismiss it." }
            div { class: "flex gap-3",
                button {
                    class: "px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg",
                    onclick: {
                        let mut raise = raise.clone();
                        move |_| raise(ToastKind::Success)
                    },
                    "Success"
                }
                button {
                    class: "px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg",
                    onclick: {
                        let mut raise = raise.clone();
                        move |_| raise(ToastKind::Error)
                    },
                    "Error"
                }
                button {
                    class: "px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg",
                    onclick: {
                        let mut raise = raise.clone();
                        move |_| raise(ToastKind::Info)
                    },
                    "Info"
                }
                button {
                    class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg",
                    onclick: move |_| toasts_for_clear.clear(),
                    "Clear all"
                }
            }
        }
    }
}
