use crate::config::use_config;
use crate::toast::ToastStore;
use crate::ui::{MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::demo_controls::DemoControls;
use super::toast_container::ToastContainer;
use super::toast_context::ToastProvider;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let config = use_config();
    let store = use_context::<ToastStore>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ToastProvider { store,
            DemoControls {}
            // Mounted last so it sits above the rest of the page
            ToastContainer { layout: config.layout }
        }
    }
}
