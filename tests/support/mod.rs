#![allow(dead_code)]

use dioxus::html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
use std::any::Any;
use std::rc::Rc;
use std::time::Duration;
use toast_overlay::ui::{DemoControls, ToastContainer, ToastProvider};
use toast_overlay::{ToastLayout, ToastStore};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    store: ToastStore,
    layout: ToastLayout,
    with_controls: bool,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    rsx! {
        ToastProvider { store: props.store,
            if props.with_controls {
                DemoControls {}
            }
            ToastContainer { layout: props.layout }
        }
    }
}

fn new_dom(store: &ToastStore, layout: ToastLayout, with_controls: bool) -> VirtualDom {
    VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            store: store.clone(),
            layout,
            with_controls,
        },
    )
}

/// Render the container for `store` to an HTML string
pub fn render_container(store: &ToastStore, layout: ToastLayout) -> String {
    let mut dom = new_dom(store, layout, false);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A mounted container that keeps running between renders
pub struct MountedToasts {
    pub dom: VirtualDom,
    click_targets: Vec<ElementId>,
}

impl MountedToasts {
    pub fn new(store: &ToastStore, layout: ToastLayout) -> Self {
        Self::build(new_dom(store, layout, false))
    }

    pub fn with_controls(store: &ToastStore) -> Self {
        Self::build(new_dom(store, ToastLayout::default(), true))
    }

    fn build(mut dom: VirtualDom) -> Self {
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        let click_targets = click_listeners(&mutations);
        MountedToasts { dom, click_targets }
    }

    /// Elements that registered a click listener during the first render, in mount order
    pub fn click_targets(&self) -> &[ElementId] {
        &self.click_targets
    }

    /// Dispatch one click to `element` and apply the resulting render
    pub fn click(&mut self, element: ElementId) {
        dioxus::html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, element);
        self.dom.render_immediate(&mut NoOpMutations);
    }

    /// Let spawned tasks run until `done` holds for the rendered HTML, or give up
    pub async fn settle_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        for _ in 0..10 {
            let html = self.html();
            if done(&html) {
                return html;
            }
            let _ = tokio::time::timeout(Duration::from_millis(100), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
        }
        self.html()
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

fn click_listeners(mutations: &Mutations) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name.as_str() == "click" => Some(*id),
            _ => None,
        })
        .collect()
}
