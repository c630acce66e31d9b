use crate::config::Config;
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

pub fn make_config(config: &Config) -> DioxusConfig {
    DioxusConfig::default().with_window(make_window(config))
}

fn make_window(config: &Config) -> WindowBuilder {
    WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(900, 600))
}
