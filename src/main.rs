use dioxus::LaunchBuilder;
use toast_overlay::config::Config;
use toast_overlay::feed;
use toast_overlay::toast::ToastStore;
use toast_overlay::ui::App;
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!(
        "Starting toast overlay: layout={}, stdin feed={}",
        config.layout, config.read_stdin_feed
    );

    let store = ToastStore::new();
    if config.read_stdin_feed {
        feed::spawn_stdin_feed(store.clone());
    }

    launch_app(config, store);
}

fn launch_app(config: Config, store: ToastStore) {
    LaunchBuilder::desktop()
        .with_cfg(toast_overlay::ui::make_config(&config))
        .with_context(config)
        .with_context(store)
        .launch(App);
}
