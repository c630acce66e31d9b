pub mod app;
pub mod demo_controls;
pub mod toast_container;
pub mod toast_context;

pub use app::App;
pub use demo_controls::DemoControls;
pub use toast_container::{container_class, toast_class, ToastContainer};
pub use toast_context::{use_toast_store, use_toasts, ToastProvider, ToastState};
