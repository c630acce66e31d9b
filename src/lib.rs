// Library exports for integration tests and reusable components

pub mod config;
pub mod feed;
pub mod toast;
pub mod ui;

pub use config::Config;
pub use toast::{
    ParseKindError, ParseLayoutError, Toast, ToastError, ToastId, ToastKind, ToastLayout,
    ToastStore,
};
