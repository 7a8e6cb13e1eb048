//! Terminal user interface components and rendering
//!
//! The widget itself lives in [`components`]; [`app_component`] and
//! [`renderer`] make up the demo application that mounts it.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
