//! Reusable UI components

pub mod item_row;
pub mod modal;
pub mod scrollbar_helper;
pub mod select_box_component;

// Component exports
pub use item_row::{CancelRenderer, EmptyRenderer, ItemRenderer, ValueChangeHandler};
pub use scrollbar_helper::ScrollbarHelper;
pub use select_box_component::{SelectBoxComponent, SelectBoxOptions, SelectBoxStyle};
