//! UI 控件层 - 手势控制器与容器

mod refresh_controller;
mod refresh_layout;
mod scrollable;

pub use refresh_controller::{
    pending_event, GestureState, Orientation, PanelEvent, RefreshController, RefreshLoadListener,
};
pub use refresh_layout::{Panel, PanelId, RefreshLoadLayout};
pub use scrollable::{ScrollState, ScrollableContent};
