//! Mini Refresh - 双向下拉刷新/上拉加载手势引擎
//! 包裹一个可滚动内容视图和 header/footer 指示器，
//! 由垂直拖动手势驱动面板露出、回弹与刷新/加载触发

mod config;
mod geometry;

pub use config::{RefreshConfig, DEFAULT_DRAG_RATE, DEFAULT_TOUCH_SLOP};
pub use geometry::{PanelBounds, PanelGeometry};

// UI 控件层
pub mod ui;

// 事件系统
pub mod event;

// 单元测试
#[cfg(test)]
mod tests;
