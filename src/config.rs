//! 手势配置

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 默认阻尼系数
pub const DEFAULT_DRAG_RATE: f32 = 0.5;

/// 默认触发拖动的最小位移（像素）
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// 下拉刷新/上拉加载手势配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshConfig {
    /// 阻尼系数：面板位移 = 指针位移 × 阻尼，小于 1 产生"阻力"手感
    pub drag_rate: f32,
    /// 触发拖动识别的最小位移，过滤点击和抖动
    pub touch_slop: f32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            drag_rate: DEFAULT_DRAG_RATE,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}

impl RefreshConfig {
    /// 从标记属性解析配置，缺失或非法的值退回默认
    pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            drag_rate: attrs
                .get("drag-rate")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.drag_rate),
            touch_slop: attrs
                .get("touch-slop")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.touch_slop),
        }
    }
}
