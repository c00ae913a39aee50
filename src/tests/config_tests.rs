//! 配置解析单元测试
//! 测试默认值、标记属性解析和 JSON 反序列化

use std::collections::HashMap;

use crate::config::{RefreshConfig, DEFAULT_DRAG_RATE, DEFAULT_TOUCH_SLOP};

/// 测试默认配置
#[test]
fn test_default_config() {
    let config = RefreshConfig::default();
    assert_eq!(config.drag_rate, DEFAULT_DRAG_RATE);
    assert_eq!(config.touch_slop, DEFAULT_TOUCH_SLOP);
}

/// 测试从标记属性解析配置
#[test]
fn test_from_attrs() {
    let mut attrs = HashMap::new();
    attrs.insert("drag-rate".to_string(), "0.3".to_string());
    attrs.insert("touch-slop".to_string(), "12".to_string());

    let config = RefreshConfig::from_attrs(&attrs);
    assert_eq!(config.drag_rate, 0.3);
    assert_eq!(config.touch_slop, 12.0);
}

/// 测试属性缺失或非法时退回默认值
#[test]
fn test_from_attrs_fallback() {
    let empty = HashMap::new();
    assert_eq!(RefreshConfig::from_attrs(&empty), RefreshConfig::default());

    let mut bad = HashMap::new();
    bad.insert("drag-rate".to_string(), "abc".to_string());
    bad.insert("touch-slop".to_string(), "6".to_string());

    let config = RefreshConfig::from_attrs(&bad);
    assert_eq!(config.drag_rate, DEFAULT_DRAG_RATE);
    assert_eq!(config.touch_slop, 6.0);
}

/// 测试从 JSON 反序列化（camelCase 字段）
#[test]
fn test_config_from_json() {
    let config: RefreshConfig =
        serde_json::from_str(r#"{"dragRate":0.4,"touchSlop":10.0}"#).unwrap();
    assert_eq!(config.drag_rate, 0.4);
    assert_eq!(config.touch_slop, 10.0);
}

/// 测试部分字段缺失的 JSON 用默认值补齐
#[test]
fn test_config_from_partial_json() {
    let config: RefreshConfig = serde_json::from_str(r#"{"dragRate":0.25}"#).unwrap();
    assert_eq!(config.drag_rate, 0.25);
    assert_eq!(config.touch_slop, DEFAULT_TOUCH_SLOP);

    let config: RefreshConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RefreshConfig::default());
}
