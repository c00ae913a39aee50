//! 单元测试模块
//! 覆盖手势状态机、容器布局、配置解析

pub mod config_tests;
pub mod layout_tests;
