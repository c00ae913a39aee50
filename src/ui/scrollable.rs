//! 内容视图的滚动能力探测

/// 被包裹的内容视图需要暴露的滚动能力
///
/// 两个查询反映内容在当前位置是否还有剩余滚动空间，
/// 控制器据此判断拖动手势应该捕获还是透传给内容。
pub trait ScrollableContent {
    /// 是否还能向上滚动（未到顶部）
    fn can_scroll_up(&self) -> bool;

    /// 是否还能向下滚动（未到底部）
    fn can_scroll_down(&self) -> bool;
}

/// 单次事件处理时的滚动能力快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub can_scroll_up: bool,
    pub can_scroll_down: bool,
}

impl ScrollState {
    pub fn probe(content: &dyn ScrollableContent) -> Self {
        Self {
            can_scroll_up: content.can_scroll_up(),
            can_scroll_down: content.can_scroll_down(),
        }
    }
}
