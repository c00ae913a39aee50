//! 容器单元测试
//! 测试面板槽位、静止布局、事件入口和监听器分发

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::RefreshConfig;
use crate::event::{Touch, TouchEvent};
use crate::ui::{
    GestureState, Orientation, Panel, PanelEvent, RefreshLoadLayout, RefreshLoadListener,
    ScrollableContent,
};

/// 滚动能力固定的测试内容
struct FixedContent {
    up: bool,
    down: bool,
}

impl ScrollableContent for FixedContent {
    fn can_scroll_up(&self) -> bool {
        self.up
    }

    fn can_scroll_down(&self) -> bool {
        self.down
    }
}

/// 把回调记录进共享向量的监听器
struct RecordingListener {
    events: Rc<RefCell<Vec<PanelEvent>>>,
}

impl RefreshLoadListener for RecordingListener {
    fn on_refresh(&mut self, orientation: Orientation) {
        self.events.borrow_mut().push(PanelEvent::Refresh(orientation));
    }

    fn on_show(&mut self, orientation: Orientation) {
        self.events.borrow_mut().push(PanelEvent::Show(orientation));
    }

    fn on_hide(&mut self, orientation: Orientation) {
        self.events.borrow_mut().push(PanelEvent::Hide(orientation));
    }
}

/// 创建注册齐全并完成布局的容器（内容在顶部），返回容器和事件记录
fn ready_layout() -> (RefreshLoadLayout, Rc<RefCell<Vec<PanelEvent>>>) {
    let mut layout = RefreshLoadLayout::new(RefreshConfig::default());
    let events = Rc::new(RefCell::new(Vec::new()));
    layout.set_header(Panel::new(100));
    layout.set_footer(Panel::new(80));
    layout.set_content(Box::new(FixedContent {
        up: false,
        down: true,
    }));
    layout.set_refresh_load_listener(Box::new(RecordingListener {
        events: Rc::clone(&events),
    }));
    layout.layout(800);
    (layout, events)
}

fn down(y: f32) -> TouchEvent {
    TouchEvent::Start(Touch::new(0, 50.0, y))
}

fn mv(y: f32) -> TouchEvent {
    TouchEvent::Move(Touch::new(0, 50.0, y))
}

fn up(y: f32) -> TouchEvent {
    TouchEvent::End(Touch::new(0, 50.0, y))
}

/// 测试布局后的静止位形
#[test]
fn test_layout_rest_geometry() {
    let (layout, _) = ready_layout();
    let g = layout.geometry();

    assert!(layout.is_ready());
    assert_eq!(g.header.top, -100);
    assert_eq!(g.header.bottom, 0);
    assert_eq!(g.footer.top, 800);
    assert_eq!(g.footer.bottom, 880);
    assert_eq!(g.content_top, 0);
    assert_eq!(g.container_bottom, 800);
    assert!(g.is_at_rest());
}

/// 测试注册和布局完成前所有事件静默忽略
#[test]
fn test_events_ignored_before_ready() {
    let mut layout = RefreshLoadLayout::new(RefreshConfig::default());

    // 什么都没注册
    assert!(!layout.on_touch_event(&down(100.0)));
    layout.finish();
    assert_eq!(layout.state(), GestureState::Idle);

    // 注册齐全但尚未布局
    layout.set_header(Panel::new(100));
    layout.set_footer(Panel::new(80));
    layout.set_content(Box::new(FixedContent {
        up: false,
        down: true,
    }));
    assert!(!layout.is_ready());
    assert!(!layout.on_touch_event(&down(100.0)));
    assert!(!layout.on_touch_event(&mv(200.0)));

    layout.layout(800);
    assert!(layout.is_ready());
}

/// 测试完整的下拉刷新周期：捕获、监听器分发、finish 归位
#[test]
fn test_full_refresh_cycle() {
    let (mut layout, events) = ready_layout();

    assert!(!layout.on_touch_event(&down(100.0)));
    // 捕获后的 Move 返回 true，调用方不再把事件交给内容
    assert!(layout.on_touch_event(&mv(400.0)));
    assert!(!layout.on_touch_event(&up(400.0)));

    assert_eq!(layout.state(), GestureState::RefreshingHeader);
    assert!(layout.is_refreshing());
    assert_eq!(layout.geometry().header.top, 0);
    {
        let seen = events.borrow();
        assert!(seen.contains(&PanelEvent::Show(Orientation::Down)));
        assert!(seen.contains(&PanelEvent::Refresh(Orientation::Down)));
    }

    layout.finish();
    assert_eq!(layout.state(), GestureState::Idle);
    assert!(!layout.is_refreshing());
    assert!(layout.geometry().is_at_rest());
}

/// 测试内容两个方向都能滚动时事件透传（返回 false）
#[test]
fn test_pass_through_when_content_scrollable() {
    let mut layout = RefreshLoadLayout::new(RefreshConfig::default());
    layout.set_header(Panel::new(100));
    layout.set_footer(Panel::new(80));
    layout.set_content(Box::new(FixedContent {
        up: true,
        down: true,
    }));
    layout.layout(800);

    assert!(!layout.on_touch_event(&down(100.0)));
    assert!(!layout.on_touch_event(&mv(300.0)));
    assert!(!layout.on_touch_event(&up(300.0)));
    assert!(layout.geometry().is_at_rest());
}

/// 测试替换面板后需要重新布局，新高度生效
#[test]
fn test_replacing_panel_requires_relayout() {
    let (mut layout, _) = ready_layout();

    layout.set_header(Panel::new(120));
    assert!(!layout.is_ready());
    assert!(!layout.on_touch_event(&down(100.0)));

    layout.layout(800);
    assert!(layout.is_ready());
    assert_eq!(layout.geometry().header.top, -120);
    assert_eq!(layout.geometry().header.bottom, 0);
}

/// 测试没有监听器时事件处理照常进行
#[test]
fn test_missing_listener_is_harmless() {
    let mut layout = RefreshLoadLayout::new(RefreshConfig::default());
    layout.set_header(Panel::new(100));
    layout.set_footer(Panel::new(80));
    layout.set_content(Box::new(FixedContent {
        up: false,
        down: true,
    }));
    layout.layout(800);

    layout.on_touch_event(&down(100.0));
    layout.on_touch_event(&mv(400.0));
    layout.on_touch_event(&up(400.0));
    assert_eq!(layout.state(), GestureState::RefreshingHeader);
    assert!(layout.is_refreshing());
}

/// 测试面板 ID 全局唯一
#[test]
fn test_panel_ids_unique() {
    let a = Panel::new(10);
    let b = Panel::new(10);
    assert_ne!(a.id(), b.id());
    assert_eq!(a.height(), b.height());
}
