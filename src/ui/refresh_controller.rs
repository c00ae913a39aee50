//! 下拉刷新/上拉加载手势控制器
//!
//! 消费原始触摸事件和当前面板几何，决定手势捕获与否、
//! 计算 header/footer 的联动偏移、推进状态机，并产出
//! Show/Hide/Refresh 事件交给容器分发。

use crate::config::RefreshConfig;
use crate::event::TouchEvent;
use crate::geometry::PanelGeometry;
use crate::ui::scrollable::ScrollState;

/// 手势状态，任意时刻只有一个生效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// 静止
    Idle,
    /// 向下拖动，露出 header
    DraggingDown,
    /// 向下拖动，但 footer 尚在视口内（收回 footer）
    DraggingDownFooterVisible,
    /// 向上拖动，露出 footer
    DraggingUp,
    /// 向上拖动，但 header 尚在视口内（收回 header）
    DraggingUpHeaderVisible,
    /// header 完全展开，刷新中
    RefreshingHeader,
    /// footer 完全展开，加载中
    RefreshingFooter,
}

/// 事件方向：Down 对应 header（下拉刷新），Up 对应 footer（上拉加载）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Up,
    Down,
}

/// 面板事件，电平触发：条件满足期间每个采样都会产出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Show(Orientation),
    Hide(Orientation),
    Refresh(Orientation),
}

/// 刷新/加载监听器
///
/// 事件为电平触发，同一信号可能连续多次回调，实现需自行幂等。
pub trait RefreshLoadListener {
    fn on_refresh(&mut self, orientation: Orientation);
    fn on_show(&mut self, orientation: Orientation);
    fn on_hide(&mut self, orientation: Orientation);
}

/// 手势控制器
///
/// 面板几何由容器持有，每次调用以 `&mut` 传入，
/// 控制器本身只保存手势采样和状态机。
pub struct RefreshController {
    config: RefreshConfig,
    state: GestureState,
    /// 按下时的 Y 坐标
    initial_down_y: f32,
    /// 上一采样的 Y 坐标（偏移增量的参考点）
    last_motion_y: f32,
    /// 手势是否已被捕获
    is_being_dragged: bool,
    /// 从释放跨过阈值起，到 finish() 为止保持 true
    refreshing: bool,
}

impl RefreshController {
    pub fn new(config: RefreshConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            initial_down_y: 0.0,
            last_motion_y: 0.0,
            is_being_dragged: false,
            refreshing: false,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_being_dragged(&self) -> bool {
        self.is_being_dragged
    }

    /// 处理一个触摸事件，返回需要分发的面板事件
    pub fn handle_touch(
        &mut self,
        event: &TouchEvent,
        geometry: &mut PanelGeometry,
        scroll: ScrollState,
    ) -> Option<PanelEvent> {
        match event {
            TouchEvent::Start(touch) => {
                // 新的指针流：重置捕获与采样
                self.is_being_dragged = false;
                self.initial_down_y = touch.y;
                self.last_motion_y = touch.y;
                None
            }
            TouchEvent::Move(touch) => self.handle_move(touch.y, geometry, &scroll),
            TouchEvent::End(_) => self.handle_release(geometry),
            TouchEvent::Cancel(_) => {
                // 手势被上层取走：只释放捕获，不吸附不回弹，
                // 面板如需归位由调用方 finish() 完成
                self.is_being_dragged = false;
                None
            }
        }
    }

    /// 刷新/加载完成：清除刷新标记，两块面板无条件回到隐藏位
    pub fn finish(&mut self, geometry: &mut PanelGeometry) {
        self.refreshing = false;
        self.spring_back_footer(geometry);
        self.spring_back_header(geometry);
        self.state = GestureState::Idle;
        log::debug!("面板归位: state={:?}", self.state);
    }

    fn handle_move(
        &mut self,
        y: f32,
        geometry: &mut PanelGeometry,
        scroll: &ScrollState,
    ) -> Option<PanelEvent> {
        // 内容两个方向都还能滚动时完全不参与
        if scroll.can_scroll_up && scroll.can_scroll_down {
            return None;
        }
        self.ensure_dragging(y, geometry, scroll);
        let mut event = None;
        if self.is_being_dragged {
            let drag_distance = (y - self.last_motion_y) * self.config.drag_rate;
            if drag_distance > 0.0 {
                self.move_header(drag_distance, geometry);
            } else {
                self.move_footer(drag_distance, geometry);
            }
            event = pending_event(geometry, self.state);
        }
        self.last_motion_y = y;
        event
    }

    /// 根据累计位移判定拖动方向和状态，超过 slop 后捕获手势
    ///
    /// 每个 Move 采样都会重跑，状态持续跟踪拖动方向与面板可见性。
    fn ensure_dragging(&mut self, y: f32, geometry: &PanelGeometry, scroll: &ScrollState) {
        let y_diff = y - self.initial_down_y;
        if y_diff > 0.0 {
            // 向下拖动：内容未到顶且 footer 未露出时让给内容
            if scroll.can_scroll_up && !geometry.footer_visible() {
                self.is_being_dragged = false;
                return;
            }
            self.state = if geometry.footer_visible() {
                GestureState::DraggingDownFooterVisible
            } else {
                GestureState::DraggingDown
            };
        } else {
            // 向上拖动：内容未到底且 header 未露出时让给内容
            if scroll.can_scroll_down && !geometry.header_visible() {
                self.is_being_dragged = false;
                return;
            }
            self.state = if geometry.header_visible() {
                GestureState::DraggingUpHeaderVisible
            } else {
                GestureState::DraggingUp
            };
        }
        if y_diff.abs() > self.config.touch_slop && !self.is_being_dragged {
            // 捕获瞬间把参考点移到 初始值±slop，避免指示器跳变
            self.last_motion_y = self.initial_down_y + self.config.touch_slop.copysign(y_diff);
            self.is_being_dragged = true;
            log::debug!("捕获拖动手势: y_diff={:.1} state={:?}", y_diff, self.state);
        }
    }

    /// 指针抬起：已捕获时按当前状态吸附或回弹
    fn handle_release(&mut self, geometry: &mut PanelGeometry) -> Option<PanelEvent> {
        if !self.is_being_dragged {
            return None;
        }
        self.is_being_dragged = false;
        match self.state {
            GestureState::DraggingDown => {
                if geometry.header.top > geometry.container_top - geometry.header.height() / 2 {
                    // 露出过半：吸附到完全展开，进入刷新
                    let distance = (geometry.container_top - geometry.header.top) as f32;
                    self.move_header(distance, geometry);
                    self.state = GestureState::RefreshingHeader;
                    self.refreshing = true;
                } else {
                    self.spring_back_header(geometry);
                    self.state = GestureState::Idle;
                }
            }
            GestureState::DraggingUp => {
                if geometry.footer.bottom
                    < geometry.container_bottom + geometry.footer.height() / 2
                {
                    let distance = (geometry.container_bottom - geometry.footer.bottom) as f32;
                    self.move_footer(distance, geometry);
                    self.state = GestureState::RefreshingFooter;
                    self.refreshing = true;
                } else {
                    self.spring_back_footer(geometry);
                    self.state = GestureState::Idle;
                }
            }
            GestureState::DraggingUpHeaderVisible => {
                self.spring_back_header(geometry);
                self.state = GestureState::Idle;
            }
            GestureState::DraggingDownFooterVisible => {
                self.spring_back_footer(geometry);
                self.state = GestureState::Idle;
            }
            _ => {}
        }
        log::debug!("释放手势: state={:?} refreshing={}", self.state, self.refreshing);
        pending_event(geometry, self.state)
    }

    /// 移动 header（正增量，向下露出），三块视图联动
    ///
    /// header 已完全展开时不再响应；增量按状态收口：
    /// DraggingDown 不允许顶边越过容器顶边，
    /// DraggingDownFooterVisible 不允许底边越过容器顶边（即 footer 收回到位为止）。
    fn move_header(&self, drag_distance: f32, geometry: &mut PanelGeometry) {
        if geometry.header.top >= geometry.container_top {
            return;
        }
        let mut distance = drag_distance;
        if self.state == GestureState::DraggingDown
            && geometry.header.top as f32 + distance > geometry.container_top as f32
        {
            distance = (geometry.container_top - geometry.header.top) as f32;
        } else if self.state == GestureState::DraggingDownFooterVisible
            && geometry.header.bottom as f32 + distance > geometry.container_top as f32
        {
            distance = (geometry.container_top - geometry.header.bottom) as f32;
        }
        geometry.offset_all(distance as i32);
    }

    /// 移动 footer（负增量，向上露出），与 move_header 对称
    fn move_footer(&self, drag_distance: f32, geometry: &mut PanelGeometry) {
        if geometry.footer.bottom <= geometry.container_bottom {
            return;
        }
        let mut distance = drag_distance;
        if self.state == GestureState::DraggingUp
            && geometry.footer.bottom as f32 + distance < geometry.container_bottom as f32
        {
            distance = (geometry.container_bottom - geometry.footer.bottom) as f32;
        } else if self.state == GestureState::DraggingUpHeaderVisible
            && geometry.footer.top as f32 + distance < geometry.container_bottom as f32
        {
            distance = (geometry.container_bottom - geometry.footer.top) as f32;
        }
        geometry.offset_all(distance as i32);
    }

    /// 一步把 header 移回完全隐藏位
    fn spring_back_header(&self, geometry: &mut PanelGeometry) {
        let target_top = geometry.container_top - geometry.header.height();
        geometry.offset_all(target_top - geometry.header.top);
    }

    /// 一步把 footer 移回完全隐藏位
    fn spring_back_footer(&self, geometry: &mut PanelGeometry) {
        let target_bottom = geometry.container_bottom + geometry.footer.height();
        geometry.offset_all(target_bottom - geometry.footer.bottom);
    }
}

/// 由几何快照和当前状态计算待分发的面板事件
///
/// 电平触发：只看当前几何与状态，不记忆历史，同一事件可能
/// 在连续采样中重复产出。状态互斥，单次至多一个事件。
pub fn pending_event(geometry: &PanelGeometry, state: GestureState) -> Option<PanelEvent> {
    let header_half = geometry.header.bottom - geometry.container_top >= geometry.header.height() / 2;
    let footer_half = geometry.footer.bottom <= geometry.container_bottom + geometry.footer.height() / 2;
    match state {
        GestureState::DraggingDown if header_half => Some(PanelEvent::Show(Orientation::Down)),
        GestureState::DraggingUpHeaderVisible if header_half => {
            Some(PanelEvent::Hide(Orientation::Up))
        }
        GestureState::RefreshingHeader if geometry.header.top == geometry.container_top => {
            Some(PanelEvent::Refresh(Orientation::Down))
        }
        GestureState::DraggingUp if footer_half => Some(PanelEvent::Show(Orientation::Up)),
        GestureState::DraggingDownFooterVisible if footer_half => {
            Some(PanelEvent::Hide(Orientation::Down))
        }
        GestureState::RefreshingFooter
            if geometry.footer.bottom == geometry.container_bottom =>
        {
            Some(PanelEvent::Refresh(Orientation::Up))
        }
        _ => None,
    }
}
