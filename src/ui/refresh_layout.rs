//! RefreshLoadLayout 容器 - 面板槽位、静止布局与事件分发
//!
//! 容器持有几何和监听器，把触摸事件转给 [`RefreshController`]，
//! 自身不含手势逻辑。

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::RefreshConfig;
use crate::event::TouchEvent;
use crate::geometry::PanelGeometry;
use crate::ui::refresh_controller::{
    GestureState, PanelEvent, RefreshController, RefreshLoadListener,
};
use crate::ui::scrollable::{ScrollState, ScrollableContent};

static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 面板 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

impl PanelId {
    pub fn new() -> Self {
        Self(PANEL_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

/// 注册进容器的指示器面板（header 或 footer）
///
/// 面板内容由调用方自行渲染，容器只跟踪高度和位置。
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    id: PanelId,
    height: i32,
}

impl Panel {
    pub fn new(height: i32) -> Self {
        Self {
            id: PanelId::new(),
            height,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// 下拉刷新/上拉加载容器
///
/// 包裹一个可滚动内容视图和 header/footer 指示器。
/// 槽位注册齐全并完成布局前，所有触摸事件和 finish() 都是静默空操作。
pub struct RefreshLoadLayout {
    header: Option<Panel>,
    footer: Option<Panel>,
    content: Option<Box<dyn ScrollableContent>>,
    listener: Option<Box<dyn RefreshLoadListener>>,
    controller: RefreshController,
    geometry: PanelGeometry,
    laid_out: bool,
}

impl RefreshLoadLayout {
    pub fn new(config: RefreshConfig) -> Self {
        Self {
            header: None,
            footer: None,
            content: None,
            listener: None,
            controller: RefreshController::new(config),
            geometry: PanelGeometry::at_rest(0, 0, 0, 0),
            laid_out: false,
        }
    }

    /// 注册 header 面板，替换之前的注册，需要重新布局
    pub fn set_header(&mut self, panel: Panel) {
        self.header = Some(panel);
        self.laid_out = false;
    }

    /// 注册 footer 面板，替换之前的注册，需要重新布局
    pub fn set_footer(&mut self, panel: Panel) {
        self.footer = Some(panel);
        self.laid_out = false;
    }

    /// 注册内容视图，有且只有一个
    pub fn set_content(&mut self, content: Box<dyn ScrollableContent>) {
        self.content = Some(content);
        self.laid_out = false;
    }

    /// 注册刷新/加载监听器
    pub fn set_refresh_load_listener(&mut self, listener: Box<dyn RefreshLoadListener>) {
        self.listener = Some(listener);
    }

    /// 布局：按容器高度计算静止位形
    ///
    /// 槽位变化后和容器尺寸变化时都需要调用，面板回到隐藏位。
    pub fn layout(&mut self, container_height: i32) {
        let (header, footer) = match (self.header.as_ref(), self.footer.as_ref()) {
            (Some(header), Some(footer)) => (header, footer),
            _ => {
                log::trace!("header/footer 未注册，跳过布局");
                return;
            }
        };
        self.geometry = PanelGeometry::at_rest(0, container_height, header.height(), footer.height());
        self.laid_out = true;
        log::debug!(
            "布局完成: header={:?} footer={:?} container_bottom={}",
            header.id(),
            footer.id(),
            container_height
        );
    }

    /// 处理一个触摸事件，返回手势当前是否被容器捕获
    ///
    /// 未捕获时调用方应把事件继续交给内容视图滚动。
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        if !self.is_ready() {
            log::trace!("布局未就绪，忽略触摸事件");
            return false;
        }
        let scroll = match self.content.as_deref() {
            Some(content) => ScrollState::probe(content),
            None => return false,
        };
        if let Some(event) = self.controller.handle_touch(event, &mut self.geometry, scroll) {
            self.dispatch(event);
        }
        self.controller.is_being_dragged()
    }

    /// 刷新/加载完成，面板归位
    pub fn finish(&mut self) {
        if !self.is_ready() {
            log::trace!("布局未就绪，忽略 finish");
            return;
        }
        self.controller.finish(&mut self.geometry);
    }

    pub fn is_refreshing(&self) -> bool {
        self.controller.is_refreshing()
    }

    pub fn state(&self) -> GestureState {
        self.controller.state()
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// 槽位是否注册齐全且已布局
    pub fn is_ready(&self) -> bool {
        self.laid_out && self.header.is_some() && self.footer.is_some() && self.content.is_some()
    }

    fn dispatch(&mut self, event: PanelEvent) {
        if let Some(listener) = self.listener.as_mut() {
            match event {
                PanelEvent::Show(orientation) => listener.on_show(orientation),
                PanelEvent::Hide(orientation) => listener.on_hide(orientation),
                PanelEvent::Refresh(orientation) => listener.on_refresh(orientation),
            }
        }
    }
}
