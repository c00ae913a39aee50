//! 面板几何模块 - 垂直边界与联动偏移

/// 垂直方向的面板边界（整数像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelBounds {
    pub top: i32,
    pub bottom: i32,
}

impl PanelBounds {
    pub const fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn offset(&mut self, delta: i32) {
        self.top += delta;
        self.bottom += delta;
    }
}

/// 参与联动的全部几何：header、footer、内容顶边与容器边界
///
/// header 的静止位置是底边贴住容器顶边（完全隐藏在上方），
/// footer 的静止位置是顶边贴住容器底边（完全隐藏在下方）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub header: PanelBounds,
    pub footer: PanelBounds,
    /// 内容视图当前顶边
    pub content_top: i32,
    /// 容器顶边
    pub container_top: i32,
    /// 容器底边
    pub container_bottom: i32,
}

impl PanelGeometry {
    /// 构造静止位形
    pub fn at_rest(
        container_top: i32,
        container_bottom: i32,
        header_height: i32,
        footer_height: i32,
    ) -> Self {
        Self {
            header: PanelBounds::new(container_top - header_height, container_top),
            footer: PanelBounds::new(container_bottom, container_bottom + footer_height),
            content_top: container_top,
            container_top,
            container_bottom,
        }
    }

    /// 联动偏移：header、footer、内容作为一个整体垂直移动
    pub fn offset_all(&mut self, delta: i32) {
        self.header.offset(delta);
        self.footer.offset(delta);
        self.content_top += delta;
    }

    /// header 是否有露出（顶边越过完全隐藏位置）
    pub fn header_visible(&self) -> bool {
        self.header.top > self.container_top - self.header.height()
    }

    /// footer 是否有露出（底边越过完全隐藏位置）
    pub fn footer_visible(&self) -> bool {
        self.footer.bottom < self.container_bottom + self.footer.height()
    }

    /// header 当前露出高度
    pub fn header_reveal(&self) -> i32 {
        self.header.bottom - self.container_top
    }

    /// footer 当前露出高度
    pub fn footer_reveal(&self) -> i32 {
        self.container_bottom - self.footer.top
    }

    /// 两块面板是否都处于静止位置
    pub fn is_at_rest(&self) -> bool {
        self.header.bottom == self.container_top && self.footer.top == self.container_bottom
    }
}
