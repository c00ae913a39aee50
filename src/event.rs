//! 事件系统 - 单指针触摸流

/// 单个触摸点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

impl Touch {
    pub const fn new(id: u32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// 触摸事件（一次交互：Start → N 个 Move → End/Cancel）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Start(Touch),
    Move(Touch),
    End(Touch),
    Cancel(Touch),
}

impl TouchEvent {
    /// 事件携带的触摸点
    pub fn touch(&self) -> &Touch {
        match self {
            TouchEvent::Start(touch)
            | TouchEvent::Move(touch)
            | TouchEvent::End(touch)
            | TouchEvent::Cancel(touch) => touch,
        }
    }

    /// 垂直坐标（手势控制只关心 Y 轴）
    pub fn y(&self) -> f32 {
        self.touch().y
    }
}
