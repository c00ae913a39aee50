//! 下拉刷新/上拉加载演示窗口
//! 鼠标按住拖动合成触摸事件流，列表行和 header/footer 指示条直接画进像素缓冲

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use mini_refresh::event::{Touch, TouchEvent};
use mini_refresh::ui::{
    GestureState, Orientation, Panel, RefreshLoadLayout, RefreshLoadListener, ScrollableContent,
};
use mini_refresh::{PanelGeometry, RefreshConfig};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

const LOGICAL_WIDTH: u32 = 375;
const LOGICAL_HEIGHT: u32 = 667;
const HEADER_HEIGHT: i32 = 80;
const FOOTER_HEIGHT: i32 = 60;
const ROW_HEIGHT: f32 = 88.0;
const ROW_COUNT: usize = 30;
/// 假装的刷新/加载耗时
const REFRESH_DURATION: Duration = Duration::from_millis(1200);

/// 页面配置（手势参数走 JSON，和组件配置同一套路）
const PAGE_CONFIG: &str = r#"{"dragRate":0.5,"touchSlop":8.0}"#;

const COLOR_BG: u32 = 0x00F7F7F7;
const COLOR_ROW_A: u32 = 0x00FFFFFF;
const COLOR_ROW_B: u32 = 0x00EFEFF4;
const COLOR_HEADER: u32 = 0x004A90D9;
const COLOR_FOOTER: u32 = 0x007B61C4;
const COLOR_ACTIVE: u32 = 0x0034C759;
const COLOR_GAUGE: u32 = 0x00FFFFFF;

/// 演示列表：行数可变，自己维护滚动位置
struct DemoList {
    scroll_y: f32,
    row_count: usize,
    viewport_height: f32,
}

impl DemoList {
    fn content_height(&self) -> f32 {
        self.row_count as f32 * ROW_HEIGHT
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// 手指位移 dy（向下为正）转换成滚动位置变化
    fn scroll_by(&mut self, dy: f32) {
        self.scroll_y = (self.scroll_y - dy).clamp(0.0, self.max_scroll());
    }
}

/// 把共享列表的滚动能力暴露给容器
struct ListProbe(Rc<RefCell<DemoList>>);

impl ScrollableContent for ListProbe {
    fn can_scroll_up(&self) -> bool {
        self.0.borrow().scroll_y > 0.0
    }

    fn can_scroll_down(&self) -> bool {
        let list = self.0.borrow();
        list.scroll_y < list.max_scroll()
    }
}

/// 把刷新/加载请求记下来，由窗口在重绘循环里定时完成
struct DemoListener {
    pending: Rc<RefCell<Option<(Orientation, Instant)>>>,
    shown: Option<Orientation>,
}

impl RefreshLoadListener for DemoListener {
    fn on_refresh(&mut self, orientation: Orientation) {
        self.shown = None;
        let mut pending = self.pending.borrow_mut();
        if pending.is_none() {
            match orientation {
                Orientation::Down => println!("🔄 开始刷新"),
                Orientation::Up => println!("🔄 开始加载更多"),
            }
            *pending = Some((orientation, Instant::now()));
        }
    }

    fn on_show(&mut self, orientation: Orientation) {
        // 电平触发，去重后只提示一次
        if self.shown != Some(orientation) {
            self.shown = Some(orientation);
            match orientation {
                Orientation::Down => println!("⬇️  松开刷新"),
                Orientation::Up => println!("⬆️  松开加载"),
            }
        }
    }

    fn on_hide(&mut self, _orientation: Orientation) {
        if self.shown.take().is_some() {
            println!("↩️  收回面板");
        }
    }
}

struct RefreshDemo {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    layout: RefreshLoadLayout,
    list: Rc<RefCell<DemoList>>,
    pending: Rc<RefCell<Option<(Orientation, Instant)>>>,
    mouse_pos: (f32, f32),
    mouse_down: bool,
    last_state: GestureState,
    scale_factor: f64,
}

impl RefreshDemo {
    fn new() -> Self {
        let config: RefreshConfig = serde_json::from_str(PAGE_CONFIG).unwrap_or_default();
        let list = Rc::new(RefCell::new(DemoList {
            scroll_y: 0.0,
            row_count: ROW_COUNT,
            viewport_height: LOGICAL_HEIGHT as f32,
        }));
        let pending = Rc::new(RefCell::new(None));

        let mut layout = RefreshLoadLayout::new(config);
        layout.set_header(Panel::new(HEADER_HEIGHT));
        layout.set_footer(Panel::new(FOOTER_HEIGHT));
        layout.set_content(Box::new(ListProbe(Rc::clone(&list))));
        layout.set_refresh_load_listener(Box::new(DemoListener {
            pending: Rc::clone(&pending),
            shown: None,
        }));
        layout.layout(LOGICAL_HEIGHT as i32);

        Self {
            window: None,
            surface: None,
            layout,
            list,
            pending,
            mouse_pos: (0.0, 0.0),
            mouse_down: false,
            last_state: GestureState::Idle,
            scale_factor: 1.0,
        }
    }

    fn trace_state(&mut self) {
        let state = self.layout.state();
        if state != self.last_state {
            println!("🧭 状态: {:?} -> {:?}", self.last_state, state);
            self.last_state = state;
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn present(&mut self) {
        if let (Some(window), Some(surface)) = (&self.window, &mut self.surface) {
            let size = window.inner_size();
            if let (Some(width), Some(height)) =
                (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
            {
                surface.resize(width, height).ok();
                if let Ok(mut buffer) = surface.buffer_mut() {
                    let geometry = *self.layout.geometry();
                    let list = self.list.borrow();
                    draw_scene(
                        &mut buffer,
                        size.width,
                        size.height,
                        self.scale_factor as f32,
                        &geometry,
                        &list,
                        self.layout.state(),
                    );
                    buffer.present().ok();
                }
            }
        }
    }
}

impl ApplicationHandler for RefreshDemo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = WindowAttributes::default()
                .with_title("Mini Refresh")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    LOGICAL_WIDTH as f64,
                    LOGICAL_HEIGHT as f64,
                ))
                .with_resizable(false);

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
            self.scale_factor = window.scale_factor();

            let context = softbuffer::Context::new(window.clone()).unwrap();
            let surface = softbuffer::Surface::new(&context, window.clone()).unwrap();

            self.window = Some(window);
            self.surface = Some(surface);

            println!("🎮 Ready! 按住鼠标下拉刷新，滚到底部后上拉加载\n");
            self.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::CursorMoved { position, .. } => {
                let x = position.x as f32 / self.scale_factor as f32;
                let y = position.y as f32 / self.scale_factor as f32;
                let last_y = self.mouse_pos.1;
                self.mouse_pos = (x, y);

                if self.mouse_down {
                    let captured = self
                        .layout
                        .on_touch_event(&TouchEvent::Move(Touch::new(0, x, y)));
                    if !captured {
                        // 未捕获的拖动交给列表自身滚动
                        self.list.borrow_mut().scroll_by(y - last_y);
                    }
                    self.trace_state();
                    self.request_redraw();
                }
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let (x, y) = self.mouse_pos;
                match state {
                    ElementState::Pressed => {
                        self.mouse_down = true;
                        self.layout
                            .on_touch_event(&TouchEvent::Start(Touch::new(0, x, y)));
                    }
                    ElementState::Released => {
                        if self.mouse_down {
                            self.mouse_down = false;
                            self.layout
                                .on_touch_event(&TouchEvent::End(Touch::new(0, x, y)));
                            self.trace_state();
                            self.request_redraw();
                        }
                    }
                }
            }

            WindowEvent::CursorLeft { .. } => {
                // 指针离开窗口视为手势被取走
                if self.mouse_down {
                    self.mouse_down = false;
                    let (x, y) = self.mouse_pos;
                    self.layout
                        .on_touch_event(&TouchEvent::Cancel(Touch::new(0, x, y)));
                    if !self.layout.is_refreshing() {
                        self.layout.finish();
                    }
                    self.trace_state();
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                // 到点了就完成假装的刷新/加载
                let finished = {
                    let pending = self.pending.borrow();
                    match *pending {
                        Some((orientation, started)) if started.elapsed() >= REFRESH_DURATION => {
                            Some(orientation)
                        }
                        _ => None,
                    }
                };
                if let Some(orientation) = finished {
                    *self.pending.borrow_mut() = None;
                    match orientation {
                        Orientation::Down => println!("✅ 刷新完成"),
                        Orientation::Up => {
                            self.list.borrow_mut().row_count += 10;
                            println!("✅ 加载完成，新增 10 行");
                        }
                    }
                    self.layout.finish();
                    self.trace_state();
                }

                self.present();

                // 刷新进行中时保持轮询
                if self.pending.borrow().is_some() {
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// 填充一个矩形（逻辑坐标，内部换算物理像素并裁剪）
fn fill_rect(buffer: &mut [u32], buf_width: u32, buf_height: u32, sf: f32, x: f32, y: f32, w: f32, h: f32, color: u32) {
    let x0 = (x * sf).max(0.0) as u32;
    let y0 = (y * sf).max(0.0) as u32;
    let x1 = (((x + w) * sf) as u32).min(buf_width);
    let y1 = (((y + h) * sf) as u32).min(buf_height);
    for py in y0..y1 {
        let row = (py * buf_width) as usize;
        for px in x0..x1 {
            buffer[row + px as usize] = color;
        }
    }
}

fn draw_scene(
    buffer: &mut [u32],
    buf_width: u32,
    buf_height: u32,
    sf: f32,
    geometry: &PanelGeometry,
    list: &DemoList,
    state: GestureState,
) {
    buffer.fill(COLOR_BG);
    let width = LOGICAL_WIDTH as f32;

    // 列表行：跟随内容顶边和自身滚动位置
    for i in 0..list.row_count {
        let y = geometry.content_top as f32 + i as f32 * ROW_HEIGHT - list.scroll_y;
        if y > LOGICAL_HEIGHT as f32 || y + ROW_HEIGHT < 0.0 {
            continue;
        }
        let color = if i % 2 == 0 { COLOR_ROW_A } else { COLOR_ROW_B };
        fill_rect(buffer, buf_width, buf_height, sf, 16.0, y + 4.0, width - 32.0, ROW_HEIGHT - 8.0, color);
    }

    // header 指示条：露出比例画成中央量条
    let header_color = if state == GestureState::RefreshingHeader {
        COLOR_ACTIVE
    } else {
        COLOR_HEADER
    };
    let header_top = geometry.header.top as f32;
    let header_height = geometry.header.height() as f32;
    fill_rect(buffer, buf_width, buf_height, sf, 0.0, header_top, width, header_height, header_color);
    let header_frac = (geometry.header_reveal() as f32 / header_height).clamp(0.0, 1.0);
    let gauge_w = (width - 120.0) * header_frac;
    fill_rect(
        buffer, buf_width, buf_height, sf,
        (width - gauge_w) / 2.0,
        header_top + header_height - 18.0,
        gauge_w, 6.0, COLOR_GAUGE,
    );

    // footer 指示条
    let footer_color = if state == GestureState::RefreshingFooter {
        COLOR_ACTIVE
    } else {
        COLOR_FOOTER
    };
    let footer_top = geometry.footer.top as f32;
    let footer_height = geometry.footer.height() as f32;
    fill_rect(buffer, buf_width, buf_height, sf, 0.0, footer_top, width, footer_height, footer_color);
    let footer_frac = (geometry.footer_reveal() as f32 / footer_height).clamp(0.0, 1.0);
    let gauge_w = (width - 120.0) * footer_frac;
    fill_rect(
        buffer, buf_width, buf_height, sf,
        (width - gauge_w) / 2.0,
        footer_top + 12.0,
        gauge_w, 6.0, COLOR_GAUGE,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Mini Refresh - 下拉刷新 / 上拉加载演示\n");
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = RefreshDemo::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
