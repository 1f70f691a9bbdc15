//! 任务启动器的一行：图标、名称、启动/停止按钮

use crate::host::{HostBridge, HostExt};
use crate::task::Process;
use crate::ui::{Button, Component, Container, FlexLayout, Image, SerialHandle, Styled, Text};
use crate::children;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

pub const START_LABEL: &str = "启动";
pub const STOP_LABEL: &str = "停止";
const WHITE: &str = "#FFFFFF";

/// 点击回调和退出回调共享的状态
struct WidgetState {
    name: String,
    cmd: String,
    color: String,
    running: AtomicBool,
    process: Mutex<Option<Process>>,
    button: Mutex<Option<SerialHandle>>,
    label: Mutex<Option<SerialHandle>>,
    host: Arc<dyn HostBridge>,
}

impl WidgetState {
    fn handles(&self) -> Option<(SerialHandle, SerialHandle)> {
        let button = self.button.lock().unwrap_or_else(PoisonError::into_inner).clone()?;
        let label = self.label.lock().unwrap_or_else(PoisonError::into_inner).clone()?;
        Some((button, label))
    }

    /// 按钮和文字换成指定配色与文案
    fn restyle(&self, background: &str, text_color: &str, text: &str) {
        let Some((button, label)) = self.handles() else {
            log::warn!("{}: widget was never built", self.name);
            return;
        };
        let (Some(button), Some(label)) = (button.get(), label.get()) else {
            log::warn!("{}: widget was never rendered", self.name);
            return;
        };
        let result = self
            .host
            .set_background(&button, background)
            .and_then(|_| self.host.set_font_color(&label, text_color))
            .and_then(|_| self.host.set_text(&label, text));
        if let Err(e) = result {
            log::warn!("{}: host update failed: {}", self.name, e);
        }
    }

    fn on_exit(&self) {
        self.restyle(WHITE, &self.color, START_LABEL);
        self.running.store(false, Ordering::SeqCst);
        log::info!("{} exited", self.name);
    }
}

/// 启动器中的一个任务
pub struct TaskWidget {
    icon: String,
    state: Arc<WidgetState>,
}

impl TaskWidget {
    pub fn new(name: &str, cmd: &str, icon: &str, color: &str, host: Arc<dyn HostBridge>) -> Self {
        Self {
            icon: icon.to_string(),
            state: Arc::new(WidgetState {
                name: name.to_string(),
                cmd: cmd.to_string(),
                color: color.to_string(),
                running: AtomicBool::new(false),
                process: Mutex::new(None),
                button: Mutex::new(None),
                label: Mutex::new(None),
                host,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn is_running(&self) -> bool {
        self.state.running.load(Ordering::SeqCst)
    }

    /// 控制按钮的地址句柄，`component()` 之后可用
    pub fn button_handle(&self) -> Option<SerialHandle> {
        self.state.button.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn label_handle(&self) -> Option<SerialHandle> {
        self.state.label.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// 构建组件；每次调用都会把按钮和文字句柄换成新组件的
    pub fn component(&self) -> Container {
        let color = self.state.color.as_str();

        let badge = Container::horizontal(children![Image::new(&self.icon).width(20)])
            .background("#00000010")
            .height(35)
            .width(35)
            .justify_center()
            .align_items_center()
            .rounded_corner(9999);

        let title = Text::new(&self.state.name)
            .font_color(WHITE)
            .font_size(20)
            .margin(0, 0, 0, 10);

        let label = Text::new(START_LABEL).margin(0, 0, 0, 0).font_color(color);
        let label_handle = label.serial_handle();

        let state = self.state.clone();
        let button = Button::new(children![label])
            .center_text()
            .height(25)
            .font_size(13)
            .background(WHITE)
            .font_color(WHITE)
            .border(2, WHITE)
            .rounded_corner(9999)
            .on_click(move || on_start_click(&state));
        let button_handle = button.serial_handle();

        *self.state.button.lock().unwrap_or_else(PoisonError::into_inner) = Some(button_handle);
        *self.state.label.lock().unwrap_or_else(PoisonError::into_inner) = Some(label_handle);

        Container::horizontal(children![
            Container::horizontal(children![badge, title]).align_items_center(),
            button,
        ])
        .padding(10, 10, 10, 10)
        .background(color)
        .align_items_center()
        .justify_between()
        .rounded_corner(10)
        .shadow(color)
        .margin(0, 0, 10, 0)
    }
}

/// 空闲时启动，运行中时终止
fn on_start_click(state: &Arc<WidgetState>) {
    if state.running.swap(true, Ordering::SeqCst) {
        let process = state.process.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(process) = process.as_ref() {
            if let Err(e) = process.kill() {
                log::warn!("{}: {}", state.name, e);
            }
        }
        return;
    }

    let color = state.color.clone();
    state.restyle(&color, WHITE, STOP_LABEL);

    let exit_state = state.clone();
    match Process::spawn_with(&state.cmd, move || exit_state.on_exit()) {
        Ok(process) => {
            *state.process.lock().unwrap_or_else(PoisonError::into_inner) = Some(process);
        }
        Err(e) => {
            log::warn!("{}: {}", state.name, e);
            state.on_exit();
        }
    }
}
