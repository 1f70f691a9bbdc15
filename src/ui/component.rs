//! 组件基础定义

use crate::binder::{Binder, Callback, EventKind};
use crate::error::{Error, Result};
use crate::style::{Length, Style, TRANSITION};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// 路径形式的节点地址：父地址 + `_` + 兄弟序号，根为 `_0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Serial(String);

impl Serial {
    pub const ROOT: &'static str = "_0";

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}_{}", self.0, index))
    }

    /// 宿主侧的事件名，如 `_0_1click`
    pub fn event(&self, kind: EventKind) -> String {
        format!("{}{}", self.0, kind.suffix())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 节点地址的共享句柄
///
/// 地址在渲染时才分配。组件被移入父容器之前克隆一份句柄，
/// 渲染之后即可在回调里读到它；渲染前读取得到 `None`。
#[derive(Debug, Clone, Default)]
pub struct SerialHandle(Arc<RwLock<Option<Serial>>>);

impl SerialHandle {
    pub fn get(&self) -> Option<Serial> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_assigned(&self) -> bool {
        self.get().is_some()
    }

    pub(crate) fn set(&self, serial: Serial) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(serial);
    }
}

/// 所有组件共用的状态：地址、样式、点击回调
pub struct Node {
    serial: SerialHandle,
    style: Style,
    on_click: Option<Callback>,
}

impl Node {
    pub fn new() -> Self {
        Self::with_style(TRANSITION)
    }

    pub fn with_style(initial: &str) -> Self {
        Self {
            serial: SerialHandle::default(),
            style: Style::with(initial),
            on_click: None,
        }
    }

    /// 当前地址；未渲染时为根哨兵 `_0`
    pub fn serial(&self) -> Serial {
        self.serial.get().unwrap_or_else(Serial::root)
    }

    pub fn serial_handle(&self) -> SerialHandle {
        self.serial.clone()
    }

    pub(crate) fn set_serial(&self, serial: Serial) {
        self.serial.set(serial);
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn click_callback(&self) -> Option<&Callback> {
        self.on_click.as_ref()
    }

    pub fn set_click_callback(&mut self, callback: Callback) {
        self.on_click = Some(callback);
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// 组件 trait
///
/// 渲染分两个阶段：`assign` 自上而下分配地址，`render` 自下而上拼接标记并写入绑定。
/// 容器的 `render` 会按同一规则重新写入子组件地址，单独渲染一个容器也不会产生重复地址。
/// 地址只有在所在树完成一次 `assign` 或 `render` 之后才可信。
pub trait Component: Send {
    fn node(&self) -> &Node;
    fn node_mut(&mut self) -> &mut Node;

    /// 组件类型名
    fn type_name(&self) -> &'static str {
        "Component"
    }

    fn children(&self) -> &[Box<dyn Component>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut []
    }

    /// 为自己和整棵子树分配地址
    fn assign(&mut self, serial: Serial) {
        for (index, child) in self.children_mut().iter_mut().enumerate() {
            child.assign(serial.child(index));
        }
        self.node_mut().set_serial(serial);
    }

    /// 生成标记片段；基础组件没有标记形态
    fn render(&self, binder: &mut dyn Binder) -> Result<String> {
        let _ = binder;
        Err(Error::NotImplemented {
            component: self.type_name(),
        })
    }

    fn serial(&self) -> Serial {
        self.node().serial()
    }

    fn serial_handle(&self) -> SerialHandle {
        self.node().serial_handle()
    }

    fn style(&self) -> &Style {
        self.node().style()
    }
}

/// 链式样式修改器，每次调用向样式串追加一条声明
pub trait Styled: Component + Sized {
    fn height(mut self, height: impl Into<Length>) -> Self {
        self.node_mut().style_mut().declare("height", height.into());
        self
    }

    fn width(mut self, width: impl Into<Length>) -> Self {
        self.node_mut().style_mut().declare("width", width.into());
        self
    }

    /// 上、右、下、左
    fn padding(mut self, t: i32, r: i32, b: i32, l: i32) -> Self {
        let value = format!("{}px {}px {}px {}px", t, r, b, l);
        self.node_mut().style_mut().declare("padding", value);
        self
    }

    /// 上、右、下、左
    fn margin(mut self, t: i32, r: i32, b: i32, l: i32) -> Self {
        let value = format!("{}px {}px {}px {}px", t, r, b, l);
        self.node_mut().style_mut().declare("margin", value);
        self
    }

    fn background(mut self, background: &str) -> Self {
        self.node_mut().style_mut().declare("background", background);
        self
    }

    fn font_color(mut self, color: &str) -> Self {
        self.node_mut().style_mut().declare("color", color);
        self
    }

    fn border(mut self, width: i32, color: &str) -> Self {
        let value = format!("solid {}px {}", width, color);
        self.node_mut().style_mut().declare("border", value);
        self
    }

    fn rounded_corner(mut self, size: i32) -> Self {
        self.node_mut().style_mut().declare("border-radius", Length::Px(size));
        self
    }

    /// 固定模糊和偏移，颜色后拼接 `4f` 透明度
    fn shadow(mut self, color: &str) -> Self {
        let value = format!("0px 5px 6px {}4f", color);
        self.node_mut().style_mut().declare("box-shadow", value);
        self
    }

    fn font_size(mut self, size: i32) -> Self {
        self.node_mut().style_mut().declare("font-size", Length::Px(size));
        self
    }

    fn center_text(mut self) -> Self {
        self.node_mut().style_mut().declare("text-align", "center");
        self
    }

    /// 原样追加一段声明
    fn css(mut self, fragment: &str) -> Self {
        self.node_mut().style_mut().append(fragment);
        self
    }

    fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.node_mut()
            .set_click_callback(Arc::new(move |_args: &[serde_json::Value]| callback()));
        self
    }
}

impl<T: Component> Styled for T {}
