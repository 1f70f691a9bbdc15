//! 容器组件：通用容器、水平栈、垂直栈

use super::component::{Component, Node, Serial, Styled};
use crate::binder::{Binder, EventKind};
use crate::error::Result;
use crate::style::TRANSITION;

/// 按插入顺序渲染子组件并拼接
///
/// 每个子组件的地址由 `parent` 和它的序号决定，在绑定和渲染之前写入；
/// 声明了点击回调时，以 `<子地址>click` 为名绑定。
pub(crate) fn render_children(
    parent: &Serial,
    children: &[Box<dyn Component>],
    binder: &mut dyn Binder,
) -> Result<String> {
    let mut body = String::new();
    for (index, child) in children.iter().enumerate() {
        child.node().set_serial(parent.child(index));
        if let Some(callback) = child.node().click_callback() {
            binder.expose(child.serial().event(EventKind::Click), callback.clone());
        }
        body.push_str(&child.render(binder)?);
    }
    Ok(body)
}

/// 弹性布局辅助修改器
pub trait FlexLayout: Styled {
    fn justify_center(mut self) -> Self {
        self.node_mut().style_mut().declare("justify-content", "center");
        self
    }

    fn justify_between(mut self) -> Self {
        self.node_mut().style_mut().declare("justify-content", "space-between");
        self
    }

    fn justify_end(mut self) -> Self {
        self.node_mut().style_mut().declare("justify-content", "end");
        self
    }

    fn align_items_center(mut self) -> Self {
        self.node_mut().style_mut().declare("align-items", "center");
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    Plain,
    Horizontal,
    Vertical,
}

/// 容器：独占有序子组件，渲染为 `<div>`
pub struct Container {
    node: Node,
    kind: StackKind,
    children: Vec<Box<dyn Component>>,
}

impl Container {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            node: Node::with_style(TRANSITION),
            kind: StackKind::Plain,
            children,
        }
    }

    /// 水平栈（`display: flex`）
    pub fn horizontal(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            node: Node::with_style("display: flex; "),
            kind: StackKind::Horizontal,
            children,
        }
    }

    /// 垂直栈
    pub fn vertical(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            node: Node::with_style(""),
            kind: StackKind::Vertical,
            children,
        }
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }

    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// 追加到末尾；已绑定的旧名字在下次渲染后仍指向原位置
    pub fn push(&mut self, child: impl Component + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Container {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            StackKind::Plain => "Container",
            StackKind::Horizontal => "HorizontalStack",
            StackKind::Vertical => "VerticalStack",
        }
    }

    fn children(&self) -> &[Box<dyn Component>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut self.children
    }

    fn render(&self, binder: &mut dyn Binder) -> Result<String> {
        let serial = self.serial();
        let body = render_children(&serial, &self.children, binder)?;
        Ok(format!(
            "<div style='{}' onClick='eel.{}click()'>\n{}\n</div>\n",
            self.node.style(),
            serial,
            body
        ))
    }
}

impl FlexLayout for Container {}
