//! Root - 唯一的顶层容器

use super::component::{Component, Node};
use super::container::{render_children, FlexLayout};
use crate::binder::Binder;
use crate::error::Result;
use crate::renderer;

/// 顶层容器，持有标题和整份文档
///
/// 根自身的点击回调没有父容器替它绑定，`<body>` 上也不带点击属性；
/// 设置了也只会在渲染时记一条警告。
pub struct Root {
    node: Node,
    title: String,
    children: Vec<Box<dyn Component>>,
}

impl Root {
    pub fn new(title: &str) -> Self {
        Self::with_children(title, Vec::new())
    }

    pub fn with_children(title: &str, children: Vec<Box<dyn Component>>) -> Self {
        Self {
            node: Node::new(),
            title: title.to_string(),
            children,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn push(&mut self, child: impl Component + 'static) {
        self.children.push(Box::new(child));
    }
}

impl Component for Root {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> &'static str {
        "Root"
    }

    fn children(&self) -> &[Box<dyn Component>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut self.children
    }

    fn render(&self, binder: &mut dyn Binder) -> Result<String> {
        if self.node.click_callback().is_some() {
            log::warn!("'{}': click callback on the root is never bound", self.title);
        }
        let body = render_children(&self.serial(), &self.children, binder)?;
        Ok(renderer::document(&self.title, self.node.style().as_str(), &body))
    }
}

impl FlexLayout for Root {}
