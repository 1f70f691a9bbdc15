//! Button 组件 - 可包含子组件的按钮

use super::component::{Component, Node};
use super::container::{render_children, FlexLayout};
use crate::binder::Binder;
use crate::error::Result;

/// Button - 按钮容器
pub struct Button {
    node: Node,
    children: Vec<Box<dyn Component>>,
}

impl Button {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            node: Node::with_style(""),
            children,
        }
    }

    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn push(&mut self, child: impl Component + 'static) {
        self.children.push(Box::new(child));
    }
}

impl Component for Button {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> &'static str {
        "Button"
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
            "<Button id=\"{0}\" style=\"{1}user-select: none; outline: none;\" onClick=\"eel.{0}click()\">{2}</Button>",
            serial,
            self.node.style(),
            body
        ))
    }
}

impl FlexLayout for Button {}
