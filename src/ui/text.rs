//! Text 组件

use super::component::{Component, Node};
use crate::binder::Binder;
use crate::error::Result;

/// Text - 不可变的文本段落
pub struct Text {
    node: Node,
    text: String,
}

impl Text {
    pub fn new(text: &str) -> Self {
        Self {
            node: Node::new(),
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Text {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn render(&self, _binder: &mut dyn Binder) -> Result<String> {
        let serial = self.serial();
        Ok(format!(
            "<p id=\"{0}\" onClick=\"eel.{0}click()\" style=\"{1}\">{2}</p>",
            serial,
            self.node.style(),
            self.text
        ))
    }
}
