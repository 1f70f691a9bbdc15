//! Image 组件

use super::component::{Component, Node};
use crate::binder::Binder;
use crate::error::Result;

/// Image - 图片
pub struct Image {
    node: Node,
    src: String,
}

impl Image {
    pub fn new(src: &str) -> Self {
        Self {
            node: Node::new(),
            src: src.to_string(),
        }
    }

    pub fn with_src(mut self, src: &str) -> Self {
        self.src = src.to_string();
        self
    }

    pub fn src(&self) -> &str {
        &self.src
    }
}

impl Component for Image {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> &'static str {
        "Image"
    }

    fn render(&self, _binder: &mut dyn Binder) -> Result<String> {
        let serial = self.serial();
        Ok(format!(
            "<img id=\"{0}\" onClick=\"eel.{0}click()\" src=\"{1}\" style=\"{2}\"/>",
            serial,
            self.src,
            self.node.style()
        ))
    }
}
