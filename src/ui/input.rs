//! Input 组件 - 单行输入框

use super::component::{Component, Node};
use crate::binder::{Binder, Callback, EventKind};
use crate::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// Input - 输入框，额外支持 change / keydown 回调
pub struct Input {
    node: Node,
    placeholder: String,
    default_value: String,
    on_change: Option<Callback>,
    on_keydown: Option<Callback>,
}

impl Input {
    pub fn new(placeholder: &str, default_value: &str) -> Self {
        Self {
            node: Node::new(),
            placeholder: placeholder.to_string(),
            default_value: default_value.to_string(),
            on_change: None,
            on_keydown: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = value.to_string();
        self
    }

    /// 内容变化时收到输入框当前值
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(move |args: &[Value]| match args.first() {
            Some(Value::String(s)) => callback(s),
            Some(other) => callback(&other.to_string()),
            None => callback(""),
        }));
        self
    }

    pub fn on_keydown<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_keydown = Some(Arc::new(move |_args: &[Value]| callback()));
        self
    }
}

impl Component for Input {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> &'static str {
        "Input"
    }

    fn render(&self, binder: &mut dyn Binder) -> Result<String> {
        let serial = self.serial();
        if let Some(callback) = &self.on_change {
            binder.expose(serial.event(EventKind::Change), callback.clone());
        }
        if let Some(callback) = &self.on_keydown {
            binder.expose(serial.event(EventKind::Keydown), callback.clone());
        }
        Ok(format!(
            "<input id=\"{0}\" style=\"{1}\" placeholder=\"{2}\" value=\"{3}\" \
             onchange=\"eel.{0}change(this.value)\" onClick=\"eel.{0}click()\" onkeydown=\"eel.{0}keydown()\">",
            serial,
            self.node.style(),
            self.placeholder,
            self.default_value
        ))
    }
}
