//! 事件绑定
//!
//! 渲染时每个声明了回调的节点以 `<serial><suffix>` 为名暴露给宿主。
//! 同名重复绑定覆盖旧回调；节点被移除时不会解绑，旧名字在结构变化后的重渲染中失效。

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 宿主可调用的回调，参数为宿主转发的值（change 为输入框内容，click/keydown 为空）
pub type Callback = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// 事件后缀
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Keydown,
}

impl EventKind {
    pub fn suffix(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Keydown => "keydown",
        }
    }
}

/// 渲染过程写入绑定的出口
pub trait Binder {
    fn expose(&mut self, name: String, callback: Callback);
}

/// 名字 → 回调 表
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, Callback>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Callback> {
        self.entries.get(name).cloned()
    }

    /// 按字典序列出已暴露的名字
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<()> {
        let callback = self
            .get(name)
            .ok_or_else(|| Error::UnknownBinding(name.to_string()))?;
        callback(args);
        Ok(())
    }
}

impl Binder for Registry {
    fn expose(&mut self, name: String, callback: Callback) {
        log::debug!("expose {}", name);
        self.entries.insert(name, callback);
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("names", &self.names()).finish()
    }
}

/// 可跨线程共享的表
pub type SharedRegistry = Arc<Mutex<Registry>>;

impl Binder for SharedRegistry {
    fn expose(&mut self, name: String, callback: Callback) {
        lock(self).expose(name, callback);
    }
}

/// 进程级暴露表
static EXPOSED: Lazy<SharedRegistry> = Lazy::new(|| Arc::new(Mutex::new(Registry::new())));

pub fn global() -> SharedRegistry {
    EXPOSED.clone()
}

pub fn lock(registry: &SharedRegistry) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 在锁外执行回调，回调内可以再次渲染或绑定
pub fn invoke(registry: &SharedRegistry, name: &str, args: &[Value]) -> Result<()> {
    let callback = lock(registry)
        .get(name)
        .ok_or_else(|| Error::UnknownBinding(name.to_string()))?;
    callback(args);
    Ok(())
}
