//! 无头宿主：在 QuickJS 中托管文档脚本
//!
//! 用一个最小的 `document` 替身和 `eel` 对象执行引导脚本。
//! 文档对 `eel.<name>(...)` 的调用先进入队列，脚本执行完、运行时解锁后再分发到暴露表，
//! 这样回调里可以继续通过宿主修改元素。

use super::JsRuntime;
use crate::binder::{self, EventKind, SharedRegistry};
use crate::error::{Error, Result};
use crate::host::HostBridge;
use crate::renderer::BOOTSTRAP_SCRIPT;
use crate::ui::Serial;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 元素替身和 `eel` 对象
const DOM_PRELUDE: &str = r#"
    var __elements = {};
    var __js_exposed = {};
    function __Element(id) {
        this.id = id;
        this.value = '';
        this.src = '';
        this.innerHTML = '';
        this.style = {};
    }
    var document = {
        getElementById: function (id) {
            if (!__elements[id]) {
                __elements[id] = new __Element(id);
            }
            return __elements[id];
        }
    };
    var eel = new Proxy({
        expose: function (f, name) {
            __js_exposed[name || f.name] = f;
        }
    }, {
        get: function (target, key) {
            if (key in target) {
                return target[key];
            }
            return function () {
                var args = Array.prototype.slice.call(arguments);
                __native_invoke(String(key), JSON.stringify(args));
            };
        }
    });
"#;

/// 文档发往 native 的一次调用
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCall {
    pub name: String,
    pub args: Vec<Value>,
}

/// QuickJS 宿主
pub struct QuickJsHost {
    runtime: Mutex<JsRuntime>,
    queue: Arc<Mutex<Vec<PendingCall>>>,
    registry: SharedRegistry,
}

impl QuickJsHost {
    /// 分发到进程级暴露表
    pub fn new() -> Result<Self> {
        Self::with_registry(binder::global())
    }

    pub fn with_registry(registry: SharedRegistry) -> Result<Self> {
        let runtime = JsRuntime::new()?;
        let queue: Arc<Mutex<Vec<PendingCall>>> = Arc::new(Mutex::new(Vec::new()));

        let q = queue.clone();
        runtime.register_function("__native_invoke", move |name, payload| {
            let args: Vec<Value> = match serde_json::from_str(&payload) {
                Ok(args) => args,
                Err(e) => {
                    log::warn!("bad arguments for {}: {}", name, e);
                    Vec::new()
                }
            };
            q.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(PendingCall { name, args });
        })?;

        runtime.eval(DOM_PRELUDE)?;
        runtime.eval(BOOTSTRAP_SCRIPT)?;

        Ok(Self {
            runtime: Mutex::new(runtime),
            queue,
            registry,
        })
    }

    fn runtime(&self) -> MutexGuard<'_, JsRuntime> {
        self.runtime.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 获取并清空调用队列
    pub fn drain_calls(&self) -> Vec<PendingCall> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }

    /// 执行一段文档侧脚本，再把它产生的调用分发出去，返回分发数量
    ///
    /// 某个调用失败时其余调用照常分发，最后返回第一个错误。
    pub fn dispatch(&self, script: &str) -> Result<usize> {
        self.runtime().eval(script)?;

        let calls = self.drain_calls();
        let count = calls.len();
        let mut first_error = None;
        for call in calls {
            log::debug!("invoke {} with {} args", call.name, call.args.len());
            if let Err(e) = binder::invoke(&self.registry, &call.name, &call.args) {
                log::warn!("{}: {}", call.name, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(count),
        }
    }

    /// 模拟元素上的内联事件属性，如 `eel._0_1click()`
    pub fn trigger(&self, serial: &Serial, kind: EventKind, args: &[Value]) -> Result<usize> {
        let script = format!("eel.{}({})", serial.event(kind), join_args(args));
        self.dispatch(&script)
    }

    /// 元素替身的当前状态（`value`、`src`、`innerHTML`、`style`）
    pub fn element(&self, id: &str) -> Result<Value> {
        let code = format!(
            "JSON.stringify(document.getElementById({}))",
            Value::from(id)
        );
        let text = self
            .runtime()
            .eval_string(&code)?
            .ok_or_else(|| Error::Host(format!("element {} is not serializable", id)))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl HostBridge for QuickJsHost {
    fn call(&self, function: &str, args: &[Value]) -> Result<Value> {
        let code = format!(
            "JSON.stringify(__js_exposed[{}]({}))",
            Value::from(function),
            join_args(args)
        );
        match self.runtime().eval_string(&code)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Value::Null),
        }
    }
}

fn join_args(args: &[Value]) -> String {
    args.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
