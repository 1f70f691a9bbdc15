//! QuickJS 运行时

use crate::error::{Error, Result};
use rquickjs::{Context, Function, Runtime, Value};

/// JS 运行时
pub struct JsRuntime {
    _runtime: Runtime,
    context: Context,
}

fn js_error(e: rquickjs::Error) -> Error {
    Error::Host(format!("{:?}", e))
}

impl JsRuntime {
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new().map_err(js_error)?;
        let context = Context::full(&runtime).map_err(js_error)?;

        Ok(Self {
            _runtime: runtime,
            context,
        })
    }

    /// 执行 JS 代码，丢弃结果
    pub fn eval(&self, code: &str) -> Result<()> {
        self.context
            .with(|ctx| ctx.eval::<Value, _>(code).map(|_| ()))
            .map_err(js_error)
    }

    /// 执行结果为字符串的表达式；`undefined` / `null` 得到 `None`
    pub fn eval_string(&self, code: &str) -> Result<Option<String>> {
        self.context
            .with(|ctx| ctx.eval::<Option<String>, _>(code))
            .map_err(js_error)
    }

    /// 注册两个字符串参数的全局函数
    pub fn register_function<F>(&self, name: &str, func: F) -> Result<()>
    where
        F: Fn(String, String) + Send + Sync + 'static,
    {
        self.context
            .with(|ctx| {
                let js_func = Function::new(ctx.clone(), move |a: String, b: String| func(a, b))?;
                ctx.globals().set(name, js_func)
            })
            .map_err(js_error)
    }
}
