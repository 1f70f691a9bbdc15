//! 宿主桥接接口
//!
//! 宿主负责托管生成的文档，把 DOM 事件转成对暴露函数的调用，
//! 也让 native 代码反过来调用文档里的入口（`get_input_text` 等）。

use crate::error::{Error, Result};
use crate::ui::Serial;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::{Arc, PoisonError, RwLock};

/// 宿主需要提供给核心的能力
pub trait HostBridge: Send + Sync {
    /// 调用文档内声明的入口，返回其结果（无返回值时为 `Null`）
    fn call(&self, function: &str, args: &[Value]) -> Result<Value>;
}

/// 按地址操作元素的便捷方法
pub trait HostExt {
    fn get_input_value(&self, serial: &Serial) -> Result<String>;
    fn set_input_value(&self, serial: &Serial, text: &str) -> Result<()>;
    fn set_text(&self, serial: &Serial, text: &str) -> Result<()>;
    fn set_image_src(&self, serial: &Serial, src: &str) -> Result<()>;
    fn set_background(&self, serial: &Serial, value: &str) -> Result<()>;
    fn set_font_color(&self, serial: &Serial, value: &str) -> Result<()>;
}

impl<H: HostBridge + ?Sized> HostExt for H {
    fn get_input_value(&self, serial: &Serial) -> Result<String> {
        let value = self.call("get_input_text", &[json!(serial.as_str())])?;
        Ok(match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    fn set_input_value(&self, serial: &Serial, text: &str) -> Result<()> {
        self.call("set_input_text", &[json!(serial.as_str()), json!(text)])?;
        Ok(())
    }

    fn set_text(&self, serial: &Serial, text: &str) -> Result<()> {
        self.call("set_p_text", &[json!(serial.as_str()), json!(text)])?;
        Ok(())
    }

    fn set_image_src(&self, serial: &Serial, src: &str) -> Result<()> {
        self.call("set_image_src", &[json!(serial.as_str()), json!(src)])?;
        Ok(())
    }

    fn set_background(&self, serial: &Serial, value: &str) -> Result<()> {
        self.call("set_background", &[json!(serial.as_str()), json!(value)])?;
        Ok(())
    }

    fn set_font_color(&self, serial: &Serial, value: &str) -> Result<()> {
        self.call("set_text_color", &[json!(serial.as_str()), json!(value)])?;
        Ok(())
    }
}

/// 进程级宿主
static HOST: Lazy<RwLock<Option<Arc<dyn HostBridge>>>> = Lazy::new(|| RwLock::new(None));

/// 进程启动时安装宿主
pub fn init(host: Arc<dyn HostBridge>) {
    *HOST.write().unwrap_or_else(PoisonError::into_inner) = Some(host);
}

pub fn current() -> Result<Arc<dyn HostBridge>> {
    HOST.read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(Error::HostUnavailable)
}

pub fn get_input_value(serial: &Serial) -> Result<String> {
    current()?.get_input_value(serial)
}

pub fn set_input_value(serial: &Serial, text: &str) -> Result<()> {
    current()?.set_input_value(serial, text)
}

pub fn set_text(serial: &Serial, text: &str) -> Result<()> {
    current()?.set_text(serial, text)
}

pub fn set_image_src(serial: &Serial, src: &str) -> Result<()> {
    current()?.set_image_src(serial, src)
}

pub fn set_background(serial: &Serial, value: &str) -> Result<()> {
    current()?.set_background(serial, value)
}

pub fn set_font_color(serial: &Serial, value: &str) -> Result<()> {
    current()?.set_font_color(serial, value)
}
