//! 错误类型

use std::fmt::{self, Display};
use std::io;

/// crate 内统一的错误
#[derive(Debug)]
pub enum Error {
    /// 组件没有实现 render（只能被扩展的基础组件）
    NotImplemented {
        component: &'static str,
    },
    /// 样式表中找不到单选择器、单规则块
    StyleMismatch,
    /// 宿主调用了一个从未暴露的名字
    UnknownBinding(String),
    /// 没有安装宿主
    HostUnavailable,
    /// 宿主运行时失败
    Host(String),
    /// 子进程启动或终止失败
    Process(String),
    /// 配置无法解析
    Config(String),
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotImplemented { component } => {
                write!(f, "render() is not implemented for {}", component)
            }
            Error::StyleMismatch => {
                write!(f, "stylesheet contains no single-selector rule block")
            }
            Error::UnknownBinding(name) => write!(f, "no callback exposed as '{}'", name),
            Error::HostUnavailable => write!(f, "host bridge has not been initialized"),
            Error::Host(msg) => write!(f, "host error: {}", msg),
            Error::Process(msg) => write!(f, "process error: {}", msg),
            Error::Config(msg) => write!(f, "config error: {}", msg),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
