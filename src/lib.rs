//! Conger - 组件树到 HTML 文档的描述层
//! 构建组件树，一次渲染成文档，用户交互经宿主桥接回到组件注册的回调

mod error;
pub mod style;

pub use error::{Error, Result};
pub use style::{Length, Style};

// UI 组件系统
pub mod ui;

// 事件绑定
pub mod binder;

// 文档渲染
pub mod renderer;

// 样式表装饰器
pub mod parser;

// 宿主桥接接口
pub mod host;

// QuickJS 无头宿主
pub mod js;

// 子进程管理
pub mod task;

// 任务启动器组件
pub mod widget;

// 配置
pub mod config;

// 应用运行时
pub mod runtime;

// 单元测试
#[cfg(test)]
mod tests;
