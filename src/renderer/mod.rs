//! 渲染器 - 将组件树渲染为 HTML 文档

mod document;

pub use document::{
    address, document, render, render_global, Document, BOOTSTRAP_SCRIPT, BRIDGE_SCRIPT_SRC,
    DEFAULT_OUTPUT,
};
