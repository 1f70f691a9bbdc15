//! 文档渲染：地址分配 + 标记拼接 + 引导脚本

use crate::binder::{self, Binder};
use crate::error::Result;
use crate::ui::{Component, Root, Serial};
use std::fmt;
use std::path::Path;

/// 文档内声明给宿主的入口，每个都按 `id`（即节点地址）查找元素
pub const BOOTSTRAP_SCRIPT: &str = r#"        eel.expose(get_input_text);
        eel.expose(set_input_text);
        eel.expose(set_image_src);
        eel.expose(set_p_text);
        eel.expose(set_background);
        eel.expose(set_text_color);
        function get_input_text(id) {
            return document.getElementById(id).value
        }
        function set_input_text(id, value) {
            document.getElementById(id).value = value
        }
        function set_image_src(id, value) {
            document.getElementById(id).src = value
        }
        function set_p_text(id, value) {
            document.getElementById(id).innerHTML = value
        }
        function set_background(id, value) {
            document.getElementById(id).style.background = value
        }
        function set_text_color(id, value) {
            document.getElementById(id).style.color = value
        }
"#;

/// 宿主桥接脚本地址
pub const BRIDGE_SCRIPT_SRC: &str = "/eel.js";

/// 默认输出文件名
pub const DEFAULT_OUTPUT: &str = "main.html";

/// 完整的 HTML 文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// 在启动宿主之前写入文件
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.0)?;
        log::info!("document written to {} ({} bytes)", path.display(), self.0.len());
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 用标题、`<body>` 样式和已渲染的主体拼出整份文档
pub fn document(title: &str, body_style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <script type=\"text/javascript\" src=\"{}\"></script>
    <title>{}</title>
    <script>
{}    </script>
</head>
<body style='{}'>
{}
</body>
</html>
",
        BRIDGE_SCRIPT_SRC, title, BOOTSTRAP_SCRIPT, body_style, body
    )
}

/// 第一阶段：从根哨兵开始为整棵树分配地址
pub fn address(root: &mut Root) {
    root.assign(Serial::root());
    log::debug!("addressed tree '{}'", root.title());
}

/// 两阶段渲染，绑定写入给定的表
///
/// 样式串不会被修改；同一棵树结构不变时重复渲染得到相同的文档和相同的绑定名。
/// 结构变化后旧名字不会被清除。
pub fn render(root: &mut Root, binder: &mut dyn Binder) -> Result<Document> {
    address(root);
    let markup = Component::render(&*root, binder)?;
    Ok(Document(markup))
}

/// 绑定写入进程级暴露表
pub fn render_global(root: &mut Root) -> Result<Document> {
    let mut registry = binder::global();
    render(root, &mut registry)
}
