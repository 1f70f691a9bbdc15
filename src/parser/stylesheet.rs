//! 样式表装饰器
//!
//! 不是完整的 CSS 解析器：只按模式找出唯一的规则块，再逐行取出 `property: value;` 声明，
//! 拼成一段内联样式合并进组件。

use crate::error::{Error, Result};
use crate::ui::Component;
use regex::Regex;
use std::path::Path;

/// 规则块：行首选择器，可选伪类，`{` 位于行尾，`}` 独占行尾
const RULE_PATTERN: &str = r"(?m)^(.[A-Za-z\-_0-9]*)(\s*:\s*([A-Za-z]*))?\s*\{($[^}]*)\}$";
/// 单条声明，以 `;` 结尾
const DECLARATION_PATTERN: &str = r"(?m)[A-Za-z\-]*\s*:\s*[^;]*;$";

/// 合并方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Merge {
    /// 追加到已有样式之后
    #[default]
    Append,
    /// 整体替换已有样式
    Replace,
}

/// 从样式表提取出的内联样式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    selector: String,
    inline: String,
}

impl Decoration {
    /// 解析样式表文本；找不到规则块时返回 `StyleMismatch`
    pub fn parse(stylesheet: &str) -> Result<Self> {
        let stylesheet = stylesheet.replace("\r\n", "\n");
        let rule = Regex::new(RULE_PATTERN).map_err(|e| Error::Config(e.to_string()))?;
        let declaration =
            Regex::new(DECLARATION_PATTERN).map_err(|e| Error::Config(e.to_string()))?;

        let caps = rule.captures(&stylesheet).ok_or(Error::StyleMismatch)?;
        let selector = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        let body = caps.get(4).map(|m| m.as_str()).unwrap_or_default();

        let lines: Vec<&str> = declaration
            .find_iter(body)
            .map(|m| m.as_str())
            .collect();

        Ok(Self {
            selector: selector.to_string(),
            inline: lines.join(" "),
        })
    }

    /// 读取样式表文件再解析
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn inline(&self) -> &str {
        &self.inline
    }

    pub fn apply(&self, component: &mut dyn Component, merge: Merge) {
        let style = component.node_mut().style_mut();
        match merge {
            Merge::Append => style.append(&self.inline),
            Merge::Replace => style.replace(&self.inline),
        }
    }

    /// 链式版本
    pub fn decorate<C: Component>(&self, mut component: C, merge: Merge) -> C {
        self.apply(&mut component, merge);
        component
    }
}

/// 解析并合并；样式表不合规时组件原样不动，错误直接返回
pub fn decorate(stylesheet: &str, component: &mut dyn Component, merge: Merge) -> Result<()> {
    let decoration = Decoration::parse(stylesheet)?;
    decoration.apply(component, merge);
    Ok(())
}
