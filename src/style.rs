//! 样式累加器
//!
//! 样式串只追加、不回读：同一属性后写入的声明按 CSS 层叠规则覆盖先写入的。

use std::fmt;

/// 组件默认带的过渡声明
pub const TRANSITION: &str = "transition: all 0.5s; ";

/// 尺寸值：整数按像素解释，字符串原样透传（如 `"100%"`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Length {
    Px(i32),
    Raw(String),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Raw(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Length {
    fn from(v: i32) -> Self {
        Length::Px(v)
    }
}

impl From<&str> for Length {
    fn from(s: &str) -> Self {
        Length::Raw(s.to_string())
    }
}

impl From<String> for Length {
    fn from(s: String) -> Self {
        Length::Raw(s)
    }
}

/// 内联样式串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(String);

impl Style {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn with(initial: &str) -> Self {
        Self(initial.to_string())
    }

    /// 追加一条 `property: value; ` 声明
    pub fn declare(&mut self, property: &str, value: impl fmt::Display) {
        self.0.push_str(&format!("{}: {}; ", property, value));
    }

    /// 原样追加一段声明文本
    pub fn append(&mut self, fragment: &str) {
        self.0.push_str(fragment);
    }

    /// 整体替换
    pub fn replace(&mut self, fragment: &str) {
        self.0 = fragment.to_string();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
