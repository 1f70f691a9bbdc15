//! 样式表装饰器单元测试

use crate::error::Error;
use crate::parser::{decorate, Decoration, Merge};
use crate::ui::*;

const CARD: &str = ".card {\n    color: red;\n    padding: 10px;\n}";

/// 测试规则块解析
#[test]
fn test_parse_rule() {
    let decoration = Decoration::parse(CARD).unwrap();

    assert_eq!(decoration.selector(), ".card");
    assert_eq!(decoration.inline(), "color: red; padding: 10px;");
}

/// 测试 Windows 换行
#[test]
fn test_parse_crlf() {
    let decoration = Decoration::parse(".card {\r\n    color: red;\r\n}\r\n").unwrap();
    assert_eq!(decoration.inline(), "color: red;");
}

/// 测试伪类选择器
#[test]
fn test_parse_pseudo_class() {
    let decoration = Decoration::parse(".btn:hover {\n  background: #fff;\n}").unwrap();

    assert_eq!(decoration.selector(), ".btn");
    assert_eq!(decoration.inline(), "background: #fff;");
}

/// 测试追加合并
#[test]
fn test_append() {
    let text = Text::new("x").background("blue");
    let text = Decoration::parse(CARD).unwrap().decorate(text, Merge::Append);

    assert_eq!(
        text.style().as_str(),
        "transition: all 0.5s; background: blue; color: red; padding: 10px;"
    );
}

/// 测试替换合并
#[test]
fn test_replace() {
    let mut text = Text::new("x").background("blue");
    decorate(CARD, &mut text, Merge::Replace).unwrap();

    assert_eq!(text.style().as_str(), "color: red; padding: 10px;");
}

/// 测试无法匹配的样式表不改动组件
#[test]
fn test_mismatch_leaves_style() {
    let mut text = Text::new("x").background("blue");
    let before = text.style().clone();

    let result = decorate("not a stylesheet", &mut text, Merge::Append);
    assert!(matches!(result, Err(Error::StyleMismatch)));
    assert_eq!(text.style(), &before);
}

/// 测试单行规则不被识别
#[test]
fn test_single_line_rule_mismatch() {
    assert!(matches!(
        Decoration::parse(".a { color: red; }"),
        Err(Error::StyleMismatch)
    ));
}

/// 测试读取文件
#[test]
fn test_load() {
    let path = std::env::temp_dir().join(format!("conger_style_{}.css", std::process::id()));
    std::fs::write(&path, CARD).unwrap();
    let decoration = Decoration::load(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(decoration.unwrap().selector(), ".card");
    assert!(matches!(
        Decoration::load("/nonexistent/conger/style.css"),
        Err(Error::Io(_))
    ));
}
