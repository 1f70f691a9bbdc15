//! 组件单元测试
//! 测试样式修改器、地址分配和基础组件

use crate::binder::Registry;
use crate::error::Error;
use crate::renderer;
use crate::ui::*;
use crate::children;
use std::collections::HashMap;

/// 没有标记形态的组件
struct Bare {
    node: Node,
}

impl Component for Bare {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}

/// 辅助函数：按层叠规则求出生效的声明
fn effective(style: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for decl in style.split(';') {
        if let Some((k, v)) = decl.split_once(':') {
            map.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
    map
}

/// 测试基础组件 render 失败
#[test]
fn test_base_render_not_implemented() {
    let bare = Bare { node: Node::new() };
    let mut registry = Registry::new();

    match bare.render(&mut registry) {
        Err(Error::NotImplemented { component }) => assert_eq!(component, "Component"),
        other => panic!("expected NotImplemented, got {:?}", other),
    }
}

/// 测试样式修改器拼接
#[test]
fn test_style_mutators() {
    let text = Text::new("a")
        .height(10)
        .width("100%")
        .padding(1, 2, 3, 4)
        .margin(0, 0, 10, 0)
        .border(2, "#FFFFFF")
        .shadow("#123456")
        .rounded_corner(9999)
        .font_size(13)
        .center_text();

    assert_eq!(
        text.style().as_str(),
        "transition: all 0.5s; height: 10px; width: 100%; padding: 1px 2px 3px 4px; \
         margin: 0px 0px 10px 0px; border: solid 2px #FFFFFF; box-shadow: 0px 5px 6px #1234564f; \
         border-radius: 9999px; font-size: 13px; text-align: center; "
    );
}

/// 测试各组件的初始样式
#[test]
fn test_initial_styles() {
    assert_eq!(Container::horizontal(vec![]).style().as_str(), "display: flex; ");
    assert_eq!(Container::vertical(vec![]).style().as_str(), "");
    assert_eq!(Button::new(vec![]).style().as_str(), "");
    assert_eq!(Container::new(vec![]).style().as_str(), "transition: all 0.5s; ");
    assert_eq!(Root::new("t").style().as_str(), "transition: all 0.5s; ");
}

/// 测试同一属性后写入的生效
#[test]
fn test_later_declaration_wins() {
    let text = Text::new("a").background("red").font_color("blue").background("green");
    let decls = effective(text.style().as_str());

    assert_eq!(decls.get("background").map(String::as_str), Some("green"));
    assert_eq!(decls.get("color").map(String::as_str), Some("blue"));
}

/// 测试修改器的结合性
#[test]
fn test_mutator_associativity() {
    let m1 = |c: Container| c.height(10).background("red");
    let m2 = |c: Container| c.height("50%").justify_center();

    let chained = m2(m1(Container::new(vec![])));
    let mut expected = effective(m1(Container::new(vec![])).style().as_str());
    expected.extend(effective(m2(Container::vertical(vec![])).style().as_str()));

    assert_eq!(effective(chained.style().as_str()), expected);
}

/// 测试地址规则：父地址 + `_` + 序号
#[test]
fn test_serial_assignment() {
    let leaf = Text::new("leaf");
    let leaf_handle = leaf.serial_handle();
    let image = Image::new("a.png");
    let image_handle = image.serial_handle();
    let inner = Container::vertical(children![Text::new("x"), leaf]);
    let inner_handle = inner.serial_handle();

    let mut root = Root::new("T")
        .child(image)
        .child(Container::horizontal(children![inner]));

    renderer::address(&mut root);

    assert_eq!(root.serial().as_str(), Serial::ROOT);
    assert_eq!(image_handle.get().unwrap().as_str(), "_0_0");
    assert_eq!(inner_handle.get().unwrap().as_str(), "_0_1_0");
    assert_eq!(leaf_handle.get().unwrap().as_str(), "_0_1_0_1");
}

/// 测试地址在整棵树上唯一且符合路径规则
#[test]
fn test_serial_rule_holds_for_every_node() {
    fn check(component: &dyn Component, seen: &mut Vec<String>) {
        for (i, child) in component.children().iter().enumerate() {
            assert_eq!(child.serial(), component.serial().child(i));
            check(child.as_ref(), seen);
        }
        seen.push(component.serial().to_string());
    }

    let mut root = Root::with_children(
        "T",
        children![
            Container::horizontal(children![Text::new("a"), Text::new("b")]),
            Button::new(children![Text::new("c")]),
            Container::new(children![Container::vertical(children![Input::new("", "")])]),
        ],
    );
    renderer::address(&mut root);

    let mut seen = Vec::new();
    check(&root, &mut seen);
    let total = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), total);
}

/// 测试渲染前地址不可读
#[test]
fn test_serial_unassigned_before_render() {
    let text = Text::new("x");
    let handle = text.serial_handle();

    assert!(!handle.is_assigned());
    assert_eq!(text.serial().as_str(), Serial::ROOT);

    let _root = Root::new("T").child(text);
    assert!(handle.get().is_none());
}

/// 测试事件名
#[test]
fn test_event_names() {
    let serial = Serial::root().child(1);
    assert_eq!(serial.event(crate::binder::EventKind::Click), "_0_1click");
    assert_eq!(serial.event(crate::binder::EventKind::Change), "_0_1change");
    assert_eq!(serial.event(crate::binder::EventKind::Keydown), "_0_1keydown");
}
