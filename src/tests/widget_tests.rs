//! 任务启动器组件单元测试

#![cfg(unix)]

use crate::binder::Registry;
use crate::host::HostBridge;
use crate::renderer;
use crate::ui::*;
use crate::widget::{TaskWidget, START_LABEL, STOP_LABEL};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// 记录调用的宿主
#[derive(Default)]
struct RecordingHost(Mutex<Vec<(String, Vec<Value>)>>);

impl RecordingHost {
    fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.0.lock().unwrap().clone()
    }
}

impl HostBridge for RecordingHost {
    fn call(&self, function: &str, args: &[Value]) -> crate::Result<Value> {
        self.0.lock().unwrap().push((function.to_string(), args.to_vec()));
        Ok(Value::Null)
    }
}

fn call(function: &str, id: &str, value: &str) -> (String, Vec<Value>) {
    (function.to_string(), vec![json!(id), json!(value)])
}

/// 辅助函数：挂到根上渲染
fn mount(widget: &TaskWidget) -> Registry {
    let mut root = Root::new("T").child(widget.component());
    let mut registry = Registry::new();
    renderer::render(&mut root, &mut registry).unwrap();
    registry
}

/// 测试按钮和文字的地址
#[test]
fn test_widget_serials() {
    let host = Arc::new(RecordingHost::default());
    let widget = TaskWidget::new("Sleeper", "sleep 5", "icon.png", "#34C759", host);
    let registry = mount(&widget);

    assert_eq!(widget.button_handle().unwrap().get().unwrap().as_str(), "_0_0_1");
    assert_eq!(widget.label_handle().unwrap().get().unwrap().as_str(), "_0_0_1_0");
    assert_eq!(registry.names(), vec!["_0_0_1click".to_string()]);
}

/// 测试启动再停止
#[test]
fn test_start_then_stop() {
    let host = Arc::new(RecordingHost::default());
    let widget = TaskWidget::new("Sleeper", "sleep 5", "", "#34C759", host.clone());
    let registry = mount(&widget);
    assert!(!widget.is_running());

    registry.invoke("_0_0_1click", &[]).unwrap();
    assert!(widget.is_running());
    assert_eq!(
        host.calls(),
        vec![
            call("set_background", "_0_0_1", "#34C759"),
            call("set_text_color", "_0_0_1_0", "#FFFFFF"),
            call("set_p_text", "_0_0_1_0", STOP_LABEL),
        ]
    );

    registry.invoke("_0_0_1click", &[]).unwrap();
    let start = Instant::now();
    while widget.is_running() && start.elapsed() < Duration::from_secs(5) {
        thread::sleep(Duration::from_millis(20));
    }
    assert!(!widget.is_running());

    let calls = host.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[3], call("set_background", "_0_0_1", "#FFFFFF"));
    assert_eq!(calls[4], call("set_text_color", "_0_0_1_0", "#34C759"));
    assert_eq!(calls[5], call("set_p_text", "_0_0_1_0", START_LABEL));
}

/// 测试任务自然结束后恢复
#[test]
fn test_natural_exit_restores() {
    let host = Arc::new(RecordingHost::default());
    let widget = TaskWidget::new("Quick", "exit 0", "", "#FF0000", host.clone());
    let registry = mount(&widget);

    registry.invoke("_0_0_1click", &[]).unwrap();
    let start = Instant::now();
    while widget.is_running() && start.elapsed() < Duration::from_secs(5) {
        thread::sleep(Duration::from_millis(20));
    }

    assert!(!widget.is_running());
    assert_eq!(host.calls().last(), Some(&call("set_p_text", "_0_0_1_0", START_LABEL)));
}
