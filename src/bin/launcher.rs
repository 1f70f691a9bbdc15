//! 任务启动器
//!
//! 功能：
//! 1. 读取配置（命令行参数指定的 JSON 文件，缺省为内置示例）
//! 2. 为每个任务构建一行，渲染并写出文档
//! 3. 在无头宿主中模拟点击每个任务的按钮

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use conger::binder;
use conger::config::{LauncherConfig, TaskConfig};
use conger::host::{self, HostBridge};
use conger::js::QuickJsHost;
use conger::parser::{Decoration, Merge};
use conger::runtime::App;
use conger::ui::{Container, Root, Styled};
use conger::widget::TaskWidget;

fn demo_config() -> LauncherConfig {
    LauncherConfig {
        title: "Conger".to_string(),
        tasks: vec![TaskConfig {
            name: "Sleeper".to_string(),
            cmd: "sleep 1".to_string(),
            icon: "icon.png".to_string(),
            color: "#34C759".to_string(),
        }],
        ..LauncherConfig::default()
    }
}

fn main() -> conger::Result<()> {
    println!("🚀 Conger Launcher Starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => LauncherConfig::load(&path)?,
        None => demo_config(),
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    println!("✅ Config loaded: {} tasks", config.tasks.len());

    // 宿主需要在任何回调触发之前安装
    let quickjs = Arc::new(QuickJsHost::new()?);
    let bridge: Arc<dyn HostBridge> = quickjs.clone();
    host::init(bridge.clone());

    let widgets: Vec<TaskWidget> = config
        .tasks
        .iter()
        .map(|t| TaskWidget::new(&t.name, &t.cmd, &t.icon, &t.color, bridge.clone()))
        .collect();

    let mut list = Container::vertical(Vec::new()).padding(20, 20, 20, 20);
    for widget in &widgets {
        list.push(widget.component());
    }

    let mut root = Root::new(&config.title).background(&config.background).child(list);
    if let Some(path) = &config.stylesheet {
        let decoration = Decoration::load(path)?;
        decoration.apply(&mut root, Merge::Append);
        println!("✅ Stylesheet applied: {}", decoration.selector());
    }

    let mut app = App::new(root).with_output(&config.output);
    app.init()?;
    println!("✅ Document written to {}", app.output().display());

    let names = binder::lock(&app.registry()).names();
    println!("✅ Event bindings: {}", names.len());
    for name in &names {
        println!("   - {}", name);
    }

    // 模拟点击交互
    println!("\n--- Simulating interactions ---");
    for widget in &widgets {
        let Some(serial) = widget.button_handle().and_then(|h| h.get()) else {
            continue;
        };
        let dispatched = quickjs.trigger(&serial, binder::EventKind::Click, &[])?;
        println!("[Click] {} ({}) -> {} call(s)", widget.name(), serial, dispatched);
        if let Some(label) = widget.label_handle().and_then(|h| h.get()) {
            println!("   label = {}", quickjs.element(label.as_str())?);
        }
    }

    // 等待任务结束
    let start = Instant::now();
    while widgets.iter().any(|w| w.is_running()) && start.elapsed() < Duration::from_secs(10) {
        thread::sleep(Duration::from_millis(100));
    }

    for widget in &widgets {
        println!("   {} running = {}", widget.name(), widget.is_running());
    }

    println!("\n👋 Conger Launcher Stopped");
    Ok(())
}
