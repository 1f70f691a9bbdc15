//! 子进程管理单元测试

#![cfg(unix)]

use crate::task::Process;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// 辅助函数：等待条件成立
fn wait_until(timeout: Duration, cond: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    cond()
}

/// 测试正常退出后回调触发一次
#[test]
fn test_exit_callback() {
    let (tx, rx) = mpsc::channel();
    let process = Process::spawn_with("exit 0", move || {
        tx.send(()).unwrap();
    })
    .unwrap();

    assert_eq!(process.command(), "exit 0");
    rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    assert!(wait_until(Duration::from_secs(1), || process.has_exited()));
}

/// 测试 kill 之后进程退出并触发回调
#[test]
fn test_kill() {
    let (tx, rx) = mpsc::channel();
    let process = Process::spawn_with("sleep 5", move || {
        tx.send(()).unwrap();
    })
    .unwrap();
    assert!(!process.has_exited());

    process.kill().unwrap();
    rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(wait_until(Duration::from_secs(1), || process.has_exited()));

    // 已退出再 kill 不报错
    process.kill().unwrap();
}

/// 测试不带回调启动
#[test]
fn test_spawn_without_callback() {
    let process = Process::spawn("true").unwrap();
    assert!(process.id() > 0);
    assert!(wait_until(Duration::from_secs(5), || process.has_exited()));
}

/// 测试回收没有监视线程的子进程
#[test]
fn test_reap_kills_child() {
    use crate::task::reap;
    use std::process::Command;
    use std::sync::Mutex;

    let child = Mutex::new(Command::new("sleep").arg("5").spawn().unwrap());
    let start = Instant::now();
    reap(&child);

    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(child.lock().unwrap().try_wait().unwrap().is_some());
}
