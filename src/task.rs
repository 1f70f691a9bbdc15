//! 子进程管理
//!
//! 每个进程一个监视线程，只负责等待退出并触发一次完成回调。

use crate::error::{Error, Result};
use std::process::{Child, Command};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn shell(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// 结束并回收一个没有监视线程的子进程
pub(crate) fn reap(child: &Mutex<Child>) {
    let mut child = child.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = child.kill() {
        log::warn!("failed to kill pid {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        log::warn!("failed to wait pid {}: {}", child.id(), e);
    }
}

/// 受管子进程
pub struct Process {
    command: String,
    child: Arc<Mutex<Child>>,
    exited: Arc<AtomicBool>,
}

impl Process {
    pub fn spawn(command: &str) -> Result<Self> {
        Self::spawn_inner(command, None)
    }

    /// 进程退出（正常结束或被 kill）后在监视线程上调用 `on_exit`
    pub fn spawn_with<F>(command: &str, on_exit: F) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn_inner(command, Some(Box::new(on_exit)))
    }

    fn spawn_inner(command: &str, on_exit: Option<Box<dyn FnOnce() + Send>>) -> Result<Self> {
        let child = shell(command)
            .spawn()
            .map_err(|e| Error::Process(format!("failed to start '{}': {}", command, e)))?;
        log::info!("started '{}' (pid {})", command, child.id());

        let child = Arc::new(Mutex::new(child));
        let exited = Arc::new(AtomicBool::new(false));

        let c = child.clone();
        let done = exited.clone();
        let monitor = thread::Builder::new()
            .name("block".to_string())
            .spawn(move || {
                loop {
                    let status = c.lock().unwrap_or_else(PoisonError::into_inner).try_wait();
                    match status {
                        Ok(Some(_)) | Err(_) => break,
                        Ok(None) => thread::sleep(POLL_INTERVAL),
                    }
                }
                done.store(true, Ordering::SeqCst);
                if let Some(callback) = on_exit {
                    callback();
                }
            });
        if let Err(e) = monitor {
            reap(&child);
            return Err(Error::Process(format!("failed to monitor '{}': {}", command, e)));
        }

        Ok(Self {
            command: command.to_string(),
            child,
            exited,
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn id(&self) -> u32 {
        self.child.lock().unwrap_or_else(PoisonError::into_inner).id()
    }

    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }

    pub fn kill(&self) -> Result<()> {
        if self.has_exited() {
            return Ok(());
        }
        self.child
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .kill()
            .map_err(|e| Error::Process(format!("failed to kill '{}': {}", self.command, e)))
    }
}
