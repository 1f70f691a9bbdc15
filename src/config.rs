//! 启动器配置

use crate::error::Result;
use crate::renderer::DEFAULT_OUTPUT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 启动器配置文件结构
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
    /// 启动器的默认日志过滤（`RUST_LOG` 优先）
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_title() -> String { "Conger".to_string() }
fn default_output() -> PathBuf { PathBuf::from(DEFAULT_OUTPUT) }
fn default_background() -> String { "#F5F5F5".to_string() }
fn default_log_level() -> String { "info".to_string() }

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    pub name: String,
    pub cmd: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_task_color")]
    pub color: String,
}

fn default_task_color() -> String { "#007AFF".to_string() }

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
            background: default_background(),
            stylesheet: None,
            tasks: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl LauncherConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
