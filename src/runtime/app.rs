//! 应用：渲染根组件、写出文档、交给宿主

use crate::binder::{self, SharedRegistry};
use crate::error::Result;
use crate::renderer::{self, Document, DEFAULT_OUTPUT};
use crate::ui::Root;
use std::path::{Path, PathBuf};

/// 一个根组件对应的应用
pub struct App {
    root: Root,
    registry: SharedRegistry,
    output: PathBuf,
    document: Option<Document>,
}

impl App {
    /// 绑定写入进程级暴露表，文档写到 `main.html`
    pub fn new(root: Root) -> Self {
        Self {
            root,
            registry: binder::global(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            document: None,
        }
    }

    pub fn with_registry(mut self, registry: SharedRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    /// 渲染并写出文档；只应在启动宿主之前调用一次
    pub fn init(&mut self) -> Result<&Document> {
        log::info!("rendering '{}'", self.root.title());
        let document = renderer::render(&mut self.root, &mut self.registry)?;
        document.write_to(&self.output)?;
        log::info!("{} bindings exposed", binder::lock(&self.registry).len());
        Ok(self.document.insert(document))
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn registry(&self) -> SharedRegistry {
        self.registry.clone()
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}
