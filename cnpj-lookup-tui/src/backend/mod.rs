//!
//! src/backend/mod.rs
//! Backend 层：执行 update 返回的命令
//!
//! Backend 层与 UI 解耦，update 只描述要做什么（`Command`），
//! 由这里真正发起网络请求、打开浏览器、写剪贴板和配置文件。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod clipboard;          // 系统剪贴板（arboard）
//!         mod config_service;     // 配置文件（JSON）
//!         mod launcher;           // 系统浏览器（open）
//!         mod lookup_backend;     // tokio 运行时 + LookupService
//!
//!
//! 数据流：
//!
//!     用户按下 Enter
//!         ↓
//!     update 调用 reduce，得到 Effect::FetchCompany
//!         ↓
//!     主循环把 Command::Lookup 交给 Backend::execute
//!         ↓
//!     LookupBackend 在 tokio 运行时上调用 LookupService::fetch
//!         ↓
//!     结果经 mpsc 回到主循环（Backend::drain_events）
//!         ↓
//!     AppMessage::Backend 进入 update，reduce 按请求序号决定是否采用
//!

mod clipboard;
mod config_service;
mod launcher;
mod lookup_backend;

use anyhow::Result;

use crate::message::{BackendEvent, Command};

use clipboard::ClipboardService;
use lookup_backend::LookupBackend;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};

/// Backend 入口
pub struct Backend {
    lookup: LookupBackend,
    clipboard: ClipboardService,
    config: Option<Box<dyn ConfigService>>,
}

impl Backend {
    pub fn new(config: &AppConfig, config_service: Option<Box<dyn ConfigService>>) -> Result<Self> {
        Ok(Self {
            lookup: LookupBackend::new(config)?,
            clipboard: ClipboardService::new(),
            config: config_service,
        })
    }

    /// 执行命令
    ///
    /// 同步完成的命令直接返回结果事件；异步命令的结果稍后由 `drain_events` 取出。
    pub fn execute(&mut self, command: Command) -> Option<BackendEvent> {
        match command {
            Command::Lookup(effect) => {
                self.lookup.dispatch(effect);
                None
            }
            Command::CopyToClipboard(text) => Some(match self.clipboard.set_text(&text) {
                Ok(()) => BackendEvent::Copied,
                Err(e) => {
                    log::warn!("Copy to clipboard failed: {e}");
                    BackendEvent::CopyFailed(e)
                }
            }),
            Command::SaveConfig(config) => {
                let service = self.config.as_ref()?;
                service.save(&config).err().map(|e| {
                    log::error!("Failed to save config: {e:#}");
                    BackendEvent::ConfigSaveFailed(format!("{e:#}"))
                })
            }
        }
    }

    /// 取出所有已完成的异步结果
    pub fn drain_events(&self) -> Vec<BackendEvent> {
        self.lookup.drain()
    }
}
