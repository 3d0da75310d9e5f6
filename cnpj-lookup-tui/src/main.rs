//! CNPJ Lookup TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网络请求、浏览器、剪贴板、配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     init_logging()          // 文件日志
//!     ConfigService::load()   // 读取配置，应用主题与语言
//!     Backend::new()          // tokio 运行时、注册处客户端
//!     init_terminal()         // 原始模式、备用屏幕、括号粘贴
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, Backend, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 0. 日志（guard 存活到 main 结束）
    let _log_guard = init_logging();

    // 1. 加载配置
    let config_service = LocalConfigService::from_env();
    let config = match &config_service {
        Some(service) => service.load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config: {e:#}");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    // 2. 创建应用实例
    let mut app = model::App::new(config.clone());
    app.config_path = config_service.as_ref().map(|s| s.path().to_path_buf());
    update::apply_settings(&app.settings);

    // 3. 后台
    let mut backend = Backend::new(
        &config,
        config_service.map(|s| Box::new(s) as Box<dyn ConfigService>),
    )?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
