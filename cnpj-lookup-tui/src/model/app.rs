//! 应用主状态结构

use std::path::PathBuf;

use crate::backend::AppConfig;

use super::{
    FocusPanel, LookupPageState, ModalState, NavigationState, Page, SettingsState, Toast,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 查询页面状态
    pub lookup: LookupPageState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 短暂提示（复制成功等）
    pub toast: Option<Toast>,

    /// 启动时加载的配置；设置变更后整体写回
    pub config: AppConfig,

    /// 配置文件位置（设置页展示用）
    pub config_path: Option<PathBuf>,
}

impl App {
    /// 根据配置创建应用实例
    ///
    /// 启动后焦点直接落在查询输入框上。
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Content,
            navigation: NavigationState::new(),
            current_page: Page::Lookup,
            status_message: None,
            lookup: LookupPageState::new(),
            settings: SettingsState::from_config(&config),
            modal: ModalState::new(),
            toast: None,
            config,
            config_path: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前设置合并进配置后的完整配置
    pub fn config_snapshot(&self) -> AppConfig {
        AppConfig {
            theme: self.settings.theme,
            language: self.settings.language,
            ..self.config.clone()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
