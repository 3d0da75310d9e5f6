//! 设置页面状态

use serde::{Deserialize, Serialize};

use crate::backend::AppConfig;
use crate::i18n::Language;

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 获取上一个主题
    #[must_use]
    pub fn prev(self) -> Theme {
        self.next() // 只有两个选项，prev 和 next 相同
    }
}

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }
}

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl SettingsState {
    /// 从配置恢复设置
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            selected_index: 0,
            theme: config.theme,
            language: config.language,
        }
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        let count = SettingItem::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingItem::all().len();
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项的值
    ///
    /// `forward` 为 false 时切换到上一个值。
    pub fn toggle(&mut self, forward: bool) {
        match self.current_item() {
            Some(SettingItem::Theme) => {
                self.theme = if forward {
                    self.theme.next()
                } else {
                    self.theme.prev()
                };
            }
            Some(SettingItem::Language) => {
                self.language = if forward {
                    self.language.next()
                } else {
                    self.language.prev()
                };
            }
            None => {}
        }
    }
}
