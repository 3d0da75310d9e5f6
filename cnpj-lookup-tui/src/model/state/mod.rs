//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod lookup;
mod modal;
mod settings;
mod toast;

pub use lookup::LookupPageState;
pub use modal::{Modal, ModalState};
pub use settings::{SettingItem, SettingsState, Theme};
pub use toast::{Toast, TOAST_DURATION};
