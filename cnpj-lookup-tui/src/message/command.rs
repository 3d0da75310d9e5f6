//! Update 层产生的副作用

use cnpj_lookup_core::Effect;

use crate::backend::AppConfig;

/// 交给 Backend 执行的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 执行 reducer 产生的副作用
    Lookup(Effect),
    /// 写入剪贴板
    CopyToClipboard(String),
    /// 保存配置
    SaveConfig(AppConfig),
}
