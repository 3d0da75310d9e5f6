//! 系统剪贴板

use arboard::Clipboard;

/// 剪贴板句柄
///
/// 在 X11 上剪贴板内容由持有者进程提供，句柄需要与应用同生命周期。
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = Clipboard::new()
            .inspect_err(|e| log::warn!("Clipboard not available: {e}"))
            .ok();
        Self { clipboard }
    }

    /// 写入文本
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        let Some(ref mut clipboard) = self.clipboard else {
            return Err("clipboard not available".to_string());
        };
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}
