//! 系统浏览器

use async_trait::async_trait;
use cnpj_lookup_core::{CoreResult, LookupError, WebLauncher};

/// 使用系统默认浏览器打开 URL
#[derive(Debug, Default)]
pub struct SystemBrowser;

#[async_trait]
impl WebLauncher for SystemBrowser {
    async fn open(&self, url: &str) -> CoreResult<()> {
        // 不等待浏览器进程退出
        open::that_detached(url).map_err(|e| LookupError::Launcher(e.to_string()))
    }
}
