//! 短暂提示

use std::time::{Duration, Instant};

/// 复制确认的显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast notification state
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
