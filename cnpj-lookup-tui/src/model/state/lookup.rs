//! 查询页面状态

use cnpj_lookup_core::{reduce, Effect, LookupAction, LookupState};

/// 加载动画帧
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 查询页面状态
#[derive(Debug, Default)]
pub struct LookupPageState {
    /// 由 `reduce` 推进的查询状态
    pub state: LookupState,
    /// 加载动画当前帧
    pub spinner_frame: usize,
}

impl LookupPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 应用一个动作，返回需要执行的副作用
    pub fn apply(&mut self, action: LookupAction) -> Effect {
        let (next, effect) = reduce(&self.state, action);
        self.state = next;
        effect
    }

    /// 追加一个字符
    pub fn push_char(&mut self, c: char) -> Effect {
        let mut raw = self.state.input.clone();
        raw.push(c);
        self.apply(LookupAction::Edit(raw))
    }

    /// 追加一段粘贴的文本
    pub fn push_str(&mut self, text: &str) -> Effect {
        let raw = format!("{}{}", self.state.input, text.trim_end_matches(['\r', '\n']));
        self.apply(LookupAction::Edit(raw))
    }

    /// 删除最后一个字符
    pub fn pop_char(&mut self) -> Effect {
        let mut raw = self.state.input.clone();
        raw.pop();
        self.apply(LookupAction::Edit(raw))
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// 加载中时推进动画
    pub fn tick(&mut self) {
        if self.state.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }
}
