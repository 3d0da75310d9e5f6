//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     backend.drain_events()                          // 取回已完成的网络请求等结果
//!     poll_event(100ms)                               // 轮询输入
//!         handle_event → AppMessage                   // 翻译为消息
//!     AppMessage::Tick                                // 推进加载动画、让提示过期
//! }
//!
//! 每条消息交给 `update`，返回的 `Command` 交给 Backend 执行，
//! Backend 同步返回的结果事件再作为消息回到 `update`，直到没有后续。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 动画与提示过期的节拍
const TICK_RATE: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台结果
        for event in backend.drain_events() {
            dispatch(app, backend, AppMessage::Backend(event));
        }

        // 4. 轮询事件，等待到下一个节拍为止
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if let Some(event) = event::poll_event(timeout)? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }

        // 5. 节拍
        if last_tick.elapsed() >= TICK_RATE {
            dispatch(app, backend, AppMessage::Tick);
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// 更新状态并执行产生的命令
fn dispatch(app: &mut App, backend: &mut Backend, msg: AppMessage) {
    let mut next = Some(msg);
    while let Some(msg) = next {
        next = update::update(app, msg)
            .and_then(|command| backend.execute(command))
            .map(AppMessage::Backend);
    }
}
