//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │ Command       │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ cnpj-lookup-core  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/event/mod.rs
//! Event 层：把 crossterm 事件翻译成 AppMessage
//!
//! Event 层只读 App，不修改状态。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // poll_event / handle_event
//!         mod keymap;         // 快捷键定义
//!
//!
//!     处理顺序（handler.rs）：
//!         1. 只处理 Press，忽略 Release / Repeat
//!         2. 有弹窗时，按键只用于关闭弹窗
//!         3. 全局快捷键：Ctrl+C / Alt+Q 退出，Alt+H 或 ? 打开帮助，Tab 切换焦点
//!         4. 焦点在导航栏：↑↓ / jk 移动，Enter 打开页面
//!         5. 焦点在内容区：
//!             - 查询页：字符进入输入框，Backspace 删除，Enter 搜索，
//!               Ctrl+U 清空，Alt+C 复制
//!             - 设置页：↑↓ 选择，←→ / Enter 切换
//!
//!     粘贴（Event::Paste）只在查询输入框生效。
//!     查询输入框里的 `?` 是普通字符，不会打开帮助。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
