//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend -> Update 之间的桥梁。
//! 所有的用户操作、后台结果和定时器都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model，并可能返回一个 Command。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod backend;        // BackendEvent：后台任务回送的结果
//!         mod command;        // Command：Update 交给 Backend 执行的副作用
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     一条消息的往返：
//!
//!         Enter（内容面板，查询页）
//!             ↓
//!         AppMessage::Content(ContentMessage::Submit)
//!             ↓
//!         update 返回 Some(Command::Lookup(Effect::FetchCompany { .. }))
//!             ↓
//!         Backend 在 tokio 运行时里发请求
//!             ↓
//!         AppMessage::Backend(BackendEvent::Lookup(LookupAction::Completed { .. }))
//!             ↓
//!         update 把结果交给 reducer
//!

mod app;
mod backend;
mod command;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use command::Command;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
