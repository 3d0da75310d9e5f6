//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态（查询、设置、弹窗、Toast）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 查询状态（LookupPageState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     查询页的业务状态是 cnpj-lookup-core 的 `LookupState`，
//!     由纯函数 `reduce` 推进：
//!
//!         用户输入字符
//!             ↓
//!         update/content.rs: app.lookup.apply(LookupAction::Edit(..))
//!             ↓
//!         reduce 返回新状态 + Effect
//!             ↓
//!         Effect 交给 Backend 执行（网络请求在 tokio 运行时里跑）
//!             ↓
//!         Backend 通过 channel 回送 LookupAction::Completed
//!             ↓
//!         app.rs 主循环取出后再次 apply
//!
//!     旧请求的结果（request_id 不是最新的）会被 reduce 丢弃。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{LookupPageState, Modal, ModalState, SettingItem, SettingsState, Theme, Toast};
