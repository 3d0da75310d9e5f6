//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏、导航、内容、状态栏）
//!         mod components;     // 导航面板、状态栏、弹窗
//!         mod pages;          // 查询页、设置页
//!         pub mod theme;      // 主题颜色
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
