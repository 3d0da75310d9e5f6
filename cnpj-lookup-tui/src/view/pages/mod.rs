//! 页面渲染

pub mod lookup;
pub mod settings;
