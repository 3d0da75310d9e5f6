//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `lookup.*`, `settings.*`
//! 3. **查询错误归 `errors.*`**：每种 `LookupError` 对应一条
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 查询页面文本
    pub lookup: LookupTexts,
    /// 查询错误文本
    pub errors: ErrorTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
    /// 字段为空时的占位
    pub not_informed: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
    pub copy: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub switch_option: &'static str,
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub search: &'static str,
    pub copy: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub lookup: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 查询页面
// ============================================================================

pub struct LookupTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    /// 名称模式下输入框下方的提示
    pub name_hint: &'static str,
    /// 名称模式的动作标签
    pub search_web: &'static str,
    /// 号码模式的动作标签
    pub query_api: &'static str,
    pub searching: &'static str,
    pub copy_data: &'static str,
    pub copied: &'static str,
    pub fields: RecordFieldTexts,
}

/// 查询结果字段标签
pub struct RecordFieldTexts {
    /// 复制摘要里的公司标签
    pub company: &'static str,
    pub legal_name: &'static str,
    pub cnpj: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub activity_start: &'static str,
    pub primary_activity: &'static str,
    pub partners: &'static str,
    /// "+ N 位其他股东" 中 N 之前的部分
    pub more_partners_prefix: &'static str,
    /// "+ N 位其他股东" 中 N 之后的部分
    pub more_partners_suffix: &'static str,
}

// ============================================================================
// 查询错误
// ============================================================================

pub struct ErrorTexts {
    pub validation: &'static str,
    pub not_found: &'static str,
    pub rate_limited: &'static str,
    pub fetch_failed: &'static str,
    pub unexpected: &'static str,
    pub browser_failed: &'static str,
}

// ============================================================================
// 设置页面
// ============================================================================

pub struct SettingsTexts {
    pub title: &'static str,
    pub theme: ThemeTexts,
    pub language: LanguageTexts,
    pub registry: &'static str,
    pub search_engine: &'static str,
    pub config_file: &'static str,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub web_search_opened: &'static str,
    pub clipboard_failed: &'static str,
    pub config_save_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub lookup_shortcuts: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
    pub search: &'static str,
    pub clear: &'static str,
    pub copy: &'static str,
}
