//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, ErrorTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames,
    LanguageTexts, LookupTexts, NavTexts, RecordFieldTexts, SettingsTexts, StatusBarTexts,
    ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "CNPJ Lookup",
        quit: "Quit",
        close: "Close",
        not_informed: "Not informed",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            copy: "Alt+c",
            clear: "Ctrl+u",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            open: "Open",
            switch_option: "Switch",
            switch_panel: "Switch panel",
            move_up_down: "Move",
            search: "Search",
            copy: "Copy",
            clear: "Clear",
            help: "Help",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        lookup: "Lookup",
        settings: "Settings",
    },

    // ========================================================================
    // 查询页面
    // ========================================================================
    lookup: LookupTexts {
        title: "CNPJ & Company Lookup",
        subtitle: "Type a CNPJ for official data or a company name to search for it",
        placeholder: "Type a CNPJ or company name...",
        name_hint: "Name searches need external confirmation. Press Enter to search on Google.",
        search_web: "Search on Google",
        query_api: "Query API",
        searching: "Querying...",
        copy_data: "Copy data",
        copied: "Copied!",
        fields: RecordFieldTexts {
            company: "Company",
            legal_name: "Legal name",
            cnpj: "CNPJ",
            address: "Address",
            phone: "Phone",
            activity_start: "Activity start",
            primary_activity: "Primary activity",
            partners: "Partners",
            more_partners_prefix: "+",
            more_partners_suffix: "other partners",
        },
    },

    // ========================================================================
    // 查询错误
    // ========================================================================
    errors: ErrorTexts {
        validation: "To search directly, type a valid CNPJ (14 digits). For names, use \"Search on Google\".",
        not_found: "CNPJ not found in the official registry.",
        rate_limited: "Too many requests. Please wait a moment.",
        fetch_failed: "Failed to fetch company data.",
        unexpected: "Unexpected error.",
        browser_failed: "Could not open the browser",
    },

    // ========================================================================
    // 设置页面
    // ========================================================================
    settings: SettingsTexts {
        title: "Settings",
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts { label: "Language" },
        registry: "Registry API",
        search_engine: "Web search",
        config_file: "Config file",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        web_search_opened: "Web search opened in the browser",
        clipboard_failed: "Failed to copy to clipboard",
        config_save_failed: "Failed to save settings",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        lookup_shortcuts: "Lookup shortcuts",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move Up/Down",
            confirm: "Confirm",
            close: "Close",
            quit: "Quit",
            search: "Search",
            clear: "Clear input",
            copy: "Copy company data",
        },
    },
};
