//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod pt_br;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[serde(rename = "en-US")]
    EnUs,
    /// 葡萄牙语（巴西）
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::PtBr, Language::EnUs]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::PtBr => "Português (Brasil)",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PtBr => "pt-BR",
        }
    }

    /// 该语言的翻译表
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::PtBr => &pt_br::TRANSLATIONS,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// 获取上一个语言（只有两种语言，与 next 相同）
    #[must_use]
    pub fn prev(self) -> Language {
        self.next()
    }

    fn index(self) -> usize {
        match self {
            Language::PtBr => 0,
            Language::EnUs => 1,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = PtBr

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    current_language().translations()
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::PtBr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_serde_name() {
        for lang in Language::all() {
            assert_eq!(
                serde_json::to_string(lang).unwrap(),
                format!("\"{}\"", lang.code())
            );
        }
    }

    #[test]
    fn serde_uses_language_codes() {
        assert_eq!(
            serde_json::to_string(&Language::PtBr).unwrap(),
            "\"pt-BR\""
        );
        let lang: Language = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(lang, Language::EnUs);
    }

    #[test]
    fn next_cycles() {
        assert_eq!(Language::PtBr.next(), Language::EnUs);
        assert_eq!(Language::EnUs.next().next(), Language::EnUs);
    }

    #[test]
    fn translations_are_filled() {
        for lang in Language::all() {
            let texts = lang.translations();
            let all = [
                texts.common.app_name,
                texts.common.not_informed,
                texts.nav.lookup,
                texts.nav.settings,
                texts.lookup.title,
                texts.lookup.placeholder,
                texts.lookup.name_hint,
                texts.lookup.search_web,
                texts.lookup.query_api,
                texts.lookup.copied,
                texts.lookup.fields.company,
                texts.lookup.fields.address,
                texts.lookup.fields.more_partners_suffix,
                texts.errors.validation,
                texts.errors.not_found,
                texts.errors.rate_limited,
                texts.errors.fetch_failed,
                texts.errors.unexpected,
                texts.settings.theme.label,
                texts.settings.language.label,
                texts.help.title,
                texts.help.close_hint,
            ];
            for text in all {
                assert!(!text.trim().is_empty(), "{lang:?} has an empty text");
            }
        }
    }

    #[test]
    fn pt_br_keeps_registry_messages() {
        let errors = &Language::PtBr.translations().errors;
        assert_eq!(errors.not_found, "CNPJ não encontrado na base oficial.");
        assert_eq!(errors.rate_limited, "Muitas requisições. Espere um pouco.");
        assert_eq!(errors.fetch_failed, "Erro ao buscar dados.");
        assert_eq!(errors.unexpected, "Erro inesperado.");
    }
}
