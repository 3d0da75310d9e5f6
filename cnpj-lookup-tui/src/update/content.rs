//! 内容面板更新逻辑

use cnpj_lookup_core::LookupAction;
use cnpj_lookup_provider::CompanyRecord;

use crate::i18n::{t, Translations};
use crate::message::{Command, ContentMessage};
use crate::model::{App, Page};

use super::{apply_settings, command_for};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match app.current_page {
        Page::Lookup => update_lookup(app, msg),
        Page::Settings => update_settings(app, msg),
    }
}

fn update_lookup(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let effect = match msg {
        ContentMessage::Input(c) => app.lookup.push_char(c),
        ContentMessage::Paste(text) => app.lookup.push_str(&text),
        ContentMessage::Backspace => app.lookup.pop_char(),
        ContentMessage::ClearInput => {
            app.toast = None;
            app.clear_status();
            app.lookup.apply(LookupAction::Clear)
        }
        ContentMessage::Submit => {
            app.clear_status();
            app.lookup.apply(LookupAction::Submit)
        }
        ContentMessage::CopySummary => {
            return app
                .lookup
                .state
                .company()
                .map(|company| Command::CopyToClipboard(copy_summary(t(), company)));
        }
        _ => return None,
    };
    command_for(effect)
}

fn update_settings(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {
            app.settings
                .toggle(matches!(msg, ContentMessage::ToggleNext));
            apply_settings(&app.settings);
            app.config = app.config_snapshot();
            return Some(Command::SaveConfig(app.config.clone()));
        }
        _ => {}
    }
    None
}

/// 复制到剪贴板的公司摘要
///
/// 三行：公司名、CNPJ、地址（街道、门牌 - 城市/州）。
pub fn copy_summary(texts: &Translations, company: &CompanyRecord) -> String {
    let fields = &texts.lookup.fields;
    format!(
        "{}: {}\n{}: {}\n{}: {}",
        fields.company,
        company.legal_name,
        fields.cnpj,
        company.cnpj,
        fields.address,
        company.address.one_line(),
    )
}

#[cfg(test)]
mod tests {
    use cnpj_lookup_provider::{Address, Cnpj};

    use super::*;
    use crate::i18n::Language;

    fn company() -> CompanyRecord {
        CompanyRecord {
            cnpj: Cnpj::parse("11222333000181").unwrap(),
            legal_name: "ACME COMERCIO LTDA".to_string(),
            trade_name: "ACME".to_string(),
            address: Address {
                street: "AVENIDA PAULISTA".to_string(),
                number: "1000".to_string(),
                district: "BELA VISTA".to_string(),
                municipality: "SAO PAULO".to_string(),
                state: "SP".to_string(),
                postal_code: "01310100".to_string(),
            },
            phone: String::new(),
            activity_start: None,
            primary_activity: String::new(),
            partners: Vec::new(),
        }
    }

    #[test]
    fn summary_in_portuguese() {
        assert_eq!(
            copy_summary(Language::PtBr.translations(), &company()),
            "Empresa: ACME COMERCIO LTDA\n\
             CNPJ: 11.222.333/0001-81\n\
             Endereço: AVENIDA PAULISTA, 1000 - SAO PAULO/SP"
        );
    }

    #[test]
    fn summary_in_english() {
        let summary = copy_summary(Language::EnUs.translations(), &company());
        assert!(summary.starts_with("Company: ACME COMERCIO LTDA\n"));
        assert!(summary.ends_with("Address: AVENIDA PAULISTA, 1000 - SAO PAULO/SP"));
    }

    #[test]
    fn summary_uses_legal_name_even_with_trade_name() {
        let summary = copy_summary(Language::PtBr.translations(), &company());
        assert!(!summary.contains("Empresa: ACME\n"));
    }
}
