//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::{Translations, t};
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app, t());

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App, texts: &'static Translations) -> Vec<(&'static str, &'static str)> {
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Lookup => {
                hints.push((keys.enter, actions.search));
                hints.push((keys.clear, actions.clear));
                if app.lookup.state.company().is_some() {
                    hints.push((keys.copy, actions.copy));
                }
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, actions.move_up_down));
                hints.push((keys.arrows_lr, actions.switch_option));
            }
        },
    }

    hints.push(("Alt+h", actions.help));
    hints.push((keys.quit, texts.common.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn lookup_hints_include_search() {
        let texts = Language::EnUs.translations();
        let hints = get_hints(&App::default(), texts);
        assert!(hints.contains(&(texts.hints.keys.enter, texts.hints.actions.search)));
        assert!(!hints.iter().any(|(key, _)| *key == texts.hints.keys.copy));
    }

    #[test]
    fn navigation_hints() {
        let texts = Language::PtBr.translations();
        let mut app = App::default();
        app.focus = FocusPanel::Navigation;
        let hints = get_hints(&app, texts);
        assert!(hints.contains(&(texts.hints.keys.enter, texts.hints.actions.open)));
    }
}
