//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 一行快捷键说明
fn shortcut_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(colors().fg)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.help.actions;
    let c = colors();

    let area = centered_rect(58, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = Style::default()
        .fg(c.highlight)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled(texts.help.global_shortcuts, section),
        Line::from(""),
        shortcut_line(keys.tab, actions.switch_panel),
        shortcut_line("↑↓/jk", actions.move_up_down),
        shortcut_line(keys.enter, actions.confirm),
        shortcut_line(keys.esc, actions.close),
        shortcut_line(keys.help, texts.hints.actions.help),
        shortcut_line(keys.quit, actions.quit),
        Line::from(""),
        Line::styled(texts.help.lookup_shortcuts, section),
        Line::from(""),
        shortcut_line(keys.enter, actions.search),
        shortcut_line(keys.clear, actions.clear),
        shortcut_line(keys.copy, actions.copy),
        Line::from(""),
        Line::from(vec![
            Span::styled(texts.help.close_hint, Style::default().fg(c.muted)),
            Span::styled(
                format!(" ({} {})", keys.esc, texts.common.close),
                Style::default().fg(c.muted),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
