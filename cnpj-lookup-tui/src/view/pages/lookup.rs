//! 查询页面视图

use chrono::NaiveDate;
use cnpj_lookup_core::{InputMode, LookupError, TransportFailure};
use cnpj_lookup_provider::CompanyRecord;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{Translations, t};
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 结果卡片中最多列出的合伙人数
const PARTNER_PREVIEW: usize = 3;

/// 渲染查询页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = &app.lookup.state;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 副标题
            Constraint::Length(3), // 输入框
            Constraint::Length(1), // 操作
            Constraint::Length(2), // 提示 / 错误
            Constraint::Min(0),    // 结果
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {}", texts.lookup.subtitle)).style(Styles::muted()),
        chunks[0],
    );

    render_input(app, frame, chunks[1]);
    render_action(app, frame, chunks[2]);

    // 错误优先于名称提示
    if let Some(err) = state.error() {
        let message = Paragraph::new(format!(" {}", error_text(texts, err)))
            .style(Style::default().fg(colors().error))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[3]);
    } else if state.mode() == InputMode::Name && !state.input.is_empty() {
        let hint = Paragraph::new(format!(" {}", texts.lookup.name_hint))
            .style(Style::default().fg(colors().warning))
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, chunks[3]);
    }

    if let Some(company) = state.company() {
        render_company(app, company, frame, chunks[4]);
    }
}

/// 渲染输入框
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let input = &app.lookup.state.input;
    let focused = app.focus.is_content() && !app.modal.is_open();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let content = if input.is_empty() {
        Span::styled(texts.lookup.placeholder, Style::default().fg(c.muted))
    } else {
        Span::styled(input.as_str(), Style::default().fg(c.fg))
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused {
        let inner_width = area.width.saturating_sub(2);
        let offset = u16::try_from(input.width())
            .unwrap_or(u16::MAX)
            .min(inner_width.saturating_sub(1));
        frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
    }
}

/// 渲染操作行：按输入模式给出 Enter 的含义
fn render_action(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.lookup.state;

    let line = if state.loading {
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.lookup.spinner()),
                Style::default().fg(c.highlight),
            ),
            Span::styled(texts.lookup.searching, Style::default().fg(c.highlight)),
        ])
    } else {
        let label = match state.mode() {
            InputMode::Name => texts.lookup.search_web,
            InputMode::Number => texts.lookup.query_api,
        };
        Line::from(vec![
            Span::styled(
                format!(" {} ", texts.hints.keys.enter),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label, Style::default().fg(c.fg)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染公司信息卡片
fn render_company(app: &App, company: &CompanyRecord, frame: &mut Frame, area: Rect) {
    let texts = t();
    let fields = &texts.lookup.fields;
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", company.display_name()))
        .title_style(Style::default().fg(c.success).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.success));

    let label = |text: &str| Span::styled(format!(" {text}: "), Styles::muted());
    let value = |text: String| Span::styled(text, Style::default().fg(c.fg));

    let mut lines = vec![
        Line::from(vec![
            label(fields.legal_name),
            value(company.legal_name.clone()),
        ]),
        Line::from(vec![label(fields.cnpj), value(company.cnpj.to_string())]),
        Line::from(vec![
            label(fields.address),
            value(company.address.one_line()),
        ]),
        Line::from(vec![
            label(fields.phone),
            value(
                company
                    .formatted_phone()
                    .unwrap_or_else(|| texts.common.not_informed.to_string()),
            ),
        ]),
        Line::from(vec![
            label(fields.activity_start),
            value(
                company
                    .activity_start
                    .map(format_date)
                    .unwrap_or_else(|| texts.common.not_informed.to_string()),
            ),
        ]),
    ];

    if !company.primary_activity.trim().is_empty() {
        lines.push(Line::from(vec![
            label(fields.primary_activity),
            value(company.primary_activity.clone()),
        ]));
    }

    lines.extend(partner_lines(texts, company));

    lines.push(Line::from(""));
    lines.push(match &app.toast {
        Some(toast) => Line::from(Span::styled(
            format!(" ✓ {}", toast.message),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled(
                format!(" {} ", texts.hints.keys.copy),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(texts.lookup.copy_data, Styles::muted()),
        ]),
    });

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 合伙人预览：最多三位，其余以计数表示
fn partner_lines(texts: &Translations, company: &CompanyRecord) -> Vec<Line<'static>> {
    let fields = &texts.lookup.fields;
    let preview = company.partner_preview(PARTNER_PREVIEW);
    if preview.shown.is_empty() {
        return Vec::new();
    }

    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", fields.partners),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
    ];

    for partner in preview.shown {
        let mut spans = vec![Span::styled(
            format!("   • {}", partner.name),
            Style::default().fg(c.fg),
        )];
        if !partner.role.trim().is_empty() {
            spans.push(Span::styled(format!(" ({})", partner.role), Styles::muted()));
        }
        lines.push(Line::from(spans));
    }

    if preview.remaining > 0 {
        lines.push(Line::from(Span::styled(
            format!("   {}", more_partners_text(texts, preview.remaining)),
            Styles::muted(),
        )));
    }

    lines
}

/// 巴西日期格式 dd/mm/yyyy
fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn more_partners_text(texts: &Translations, remaining: usize) -> String {
    let fields = &texts.lookup.fields;
    format!(
        "{} {} {}",
        fields.more_partners_prefix, remaining, fields.more_partners_suffix
    )
}

/// 查询错误对应的提示文本
pub fn error_text(texts: &Translations, err: &LookupError) -> String {
    let errors = &texts.errors;
    match err {
        LookupError::Validation { .. } => errors.validation.to_string(),
        LookupError::NotFound { .. } => errors.not_found.to_string(),
        LookupError::RateLimited { .. } => errors.rate_limited.to_string(),
        LookupError::Transport(TransportFailure::Status(_)) => errors.fetch_failed.to_string(),
        LookupError::Transport(failure) => failure
            .detail()
            .map_or_else(|| errors.unexpected.to_string(), str::to_string),
        LookupError::Launcher(detail) => format!("{}: {detail}", errors.browser_failed),
    }
}
