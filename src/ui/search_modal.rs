//! 検索プロンプトの描画
//!
//! 画面中央のポップアップに入力欄・候補一覧・操作説明を描く

use crate::search::{SearchSession, StringMatcher, Suggestion};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// ポップアップの領域を計算（幅は最大80列、高さは最大20行）
pub fn popup_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(80);
    let height = area.height.saturating_sub(2).min(20);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// 候補1行分の表示
pub fn suggestion_line(suggestion: &Suggestion) -> Line<'static> {
    let query_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let info_style = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled(suggestion.query.clone(), query_style),
        Span::raw(suggestion.fragment.clone()),
        Span::raw("  "),
        Span::styled(suggestion.info.clone(), info_style),
    ])
}

/// 検索プロンプトを描画
///
/// 入力欄の末尾に端末カーソルを置く
pub fn render<M: StringMatcher>(frame: &mut Frame<'_>, area: Rect, session: &SearchSession<M>) {
    let popup = popup_area(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" relative find ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let input_line = if session.input().is_empty() {
        Line::from(Span::styled(
            session.placeholder().to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(session.input().to_string())
    };
    frame.render_widget(Paragraph::new(input_line), rows[0]);

    let input_width = session.input().width() as u16;
    frame.set_cursor_position((
        rows[0].x + input_width.min(rows[0].width.saturating_sub(1)),
        rows[0].y,
    ));

    if let Some(message) = session.empty_message() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            ))),
            rows[1],
        );
    } else {
        let items: Vec<ListItem<'_>> = session
            .suggestions()
            .iter()
            .map(|s| ListItem::new(suggestion_line(s)))
            .collect();
        let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        state.select(session.selected_index());
        frame.render_stateful_widget(list, rows[1], &mut state);
    }

    let help: Vec<Span<'_>> = session
        .instructions()
        .iter()
        .flat_map(|ins| {
            [
                Span::styled(ins.command, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" {}  ", ins.purpose)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_and_bounded() {
        let popup = popup_area(Rect::new(0, 0, 120, 40));
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);

        let small = popup_area(Rect::new(0, 0, 30, 10));
        assert_eq!(small.width, 26);
        assert_eq!(small.height, 8);
    }

    #[test]
    fn suggestion_line_prepends_query() {
        let suggestion = Suggestion {
            query: "at".to_string(),
            fragment: " s".to_string(),
            info: "Line: 1 - Character: 7".to_string(),
            query_has_trailing_space: false,
            fragment_has_leading_space: true,
        };
        let line = suggestion_line(&suggestion);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "at s  Line: 1 - Character: 7");
    }
}
