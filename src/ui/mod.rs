//! UIモジュール
//!
//! ratatuiベースのターミナルUI機能

pub mod search_modal;
pub mod text_area;
pub mod viewport;

use crate::buffer::TextDocument;
use crate::editor::EditorHost;
use crate::search::{SearchSession, StringMatcher};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

// 公開API
pub use text_area::{Highlight, HighlightKind};
pub use viewport::ViewportManager;

/// ステータスライン表示情報
#[derive(Debug, Clone, Copy)]
pub struct StatusLineInfo<'a> {
    pub file_label: &'a str,
    pub message: Option<&'a str>,
}

/// 画面全体の描画器
#[derive(Debug, Default)]
pub struct Renderer {
    viewport: ViewportManager,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在のビューポート
    pub fn viewport(&self) -> &ViewportManager {
        &self.viewport
    }

    /// 文書・ステータスライン・（検索中なら）検索プロンプトを描画
    pub fn render<M: StringMatcher>(
        &mut self,
        frame: &mut Frame<'_>,
        document: &TextDocument,
        session: &SearchSession<M>,
        status: StatusLineInfo<'_>,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());
        let text_rect = rows[0];
        self.viewport.set_height(text_rect.height as usize);

        let mut highlights = Vec::new();
        if let Some(selection) = document.selection() {
            let (start, end) = selection.ordered();
            highlights.push(Highlight {
                start,
                end,
                kind: HighlightKind::Selection,
            });
        }

        // 検索中は選択候補の位置を、そうでなければカーソルを画面内に保つ
        let focus = match session.selected_match() {
            Some(m) if session.is_active() => {
                let (start, end) = m.query_range(session.query().chars().count());
                highlights.push(Highlight {
                    start,
                    end,
                    kind: HighlightKind::Preview,
                });
                m.pos.line
            }
            _ => document.cursor().line,
        };
        self.viewport.ensure_visible(focus);

        text_area::render(
            frame,
            text_rect,
            document,
            self.viewport.top_line(),
            &highlights,
        );

        let cursor = document.cursor();
        let status_text = format!(
            "{}  Ln {}, Col {}{}",
            status.file_label,
            cursor.line + 1,
            cursor.ch + 1,
            status.message.map(|m| format!("  {}", m)).unwrap_or_default()
        );
        frame.render_widget(
            Paragraph::new(Line::from(status_text))
                .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
            rows[1],
        );

        if session.is_active() {
            let area = frame.area();
            search_modal::render(frame, area, session);
        } else if cursor.line >= self.viewport.top_line() {
            let before: String = document.line(cursor.line).chars().take(cursor.ch).collect();
            let x = text_rect.x + (before.width() as u16).min(text_rect.width.saturating_sub(1));
            let y = text_rect.y + (cursor.line - self.viewport.top_line()) as u16;
            frame.set_cursor_position((x, y));
        }
    }
}
