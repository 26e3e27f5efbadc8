//! 文書表示領域の描画
//!
//! カーソル、選択範囲、検索中の候補位置を強調して描く

use crate::buffer::{Position, TextDocument};
use crate::editor::EditorHost;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// 強調表示の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// 選択範囲
    Selection,
    /// 検索中の候補
    Preview,
}

/// 行内の強調範囲（列は文字単位、終端は排他的）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub start: Position,
    pub end: Position,
    pub kind: HighlightKind,
}

impl Highlight {
    fn covers(&self, line: usize, column: usize) -> bool {
        let pos = Position::new(line, column);
        self.start <= pos && pos < self.end
    }
}

fn style_for(kind: HighlightKind) -> Style {
    match kind {
        HighlightKind::Selection => Style::default().bg(Color::Blue).fg(Color::White),
        HighlightKind::Preview => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    }
}

/// 可視範囲の行を描画用に組み立てる
pub fn prepare_lines<'a>(
    document: &'a TextDocument,
    top_line: usize,
    height: usize,
    highlights: &[Highlight],
) -> Vec<Line<'a>> {
    let end = (top_line + height).min(document.line_count());
    (top_line..end)
        .map(|index| {
            let text = document.line(index);
            let relevant: Vec<&Highlight> = highlights
                .iter()
                .filter(|h| h.start.line <= index && index <= h.end.line)
                .collect();
            if relevant.is_empty() {
                return Line::from(text);
            }

            // 同じスタイルの連続した文字をまとめて Span にする
            let mut spans = Vec::new();
            let mut current = String::new();
            let mut current_style = Style::default();
            for (column, ch) in text.chars().enumerate() {
                let style = relevant
                    .iter()
                    .rev()
                    .find(|h| h.covers(index, column))
                    .map_or(Style::default(), |h| style_for(h.kind));
                if style != current_style && !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), current_style));
                }
                current_style = style;
                current.push(ch);
            }
            if !current.is_empty() {
                spans.push(Span::styled(current, current_style));
            }
            Line::from(spans)
        })
        .collect()
}

/// 文書領域を描画
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    document: &TextDocument,
    top_line: usize,
    highlights: &[Highlight],
) {
    let lines = prepare_lines(document, top_line, area.height as usize, highlights);
    frame.render_widget(Paragraph::new(lines), area);
}
