//! 行単位のテキスト文書
//!
//! `EditorHost` を満たす最小のインメモリ実装。端末フロントエンドとテストで使用

use super::cursor::{CursorMovement, Position};
use crate::editor::EditorHost;
use crate::error::{FileError, Result};
use std::path::{Path, PathBuf};

/// 選択範囲（アンカーとヘッド）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    /// 文書順に並べた (開始, 終了)
    pub fn ordered(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }
}

/// 行の配列として保持されるテキスト文書
#[derive(Debug, Clone)]
pub struct TextDocument {
    lines: Vec<String>,
    cursor: Position,
    selection: Option<Selection>,
    file_path: Option<PathBuf>,
}

impl TextDocument {
    /// 空の文書を作成
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::origin(),
            selection: None,
            file_path: None,
        }
    }

    /// 文字列から文書を作成（CRLF / CR は LF に正規化）
    pub fn from_str(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();
        Self {
            lines,
            ..Self::new()
        }
    }

    /// ファイルから文書を読み込む
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();

        if path.is_dir() {
            return Err(FileError::InvalidPath { path: label }.into());
        }

        let bytes = std::fs::read(path).map_err(|err| FileError::from_io(label.clone(), &err))?;
        let text = String::from_utf8(bytes).map_err(|err| FileError::Encoding {
            message: format!("{}: {}", label, err),
        })?;

        if text.contains("\r\n") {
            log::warn!("Non-LF line endings detected in {}, will be normalized", label);
        }

        let mut document = Self::from_str(&text);
        document.file_path = Some(path.to_path_buf());
        log::debug!("loaded {} ({} lines)", label, document.lines.len());
        Ok(document)
    }

    /// 関連ファイルパス
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// 全行
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 行の長さ（文字数）
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    /// 現在の選択範囲
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// 選択範囲の文字列
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection?.ordered();
        let mut out = String::new();
        for line in start.line..=end.line {
            let text = self.lines.get(line)?;
            let from = if line == start.line { start.ch } else { 0 };
            let to = if line == end.line { end.ch } else { usize::MAX };
            out.extend(text.chars().skip(from).take(to.saturating_sub(from)));
            if line != end.line {
                out.push('\n');
            }
        }
        Some(out)
    }

    /// 位置を文書の範囲内に丸める
    pub fn clamp(&self, pos: Position) -> Position {
        let last_line = self.lines.len().saturating_sub(1);
        let line = pos.line.min(last_line);
        Position::new(line, pos.ch.min(self.line_len(line)))
    }

    /// カーソルを移動し、選択を解除する
    pub fn move_cursor(&mut self, movement: CursorMovement) -> bool {
        let before = self.cursor;
        let Position { line, ch } = before;
        let target = match movement {
            CursorMovement::Forward if ch < self.line_len(line) => Position::new(line, ch + 1),
            CursorMovement::Forward if line + 1 < self.lines.len() => Position::new(line + 1, 0),
            CursorMovement::Backward if ch > 0 => Position::new(line, ch - 1),
            CursorMovement::Backward if line > 0 => {
                Position::new(line - 1, self.line_len(line - 1))
            }
            CursorMovement::Up if line > 0 => Position::new(line - 1, ch),
            CursorMovement::Down => Position::new(line + 1, ch),
            CursorMovement::LineStart => Position::new(line, 0),
            CursorMovement::LineEnd => Position::new(line, self.line_len(line)),
            _ => before,
        };

        self.cursor = self.clamp(target);
        self.selection = None;
        self.cursor != before
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHost for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> &str {
        self.lines.get(index).map_or("", String::as_str)
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        // マッチ位置は補完した末尾空白の分だけ行長を超えることがある
        self.cursor = self.clamp(pos);
        self.selection = None;
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        let anchor = self.clamp(anchor);
        let head = self.clamp(head);
        self.cursor = head;
        self.selection = Some(Selection { anchor, head });
    }
}
