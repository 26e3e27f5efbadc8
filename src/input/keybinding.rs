//! キーバインド
//!
//! crossterm のキーイベントを内部表現に変換し、文脈ごとのアクションに割り当てる

use crate::buffer::CursorMovement;
use crate::commands::CommandRegistry;
use crossterm::event::{KeyCode as CrosstermKeyCode, KeyEvent, KeyModifiers as CrosstermModifiers};
use std::collections::HashMap;
use thiserror::Error;

/// キー入力の内部表現
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// 修飾キー
    pub modifiers: KeyModifiers,
    /// 基本キー
    pub code: KeyCode,
}

/// 修飾キーの組み合わせ（Shift は文字側に反映されるため持たない）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
}

/// 基本キーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Esc,
    Unknown,
}

/// キー表記の解析エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key")]
    Empty,

    #[error("unknown key: {0}")]
    UnknownKey(String),
}

impl Key {
    /// 修飾なしのキー
    pub fn plain(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers::default(),
            code,
        }
    }

    /// Ctrl+文字
    pub fn ctrl(c: char) -> Self {
        Self {
            modifiers: KeyModifiers {
                ctrl: true,
                alt: false,
            },
            code: KeyCode::Char(c),
        }
    }

    /// 挿入可能な文字なら返す
    pub fn insertable_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }

    /// Emacs 風の表記（`C-s`、`M-x`、`Enter` など）から解析
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut modifiers = KeyModifiers::default();
        let mut remaining = s;

        loop {
            if let Some(rest) = remaining.strip_prefix("C-") {
                modifiers.ctrl = true;
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix("M-") {
                modifiers.alt = true;
                remaining = rest;
            } else {
                break;
            }
        }

        let code = match remaining {
            "Enter" => KeyCode::Enter,
            "Backspace" => KeyCode::Backspace,
            "Up" => KeyCode::Up,
            "Down" => KeyCode::Down,
            "Left" => KeyCode::Left,
            "Right" => KeyCode::Right,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "Esc" => KeyCode::Esc,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(KeyParseError::UnknownKey(other.to_string())),
                }
            }
        };

        Ok(Key { modifiers, code })
    }
}

/// crossterm統合
impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modifiers = KeyModifiers {
            ctrl: event.modifiers.contains(CrosstermModifiers::CONTROL),
            alt: event.modifiers.contains(CrosstermModifiers::ALT),
        };

        let code = match event.code {
            CrosstermKeyCode::Char(c) => KeyCode::Char(c),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Unknown,
        };

        Key { modifiers, code }
    }
}

/// アクション定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// コマンド実行（検索セッションを開く）
    RunCommand(&'static str),
    /// カーソル移動
    MoveCursor(CursorMovement),
    /// アプリケーション終了
    Quit,
    /// 検索入力に文字を追加
    SearchInput(char),
    /// 検索入力を1文字削除
    SearchDelete,
    /// 次の候補
    SearchNext,
    /// 前の候補
    SearchPrevious,
    /// 候補へジャンプ
    SearchChoose,
    /// 検索を取り消す
    SearchCancel,
    /// 何もしない
    Ignore,
}

/// キー入力の文脈
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// 文書表示中
    Document,
    /// 検索プロンプト表示中
    Search,
}

/// 文脈ごとのキーマップ
#[derive(Debug, Clone)]
pub struct KeyMap {
    document: HashMap<Key, Action>,
    search: HashMap<Key, Action>,
}

impl KeyMap {
    /// 既定のキーマップを作成
    pub fn new(commands: &CommandRegistry) -> Self {
        let mut document = HashMap::new();
        for command in commands.all() {
            let Some(binding) = command.keybinding else {
                continue;
            };
            match Key::parse(binding) {
                Ok(key) => {
                    document.insert(key, Action::RunCommand(command.id));
                }
                Err(err) => log::warn!("ignoring binding for {}: {}", command.id, err),
            }
        }

        document.insert(Key::ctrl('q'), Action::Quit);
        document.insert(Key::plain(KeyCode::Left), Action::MoveCursor(CursorMovement::Backward));
        document.insert(Key::plain(KeyCode::Right), Action::MoveCursor(CursorMovement::Forward));
        document.insert(Key::plain(KeyCode::Up), Action::MoveCursor(CursorMovement::Up));
        document.insert(Key::plain(KeyCode::Down), Action::MoveCursor(CursorMovement::Down));
        document.insert(Key::plain(KeyCode::Home), Action::MoveCursor(CursorMovement::LineStart));
        document.insert(Key::plain(KeyCode::End), Action::MoveCursor(CursorMovement::LineEnd));
        document.insert(Key::ctrl('f'), Action::MoveCursor(CursorMovement::Forward));
        document.insert(Key::ctrl('b'), Action::MoveCursor(CursorMovement::Backward));
        document.insert(Key::ctrl('p'), Action::MoveCursor(CursorMovement::Up));
        document.insert(Key::ctrl('n'), Action::MoveCursor(CursorMovement::Down));
        document.insert(Key::ctrl('a'), Action::MoveCursor(CursorMovement::LineStart));
        document.insert(Key::ctrl('e'), Action::MoveCursor(CursorMovement::LineEnd));

        let mut search = HashMap::new();
        search.insert(Key::plain(KeyCode::Enter), Action::SearchChoose);
        search.insert(Key::plain(KeyCode::Backspace), Action::SearchDelete);
        search.insert(Key::plain(KeyCode::Esc), Action::SearchCancel);
        search.insert(Key::ctrl('g'), Action::SearchCancel);
        search.insert(Key::plain(KeyCode::Down), Action::SearchNext);
        search.insert(Key::ctrl('n'), Action::SearchNext);
        search.insert(Key::plain(KeyCode::Up), Action::SearchPrevious);
        search.insert(Key::ctrl('p'), Action::SearchPrevious);

        Self { document, search }
    }

    /// キーをアクションに解決
    pub fn resolve(&self, context: InputContext, key: &Key) -> Action {
        match context {
            InputContext::Document => self.document.get(key).copied().unwrap_or(Action::Ignore),
            InputContext::Search => self
                .search
                .get(key)
                .copied()
                .or_else(|| key.insertable_char().map(Action::SearchInput))
                .unwrap_or(Action::Ignore),
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(&CommandRegistry::new())
    }
}
