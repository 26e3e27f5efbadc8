//! メインアプリケーション構造体
//!
//! 文書・検索セッション・キーマップを束ね、キー入力を状態遷移に変換する。
//! 端末には依存しないため、そのままテストできる

use crate::buffer::TextDocument;
use crate::commands::CommandRegistry;
use crate::config::FinderConfig;
use crate::error::{ErrorDisplay, Result};
use crate::input::{Action, InputContext, Key, KeyMap};
use crate::search::{SearchMode, SearchSession, SessionOptions, NOTHING_FOUND};
use crate::ui::StatusLineInfo;

/// メインアプリケーション構造体
pub struct App {
    document: TextDocument,
    session: SearchSession,
    commands: CommandRegistry,
    keymap: KeyMap,
    running: bool,
    message: Option<String>,
}

impl App {
    /// 新しいアプリケーションを作成
    pub fn new(document: TextDocument, config: &FinderConfig) -> Self {
        let commands = CommandRegistry::new();
        let keymap = KeyMap::new(&commands);
        Self {
            document,
            session: SearchSession::new().with_options(SessionOptions::from(config)),
            commands,
            keymap,
            running: true,
            message: None,
        }
    }

    /// アプリケーションが実行中かどうかを確認
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 文書
    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    /// 検索セッション
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// ステータスラインに表示するメッセージ
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// ステータスライン表示情報
    pub fn status_info(&self) -> StatusLineInfo<'_> {
        StatusLineInfo {
            file_label: self
                .document
                .file_path()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("*scratch*"),
            message: self.message(),
        }
    }

    /// コマンドIDから検索を開始
    pub fn run_command(&mut self, id: &str) -> Result<()> {
        let mode = self.commands.get(id)?.mode;
        self.start_search(mode, None);
        Ok(())
    }

    /// 検索を開始し、任意で検索語を入力済みにする
    pub fn start_search(&mut self, mode: SearchMode, initial_query: Option<&str>) {
        self.message = None;
        self.session.open(&self.document, mode);
        if let Some(query) = initial_query {
            let input = format!("{}{}", mode.prompt_prefix(), query);
            self.session.set_input(&self.document, &input);
        }
    }

    /// キー入力を処理
    pub fn handle_key(&mut self, key: Key) {
        let context = if self.session.is_active() {
            InputContext::Search
        } else {
            InputContext::Document
        };

        match self.keymap.resolve(context, &key) {
            Action::RunCommand(id) => {
                if let Err(err) = self.run_command(id) {
                    self.message = Some(ErrorDisplay::new(&err).message);
                }
            }
            Action::MoveCursor(movement) => {
                self.message = None;
                self.document.move_cursor(movement);
            }
            Action::Quit => self.running = false,
            Action::SearchInput(ch) => self.session.input_char(&self.document, ch),
            Action::SearchDelete => self.session.delete_char(&self.document),
            Action::SearchNext => self.session.select_next(),
            Action::SearchPrevious => self.session.select_previous(),
            Action::SearchChoose => {
                let query = self.session.query().to_string();
                self.message = match self.session.choose(&mut self.document) {
                    Some(_) => None,
                    None if query.is_empty() => None,
                    None => Some(NOTHING_FOUND.to_string()),
                };
            }
            Action::SearchCancel => self.session.cancel(),
            Action::Ignore => {}
        }
    }
}
