//! コマンド定義
//!
//! 検索セッションを開くユーザーコマンドの一覧

use crate::error::{InputError, Result};
use crate::search::SearchMode;

/// コマンドの定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDefinition {
    /// コマンドID
    pub id: &'static str,
    /// 表示名
    pub name: &'static str,
    /// 開くセッションの既定方向
    pub mode: SearchMode,
    /// 既定のキーバインド（表示用）
    pub keybinding: Option<&'static str>,
}

/// 組み込みコマンド
pub const COMMANDS: &[CommandDefinition] = &[
    CommandDefinition {
        id: "relative-find",
        name: "Find relative to Cursor Position",
        mode: SearchMode::Forward,
        keybinding: Some("C-s"),
    },
    CommandDefinition {
        id: "relative-find-before",
        name: "Find before the Cursor",
        mode: SearchMode::Backward,
        keybinding: Some("C-r"),
    },
];

/// コマンドの登録簿
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
}

impl CommandRegistry {
    /// 組み込みコマンドで作成
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.to_vec(),
        }
    }

    /// 全コマンド
    pub fn all(&self) -> &[CommandDefinition] {
        &self.commands
    }

    /// IDで検索
    pub fn get(&self, id: &str) -> Result<&CommandDefinition> {
        self.commands
            .iter()
            .find(|cmd| cmd.id == id)
            .ok_or_else(|| {
                InputError::CommandNotFound {
                    command: id.to_string(),
                }
                .into()
            })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
