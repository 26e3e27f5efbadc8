//! 検索セッションの状態管理

use super::types::{SearchMatch, SearchMode};
use crate::buffer::Position;

/// 1回の検索セッションの内部状態
///
/// 選択または取り消しで破棄される
#[derive(Debug, Clone)]
pub struct SearchState {
    /// 検索がアクティブか
    pub active: bool,
    /// コマンドで指定された既定の方向
    pub default_mode: SearchMode,
    /// プロンプトの入力内容（接頭辞を含む）
    pub input: String,
    /// 接頭辞を除いた現在の検索語
    pub query: String,
    /// 入力から決まった方向
    pub mode: SearchMode,
    /// 並べ替え済みのマッチ
    pub matches: Vec<SearchMatch>,
    /// 選択中の候補
    pub selected: Option<usize>,
    /// 検索開始時のカーソル位置
    pub origin: Position,
}

impl SearchState {
    /// 新しい状態を作成
    pub fn new() -> Self {
        Self {
            active: false,
            default_mode: SearchMode::Forward,
            input: String::new(),
            query: String::new(),
            mode: SearchMode::Forward,
            matches: Vec::new(),
            selected: None,
            origin: Position::origin(),
        }
    }

    /// 状態をリセット
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
