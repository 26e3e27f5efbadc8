//! 検索関連の共通型

use crate::buffer::Position;
use serde::{Deserialize, Serialize};

/// 検索方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// カーソルより後ろ（近い順）
    #[default]
    #[serde(rename = "after", alias = "a")]
    Forward,
    /// カーソルより前（近い順）
    #[serde(rename = "before", alias = "b")]
    Backward,
}

impl SearchMode {
    /// 入力プロンプトの接頭辞（`after:` / `before:`）
    pub fn prompt_prefix(self) -> &'static str {
        match self {
            SearchMode::Forward => "after:",
            SearchMode::Backward => "before:",
        }
    }

    /// モード名の別名を解釈する（`after` / `a` / `before` / `b`）
    pub fn from_alias(alias: &str) -> Option<Self> {
        if alias.eq_ignore_ascii_case("after") || alias.eq_ignore_ascii_case("a") {
            Some(SearchMode::Forward)
        } else if alias.eq_ignore_ascii_case("before") || alias.eq_ignore_ascii_case("b") {
            Some(SearchMode::Backward)
        } else {
            None
        }
    }
}

/// 1件の検索マッチ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// マッチ直後からの断片（次のマッチまたは行末まで、表示用）
    pub text: String,
    /// マッチ直後の位置（選択時にカーソルが置かれる位置）
    pub pos: Position,
}

impl SearchMatch {
    pub fn new(text: impl Into<String>, pos: Position) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }

    /// マッチしたクエリ部分の範囲（開始, 終了）
    ///
    /// `query_len` は文字数
    pub fn query_range(&self, query_len: usize) -> (Position, Position) {
        let start = Position::new(self.pos.line, self.pos.ch.saturating_sub(query_len));
        (start, self.pos)
    }
}

/// 候補一覧の1行分の描画情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// 検索語
    pub query: String,
    /// マッチ後の断片
    pub fragment: String,
    /// 位置情報（`Line: N - Character: C`）
    pub info: String,
    /// 検索語が空白で終わるか
    pub query_has_trailing_space: bool,
    /// 断片が空白で始まるか
    pub fragment_has_leading_space: bool,
}

impl Suggestion {
    /// マッチから描画情報を作る
    pub fn from_match(query: &str, m: &SearchMatch) -> Self {
        Self {
            query: query.to_string(),
            fragment: m.text.clone(),
            info: format!("Line: {} - Character: {}", m.pos.line + 1, m.pos.ch),
            query_has_trailing_space: query.ends_with(' '),
            fragment_has_leading_space: m.text.starts_with(' '),
        }
    }
}

/// プロンプト下部に表示する操作説明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub command: &'static str,
    pub purpose: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_aliases() {
        assert_eq!(SearchMode::from_alias("after"), Some(SearchMode::Forward));
        assert_eq!(SearchMode::from_alias("A"), Some(SearchMode::Forward));
        assert_eq!(SearchMode::from_alias("before"), Some(SearchMode::Backward));
        assert_eq!(SearchMode::from_alias("b"), Some(SearchMode::Backward));
        assert_eq!(SearchMode::from_alias("around"), None);
    }

    #[test]
    fn query_range_covers_occurrence() {
        let m = SearchMatch::new(" s", Position::new(0, 7));
        assert_eq!(
            m.query_range(2),
            (Position::new(0, 5), Position::new(0, 7))
        );
    }

    #[test]
    fn suggestion_info_is_one_based_line() {
        let m = SearchMatch::new(" sat", Position::new(2, 7));
        let s = Suggestion::from_match("c at", &m);
        assert_eq!(s.info, "Line: 3 - Character: 7");
        assert!(s.fragment_has_leading_space);
        assert!(!s.query_has_trailing_space);
    }
}
