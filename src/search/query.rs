//! 検索プロンプトの解釈
//!
//! 入力は `<mode>:<query>` 形式。接頭辞がなければ全体を検索語として扱う

use super::types::SearchMode;

/// 解釈済みの検索入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery<'a> {
    pub mode: SearchMode,
    pub query: &'a str,
}

/// プロンプト文字列を方向と検索語に分ける
///
/// 検索語は前後の空白を含めそのまま使う
pub fn parse_prompt(input: &str, default_mode: SearchMode) -> ParsedQuery<'_> {
    if let Some((prefix, rest)) = input.split_once(':') {
        if let Some(mode) = SearchMode::from_alias(prefix) {
            return ParsedQuery { mode, query: rest };
        }
    }

    ParsedQuery {
        mode: default_mode,
        query: input,
    }
}
