//! 検索用マッチャー
//!
//! 各行を検索語で大文字小文字を区別せずに分割し、分割点ごとに1件のマッチを作る

use super::types::SearchMatch;
use crate::buffer::Position;

/// 文字列マッチング戦略
pub trait StringMatcher {
    /// 1行分のマッチを左から順に返す
    fn find_in_line(&self, line_index: usize, line: &str, query: &str) -> Vec<SearchMatch>;

    /// 文書全体のマッチを文書順に返す
    fn find_matches<'a, I>(&self, lines: I, query: &str) -> Vec<SearchMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if query.is_empty() {
            return Vec::new();
        }

        lines
            .into_iter()
            .enumerate()
            .flat_map(|(index, line)| self.find_in_line(index, line, query))
            .collect()
    }
}

/// リテラル一致のマッチャー（正規表現の意味は持たない）
#[derive(Debug, Default, Clone)]
pub struct LiteralMatcher;

impl LiteralMatcher {
    /// インスタンスを作成
    pub fn new() -> Self {
        Self
    }
}

impl StringMatcher for LiteralMatcher {
    fn find_in_line(&self, line_index: usize, line: &str, query: &str) -> Vec<SearchMatch> {
        if query.is_empty() {
            return Vec::new();
        }

        // 行末に区切りを保証するため、空白で終わらない行には空白を1つ補う
        let mut chars: Vec<char> = line.chars().collect();
        if !chars.last().is_some_and(|c| c.is_whitespace()) {
            chars.push(' ');
        }

        let folded: Vec<char> = chars.iter().copied().map(fold_char).collect();
        let needle: Vec<char> = query.chars().map(fold_char).collect();

        // 重ならない出現位置を左から消費していく
        let mut spans = Vec::new();
        let mut start = 0;
        while start + needle.len() <= folded.len() {
            if folded[start..start + needle.len()] == needle[..] {
                spans.push((start, start + needle.len()));
                start += needle.len();
            } else {
                start += 1;
            }
        }

        spans
            .iter()
            .enumerate()
            .map(|(idx, &(_, end))| {
                let next = spans.get(idx + 1).map_or(chars.len(), |&(s, _)| s);
                let fragment: String = chars[end..next].iter().collect();
                SearchMatch::new(fragment, Position::new(line_index, end))
            })
            .collect()
    }
}

/// 比較用に1文字を小文字へ畳み込む
///
/// 小文字化で文字数が変わるもの（例: `İ`）はそのまま残し、列位置の対応を保つ
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::{LiteralMatcher, StringMatcher};
    use crate::buffer::Position;

    fn find(lines: &[&str], query: &str) -> Vec<(String, Position)> {
        LiteralMatcher::new()
            .find_matches(lines.iter().copied(), query)
            .into_iter()
            .map(|m| (m.text, m.pos))
            .collect()
    }

    #[test]
    fn finds_matches_across_lines() {
        let result = find(&["the cat sat", "on the mat"], "at");
        assert_eq!(
            result,
            vec![
                (" s".to_string(), Position::new(0, 7)),
                (" ".to_string(), Position::new(0, 11)),
                (" ".to_string(), Position::new(1, 10)),
            ]
        );
    }

    #[test]
    fn supports_case_insensitive() {
        let result = find(&["the cat", "CAT nap"], "Cat");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].1, Position::new(0, 7));
        assert_eq!(result[1], (" nap ".to_string(), Position::new(1, 3)));
    }

    #[test]
    fn fragment_keeps_original_case() {
        let result = find(&["Hello World"], "hello");
        assert_eq!(result, vec![(" World ".to_string(), Position::new(0, 5))]);
    }

    #[test]
    fn empty_fragment_at_line_end_uses_padded_length() {
        // "t " は補った空白と合わせて行末で一致する
        let result = find(&["cat"], "t ");
        assert_eq!(result, vec![(String::new(), Position::new(0, 4))]);

        // 既に空白で終わる行には補わない
        let result = find(&["cat "], "at ");
        assert_eq!(result, vec![(String::new(), Position::new(0, 4))]);
    }

    #[test]
    fn adjacent_occurrences_are_not_overlapped() {
        let result = find(&["aaaa"], "aa");
        assert_eq!(
            result,
            vec![
                (String::new(), Position::new(0, 2)),
                (" ".to_string(), Position::new(0, 4)),
            ]
        );
    }

    #[test]
    fn repeated_fragments_get_their_own_column() {
        let result = find(&["at x at x"], "at");
        assert_eq!(result[0].1, Position::new(0, 2));
        assert_eq!(result[1].1, Position::new(0, 7));
    }

    #[test]
    fn punctuation_is_matched_literally() {
        let result = find(&["a.b a*b"], ".");
        assert_eq!(result, vec![("b a*b ".to_string(), Position::new(0, 2))]);
        assert!(find(&["abc"], ".*").is_empty());
    }

    #[test]
    fn columns_count_characters() {
        let result = find(&["日本語のテキスト"], "の");
        assert_eq!(result, vec![("テキスト ".to_string(), Position::new(0, 4))]);

        let result = find(&["ÜBER über"], "über");
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].1, Position::new(0, 9));
    }

    #[test]
    fn empty_query_and_empty_document_yield_nothing() {
        assert!(find(&["anything"], "").is_empty());
        assert!(find(&[], "x").is_empty());
        assert!(find(&["", "no hit"], "zzz").is_empty());
    }
}
