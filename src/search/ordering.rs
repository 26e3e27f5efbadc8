//! カーソル基準の絞り込みと並べ替え

use super::types::{SearchMatch, SearchMode};
use crate::buffer::Position;

/// マッチをカーソルの指定側に絞り込み、カーソルに近い順に並べる
///
/// * `Forward`: `pos >= cursor` を文書順（昇順）
/// * `Backward`: `pos <= cursor` を文書の逆順（降順）
///
/// カーソル位置ちょうどのマッチはどちらの方向にも含まれる
pub fn order_matches(
    mut matches: Vec<SearchMatch>,
    cursor: Position,
    mode: SearchMode,
) -> Vec<SearchMatch> {
    // 安定ソートなので同一位置は走査順を保つ
    matches.sort_by_key(|m| m.pos);

    match mode {
        SearchMode::Forward => {
            matches.retain(|m| m.pos >= cursor);
            matches
        }
        SearchMode::Backward => {
            matches.retain(|m| m.pos <= cursor);
            matches.reverse();
            matches
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<SearchMatch> {
        vec![
            SearchMatch::new(" s", Position::new(0, 7)),
            SearchMatch::new(" ", Position::new(0, 11)),
            SearchMatch::new(" ", Position::new(1, 10)),
        ]
    }

    fn positions(matches: &[SearchMatch]) -> Vec<Position> {
        matches.iter().map(|m| m.pos).collect()
    }

    #[test]
    fn forward_keeps_matches_after_cursor_in_document_order() {
        let result = order_matches(sample(), Position::new(0, 8), SearchMode::Forward);
        assert_eq!(
            positions(&result),
            vec![Position::new(0, 11), Position::new(1, 10)]
        );
    }

    #[test]
    fn backward_keeps_matches_before_cursor_nearest_first() {
        let result = order_matches(sample(), Position::new(1, 5), SearchMode::Backward);
        assert_eq!(
            positions(&result),
            vec![Position::new(0, 11), Position::new(0, 7)]
        );
    }

    #[test]
    fn match_at_cursor_is_included_in_both_directions() {
        let cursor = Position::new(0, 11);
        let forward = order_matches(sample(), cursor, SearchMode::Forward);
        let backward = order_matches(sample(), cursor, SearchMode::Backward);
        assert_eq!(forward[0].pos, cursor);
        assert_eq!(backward[0].pos, cursor);
    }

    #[test]
    fn unordered_input_is_put_in_document_order() {
        let mut input = sample();
        input.reverse();
        let result = order_matches(input, Position::origin(), SearchMode::Forward);
        assert_eq!(positions(&result), positions(&sample()));
    }

    #[test]
    fn nothing_on_requested_side_is_empty() {
        let result = order_matches(sample(), Position::new(5, 0), SearchMode::Forward);
        assert!(result.is_empty());
        let result = order_matches(sample(), Position::origin(), SearchMode::Backward);
        assert!(result.is_empty());
    }
}
