//! エディタ連携インターフェース
//!
//! 検索コアが必要とするホスト側の能力だけを定義する。
//! 任意のテキスト編集ホストがこれを実装すれば検索を組み込める

use crate::buffer::Position;

/// 検索コアから見たテキスト編集ホスト
pub trait EditorHost {
    /// 文書の行数
    fn line_count(&self) -> usize;

    /// 指定行のテキスト（改行を含まない）
    fn line(&self, index: usize) -> &str;

    /// 現在のカーソル位置
    fn cursor(&self) -> Position;

    /// カーソルを移動
    fn set_cursor(&mut self, pos: Position);

    /// `anchor` から `head` までを選択（カーソルは `head` に置かれる）
    fn set_selection(&mut self, anchor: Position, head: Position);
}
