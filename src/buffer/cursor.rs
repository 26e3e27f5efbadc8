//! カーソル位置
//!
//! 行・列による文書内の座標と、その移動操作

use serde::{Deserialize, Serialize};

/// 文書内の位置（行・列とも0ベース、列は文字単位）
///
/// 行優先で順序付けされる。列が行長と等しい場合は行末を表す
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// 行番号
    pub line: usize,
    /// 列番号
    pub ch: usize,
}

impl Position {
    /// 指定された位置を作成
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// 文書の先頭
    pub fn origin() -> Self {
        Self::default()
    }
}

/// カーソル操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMovement {
    /// 文字単位の移動
    Forward,
    Backward,
    /// 行単位の移動
    Up,
    Down,
    /// 行内の移動
    LineStart,
    LineEnd,
}
