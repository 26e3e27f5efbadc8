//! ビューポート管理
//!
//! 画面に表示する文書領域のスクロール位置を管理する。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportManager {
    /// 表示の開始行
    top_line: usize,
    /// 表示可能な行数
    height: usize,
}

impl ViewportManager {
    pub fn new(height: usize) -> Self {
        Self {
            top_line: 0,
            height: height.max(1),
        }
    }

    /// ビューポートの高さを更新
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// 指定行が画面内に収まるようスクロールする
    ///
    /// 戻り値はスクロールが発生したかどうか
    pub fn ensure_visible(&mut self, line: usize) -> bool {
        if line < self.top_line {
            self.top_line = line;
            true
        } else {
            let bottom_line = self.top_line + self.height.saturating_sub(1);
            if line > bottom_line {
                // 画面外へ出たら中央に寄せる
                self.top_line = line.saturating_sub(self.height / 2);
                true
            } else {
                false
            }
        }
    }

    /// 現在の表示開始行を取得
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// 表示領域の高さを取得
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for ViewportManager {
    fn default() -> Self {
        Self::new(1)
    }
}
