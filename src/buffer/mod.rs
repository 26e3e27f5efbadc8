//! バッファ管理モジュール
//!
//! 行単位の文書とカーソル位置を提供

pub mod cursor;
pub mod document;

// 公開API
pub use cursor::{CursorMovement, Position};
pub use document::{Selection, TextDocument};
