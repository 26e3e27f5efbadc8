//! 入力処理モジュール

pub mod keybinding;

pub use keybinding::{Action, InputContext, Key, KeyMap};
