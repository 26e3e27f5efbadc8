//! relfind - cursor-relative find
//!
//! カーソルの前後にある一致箇所を近い順に列挙し、選んだ位置へジャンプする

// コアモジュール
pub mod config;
pub mod error;
pub mod logging;

// データ層
pub mod buffer;
pub mod editor;

// ロジック層
pub mod commands;
pub mod input;
pub mod search;

// 表示層
pub mod app;
pub mod cli;
pub mod frontend;
pub mod ui;

// 公開API
pub use app::App;
pub use buffer::{Position, TextDocument};
pub use editor::EditorHost;
pub use error::{RelfindError, Result};
pub use frontend::TuiApplication;
pub use search::{get_matches, SearchMatch, SearchMode, SearchSession};
