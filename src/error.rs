//! エラーハンドリング
//!
//! relfind 全体で使用するエラー型とユーティリティを定義
//! 検索そのものはエラーを返さない（最悪でも「見つからない」）ため、
//! ここで扱うのはファイル読み込み・設定・端末・入力まわりのみ

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum RelfindError {
    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// UI操作エラー
    #[error("UI operation failed")]
    Ui(#[from] UiError),

    /// 入力処理エラー
    #[error("Input processing failed")]
    Input(#[from] InputError),

    /// 設定エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// `std::io::Error` をパス付きのエラーに変換
    pub fn from_io(path: impl Into<String>, error: &std::io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => FileError::Encoding {
                message: format!("{}: {}", path, error),
            },
            _ => FileError::Io {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone)]
pub enum InputError {
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Invalid argument: {arg}")]
    InvalidArgument { arg: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid configuration file: {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// エラーレベル分類
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLevel {
    Warning,
    Error,
    Fatal,
}

/// エラー表示情報
#[derive(Debug, Clone)]
pub struct ErrorDisplay {
    /// エラーメッセージ
    pub message: String,
    /// エラーレベル
    pub level: ErrorLevel,
}

impl ErrorDisplay {
    pub fn new(error: &RelfindError) -> Self {
        let (message, level) = Self::format_error(error);
        Self { message, level }
    }

    fn format_error(error: &RelfindError) -> (String, ErrorLevel) {
        match error {
            RelfindError::File(FileError::NotFound { path }) => {
                (format!("ファイルが見つかりません: {}", path), ErrorLevel::Error)
            }
            RelfindError::File(FileError::PermissionDenied { path }) => {
                (format!("アクセス権限がありません: {}", path), ErrorLevel::Error)
            }
            RelfindError::File(FileError::InvalidPath { path }) => {
                (format!("無効なパスです: {}", path), ErrorLevel::Error)
            }
            RelfindError::File(FileError::Encoding { message }) => {
                (format!("文字エンコーディングエラー: {}", message), ErrorLevel::Error)
            }
            RelfindError::Input(InputError::CommandNotFound { command }) => {
                (format!("コマンドが見つかりません: {}", command), ErrorLevel::Warning)
            }
            RelfindError::Config(ConfigError::InvalidFile { path, message }) => {
                (format!("設定ファイルが不正です: {} ({})", path, message), ErrorLevel::Error)
            }
            RelfindError::Ui(UiError::TerminalInit) => {
                ("ターミナル初期化に失敗しました".to_string(), ErrorLevel::Fatal)
            }
            _ => (format!("エラーが発生しました: {}", error), ErrorLevel::Error),
        }
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, RelfindError>;

// std::io::Error から RelfindError への変換
impl From<std::io::Error> for RelfindError {
    fn from(error: std::io::Error) -> Self {
        RelfindError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}
