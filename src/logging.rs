//! ロギングシステム
//!
//! `log` クレートのバックエンドとして動作するロガー。
//! コアモジュールは `log::debug!` などを使い、出力先はバイナリ側で決める

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// `log` クレートのフィルタに変換
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warning
    }
}

/// ロガー
///
/// * 既定では stderr に出力
/// * TUI 実行中は画面を崩さないよう stderr を切ってファイルにのみ書く
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// 開発者向けロガー
    pub fn for_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    /// ログレベルを取得
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力の有無を設定
    pub fn with_stderr(mut self, enabled: bool) -> Self {
        self.output_stderr = enabled;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", message);
            }
        }
    }

    fn format(level: LogLevel, target: &str, message: impl std::fmt::Display) -> String {
        format!("{}: {} in {}", level.tag(), message, target)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.should_log(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = LogLevel::from(record.level());
        if self.should_log(level) {
            self.write_line(&Self::format(level, record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// ロガーをグローバルに登録
///
/// 二度目以降の呼び出しは `SetLoggerError` を返す
pub fn init(logger: Logger) -> Result<(), log::SetLoggerError> {
    let filter = logger.level().to_filter();
    log::set_logger(Box::leak(Box::new(logger)))?;
    log::set_max_level(filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn logger_respects_log_level() {
        let logger = Logger::for_development().with_stderr(false);
        assert!(logger.should_log(LogLevel::Debug));
        assert!(logger.should_log(LogLevel::Error));
        assert!(!logger.should_log(LogLevel::Trace));

        let info_logger = Logger::for_development()
            .with_level(LogLevel::Info)
            .with_stderr(false);
        assert!(!info_logger.should_log(LogLevel::Debug));
        assert!(info_logger.should_log(LogLevel::Warning));
    }

    #[test]
    fn writes_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relfind.log");
        let logger = Logger::new(LogLevel::Info)
            .with_stderr(false)
            .with_file_output(&path);

        logger.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .target("relfind::search")
                .args(format_args!("3 matches"))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .target("relfind::search")
                .args(format_args!("hidden"))
                .build(),
        );

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "INFO: 3 matches in relfind::search\n");
    }

    #[test]
    fn level_deserializes_from_lowercase() {
        let level: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, LogLevel::Warning);
    }
}
