//! コマンドライン引数
//!
//! `relfind [OPTIONS] FILE[:LINE[:COL]]`

use crate::buffer::Position;
use crate::config::ConfigOverrides;
use crate::error::{InputError, Result};
use crate::logging::LogLevel;
use crate::search::SearchMode;

pub const USAGE: &str = "\
usage: relfind [OPTIONS] FILE[:LINE[:COL]]

options:
  --after             open searches after the cursor (default)
  --before            open searches before the cursor
  --find QUERY        start with a search session for QUERY
  --config PATH       read configuration from PATH
  --log-level LEVEL   trace | debug | info | warning | error
  --log-file PATH     append log records to PATH
  -h, --help          show this help
  -V, --version       show version";

/// 解析済みのコマンドライン
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// 開くファイル
    pub file: Option<String>,
    /// 初期カーソル位置（0ベース）
    pub cursor: Position,
    /// 起動直後に検索する語
    pub find: Option<String>,
    /// 設定ファイル
    pub config_path: Option<String>,
    /// 設定への上書き
    pub overrides: ConfigOverrides,
    pub show_help: bool,
    pub show_version: bool,
}

impl CliOptions {
    /// 引数列（プログラム名を除く）を解析
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.show_help = true,
                "-V" | "--version" => options.show_version = true,
                "--after" => options.overrides.default_mode = Some(SearchMode::Forward),
                "--before" => options.overrides.default_mode = Some(SearchMode::Backward),
                "--find" => options.find = Some(value_for(&arg, args.next())?),
                "--config" => options.config_path = Some(value_for(&arg, args.next())?),
                "--log-file" => options.overrides.log_file = Some(value_for(&arg, args.next())?),
                "--log-level" => {
                    let value = value_for(&arg, args.next())?;
                    let level = serde_json::from_value::<LogLevel>(serde_json::Value::String(
                        value.clone(),
                    ))
                    .map_err(|_| invalid(format!("--log-level {}", value)))?;
                    options.overrides.log_level = Some(level);
                }
                flag if flag.starts_with("--") => return Err(invalid(flag)),
                target => {
                    if options.file.is_some() {
                        return Err(invalid(target));
                    }
                    let (file, cursor) = parse_target(target);
                    options.file = Some(file);
                    options.cursor = cursor;
                }
            }
        }

        Ok(options)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| invalid(format!("{} requires a value", flag)))
}

fn invalid(arg: impl Into<String>) -> crate::error::RelfindError {
    InputError::InvalidArgument { arg: arg.into() }.into()
}

/// `FILE[:LINE[:COL]]` を分解する（行・列は1ベースで受け取る）
///
/// 数値でない接尾辞はファイル名の一部とみなす
pub fn parse_target(target: &str) -> (String, Position) {
    let mut numbers = Vec::new();
    let mut file = target;
    while numbers.len() < 2 {
        match file.rsplit_once(':') {
            Some((head, tail)) if !head.is_empty() => match tail.parse::<usize>() {
                Ok(n) => {
                    numbers.push(n);
                    file = head;
                }
                Err(_) => break,
            },
            _ => break,
        }
    }
    numbers.reverse();

    let line = numbers.first().map_or(0, |n| n.saturating_sub(1));
    let ch = numbers.get(1).map_or(0, |n| n.saturating_sub(1));
    (file.to_string(), Position::new(line, ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_with_line_and_column() {
        assert_eq!(
            parse_target("notes.md:3:5"),
            ("notes.md".to_string(), Position::new(2, 4))
        );
        assert_eq!(
            parse_target("notes.md:3"),
            ("notes.md".to_string(), Position::new(2, 0))
        );
        assert_eq!(
            parse_target("a:b.txt"),
            ("a:b.txt".to_string(), Position::origin())
        );
    }

    #[test]
    fn parses_flags() {
        let options = CliOptions::parse([
            "--before",
            "--find",
            "cat",
            "--log-level",
            "debug",
            "doc.txt:2",
        ])
        .unwrap();
        assert_eq!(options.overrides.default_mode, Some(SearchMode::Backward));
        assert_eq!(options.find.as_deref(), Some("cat"));
        assert_eq!(options.overrides.log_level, Some(LogLevel::Debug));
        assert_eq!(options.file.as_deref(), Some("doc.txt"));
        assert_eq!(options.cursor, Position::new(1, 0));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(CliOptions::parse(["--frobnicate"]).is_err());
        assert!(CliOptions::parse(["--find"]).is_err());
        assert!(CliOptions::parse(["--log-level", "loud"]).is_err());
        assert!(CliOptions::parse(["a.txt", "b.txt"]).is_err());
    }
}
