//! 設定
//!
//! JSON 形式の設定ファイルとコマンドライン上書きを扱う

use crate::error::{ConfigError, FileError, Result};
use crate::logging::LogLevel;
use crate::search::{SearchMode, DEFAULT_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// relfind の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// 接頭辞なし入力の既定方向（`after` / `before`）
    pub default_mode: SearchMode,
    /// ジャンプ時に検索語部分を選択するか
    pub select_on_choose: bool,
    /// 候補数の上限（未指定なら無制限）
    pub max_results: Option<usize>,
    /// 入力欄のプレースホルダー
    pub placeholder: String,
    /// ログレベル
    pub log_level: LogLevel,
    /// ログ出力先（`~` と環境変数を展開）
    pub log_file: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            default_mode: SearchMode::Forward,
            select_on_choose: true,
            max_results: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

/// コマンドラインからの上書き
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub default_mode: Option<SearchMode>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
}

impl FinderConfig {
    /// 既定の設定ファイルパス（`<config_dir>/relfind/config.json`）
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("relfind").join("config.json"))
    }

    /// 設定を読み込む
    ///
    /// 明示されたパスは存在しなければエラー。既定パスのファイルがなければ既定値を返す
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(raw) => {
                let path = expand_path(raw)?;
                Self::from_file(&path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("no configuration file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// ファイルから読み込む
    pub fn from_file(path: &Path) -> Result<Self> {
        let label = path.display().to_string();
        let text =
            std::fs::read_to_string(path).map_err(|err| FileError::from_io(label.clone(), &err))?;
        let config = Self::from_json(&text, &label)?;
        log::debug!("configuration loaded from {}", label);
        Ok(config)
    }

    /// JSON 文字列から読み込む
    pub fn from_json(text: &str, label: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|err| ConfigError::InvalidFile {
            path: label.to_string(),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_results == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "max_results".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// 上書きを適用した設定を返す
    pub fn merged_with(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            default_mode: overrides.default_mode.unwrap_or(self.default_mode),
            log_level: overrides.log_level.unwrap_or(self.log_level),
            log_file: overrides
                .log_file
                .clone()
                .or_else(|| self.log_file.clone()),
            ..self.clone()
        }
    }

    /// 展開済みのログ出力先
    pub fn log_path(&self) -> Result<Option<PathBuf>> {
        self.log_file.as_deref().map(expand_path).transpose()
    }
}

/// `~` と環境変数を展開してパスにする
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|err| FileError::InvalidPath {
        path: format!("{}: {}", raw, err),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelfindError;
    use std::io::Write;

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            FinderConfig::from_json(r#"{ "default_mode": "before", "max_results": 20 }"#, "t")
                .unwrap();
        assert_eq!(config.default_mode, SearchMode::Backward);
        assert_eq!(config.max_results, Some(20));
        assert!(config.select_on_choose);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn mode_accepts_short_alias() {
        let config = FinderConfig::from_json(r#"{ "default_mode": "b" }"#, "t").unwrap();
        assert_eq!(config.default_mode, SearchMode::Backward);
    }

    #[test]
    fn rejects_unknown_keys_and_zero_limit() {
        let err = FinderConfig::from_json(r#"{ "colour": "red" }"#, "t").unwrap_err();
        assert!(matches!(
            err,
            RelfindError::Config(ConfigError::InvalidFile { .. })
        ));

        let err = FinderConfig::from_json(r#"{ "max_results": 0 }"#, "t").unwrap_err();
        assert!(matches!(
            err,
            RelfindError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "select_on_choose": false }}"#).unwrap();

        let config = FinderConfig::load(file.path().to_str()).unwrap();
        assert!(!config.select_on_choose);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.json");
        let err = FinderConfig::load(missing.to_str()).unwrap_err();
        assert!(matches!(err, RelfindError::File(FileError::NotFound { .. })));
    }

    #[test]
    fn overrides_take_precedence() {
        let base = FinderConfig {
            log_file: Some("/tmp/base.log".to_string()),
            ..FinderConfig::default()
        };
        let merged = base.merged_with(&ConfigOverrides {
            default_mode: Some(SearchMode::Backward),
            log_level: Some(LogLevel::Debug),
            log_file: None,
        });
        assert_eq!(merged.default_mode, SearchMode::Backward);
        assert_eq!(merged.log_level, LogLevel::Debug);
        assert_eq!(merged.log_file.as_deref(), Some("/tmp/base.log"));
    }
}
