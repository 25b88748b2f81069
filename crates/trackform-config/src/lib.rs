pub mod error;

pub use error::*;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://www.pivotaltracker.com/services/v5";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_TOKEN: &str = "TRACKER_API_TOKEN";
const ENV_URL: &str = "TRACKER_API_URL";
const ENV_TIMEOUT: &str = "TRACKER_TIMEOUT_SECS";
const ENV_CONFIG_PATH: &str = "TRACKFORM_CONFIG_PATH";

/// プロバイダ設定 (解決済み)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_token: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

/// config.yaml の内容。すべて省略可能
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub api_token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// trackform の設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("trackform"))
}

/// 設定ファイルを探す
///
/// 1. 環境変数 TRACKFORM_CONFIG_PATH (直接パス指定)
/// 2. ~/.config/trackform/config.yaml
pub fn find_settings_file() -> Option<PathBuf> {
    if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!("{} points to a missing file: {}", ENV_CONFIG_PATH, path.display());
    }

    let global = get_config_dir().ok()?.join("config.yaml");
    global.exists().then_some(global)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 環境変数 > 設定ファイル > デフォルト の順で設定を解決
pub fn load_settings() -> Result<ProviderSettings> {
    let file = match find_settings_file() {
        Some(path) => {
            tracing::debug!("Loading provider settings from {}", path.display());
            SettingsFile::load(&path)?
        }
        None => SettingsFile::default(),
    };
    resolve(file)
}

/// 設定ファイルの値に環境変数を上書きして確定する
pub fn resolve(file: SettingsFile) -> Result<ProviderSettings> {
    let api_token = env_value(ENV_TOKEN)
        .or(file.api_token)
        .filter(|t| !t.trim().is_empty())
        .ok_or(ConfigError::MissingToken)?;

    let api_url = env_value(ENV_URL)
        .or(file.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let timeout_secs = match env_value(ENV_TIMEOUT) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT,
                value: raw.clone(),
            })?,
        None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    Ok(ProviderSettings {
        api_token,
        api_url: api_url.trim_end_matches('/').to_string(),
        timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn clear_env() {
        unsafe {
            std::env::remove_var(ENV_TOKEN);
            std::env::remove_var(ENV_URL);
            std::env::remove_var(ENV_TIMEOUT);
            std::env::remove_var(ENV_CONFIG_PATH);
        }
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        clear_env();
        let file = SettingsFile {
            api_token: Some("file-token".to_string()),
            ..Default::default()
        };

        let settings = resolve(file).unwrap();
        assert_eq!(settings.api_token, "file-token");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_TOKEN, "env-token");
            std::env::set_var(ENV_URL, "http://localhost:8080/");
        }
        let file = SettingsFile {
            api_token: Some("file-token".to_string()),
            api_url: Some("http://file".to_string()),
            timeout_secs: Some(5),
        };

        let settings = resolve(file).unwrap();
        assert_eq!(settings.api_token, "env-token");
        // 末尾のスラッシュは取り除く
        assert_eq!(settings.api_url, "http://localhost:8080");
        assert_eq!(settings.timeout_secs, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_token() {
        clear_env();
        let result = resolve(SettingsFile::default());
        assert!(matches!(result, Err(ConfigError::MissingToken)));
    }

    #[test]
    #[serial]
    fn test_invalid_timeout() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_TOKEN, "env-token");
            std::env::set_var(ENV_TIMEOUT, "soon");
        }

        let result = resolve(SettingsFile::default());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_TIMEOUT, .. })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_settings_from_env_path() {
        clear_env();
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        fs::write(
            &config_path,
            "api_token: yaml-token\napi_url: http://127.0.0.1:9000\ntimeout_secs: 3\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var(ENV_CONFIG_PATH, config_path.to_str().unwrap());
        }

        assert_eq!(find_settings_file(), Some(config_path));
        let settings = load_settings().unwrap();
        assert_eq!(settings.api_token, "yaml-token");
        assert_eq!(settings.api_url, "http://127.0.0.1:9000");
        assert_eq!(settings.timeout_secs, 3);

        clear_env();
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "token: typo\n").unwrap();

        assert!(matches!(
            SettingsFile::load(&config_path),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_get_config_dir() {
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with("trackform"));
        }
    }
}
