use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "API トークンが設定されていません。TRACKER_API_TOKEN 環境変数、\
        または ~/.config/trackform/config.yaml の api_token を設定してください"
    )]
    MissingToken,

    #[error("不正な設定値 {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("設定ファイルの解析に失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
