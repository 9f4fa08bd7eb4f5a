use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideoPairError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("動画ファイルが見つかりません: {0}")]
    NoVideosFound(String),

    #[error("バッチ定義が不正: {0}")]
    InvalidManifest(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] video_pair_common::Error),
}

pub type Result<T> = std::result::Result<T, VideoPairError>;
