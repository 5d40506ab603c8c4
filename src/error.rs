use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestcheckError {
    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("无效的 URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("请求超时 ({0} ms)")]
    Timeout(u64),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}

// Add conversion from anyhow::Error
impl From<anyhow::Error> for RestcheckError {
    fn from(err: anyhow::Error) -> Self {
        RestcheckError::Other(err.to_string())
    }
}

// Add conversion from suite::ParseError
impl From<crate::suite::ParseError> for RestcheckError {
    fn from(err: crate::suite::ParseError) -> Self {
        RestcheckError::ParseError(err.to_string())
    }
}

// Add conversion from matcher::MatchError
impl From<crate::matcher::MatchError> for RestcheckError {
    fn from(err: crate::matcher::MatchError) -> Self {
        RestcheckError::ParseError(err.to_string())
    }
}

/// Result type for restcheck crate
pub type Result<T> = std::result::Result<T, RestcheckError>;
