use thiserror::Error;

/// 網路層錯誤沒有 HTTP 狀態碼，以 0 表示
pub const UNKNOWN_STATUS: u16 = 0;
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown Error";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Http failure response for {url}: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        url: String,
        body: String,
    },

    #[error("Http failure during request to {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    /// `reason` 為伺服器回傳的狀態說明；沒有時使用狀態碼的標準說明
    pub fn http(
        status: reqwest::StatusCode,
        reason: Option<String>,
        url: impl Into<String>,
        body: String,
    ) -> Self {
        let status_text = reason.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or(UNKNOWN_STATUS_TEXT)
                .to_string()
        });
        Self::Http {
            status: status.as_u16(),
            status_text,
            url: url.into(),
            body,
        }
    }

    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// HTTP 狀態碼；網路層失敗回傳 0
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network { .. } => Some(UNKNOWN_STATUS),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Http { status_text, .. } => Some(status_text),
            Self::Network { .. } => Some(UNKNOWN_STATUS_TEXT),
            _ => None,
        }
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status >= 500)
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Http {
                status: 404, url, ..
            } => format!("Resource not found: {}", url),
            Self::Http {
                status,
                status_text,
                ..
            } if *status >= 500 => {
                format!("The course server failed ({} {})", status, status_text)
            }
            Self::Http {
                status,
                status_text,
                ..
            } => format!("Request rejected by the course server ({} {})", status, status_text),
            Self::Network { url, .. } => format!("Could not reach the course server at {}", url),
            Self::SerializationError(_) => {
                "The course server returned an unexpected response".to_string()
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
