/// Error types for the remote gateway module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Gateway misconfiguration (missing base URL, bad client setup)
    ConfigError(String),
    /// Transport-level failure (connection, timeout, DNS)
    NetworkError(String),
    /// HTTP 401 from the gateway; the session must be invalidated
    Unauthorized,
    /// Non-2xx response other than 401
    ProviderError(String),
    /// 2xx response whose body did not contain a translation
    InvalidResponse(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::ConfigError(msg) => write!(f, "Gateway configuration error: {}", msg),
            GatewayError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            GatewayError::Unauthorized => write!(f, "Gateway rejected credentials (401)"),
            GatewayError::ProviderError(msg) => write!(f, "Gateway error: {}", msg),
            GatewayError::InvalidResponse(msg) => write!(f, "Invalid gateway response: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::NetworkError(err.to_string())
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
