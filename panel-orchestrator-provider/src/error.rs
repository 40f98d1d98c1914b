use serde::{Deserialize, Serialize};

/// Unified error type for all panel provider operations.
///
/// Every variant is a "provider operation failed" outcome: it carries a
/// `provider` field identifying which adapter produced it, plus the context the
/// billing side needs to show the failure to an operator. All variants are
/// serializable for structured error reporting.
///
/// Nothing in this crate retries. Transient failures ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout)) are surfaced immediately, like every other variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The panel answered, but its success flag was false or missing.
    OperationFailed {
        /// Provider that produced the error.
        provider: String,
        /// Panel action that failed (e.g. `"submitUserCreation"`).
        action: String,
        /// `error_message` reported by the panel, if any.
        raw_message: Option<String>,
    },

    /// The provider cannot perform this operation at all.
    ///
    /// Returned without any network traffic.
    Unsupported {
        /// Provider that produced the error.
        provider: String,
        /// Human-readable operation name (e.g. `"username changes"`).
        action: String,
    },

    /// The configured admin credentials were rejected by the panel.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the panel, if available.
        raw_message: Option<String>,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// Failed to parse the panel's response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The connection configuration could not be turned into a working adapter.
    InvalidConfig {
        /// Provider that produced the error.
        provider: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（面板拒绝、操作不支持等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::OperationFailed { .. }
                | Self::Unsupported { .. }
                | Self::InvalidCredentials { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// Message reported by the panel itself, when there is one.
    pub fn raw_message(&self) -> Option<&str> {
        match self {
            Self::OperationFailed { raw_message, .. }
            | Self::InvalidCredentials { raw_message, .. } => raw_message.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperationFailed {
                provider,
                action,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] {action} failed: {msg}")
                } else {
                    write!(f, "[{provider}] {action} failed")
                }
            }
            Self::Unsupported { provider, action } => {
                write!(f, "[{provider}] does not support {action}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid username or password: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid username or password")
                }
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::InvalidConfig { provider, detail } => {
                write!(f, "[{provider}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
