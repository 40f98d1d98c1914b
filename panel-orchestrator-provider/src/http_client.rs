//! Generic HTTP client tools
//!
//! Reusable request processing shared by panel providers: sending, logging,
//! reading the body and decoding JSON. Each provider still builds its own
//! URL and payload.
//!
//! Requests are sent exactly once. Panel mutations are not idempotent, so a
//! transport failure is returned to the caller instead of being retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::traits::{PanelRequest, PanelTransport};
use crate::utils::log_sanitizer::{redact_secrets, truncate_for_log};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "POST", used for logs)
    /// * `url_or_action` - URL or action name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on any response the panel answered
    /// * `Err(ProviderError::Timeout | NetworkError)` on transport failure
    /// * `Err(ProviderError::InvalidCredentials)` on HTTP 401/403
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        if matches!(status_code, 401 | 403) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Authentication rejected (HTTP {status_code})");
            return Err(ProviderError::InvalidCredentials {
                provider: provider_name.to_string(),
                raw_message: Some(truncate_for_log(&body)).filter(|b| !b.is_empty()),
            });
        }

        if matches!(status_code, 500..=599) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// 创建面板专用 HTTP Client
///
/// 面板普遍使用自签名证书，因此关闭证书校验。
pub(crate) fn create_http_client(provider_name: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(|e| ProviderError::InvalidConfig {
            provider: provider_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// reqwest 传输层实现
pub(crate) struct HttpTransport {
    client: Client,
    provider_name: &'static str,
}

impl HttpTransport {
    pub fn new(provider_name: &'static str) -> Result<Self> {
        Ok(Self {
            client: create_http_client(provider_name)?,
            provider_name,
        })
    }
}

#[async_trait]
impl PanelTransport for HttpTransport {
    async fn post(&self, request: PanelRequest) -> Result<String> {
        let provider_name = self.provider_name;
        log::debug!(
            "[{provider_name}] Request Body: {}",
            truncate_for_log(&redact_secrets(&request.body).to_string())
        );

        let mut builder = self.client.post(&request.url).json(&request.body);
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }

        let (_, text) =
            HttpUtils::execute_request(builder, provider_name, "POST", request.action).await?;
        Ok(text)
    }
}
