//! CyberPanel Provider

mod error;
mod http;
mod packages;
mod provider;
mod types;

use std::sync::Arc;
use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpTransport;
use crate::traits::PanelTransport;
use crate::types::PanelConfig;

pub(crate) use types::{
    ChangePackageResponse, ChangeStatusResponse, CyberPanelPackage, FetchPackagesResponse,
    PanelOutcome, StatusResponse, VerifyConnResponse, WebsiteDeleteResponse,
    WebsiteStatusResponse,
};

pub(crate) const PROVIDER_NAME: &str = "cyberpanel";

/// 删除站点后等待面板完成清理，再删除所属用户
///
/// 面板的站点删除是异步完成的，立即删除用户会失败。
pub(crate) const CANCEL_SETTLE_DELAY: Duration = Duration::from_secs(2);
/// 新建站点使用的 PHP 版本
pub(crate) const PHP_VERSION: &str = "PHP 8.1";
/// 新建用户的安全级别
pub(crate) const SECURITY_LEVEL: &str = "HIGH";

/// CyberPanel account provider
pub struct CyberPanelProvider {
    pub(crate) config: PanelConfig,
    pub(crate) transport: Arc<dyn PanelTransport>,
}

impl CyberPanelProvider {
    /// Builds a provider that talks to the panel over HTTPS.
    ///
    /// Fails with [`ProviderError::InvalidConfig`] when the host or username is
    /// blank or the HTTP client cannot be created.
    pub fn new(config: PanelConfig) -> Result<Self> {
        if config.host.trim().is_empty() {
            return Err(invalid_config("host must not be empty"));
        }
        if config.username.trim().is_empty() {
            return Err(invalid_config("username must not be empty"));
        }
        let transport = HttpTransport::new(PROVIDER_NAME)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub(crate) fn with_transport(config: PanelConfig, transport: Arc<dyn PanelTransport>) -> Self {
        Self { config, transport }
    }

    /// Connection settings this provider was built with.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}

fn invalid_config(detail: &str) -> ProviderError {
    ProviderError::InvalidConfig {
        provider: PROVIDER_NAME.to_string(),
        detail: detail.to_string(),
    }
}
