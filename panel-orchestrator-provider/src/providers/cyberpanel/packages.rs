//! CyberPanel 套餐同步
//!
//! 面板以 `{管理员用户名}_{去空格套餐名}` 保存套餐。创建账户前确认套餐存在，
//! 不存在则按计费系统的限额创建。不做缓存，每次都重新拉取列表。

use serde_json::json;

use crate::error::{ProviderError, Result};
use crate::providers::common::namespaced_package_name;
use crate::traits::ProviderErrorMapper;
use crate::types::{ApiGeneration, Package};

use super::{CyberPanelPackage, CyberPanelProvider, FetchPackagesResponse, StatusResponse};

impl CyberPanelProvider {
    /// 拉取面板上全部套餐
    pub(crate) async fn list_packages(&self) -> Result<Vec<CyberPanelPackage>> {
        let response: FetchPackagesResponse = self.call("fetchPackages", json!({})).await?;
        response.packages().map_err(|e| self.parse_error(e))
    }

    /// Makes sure `package` exists on the panel and returns its namespaced name.
    ///
    /// Idempotent: a second call finds the package created by the first.
    /// Only the current API exposes package management; the legacy API
    /// returns [`ProviderError::Unsupported`].
    pub async fn reconcile_package(&self, package: &Package) -> Result<String> {
        if self.config.api_generation == ApiGeneration::Legacy {
            return Err(ProviderError::Unsupported {
                provider: self.provider_name().to_string(),
                action: "package management".to_string(),
            });
        }

        let stripped_name = package.name.replace(' ', "");
        let remote_name = namespaced_package_name(&self.config.username, &package.name);

        let existing = self.list_packages().await?;
        if existing.iter().any(|p| p.package_name == remote_name) {
            log::debug!("[{}] Package '{remote_name}' already exists", self.provider_name());
            return Ok(remote_name);
        }

        log::info!("[{}] Creating package '{remote_name}'", self.provider_name());
        let _: StatusResponse = self
            .call(
                "submitPackage",
                json!({
                    "packageName": stripped_name,
                    "diskSpace": package.quota,
                    "bandwidth": package.bandwidth,
                    "dataBases": package.max_sql,
                    "ftpAccounts": package.max_ftp,
                    "emails": package.max_pop,
                    "allowedDomains": package.max_domains,
                }),
            )
            .await?;

        Ok(remote_name)
    }
}
