//! CyberPanel AccountProvider trait 实现

use async_trait::async_trait;
use serde_json::json;

use crate::error::{ProviderError, Result};
use crate::providers::common::{resolve_acl, split_full_name};
use crate::traits::{AccountProvider, ProviderErrorMapper};
use crate::types::{
    Account, ApiGeneration, FieldType, Package, ProviderCredentialField, ProviderMetadata,
    ProviderType, DEFAULT_PANEL_PORT,
};

use super::{
    CANCEL_SETTLE_DELAY, ChangePackageResponse, ChangeStatusResponse, CyberPanelProvider,
    PHP_VERSION, SECURITY_LEVEL, StatusResponse, VerifyConnResponse, WebsiteDeleteResponse,
    WebsiteStatusResponse,
};

impl CyberPanelProvider {
    fn is_legacy(&self) -> bool {
        self.config.api_generation == ApiGeneration::Legacy
    }

    /// 创建面板用户
    async fn create_user(&self, account: &Account, acl: &str) -> Result<()> {
        let (first_name, last_name) = split_full_name(&account.client.full_name);

        let _: StatusResponse = self
            .call(
                "submitUserCreation",
                json!({
                    "firstName": first_name,
                    "lastName": last_name,
                    "email": account.client.email,
                    "userName": account.username,
                    "password": account.password,
                    "websitesLimit": account.package.max_domains,
                    "selectedACL": acl,
                    "securityLevel": SECURITY_LEVEL,
                }),
            )
            .await?;
        Ok(())
    }

    /// 创建站点
    async fn create_website(&self, account: &Account, package_name: &str, acl: &str) -> Result<()> {
        let _: StatusResponse = if self.is_legacy() {
            self.call(
                "createWebsite",
                json!({
                    "domainName": account.domain,
                    "ownerEmail": account.client.email,
                    "packageName": package_name,
                    "websiteOwner": account.username,
                    "ownerPassword": account.password,
                    "acl": acl,
                }),
            )
            .await?
        } else {
            self.call(
                "submitWebsiteCreation",
                json!({
                    "domainName": account.domain,
                    "adminEmail": account.client.email,
                    "package": package_name,
                    "websiteOwner": account.username,
                    "ownerPassword": account.password,
                    "phpSelection": PHP_VERSION,
                    "ssl": 0,
                    "dkimCheck": 0,
                    "openBasedir": 0,
                }),
            )
            .await?
        };
        Ok(())
    }

    /// 设置站点状态（"Suspend" / "Activate"）
    async fn set_website_state(&self, account: &Account, state: &str) -> Result<()> {
        let _: WebsiteStatusResponse = self
            .call(
                "submitWebsiteStatus",
                json!({
                    "websiteName": account.domain,
                    "state": state,
                }),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AccountProvider for CyberPanelProvider {
    fn id(&self) -> &'static str {
        self.provider_name()
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Cyberpanel,
            name: "CyberPanel".to_string(),
            description: "OpenLiteSpeed-based web hosting control panel".to_string(),
            required_fields: vec![
                ProviderCredentialField {
                    key: "host".to_string(),
                    label: "Host".to_string(),
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: Some("panel.example.com".to_string()),
                    help_text: Some("Hostname or IP address, without https://".to_string()),
                    options: None,
                },
                ProviderCredentialField {
                    key: "port".to_string(),
                    label: "Port".to_string(),
                    field_type: FieldType::Number,
                    required: false,
                    placeholder: Some(DEFAULT_PANEL_PORT.to_string()),
                    help_text: None,
                    options: None,
                },
                ProviderCredentialField {
                    key: "username".to_string(),
                    label: "Username".to_string(),
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: Some("admin".to_string()),
                    help_text: Some(
                        "Packages are created as {username}_{package name}".to_string(),
                    ),
                    options: None,
                },
                ProviderCredentialField {
                    key: "password".to_string(),
                    label: "Password / Access Token".to_string(),
                    field_type: FieldType::Password,
                    required: true,
                    placeholder: None,
                    help_text: Some("API access must be enabled for this user".to_string()),
                    options: None,
                },
                ProviderCredentialField {
                    key: "apiGeneration".to_string(),
                    label: "API Generation".to_string(),
                    field_type: FieldType::Select,
                    required: false,
                    placeholder: None,
                    help_text: Some(
                        "cloud: /cloudAPI/ (default), legacy: /api/{action}".to_string(),
                    ),
                    options: Some(vec![
                        ApiGeneration::Cloud.to_string(),
                        ApiGeneration::Legacy.to_string(),
                    ]),
                },
            ],
            default_port: DEFAULT_PANEL_PORT,
        }
    }

    async fn test_connection(&self) -> Result<()> {
        let result = if self.is_legacy() {
            self.call::<VerifyConnResponse>("verifyConn", json!({}))
                .await
                .map(|_| ())
        } else {
            self.list_packages().await.map(|_| ())
        };

        match result {
            Err(ProviderError::OperationFailed { raw_message, .. }) => {
                Err(ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message,
                })
            }
            other => other,
        }
    }

    fn login_url(&self, _account: Option<&Account>) -> String {
        self.config.base_url()
    }

    async fn create_account(&self, account: &Account) -> Result<()> {
        let acl = resolve_acl(account);

        // 旧版 API 没有套餐管理接口，直接使用计费侧套餐名
        let package_name = if self.is_legacy() {
            account.package.name.clone()
        } else {
            self.reconcile_package(&account.package).await?
        };

        self.create_user(account, acl).await?;
        self.create_website(account, &package_name, acl).await?;

        log::info!(
            "[{}] Created account '{}' ({})",
            self.provider_name(),
            account.username,
            account.domain
        );
        Ok(())
    }

    async fn suspend_account(&self, account: &Account) -> Result<()> {
        self.set_website_state(account, "Suspend").await
    }

    async fn unsuspend_account(&self, account: &Account) -> Result<()> {
        self.set_website_state(account, "Activate").await
    }

    async fn cancel_account(&self, account: &Account) -> Result<()> {
        let _: WebsiteDeleteResponse = if self.is_legacy() {
            self.call("deleteWebsite", json!({ "domainName": account.domain }))
                .await?
        } else {
            self.call(
                "submitWebsiteDeletion",
                json!({ "websiteName": account.domain }),
            )
            .await?
        };

        tokio::time::sleep(CANCEL_SETTLE_DELAY).await;

        let _: StatusResponse = self
            .call(
                "submitUserDeletion",
                json!({ "accountUsername": account.username }),
            )
            .await?;

        log::info!(
            "[{}] Cancelled account '{}' ({})",
            self.provider_name(),
            account.username,
            account.domain
        );
        Ok(())
    }

    async fn change_account_password(
        &self,
        account: &Account,
        new_password: &str,
    ) -> Result<()> {
        if self.is_legacy() {
            let _: ChangeStatusResponse = self
                .call(
                    "changeUserPassAPI",
                    json!({
                        "websiteOwner": account.username,
                        "ownerPassword": new_password,
                    }),
                )
                .await?;
            return Ok(());
        }

        let (first_name, last_name) = split_full_name(&account.client.full_name);
        let _: StatusResponse = self
            .call(
                "saveModificationsUser",
                json!({
                    "accountUsername": account.username,
                    "firstName": first_name,
                    "lastName": last_name,
                    "email": account.client.email,
                    "passwordByPass": new_password,
                    "securityLevel": SECURITY_LEVEL,
                }),
            )
            .await?;
        Ok(())
    }

    async fn change_account_package(&self, account: &Account, package: &Package) -> Result<()> {
        if !self.is_legacy() {
            return Err(ProviderError::Unsupported {
                provider: self.provider_name().to_string(),
                action: "package changes".to_string(),
            });
        }

        let _: ChangePackageResponse = self
            .call(
                "changePackageAPI",
                json!({
                    "websiteName": account.domain,
                    "packageName": package.name,
                }),
            )
            .await?;
        Ok(())
    }
}
