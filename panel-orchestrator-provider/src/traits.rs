use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::types::{Account, Package, ProviderMetadata};

/// 发往面板的一次请求（内部使用）
///
/// 已完成鉴权字段合并，传输层只负责发送。
#[derive(Debug, Clone)]
pub(crate) struct PanelRequest {
    /// 完整 URL
    pub url: String,
    /// 面板 action / controller 名称（用于日志和错误）
    pub action: &'static str,
    /// JSON 请求体
    pub body: Value,
    /// HTTP Basic 鉴权 (username, password)，仅新版 API 使用
    pub basic_auth: Option<(String, String)>,
}

/// 面板传输层 Trait（内部使用）
/// 生产环境使用 reqwest 实现，测试中替换为记录调用的 fake
#[async_trait]
pub(crate) trait PanelTransport: Send + Sync {
    /// 发送 POST 请求并返回响应文本
    async fn post(&self, request: PanelRequest) -> Result<String>;
}

/// Provider 错误构造 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 面板返回失败标志
    fn operation_failed(&self, action: &str, raw_message: Option<String>) -> ProviderError {
        ProviderError::OperationFailed {
            provider: self.provider_name().to_string(),
            action: action.to_string(),
            raw_message,
        }
    }

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

fn unsupported(provider: &str, action: &str) -> ProviderError {
    ProviderError::Unsupported {
        provider: provider.to_string(),
        action: action.to_string(),
    }
}

/// Hosting panel provider Trait
///
/// One implementation per control panel. Every operation either succeeds or
/// returns a [`ProviderError`]; nothing is retried and multi-step operations
/// are not rolled back.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Provider 元数据（类型级别）
    ///
    /// 此方法不需要实例，可以在创建 Provider 之前调用。
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// 验证连接与管理员凭证
    async fn test_connection(&self) -> Result<()>;

    /// 面板登录地址（纯字符串拼接，无网络请求）
    fn login_url(&self, account: Option<&Account>) -> String;

    /// 代理商登录地址，默认与 [`login_url`](Self::login_url) 相同
    fn reseller_login_url(&self, account: Option<&Account>) -> String {
        self.login_url(account)
    }

    /// 创建账户（用户 + 站点）
    async fn create_account(&self, account: &Account) -> Result<()>;

    /// 暂停账户
    async fn suspend_account(&self, account: &Account) -> Result<()>;

    /// 恢复账户
    async fn unsuspend_account(&self, account: &Account) -> Result<()>;

    /// 删除账户（先站点后用户）
    async fn cancel_account(&self, account: &Account) -> Result<()>;

    /// 修改密码
    async fn change_account_password(&self, account: &Account, new_password: &str)
    -> Result<()>;

    /// 更换套餐
    async fn change_account_package(&self, account: &Account, package: &Package) -> Result<()>;

    /// 从面板同步账户信息
    ///
    /// 默认实现：不支持。
    async fn synchronize_account(&self, _account: &Account) -> Result<Account> {
        Err(unsupported(self.id(), "account synchronization"))
    }

    /// 修改用户名
    ///
    /// 默认实现：不支持，且不发起任何网络请求。
    async fn change_account_username(&self, _account: &Account, _new_username: &str) -> Result<()> {
        Err(unsupported(self.id(), "username changes"))
    }

    /// 修改主域名
    ///
    /// 默认实现：不支持，且不发起任何网络请求。
    async fn change_account_domain(&self, _account: &Account, _new_domain: &str) -> Result<()> {
        Err(unsupported(self.id(), "changing the account domain"))
    }

    /// 修改 IP
    ///
    /// 默认实现：不支持，且不发起任何网络请求。
    async fn change_account_ip(&self, _account: &Account, _new_ip: &str) -> Result<()> {
        Err(unsupported(self.id(), "changing the account IP"))
    }
}
