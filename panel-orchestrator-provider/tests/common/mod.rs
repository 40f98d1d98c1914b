//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use panel_orchestrator_provider::{
    Account, AccountProvider, Client, Package, PanelConfig, ProviderType, create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 生成唯一的测试用户名（面板限制用户名为字母数字）
pub fn generate_test_username() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("t{}", &uuid[..9])
}

/// 测试上下文 - 封装 Provider 和测试域名后缀
pub struct TestContext {
    pub provider: Arc<dyn AccountProvider>,
    pub domain_suffix: String,
}

impl TestContext {
    /// 从环境变量创建 CyberPanel 测试上下文
    ///
    /// 必需: `CYBERPANEL_HOST`, `CYBERPANEL_USERNAME`, `CYBERPANEL_PASSWORD`, `TEST_DOMAIN`
    /// 可选: `CYBERPANEL_PORT`, `CYBERPANEL_API` (cloud / legacy)
    pub fn cyberpanel() -> Option<Self> {
        let mut form: HashMap<String, String> = HashMap::new();
        form.insert("host".to_string(), env::var("CYBERPANEL_HOST").ok()?);
        form.insert("username".to_string(), env::var("CYBERPANEL_USERNAME").ok()?);
        form.insert("password".to_string(), env::var("CYBERPANEL_PASSWORD").ok()?);
        if let Ok(port) = env::var("CYBERPANEL_PORT") {
            form.insert("port".to_string(), port);
        }
        if let Ok(api) = env::var("CYBERPANEL_API") {
            form.insert("apiGeneration".to_string(), api);
        }
        let domain_suffix = env::var("TEST_DOMAIN").ok()?;

        let config = PanelConfig::from_map(&ProviderType::Cyberpanel, &form).ok()?;
        let provider = create_provider(&ProviderType::Cyberpanel, config).ok()?;

        Some(Self {
            provider,
            domain_suffix,
        })
    }

    /// 构造一个唯一的测试账户
    pub fn test_account(&self) -> Account {
        let username = generate_test_username();
        Account {
            domain: format!("{username}.{}", self.domain_suffix),
            password: format!("Pw-{username}-9x"),
            client: Client {
                email: format!("{username}@{}", self.domain_suffix),
                full_name: "Integration Test".to_string(),
            },
            package: Package {
                name: "Integration Test".to_string(),
                quota: 1_000,
                bandwidth: 10_000,
                max_sql: 1,
                max_ftp: 1,
                max_pop: 1,
                max_domains: 1,
                custom_values: HashMap::new(),
            },
            reseller: false,
            username,
        }
    }

    /// 清理测试账户（忽略错误）
    pub async fn cleanup_account(&self, account: &Account) {
        let _ = self.provider.cancel_account(account).await;
    }
}
