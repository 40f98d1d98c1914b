//! 测试辅助模块
//!
//! 提供一个记录调用、按 action 返回响应的面板 fake，以及样例账户/套餐。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::{ProviderError, Result};
use crate::providers::CyberPanelProvider;
use crate::traits::{PanelRequest, PanelTransport};
use crate::types::{Account, Client, Package, PanelConfig};

/// 一次被记录的请求
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub at: Instant,
    pub action: &'static str,
    pub url: String,
    pub body: Value,
    pub basic_auth: Option<(String, String)>,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<RecordedCall>,
    packages: Vec<String>,
    overrides: HashMap<&'static str, Result<String>>,
}

// ===== FakePanel =====

/// 内存中的面板：记录每次请求，默认对所有 action 返回成功，
/// 并维护一个可被 `submitPackage` 修改的套餐列表。
#[derive(Default)]
pub struct FakePanel {
    state: Mutex<FakeState>,
}

impl FakePanel {
    /// 创建接入 fake 的 provider
    pub fn provider(config: PanelConfig) -> (CyberPanelProvider, Arc<Self>) {
        let panel = Arc::new(Self::default());
        let provider = CyberPanelProvider::with_transport(config, panel.clone());
        (provider, panel)
    }

    /// 为某个 action 固定返回指定响应体
    pub async fn respond(&self, action: &'static str, body: &str) {
        self.state
            .lock()
            .await
            .overrides
            .insert(action, Ok(body.to_string()));
    }

    /// 为某个 action 固定返回传输层错误
    pub async fn fail_with(&self, action: &'static str, error: ProviderError) {
        self.state.lock().await.overrides.insert(action, Err(error));
    }

    pub async fn add_package(&self, name: &str) {
        self.state.lock().await.packages.push(name.to_string());
    }

    pub async fn package_names(&self) -> Vec<String> {
        self.state.lock().await.packages.clone()
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().await.calls.clone()
    }

    pub async fn actions(&self) -> Vec<&'static str> {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .map(|c| c.action)
            .collect()
    }

    fn default_response(state: &mut FakeState, action: &str, body: &Value) -> String {
        match action {
            "fetchPackages" => {
                let data: Vec<Value> = state
                    .packages
                    .iter()
                    .map(|name| json!({ "packageName": name }))
                    .collect();
                json!({
                    "status": 1,
                    "error_message": "None",
                    "data": Value::Array(data).to_string(),
                })
                .to_string()
            }
            "submitPackage" => {
                let owner = body["serverUserName"].as_str().unwrap_or_default();
                let name = body["packageName"].as_str().unwrap_or_default();
                state.packages.push(format!("{owner}_{name}"));
                json!({ "status": 1, "error_message": "None" }).to_string()
            }
            "verifyConn" => json!({ "verifyConn": 1, "error_message": "None" }).to_string(),
            "submitWebsiteStatus" => {
                json!({ "websiteStatus": 1, "error_message": "None" }).to_string()
            }
            "deleteWebsite" | "submitWebsiteDeletion" => {
                json!({ "websiteDeleteStatus": 1, "error_message": "None" }).to_string()
            }
            "changePackageAPI" => {
                json!({ "changePackage": 1, "error_message": "None" }).to_string()
            }
            "changeUserPassAPI" => {
                json!({ "changeStatus": 1, "error_message": "None" }).to_string()
            }
            _ => json!({ "status": 1, "error_message": "None" }).to_string(),
        }
    }
}

#[async_trait]
impl PanelTransport for FakePanel {
    async fn post(&self, request: PanelRequest) -> Result<String> {
        let mut state = self.state.lock().await;
        state.calls.push(RecordedCall {
            at: Instant::now(),
            action: request.action,
            url: request.url.clone(),
            body: request.body.clone(),
            basic_auth: request.basic_auth.clone(),
        });

        if let Some(result) = state.overrides.get(request.action) {
            return result.clone();
        }
        Ok(Self::default_response(
            &mut state,
            request.action,
            &request.body,
        ))
    }
}

// ===== 样例数据 =====

pub fn sample_package(name: &str) -> Package {
    Package {
        name: name.to_string(),
        quota: 5_000,
        bandwidth: 50_000,
        max_sql: 3,
        max_ftp: 2,
        max_pop: 10,
        max_domains: 4,
        custom_values: HashMap::new(),
    }
}

pub fn sample_account() -> Account {
    Account {
        username: "jsmith".to_string(),
        domain: "jsmith.example.com".to_string(),
        password: "S3cure!pass".to_string(),
        client: Client {
            email: "john@example.com".to_string(),
            full_name: "John Smith".to_string(),
        },
        package: sample_package("Pro Plan"),
        reseller: false,
    }
}
