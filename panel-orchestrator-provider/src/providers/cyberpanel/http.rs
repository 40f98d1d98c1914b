//! CyberPanel HTTP 请求方法

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{PanelRequest, ProviderErrorMapper};
use crate::types::ApiGeneration;

use super::{CyberPanelProvider, PROVIDER_NAME, PanelOutcome};

/// 旧版 API 路径前缀
const LEGACY_API_PATH: &str = "/api/";
/// 新版 API 路径
const CLOUD_API_PATH: &str = "/cloudAPI/";

impl CyberPanelProvider {
    /// 构造请求：合并鉴权字段与业务参数
    ///
    /// - 旧版：`POST /api/{action}`，请求体带 `adminUser`/`adminPass`
    /// - 新版：`POST /cloudAPI/`，HTTP Basic 鉴权，请求体带 `serverUserName`/`controller`
    pub(crate) fn build_request(&self, action: &'static str, params: Value) -> PanelRequest {
        let base = self.config.base_url();
        let mut body = Map::new();

        let (url, basic_auth) = match self.config.api_generation {
            ApiGeneration::Legacy => {
                body.insert("adminUser".into(), self.config.username.clone().into());
                body.insert("adminPass".into(), self.config.password.clone().into());
                (format!("{base}{LEGACY_API_PATH}{action}"), None)
            }
            ApiGeneration::Cloud => {
                body.insert("serverUserName".into(), self.config.username.clone().into());
                body.insert("controller".into(), action.into());
                (
                    format!("{base}{CLOUD_API_PATH}"),
                    Some((self.config.username.clone(), self.config.password.clone())),
                )
            }
        };

        if let Value::Object(params) = params {
            body.extend(params);
        }

        PanelRequest {
            url,
            action,
            body: Value::Object(body),
            basic_auth,
        }
    }

    /// 执行一次面板调用，并检查该接口自己的成功标志
    ///
    /// 预期内的失败（面板拒绝、凭证错误）记 `warn`，其余记 `error`。
    pub(crate) async fn call<R>(&self, action: &'static str, params: Value) -> Result<R>
    where
        R: DeserializeOwned + PanelOutcome,
    {
        self.send_checked(action, params).await.inspect_err(|err| {
            if err.is_expected() {
                log::warn!("[{PROVIDER_NAME}] {err}");
            } else {
                log::error!("[{PROVIDER_NAME}] {err}");
            }
        })
    }

    async fn send_checked<R>(&self, action: &'static str, params: Value) -> Result<R>
    where
        R: DeserializeOwned + PanelOutcome,
    {
        let request = self.build_request(action, params);
        let response_text = self.transport.post(request).await?;
        let response: R = HttpUtils::parse_json(&response_text, PROVIDER_NAME)?;

        if !response.succeeded() {
            return Err(self.operation_failed(action, response.error_message()));
        }
        Ok(response)
    }
}
