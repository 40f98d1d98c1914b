//! CyberPanel API 类型定义
//!
//! 每个接口的成功标志字段名不同，这里逐个接口建模，不做统一。

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 面板响应的统一视图
pub(crate) trait PanelOutcome {
    /// 成功标志是否为真
    fn succeeded(&self) -> bool;

    /// 面板返回的 `error_message`
    fn error_message(&self) -> Option<String>;
}

/// 反序列化面板成功标志
///
/// 面板会返回 `true`/`false`、`1`/`0` 或 `"1"`/`"0"`/`"true"`/`"false"`，
/// 其他值（含 `null`）一律视为失败。
fn panel_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Str(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n == 1,
        Some(Flag::Str(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true"),
        Some(Flag::Other(_)) | None => false,
    })
}

fn non_empty(message: Option<&String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty()).cloned()
}

/// `status` 字段响应（用户创建/删除、套餐创建、旧版站点创建等）
#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    #[serde(default, deserialize_with = "panel_flag")]
    pub status: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `verifyConn` 字段响应（旧版连接测试）
#[derive(Debug, Deserialize)]
pub(crate) struct VerifyConnResponse {
    #[serde(rename = "verifyConn", default, deserialize_with = "panel_flag")]
    pub verify_conn: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `websiteStatus` 字段响应（暂停/恢复站点）
#[derive(Debug, Deserialize)]
pub(crate) struct WebsiteStatusResponse {
    #[serde(rename = "websiteStatus", default, deserialize_with = "panel_flag")]
    pub website_status: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `websiteDeleteStatus` 字段响应（删除站点）
#[derive(Debug, Deserialize)]
pub(crate) struct WebsiteDeleteResponse {
    #[serde(rename = "websiteDeleteStatus", default, deserialize_with = "panel_flag")]
    pub website_delete_status: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `changePackage` 字段响应（旧版更换套餐）
#[derive(Debug, Deserialize)]
pub(crate) struct ChangePackageResponse {
    #[serde(rename = "changePackage", default, deserialize_with = "panel_flag")]
    pub change_package: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `changeStatus` 字段响应（旧版修改密码）
#[derive(Debug, Deserialize)]
pub(crate) struct ChangeStatusResponse {
    #[serde(rename = "changeStatus", default, deserialize_with = "panel_flag")]
    pub change_status: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `fetchPackages` 响应
///
/// `data` 是一段 JSON 编码后的字符串，需要二次解析。
#[derive(Debug, Deserialize)]
pub(crate) struct FetchPackagesResponse {
    #[serde(default, deserialize_with = "panel_flag")]
    pub status: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// 面板上的套餐条目
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CyberPanelPackage {
    pub package_name: String,
}

impl FetchPackagesResponse {
    /// 解析 `data` 中的套餐列表
    ///
    /// 兼容 `data` 直接为数组的情况；缺失时返回空列表。
    pub fn packages(&self) -> serde_json::Result<Vec<CyberPanelPackage>> {
        match &self.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(raw)) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(Value::String(raw)) => serde_json::from_str(raw),
            Some(other) => serde_json::from_value(other.clone()),
        }
    }
}

impl PanelOutcome for StatusResponse {
    fn succeeded(&self) -> bool {
        self.status
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

impl PanelOutcome for VerifyConnResponse {
    fn succeeded(&self) -> bool {
        self.verify_conn
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

impl PanelOutcome for WebsiteStatusResponse {
    fn succeeded(&self) -> bool {
        self.website_status
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

impl PanelOutcome for WebsiteDeleteResponse {
    fn succeeded(&self) -> bool {
        self.website_delete_status
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

impl PanelOutcome for ChangePackageResponse {
    fn succeeded(&self) -> bool {
        self.change_package
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

impl PanelOutcome for ChangeStatusResponse {
    fn succeeded(&self) -> bool {
        self.change_status
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

impl PanelOutcome for FetchPackagesResponse {
    fn succeeded(&self) -> bool {
        self.status
    }
    fn error_message(&self) -> Option<String> {
        non_empty(self.error_message.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(json: &str) -> StatusResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flag_accepts_bool_int_and_string() {
        assert!(status(r#"{"status": true}"#).succeeded());
        assert!(status(r#"{"status": 1}"#).succeeded());
        assert!(status(r#"{"status": "1"}"#).succeeded());
        assert!(status(r#"{"status": "True"}"#).succeeded());
    }

    #[test]
    fn flag_false_variants() {
        assert!(!status(r#"{"status": false}"#).succeeded());
        assert!(!status(r#"{"status": 0}"#).succeeded());
        assert!(!status(r#"{"status": "0"}"#).succeeded());
        assert!(!status(r#"{"status": null}"#).succeeded());
        assert!(!status(r#"{"status": {"nested": 1}}"#).succeeded());
    }

    #[test]
    fn unrecognised_flag_shapes_are_skipped_not_rejected() {
        let resp = status(r#"{"status": [1], "error_message": "odd reply"}"#);
        assert!(!resp.succeeded());
        assert_eq!(resp.error_message().as_deref(), Some("odd reply"));
        assert!(!status(r#"{"status": 1.0}"#).succeeded());
    }

    #[test]
    fn missing_flag_is_failure() {
        let resp = status(r#"{"error_message": "Not authorized"}"#);
        assert!(!resp.succeeded());
        assert_eq!(resp.error_message().as_deref(), Some("Not authorized"));
    }

    #[test]
    fn blank_error_message_is_none() {
        let resp = status(r#"{"status": 0, "error_message": "  "}"#);
        assert_eq!(resp.error_message(), None);
    }

    #[test]
    fn flag_field_names_are_per_endpoint() {
        // status alone does not satisfy an endpoint keyed on websiteStatus
        let resp: WebsiteStatusResponse =
            serde_json::from_str(r#"{"status": 1}"#).unwrap();
        assert!(!resp.succeeded());

        let resp: WebsiteDeleteResponse =
            serde_json::from_str(r#"{"websiteDeleteStatus": 1, "error_message": "None"}"#)
                .unwrap();
        assert!(resp.succeeded());

        let resp: VerifyConnResponse = serde_json::from_str(r#"{"verifyConn": true}"#)
            .unwrap();
        assert!(resp.succeeded());
    }

    #[test]
    fn packages_from_encoded_string() {
        let resp: FetchPackagesResponse = serde_json::from_str(
            r#"{"status": 1, "data": "[{\"packageName\": \"admin_Default\", \"diskSpace\": 1000}]"}"#,
        )
        .unwrap();
        let packages = resp.packages().unwrap_or_default();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].package_name, "admin_Default");
    }

    #[test]
    fn packages_from_plain_array() {
        let resp: FetchPackagesResponse =
            serde_json::from_str(r#"{"status": 1, "data": [{"packageName": "admin_Pro"}]}"#)
                .unwrap();
        let packages = resp.packages().unwrap_or_default();
        assert_eq!(packages[0].package_name, "admin_Pro");
    }

    #[test]
    fn packages_missing_data_is_empty() {
        let resp: FetchPackagesResponse =
            serde_json::from_str(r#"{"status": 1}"#).unwrap();
        assert!(matches!(resp.packages(), Ok(p) if p.is_empty()));
    }

    #[test]
    fn packages_bad_encoding_is_error() {
        let resp: FetchPackagesResponse =
            serde_json::from_str(r#"{"status": 1, "data": "not json"}"#)
                .unwrap();
        assert!(resp.packages().is_err());
    }
}
