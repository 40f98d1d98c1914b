//! CyberPanel error mapping
//!
//! 面板返回的失败标志一律映射为 `OperationFailed`，保留接口名和面板消息。
//! 只有连接测试失败和 HTTP 401/403 才算凭证错误。

use crate::traits::ProviderErrorMapper;

use super::{CyberPanelProvider, PROVIDER_NAME};

impl ProviderErrorMapper for CyberPanelProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::test_utils::FakePanel;
    use crate::types::PanelConfig;

    fn provider() -> CyberPanelProvider {
        let (provider, _panel) =
            FakePanel::provider(PanelConfig::new("panel.example.com", "admin", "secret"));
        provider
    }

    #[test]
    fn plain_failure_keeps_action_and_message() {
        let p = provider();
        let err = p.operation_failed(
            "submitUserCreation",
            Some("This username already exists.".to_string()),
        );
        assert!(matches!(
            err,
            ProviderError::OperationFailed { action, raw_message, .. }
                if action == "submitUserCreation"
                    && raw_message.as_deref() == Some("This username already exists.")
        ));
    }

    #[test]
    fn failure_without_message() {
        let p = provider();
        let err = p.operation_failed("submitWebsiteStatus", None);
        assert!(matches!(
            err,
            ProviderError::OperationFailed { raw_message: None, .. }
        ));
    }

    #[test]
    fn refusal_wording_does_not_change_error_kind() {
        let p = provider();
        for msg in [
            "Invalid Login Credentials.",
            "You are not authorized to suspend websites owned by another reseller.",
        ] {
            let err = p.operation_failed("submitWebsiteStatus", Some(msg.to_string()));
            assert!(
                matches!(
                    &err,
                    ProviderError::OperationFailed { action, .. } if action == "submitWebsiteStatus"
                ),
                "got {err:?}"
            );
        }
    }

    #[test]
    fn provider_name_is_cyberpanel() {
        assert_eq!(provider().provider_name(), "cyberpanel");
    }

    #[test]
    fn parse_error_carries_provider() {
        let err = provider().parse_error("expected value");
        assert!(matches!(
            err,
            ProviderError::ParseError { provider, .. } if provider == "cyberpanel"
        ));
    }
}
