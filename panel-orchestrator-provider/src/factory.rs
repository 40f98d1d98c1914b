//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::AccountProvider;
use crate::types::{PanelConfig, ProviderMetadata, ProviderType};

#[cfg(feature = "cyberpanel")]
use crate::providers::CyberPanelProvider;

/// Creates an [`AccountProvider`] for the given panel type and connection settings.
///
/// The returned provider is wrapped in `Arc<dyn AccountProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use panel_orchestrator_provider::{create_provider, PanelConfig, ProviderType};
///
/// let provider = create_provider(
///     &ProviderType::Cyberpanel,
///     PanelConfig::new("panel.example.com", "admin", "secret"),
/// ).unwrap();
/// ```
pub fn create_provider(
    provider: &ProviderType,
    config: PanelConfig,
) -> Result<Arc<dyn AccountProvider>> {
    log::debug!("Creating {provider} provider for {}", config.base_url());
    match provider {
        #[cfg(feature = "cyberpanel")]
        ProviderType::Cyberpanel => Ok(Arc::new(CyberPanelProvider::new(config)?)),
    }
}

/// Returns metadata for all providers enabled via feature flags.
///
/// Useful for building the provider-configuration form on the billing side.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![
        #[cfg(feature = "cyberpanel")]
        CyberPanelProvider::metadata(),
    ]
}
