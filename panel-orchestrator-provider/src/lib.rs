//! # panel-orchestrator-provider
//!
//! Hosting control panel adapters for billing systems. Each adapter turns
//! account lifecycle operations (create, suspend, unsuspend, cancel, password
//! and package changes) into calls against a panel's administrative HTTP API
//! and reports the outcome as `Result<(), ProviderError>`.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [CyberPanel](https://cyberpanel.net/) | `cyberpanel` | HTTP Basic (`/cloudAPI/`) or `adminUser`/`adminPass` (`/api/`) |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`cyberpanel`** — Enable only the `CyberPanel` provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! Panels usually run with self-signed certificates, so certificate
//! validation is disabled for panel connections.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//!
//! use panel_orchestrator_provider::{
//!     Account, AccountProvider, Client, Package, PanelConfig, ProviderType, create_provider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a provider from the billing-side configuration
//!     let config = PanelConfig::new("panel.example.com", "admin", "secret");
//!     let provider = create_provider(&ProviderType::Cyberpanel, config)?;
//!
//!     // 2. Check the admin credentials
//!     provider.test_connection().await?;
//!
//!     // 3. Provision an account
//!     let account = Account {
//!         username: "jsmith".to_string(),
//!         domain: "jsmith.example.com".to_string(),
//!         password: "S3cure!pass".to_string(),
//!         client: Client {
//!             email: "john@example.com".to_string(),
//!             full_name: "John Smith".to_string(),
//!         },
//!         package: Package {
//!             name: "Pro Plan".to_string(),
//!             quota: 5_000,
//!             bandwidth: 50_000,
//!             max_sql: 3,
//!             max_ftp: 2,
//!             max_pop: 10,
//!             max_domains: 4,
//!             custom_values: HashMap::new(),
//!         },
//!         reseller: false,
//!     };
//!     provider.create_account(&account).await?;
//!
//!     println!("Log in at {}", provider.login_url(Some(&account)));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::OperationFailed`] — the panel reported failure; carries its message
//! - [`ProviderError::Unsupported`] — the provider cannot do this at all
//! - [`ProviderError::InvalidCredentials`] — the admin credentials were rejected
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failure
//!
//! Nothing is retried, and multi-step operations (create, cancel) are not
//! rolled back when a later step fails.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

#[cfg(all(test, feature = "cyberpanel"))]
mod test_utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, get_all_provider_metadata};

// Re-export core trait only (internal traits are not exported)
pub use traits::AccountProvider;

// Re-export types
pub use types::{
    Account, ApiGeneration, Client, CredentialValidationError, DEFAULT_PANEL_PORT, FieldType,
    Package, PanelConfig, ProviderCredentialField, ProviderMetadata, ProviderType,
};

// Re-export shared helpers that billing code may want to mirror
pub use providers::common::{namespaced_package_name, split_full_name};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "cyberpanel")]
pub use providers::CyberPanelProvider;
