use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which panel provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// `CyberPanel`. Requires feature `cyberpanel`.
    #[cfg(feature = "cyberpanel")]
    Cyberpanel,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "cyberpanel")]
            Self::Cyberpanel => write!(f, "cyberpanel"),
        }
    }
}

// ============ Billing-side Types ============

/// Owner of a hosting account, as known to the billing system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Contact e-mail, used as the panel user's and website's e-mail.
    pub email: String,
    /// Full display name; split into first/last name for the panel.
    pub full_name: String,
}

/// A hosting plan as configured in the billing system.
///
/// Quota and bandwidth are in megabytes. Counts are upper limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Plan name (may contain spaces).
    pub name: String,
    /// Disk quota in MB.
    pub quota: u64,
    /// Monthly bandwidth in MB.
    pub bandwidth: u64,
    /// Maximum number of SQL databases.
    pub max_sql: u32,
    /// Maximum number of FTP accounts.
    pub max_ftp: u32,
    /// Maximum number of mailboxes.
    pub max_pop: u32,
    /// Maximum number of domains/websites.
    pub max_domains: u32,
    /// Free-form provider-specific values (e.g. `"ACL"`).
    #[serde(default)]
    pub custom_values: HashMap<String, String>,
}

impl Package {
    /// Looks up a provider-specific custom value. Blank values count as unset.
    pub fn custom_value(&self, key: &str) -> Option<&str> {
        self.custom_values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// A hosting account to provision. Read-only from the adapter's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Panel login name.
    pub username: String,
    /// Primary website domain.
    pub domain: String,
    /// Initial panel password.
    pub password: String,
    /// Owning client.
    pub client: Client,
    /// Hosting plan.
    pub package: Package,
    /// Whether the account is a reseller account.
    #[serde(default)]
    pub reseller: bool,
}

// ============ Connection Configuration ============

/// Default panel port.
pub const DEFAULT_PANEL_PORT: u16 = 8090;

/// Which generation of the panel's HTTP API to talk to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiGeneration {
    /// `/api/{action}` with `adminUser`/`adminPass` in the body.
    Legacy,
    /// `/cloudAPI/` with an `Authorization` header and a `controller` field.
    #[default]
    Cloud,
}

impl ApiGeneration {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" | "api" => Some(Self::Legacy),
            "cloud" | "cloudapi" => Some(Self::Cloud),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Cloud => write!(f, "cloud"),
        }
    }
}

/// Connection settings for one panel server.
///
/// Immutable once an adapter is built from it.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Panel hostname or IP, without scheme.
    pub host: String,
    /// Panel port; [`DEFAULT_PANEL_PORT`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Admin (or reseller) username.
    pub username: String,
    /// Admin password or API access token.
    pub password: String,
    /// API generation to target.
    #[serde(default)]
    pub api_generation: ApiGeneration,
}

impl std::fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("api_generation", &self.api_generation)
            .finish()
    }
}

impl PanelConfig {
    /// Creates a config for the current API generation on the default port.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: None,
            username: username.into(),
            password: password.into(),
            api_generation: ApiGeneration::default(),
        }
    }

    /// Effective port.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PANEL_PORT)
    }

    /// `https://{host}:{port}`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("https://{}:{}", self.host.trim_end_matches('/'), self.port())
    }

    /// Construct a config from a flat key-value map (e.g. a billing-side form).
    ///
    /// `host`, `username` and `password` are required. `port` and
    /// `apiGeneration` are optional; a blank value counts as unset.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or
    /// empty, or an optional field has an invalid format.
    pub fn from_map(
        provider: &ProviderType,
        map: &HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        let host = get_required_field(provider, map, "host", "Host")?;
        let username = get_required_field(provider, map, "username", "Username")?;
        let password = get_required_field(provider, map, "password", "Password")?;

        let port = match map.get("port").map(|v| v.trim()) {
            None | Some("") => None,
            Some(v) => Some(v.parse::<u16>().ok().filter(|p| *p != 0).ok_or_else(|| {
                CredentialValidationError::InvalidFormat {
                    provider: provider.clone(),
                    field: "port".to_string(),
                    label: "Port".to_string(),
                    reason: format!("'{v}' is not a valid port number"),
                }
            })?),
        };

        let api_generation = match map.get("apiGeneration").map(|v| v.trim()) {
            None | Some("") => ApiGeneration::default(),
            Some(v) => ApiGeneration::parse(v).ok_or_else(|| {
                CredentialValidationError::InvalidFormat {
                    provider: provider.clone(),
                    field: "apiGeneration".to_string(),
                    label: "API Generation".to_string(),
                    reason: format!("expected 'cloud' or 'legacy', got '{v}'"),
                }
            })?,
        };

        Ok(Self {
            host: host.trim().to_string(),
            port,
            username: username.trim().to_string(),
            password,
            api_generation,
        })
    }

    /// Convert the config to a `HashMap` for flat key-value storage.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = [
            ("host".to_string(), self.host.clone()),
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
            (
                "apiGeneration".to_string(),
                self.api_generation.to_string(),
            ),
        ]
        .into();
        if let Some(port) = self.port {
            map.insert("port".to_string(), port.to_string());
        }
        map
    }
}

/// Obtain required fields from `HashMap` and verify that it is not empty
fn get_required_field(
    provider: &ProviderType,
    map: &HashMap<String, String>,
    key: &str,
    label: &str,
) -> Result<String, CredentialValidationError> {
    match map.get(key) {
        None => Err(CredentialValidationError::MissingField {
            provider: provider.clone(),
            field: key.to_string(),
            label: label.to_string(),
        }),
        Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
            provider: provider.clone(),
            field: key.to_string(),
            label: label.to_string(),
        }),
        Some(v) => Ok(v.clone()),
    }
}

// ============ Provider Metadata Types ============

/// The input type of a configuration field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
    /// Numeric input.
    Number,
    /// One of a fixed set of options.
    Select,
}

/// Definition of a single configuration field required by a provider.
///
/// Used to dynamically build the provider-configuration form on the billing side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable field key (e.g., `"host"`).
    pub key: String,
    /// Human-readable label (e.g., `"Host"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the form must reject an empty value.
    pub required: bool,
    /// Optional placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Allowed values for [`FieldType::Select`] fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Static metadata describing a panel provider.
///
/// Obtain via [`AccountProvider::metadata()`](crate::AccountProvider::metadata) or
/// [`get_all_provider_metadata()`](crate::get_all_provider_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Configuration fields required to connect to this provider.
    pub required_fields: Vec<ProviderCredentialField>,
    /// Port used when the configuration leaves it blank.
    pub default_port: u16,
}

// ============ Credential Validation ============

/// Validation error for a provider configuration.
///
/// Returned when fields are missing, empty, or have an invalid format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field has an invalid format.
    InvalidFormat {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}
