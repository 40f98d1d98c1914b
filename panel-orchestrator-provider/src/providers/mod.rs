//! Panel provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "cyberpanel")]
mod cyberpanel;

#[cfg(feature = "cyberpanel")]
pub use cyberpanel::CyberPanelProvider;
