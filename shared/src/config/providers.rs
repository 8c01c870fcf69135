//! Per-provider configuration blocks
//!
//! Each provider block is tagged with a `kind` discriminator selecting
//! the backend implementation. Credential strings default to empty
//! rather than failing deserialization; a provider constructed with
//! empty credentials fails on its first real call, not at startup.

use serde::{Deserialize, Serialize};

/// Configuration for one provider block, tagged by backend kind
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProviderConfig {
    /// OVH-style backend with per-request signatures
    Ovh(OvhConfig),
    /// Sinch-style backend with static bearer-token authentication
    Sinch(SinchConfig),
    /// Mock backend for development and tests
    Mock,
}

/// Credentials and endpoint for the signed (OVH) backend
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OvhConfig {
    /// Application key, sent as `X-Ovh-Application`
    #[serde(default)]
    pub application_key: String,

    /// Application secret, input to the request signature
    #[serde(default)]
    pub application_secret: String,

    /// Consumer key, sent as `X-Ovh-Consumer`
    #[serde(default)]
    pub consumer_key: String,

    /// Region endpoint the client talks to
    #[serde(default)]
    pub endpoint: OvhEndpoint,
}

/// Known OVH API region endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OvhEndpoint {
    /// OVH Europe
    #[default]
    OvhEu,
    /// OVH North America
    OvhCa,
    /// RunAbove
    RunaboveCa,
    /// SoYouStart Europe
    SysEu,
    /// SoYouStart North America
    SysCa,
    /// Kimsufi Europe
    KsEu,
    /// Kimsufi North America
    KsCa,
}

impl OvhEndpoint {
    /// Host name of the region's API
    pub fn host(&self) -> &'static str {
        match self {
            OvhEndpoint::OvhEu => "eu.api.ovh.com",
            OvhEndpoint::OvhCa => "ca.api.ovh.com",
            OvhEndpoint::RunaboveCa => "api.runabove.com",
            OvhEndpoint::SysEu => "eu.api.soyoustart.com",
            OvhEndpoint::SysCa => "ca.api.soyoustart.com",
            OvhEndpoint::KsEu => "eu.api.kimsufi.com",
            OvhEndpoint::KsCa => "ca.api.kimsufi.com",
        }
    }

    /// Base URL of the region's API
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host())
    }
}

/// Credentials and endpoint for the token-authenticated (Sinch) backend
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SinchConfig {
    /// API token sent as a bearer `Authorization` header
    #[serde(default)]
    pub api_token: String,

    /// Base URL of the batches API
    #[serde(default)]
    pub base_url: String,

    /// Service plan identifier, part of the batches path
    #[serde(default)]
    pub service_plan_id: String,

    /// Identifier of the sender, omitted from requests when empty
    #[serde(default)]
    pub sender_id: String,

    /// Free-form client reference forwarded with every batch
    #[serde(default)]
    pub client_reference: String,
}
