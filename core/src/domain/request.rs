//! Inbound request shape
//!
//! Requests arrive as JSON payloads from the message bus and are
//! immutable once received. The `parameters` map is opaque to the
//! dispatch layer; providers interpret it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Action requested by a bus caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SmsAction {
    /// Send a text message to a list of receivers
    SendSms,
    /// Retrieve account/quota information
    GetInfo,
    /// Liveness probe, answered without touching any provider
    Ping,
    /// Anything else; replied to with `invalid.action`
    Unknown(String),
}

impl SmsAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &str {
        match self {
            SmsAction::SendSms => "send-sms",
            SmsAction::GetInfo => "get-info",
            SmsAction::Ping => "ping",
            SmsAction::Unknown(other) => other,
        }
    }
}

impl From<String> for SmsAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "send-sms" => SmsAction::SendSms,
            "get-info" => SmsAction::GetInfo,
            "ping" => SmsAction::Ping,
            _ => SmsAction::Unknown(value),
        }
    }
}

impl From<SmsAction> for String {
    fn from(action: SmsAction) -> Self {
        action.as_str().to_string()
    }
}

impl Default for SmsAction {
    fn default() -> Self {
        SmsAction::Unknown(String::new())
    }
}

/// One request received over the message bus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmsRequest {
    /// Requested action
    #[serde(default)]
    pub action: SmsAction,

    /// Name of the provider block the request targets
    #[serde(default)]
    pub provider: String,

    /// Provider-interpreted parameters; for `send-sms` this carries
    /// `receivers` (list of strings) and `message`
    #[serde(default)]
    pub parameters: Map<String, Value>,
}
