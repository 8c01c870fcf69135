//! Domain types for the gateway
//!
//! - `request` - The inbound bus request and its action discriminator
//! - `report` - The generic sending report shared by all backends

mod report;
mod request;

pub use report::SmsSendingReport;
pub use request::{SmsAction, SmsRequest};
