//! Provider registry
//!
//! Maps provider names to live backend instances. The registry is
//! populated explicitly at startup from the configuration's provider
//! blocks and is read-only afterwards; there is no runtime discovery.

use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::SmsProvider;

/// Name-to-provider resolution table
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SmsProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under a name, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn SmsProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Resolve a provider by the name a request carries
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn SmsProvider>> {
        self.providers.get(name).cloned()
    }

    /// Names of all registered providers
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SmsSendingReport;
    use crate::errors::ProviderError;
    use async_trait::async_trait;
    use serde_json::{Map, Value};

    struct DummyProvider;

    #[async_trait]
    impl SmsProvider for DummyProvider {
        async fn send_sms(
            &self,
            _parameters: Map<String, Value>,
        ) -> Result<SmsSendingReport, ProviderError> {
            Ok(SmsSendingReport::default())
        }

        async fn get_info(&self, _parameters: Map<String, Value>) -> Result<Value, ProviderError> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn test_resolve_registered_provider() {
        let mut registry = ProviderRegistry::new();
        registry.register("OVH", Arc::new(DummyProvider));
        assert!(registry.resolve("OVH").is_some());
        assert!(registry.resolve("Sinch").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registration_replaces_previous_entry() {
        let mut registry = ProviderRegistry::new();
        registry.register("OVH", Arc::new(DummyProvider));
        registry.register("OVH", Arc::new(DummyProvider));
        assert_eq!(registry.len(), 1);
    }
}
