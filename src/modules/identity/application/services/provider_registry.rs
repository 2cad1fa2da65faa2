use std::sync::Arc;

use crate::modules::identity::application::ports::outgoing::{IdentityProvider, ProviderError};
use crate::modules::onboarding::application::domain::{CountryRoutes, VerificationMethod};

/// Resolves the identity provider for a country or a stored session method.
#[derive(Clone, Default)]
pub struct IdentityProviderRegistry {
    routes: CountryRoutes,
    providers: Vec<Arc<dyn IdentityProvider>>,
}

impl IdentityProviderRegistry {
    pub fn new(routes: CountryRoutes) -> Self {
        Self {
            routes,
            providers: Vec::new(),
        }
    }

    pub fn register(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.providers.retain(|p| p.method() != provider.method());
        self.providers.push(provider);
        self
    }

    pub fn for_method(
        &self,
        method: VerificationMethod,
    ) -> Result<Arc<dyn IdentityProvider>, ProviderError> {
        self.providers
            .iter()
            .find(|p| p.method() == method)
            .cloned()
            .ok_or_else(|| {
                ProviderError::NotConfigured(format!("{} verification is not available", method))
            })
    }

    pub fn for_country(&self, country: &str) -> Result<Arc<dyn IdentityProvider>, ProviderError> {
        self.for_method(self.routes.method_for(country))
    }
}
