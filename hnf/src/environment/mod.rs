use hnf_api_rest::RestServerConfig;
use hnf_config::Config;
use hnf_core_contact_impl::ContactFeatureConfig;
use hnf_core_health_impl::HealthFeatureConfig;
use hnf_core_sitemap_impl::SitemapFeatureConfig;
use hnf_di::provider;
use hnf_extern_impl::contact::ContactApiServiceConfig;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Extern
            ContactApiServiceConfig,

            // Core
            ContactFeatureConfig,
            HealthFeatureConfig,
            SitemapFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        contact_api_service_config: ContactApiServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        health_feature_config: HealthFeatureConfig,
        sitemap_feature_config: SitemapFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
        };

        // Extern
        let contact_api_service_config =
            ContactApiServiceConfig::new(config.client.api_url.clone())?;

        // Core
        let contact_feature_config = ContactFeatureConfig {
            email: config.contact.email.clone().into(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        let sitemap_feature_config = SitemapFeatureConfig::new(config.sitemap.base_url.clone())?;

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Extern
            contact_api_service_config,

            // Core
            contact_feature_config,
            health_feature_config,
            sitemap_feature_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use hnf_di::Provide;
    use types::{ContactApi, RestServer, SitemapFeature};

    use super::*;

    #[test]
    fn provide_rest_server() {
        let config = hnf_config::load_paths(&[] as &[&str]).unwrap();
        let config_provider = ConfigProvider::new(&config).unwrap();
        let email = Email::log(config.email.from.clone());

        let mut provider = Provider::new(config_provider, email);
        let _: RestServer = provider.provide();
    }

    #[test]
    fn provide_config_only_services() {
        let config = hnf_config::load_paths(&[] as &[&str]).unwrap();
        let mut provider = ConfigProvider::new(&config).unwrap();

        let _: SitemapFeature = provider.provide();
        let _: ContactApi = provider.provide();
    }
}
