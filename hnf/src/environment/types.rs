use hnf_core_contact_impl::ContactFeatureServiceImpl;
use hnf_core_health_impl::HealthFeatureServiceImpl;
use hnf_core_sitemap_impl::SitemapFeatureServiceImpl;
use hnf_email_impl::EmailServiceImpl;
use hnf_extern_impl::contact::ContactApiServiceImpl;
use hnf_shared_impl::time::TimeServiceImpl;
use hnf_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = hnf_api_rest::RestServer<HealthFeature, ContactFeature, SitemapFeature>;

// Email
pub type Email = EmailServiceImpl;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;
pub type ContactFeature = ContactFeatureServiceImpl<Email>;
pub type SitemapFeature = SitemapFeatureServiceImpl<Time, Template>;
