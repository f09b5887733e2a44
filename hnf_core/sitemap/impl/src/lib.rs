use std::sync::Arc;

use anyhow::Context;
use hnf_core_sitemap_contracts::SitemapFeatureService;
use hnf_di::Build;
use hnf_models::sitemap::{ChangeFrequency, Sitemap, SitemapEntry, SitemapPriority};
use hnf_shared_contracts::time::TimeService;
use hnf_templates_contracts::{SitemapTemplate, TemplateService};
use url::Url;

/// Public pages of the website as `(path, change frequency, priority in tenths)`.
const PAGES: &[(&str, ChangeFrequency, u8)] = &[
    ("", ChangeFrequency::Monthly, 10),
    ("employers", ChangeFrequency::Weekly, 9),
    ("employers/australia", ChangeFrequency::Weekly, 8),
    ("employers/australia/sydney", ChangeFrequency::Weekly, 7),
    ("employers/australia/melbourne", ChangeFrequency::Weekly, 7),
    ("employers/australia/brisbane", ChangeFrequency::Weekly, 7),
    ("employers/australia/perth", ChangeFrequency::Weekly, 7),
    ("employers/australia/adelaide", ChangeFrequency::Weekly, 7),
    ("employers/australia/sales-manager-recruitment", ChangeFrequency::Weekly, 7),
    ("employers/australia/account-executive-recruitment", ChangeFrequency::Weekly, 7),
    ("employers/australia/bdr-recruitment", ChangeFrequency::Weekly, 7),
    ("employers/australia/revops-recruitment", ChangeFrequency::Weekly, 7),
    ("employers/australia/customer-success-manager-recruitment", ChangeFrequency::Weekly, 7),
    ("about", ChangeFrequency::Monthly, 8),
    ("services", ChangeFrequency::Monthly, 8),
    ("vacancies", ChangeFrequency::Weekly, 7),
    ("contact", ChangeFrequency::Monthly, 7),
];

#[derive(Debug, Clone, Build)]
pub struct SitemapFeatureServiceImpl<Time, Template> {
    time: Time,
    template: Template,
    config: SitemapFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct SitemapFeatureConfig {
    pages: Arc<[SitemapPage]>,
}

#[derive(Debug)]
struct SitemapPage {
    url: Url,
    change_frequency: ChangeFrequency,
    priority: SitemapPriority,
}

impl SitemapFeatureConfig {
    /// Resolve all pages of the website against `base_url`.
    pub fn new(mut base_url: Url) -> anyhow::Result<Self> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let pages = PAGES
            .iter()
            .map(|&(path, change_frequency, priority)| {
                anyhow::Ok(SitemapPage {
                    url: base_url
                        .join(path)
                        .with_context(|| format!("Failed to resolve sitemap page {path:?}"))?,
                    change_frequency,
                    priority: SitemapPriority::from_tenths(priority)
                        .with_context(|| format!("Invalid priority for sitemap page {path:?}"))?,
                })
            })
            .collect::<anyhow::Result<_>>()?;

        Ok(Self { pages })
    }
}

impl<Time, Template> SitemapFeatureServiceImpl<Time, Template>
where
    Time: TimeService,
{
    fn build_sitemap(&self) -> Sitemap {
        let now = self.time.now();

        let entries = self
            .config
            .pages
            .iter()
            .map(|page| SitemapEntry {
                url: page.url.clone(),
                last_modified: now,
                change_frequency: page.change_frequency,
                priority: page.priority,
            })
            .collect();

        Sitemap { entries }
    }
}

impl<Time, Template> SitemapFeatureService for SitemapFeatureServiceImpl<Time, Template>
where
    Time: TimeService,
    Template: TemplateService,
{
    fn get_sitemap(&self) -> anyhow::Result<String> {
        let sitemap = self.build_sitemap();
        self.template
            .render(&SitemapTemplate::from(&sitemap))
            .context("Failed to render sitemap")
    }
}
