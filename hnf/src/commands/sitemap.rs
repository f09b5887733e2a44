use hnf_config::Config;
use hnf_core_sitemap_contracts::SitemapFeatureService;
use hnf_di::Provide;

use crate::environment::{types::SitemapFeature, ConfigProvider};

/// Print the sitemap of the website to stdout.
pub fn sitemap(config: Config) -> anyhow::Result<()> {
    let mut provider = ConfigProvider::new(&config)?;
    let sitemap: SitemapFeature = provider.provide();
    print!("{}", sitemap.get_sitemap()?);
    Ok(())
}
