#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SitemapFeatureService: Send + Sync + 'static {
    /// Return the public pages of the website as a sitemaps.org XML document.
    fn get_sitemap(&self) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockSitemapFeatureService {
    pub fn with_get_sitemap(mut self, xml: String) -> Self {
        self.expect_get_sitemap()
            .once()
            .return_once(move || Ok(xml));
        self
    }
}
