use chrono::SecondsFormat;
use hnf_models::sitemap::{ChangeFrequency, Sitemap};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// A document rendered from its serialized fields.
///
/// Templates whose name ends in `.xml` or `.html` are autoescaped.
pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    SitemapTemplate("sitemap.xml"),
}

/// Context of the sitemaps.org `urlset` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapTemplate {
    pub entries: Vec<SitemapTemplateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapTemplateEntry {
    pub loc: String,
    /// W3C datetime in UTC, e.g. `2024-05-01T12:00:00Z`
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    /// One decimal place, e.g. `0.7`
    pub priority: String,
}

impl From<&Sitemap> for SitemapTemplate {
    fn from(sitemap: &Sitemap) -> Self {
        Self {
            entries: sitemap
                .entries
                .iter()
                .map(|entry| SitemapTemplateEntry {
                    loc: entry.url.to_string(),
                    lastmod: entry
                        .last_modified
                        .to_rfc3339_opts(SecondsFormat::Secs, true),
                    changefreq: entry.change_frequency,
                    priority: entry.priority.to_string(),
                })
                .collect(),
        }
    }
}
