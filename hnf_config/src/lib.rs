use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use hnf_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

mod duration;

/// Environment variable holding additional config files, separated like `PATH`.
pub const CONFIG_PATHS_ENV: &str = "HNF_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Load the default config, overridden by the files listed in `HNF_CONFIG`.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_paths(&paths)
}

/// Load the default config, overridden by `paths` in order.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(
            config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
            |builder, path| {
                let path = path.as_ref();
                let content = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read config file at {}", path.display())
                })?;
                let source = File::from_str(&content, FileFormat::Toml);
                anyhow::Ok(builder.add_source(source))
            },
        )?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
    pub sitemap: SitemapConfig,
    pub client: ClientConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub from: EmailAddressWithName,
    /// Emails are only written to the log if no SMTP server is configured.
    pub smtp_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Inbox receiving the contact form submissions
    pub email: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SitemapConfig {
    pub base_url: Url,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Base url of the backend the contact form talks to
    pub api_url: Url,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: String,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[] as &[&Path]).unwrap();

        assert_eq!(config.health.cache_ttl.as_secs(), 10);
        assert_eq!(config.email.smtp_url, None);
        assert!(config.sentry.is_none());
    }

    #[test]
    fn override_config() {
        let path = std::env::temp_dir().join(format!("hnf_config_test_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[http]\naddress = \"0.0.0.0:8080\"\n\n[sentry]\ndsn = \"https://key@sentry.example.com/1\""
        )
        .unwrap();

        let config = load_paths(&[&path]);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.http.address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.contact.email.0.email.to_string(),
            "contact@huntersandfarmers.com"
        );
        assert!(config.sentry.is_some());
    }

    #[test]
    fn missing_file() {
        let err = load_paths(&["/nonexistent/hnf.toml"]).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/hnf.toml"));
    }
}
