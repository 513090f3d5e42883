use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// HTTP client timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, connect included.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How the final collection is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}' (expected json or text)", other)),
        }
    }
}

/// Global configuration loaded from `~/.config/scout/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// First page of the item listing.
    pub list_url: String,
    /// Detail URL prefix; the item id is appended.
    pub detail_url: String,
    /// Inserted between `list_url` and a continuation token.
    pub token_param: String,
    /// Maximum detail fetches in flight at once.
    pub max_parallelism: usize,
    /// Number of best-ranked records kept across the run.
    pub retain: usize,
    #[serde(default)]
    pub output: OutputFormat,
    /// Optional HTTP timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            list_url: "https://appsheettest1.azurewebsites.net/sample/list".to_string(),
            detail_url: "https://appsheettest1.azurewebsites.net/sample/detail/".to_string(),
            token_param: "?token=".to_string(),
            max_parallelism: 20,
            retain: 5,
            output: OutputFormat::Json,
            http: None,
        }
    }
}

impl ScoutConfig {
    /// HTTP timeouts, falling back to defaults when the section is absent.
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }

    /// Reject values the scheduler or walker cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_parallelism == 0 {
            anyhow::bail!("max_parallelism must be at least 1");
        }
        url::Url::parse(&self.list_url)
            .with_context(|| format!("invalid list_url: {}", self.list_url))?;
        url::Url::parse(&self.detail_url)
            .with_context(|| format!("invalid detail_url: {}", self.detail_url))?;
        Ok(())
    }
}

/// URL of the listing page that follows the one carrying `token`.
pub fn continuation_url(list_url: &str, token_param: &str, token: &str) -> String {
    format!("{}{}{}", list_url, token_param, token)
}

/// URL of the detail record for `item_id` under `detail_prefix`.
pub fn detail_url(detail_prefix: &str, item_id: i64) -> String {
    format!("{}{}", detail_prefix, item_id)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scout")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScoutConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScoutConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<ScoutConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ScoutConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = ScoutConfig::default();
        assert_eq!(cfg.max_parallelism, 20);
        assert_eq!(cfg.retain, 5);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(cfg.http.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ScoutConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ScoutConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.list_url, cfg.list_url);
        assert_eq!(parsed.detail_url, cfg.detail_url);
        assert_eq!(parsed.max_parallelism, cfg.max_parallelism);
        assert_eq!(parsed.retain, cfg.retain);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            list_url = "http://127.0.0.1:8080/list"
            detail_url = "http://127.0.0.1:8080/detail/"
            token_param = "/"
            max_parallelism = 4
            retain = 3
            output = "text"

            [http]
            connect_timeout_secs = 2
            timeout_secs = 5
        "#;
        let cfg: ScoutConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_parallelism, 4);
        assert_eq!(cfg.retain, 3);
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.http().timeout(), Duration::from_secs(5));
        assert_eq!(
            continuation_url(&cfg.list_url, &cfg.token_param, "abc"),
            "http://127.0.0.1:8080/list/abc"
        );
        assert_eq!(detail_url(&cfg.detail_url, 7), "http://127.0.0.1:8080/detail/7");
    }

    #[test]
    fn default_urls_follow_listing_api() {
        let cfg = ScoutConfig::default();
        assert_eq!(
            continuation_url(&cfg.list_url, &cfg.token_param, "xyz"),
            "https://appsheettest1.azurewebsites.net/sample/list?token=xyz"
        );
        assert_eq!(
            detail_url(&cfg.detail_url, 12),
            "https://appsheettest1.azurewebsites.net/sample/detail/12"
        );
    }

    #[test]
    fn validate_rejects_zero_parallelism_and_bad_urls() {
        let mut cfg = ScoutConfig::default();
        cfg.max_parallelism = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = ScoutConfig::default();
        cfg.list_url = "not a url".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = toml::to_string_pretty(&ScoutConfig {
            max_parallelism: 7,
            ..ScoutConfig::default()
        })
        .unwrap();
        file.write_all(body.as_bytes()).unwrap();
        let cfg = load_from_path(file.path()).unwrap();
        assert_eq!(cfg.max_parallelism, 7);
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"max_parallelism = \"many\"").unwrap();
        let err = load_from_path(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}
