use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub credentials_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080/api".into(),
            credentials_path: "./data/credentials.json".into(),
        }
    }
}

/// Defaults, then `scoutnet.toml` in the working directory, then environment
/// variables. Both the plain and `APP__` prefixed names are honored.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("scoutnet.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
            if let Some(v) = file_cfg.get("credentials_path") {
                settings.credentials_path = v.into();
            }
        }
    }

    if let Ok(v) = std::env::var("SCOUTNET_API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }

    if let Ok(v) = std::env::var("SCOUTNET_CREDENTIALS_PATH") {
        settings.credentials_path = v.into();
    }
    if let Ok(v) = std::env::var("APP__CREDENTIALS_PATH") {
        settings.credentials_path = v.into();
    }

    settings
}

/// Rejects unusable API URLs early and strips any trailing slash so path
/// joining stays uniform.
pub fn prepare_api_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Settings::default().api_url);
    }
    let parsed = url::Url::parse(raw).with_context(|| format!("invalid API url '{raw}'"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("API url '{raw}' must use http or https");
    }
    Ok(raw.trim_end_matches('/').to_string())
}

pub fn ensure_credentials_dir(path: &PathBuf) -> anyhow::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for credentials file",
            parent.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_api_url() {
        assert_eq!(
            prepare_api_url("http://localhost:8080/api/").expect("url"),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn empty_api_url_falls_back_to_default() {
        assert_eq!(
            prepare_api_url("   ").expect("url"),
            Settings::default().api_url
        );
    }

    #[test]
    fn rejects_non_http_api_url() {
        assert!(prepare_api_url("ftp://example.com/api").is_err());
        assert!(prepare_api_url("not a url").is_err());
    }

    #[test]
    fn ensure_credentials_dir_creates_parents() {
        let temp = std::env::temp_dir().join(format!(
            "scoutnet_cli_test_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("clock")
                .as_nanos()
        ));
        let path = temp.join("nested").join("credentials.json");
        ensure_credentials_dir(&path).expect("create parents");
        assert!(temp.join("nested").exists());
        fs::remove_dir_all(temp).expect("cleanup");
    }
}
