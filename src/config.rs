use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::Error;
use crate::item::Item;
use crate::source::{DataSource, HttpSource};

/// Name under which the selected id is exposed when none is configured
pub const DEFAULT_INPUT_NAME: &str = "selectedItem";

const DEFAULT_PLACEHOLDER: &str = "Search Product";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Base for relative field urls (e.g. "http://localhost:3000")
    pub base_url: Option<String>,
    /// One `[[form.field]]` table per search field
    #[serde(rename = "field")]
    pub fields: Vec<FieldOptions>,
}

/// Construction options for one search field
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Static candidates, used only when `url` is unset
    pub items: Vec<Item>,
    /// Remote endpoint; when set, every query goes here instead
    pub url: Option<String>,
    /// Form name for the selected id
    #[serde(alias = "inputName")]
    pub input_name: String,
    pub placeholder: String,
    /// Request timeout for the remote endpoint. None = wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            form: FormConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 360.0,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            fields: vec![FieldOptions::default()],
        }
    }
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            url: None,
            input_name: DEFAULT_INPUT_NAME.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            timeout_secs: None,
        }
    }
}

impl FieldOptions {
    pub fn local(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = name.into();
        self
    }

    /// Pick the one active data source. A configured url always wins.
    pub fn data_source(&self, base_url: Option<&Url>) -> Result<DataSource, Error> {
        let Some(raw) = &self.url else {
            return Ok(DataSource::Local(self.items.clone()));
        };

        if !self.items.is_empty() {
            tracing::warn!(
                "Field '{}' has both url and {} static items; using {}",
                self.input_name,
                self.items.len(),
                raw
            );
        }

        let endpoint = resolve_url(raw, base_url)?;
        let timeout = self.timeout_secs.map(Duration::from_secs);
        let source = HttpSource::new(endpoint, timeout)?;
        Ok(DataSource::Remote(Arc::new(source)))
    }
}

/// Parse `raw`, joining it onto `base` when it is relative.
pub fn resolve_url(raw: &str, base: Option<&Url>) -> Result<Url, Error> {
    let invalid = |source| Error::InvalidUrl {
        url: raw.to_string(),
        source,
    };
    match (Url::parse(raw), base) {
        (Ok(url), _) => Ok(url),
        (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => {
            base.join(raw).map_err(invalid)
        }
        (Err(e), _) => Err(invalid(e)),
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine home directory, using defaults");
        return Config::default();
    };
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ on every platform, same as the XDG layout
    dirs::home_dir().map(|home| home.join(".config").join("pickfield").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_name_field_selected_item() {
        let options = FieldOptions::default();
        assert_eq!(options.input_name, "selectedItem");
        assert!(options.items.is_empty());
        assert!(options.url.is_none());
        assert_eq!(Config::default().form.fields.len(), 1);
    }

    #[test]
    fn parses_fields_from_toml() {
        let config = parse(
            r#"
            [window]
            width = 640.0

            [form]
            base_url = "http://localhost:3000"

            [[form.field]]
            inputName = "fruit"
            items = [{ id = 1, name = "Apple" }, { id = 2, name = "Banana" }]

            [[form.field]]
            input_name = "product"
            url = "/api/items"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.window.height, 360.0);
        assert_eq!(config.form.fields.len(), 2);
        assert_eq!(config.form.fields[0].input_name, "fruit");
        assert_eq!(config.form.fields[0].items[1], Item::new("2", "Banana"));
        assert_eq!(config.form.fields[1].url.as_deref(), Some("/api/items"));
        assert_eq!(config.form.fields[1].placeholder, "Search Product");
    }

    #[test]
    fn no_url_means_local_source() {
        let options = FieldOptions::local(vec![Item::new("1", "Apple")]);
        assert!(!options.data_source(None).unwrap().is_remote());
    }

    #[test]
    fn url_wins_over_items() {
        let mut options = FieldOptions::remote("http://localhost/api/items");
        options.items = vec![Item::new("1", "Apple")];
        assert!(options.data_source(None).unwrap().is_remote());
    }

    #[test]
    fn relative_url_needs_a_base() {
        let options = FieldOptions::remote("/api/items");
        assert!(matches!(
            options.data_source(None),
            Err(Error::InvalidUrl { .. })
        ));

        let base = Url::parse("http://localhost:3000/shop/").unwrap();
        let url = resolve_url("/api/items", Some(&base)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/items");
    }
}
