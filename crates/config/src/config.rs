use std::collections::BTreeMap;
use std::fmt;
use std::path;

use super::*;

/// Name of the file searched for by [`Config::from_cwd`].
pub const CONFIG_FILENAME: &str = "siteConfig.yml";

/// On-disk formats a site declaration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &path::Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "yml" | "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigurationError::UnsupportedFormat {
                extension: extension.to_owned(),
            }),
        }
    }
}

/// The site declaration before validation.
///
/// Every field is optional here; `docsite::SiteConfig` turns this into the validated form.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    pub header_links: Vec<LinkDescriptor>,
    pub users: Vec<UserRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub colors: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<String>,
    pub highlight: Highlight,
    pub scripts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Keys without a dedicated field, passed through for templates.
    #[serde(flatten)]
    pub custom: BTreeMap<String, serde_yaml::Value>,
}

impl Config {
    /// The declaration this project ships with.
    pub fn builtin() -> Config {
        Config {
            title: Some("Aktoro Lang".to_owned()),
            tagline: Some("An Expressive Language for the Golang Ecosystem".to_owned()),
            url: Some("https://aktoro-lang.github.io".to_owned()),
            base_url: Some("/test-site/".to_owned()),
            project_name: Some("aktoro-lang".to_owned()),
            header_links: vec![
                LinkDescriptor::doc("quickstart", "Getting Started"),
                LinkDescriptor::doc("overview", "Docs"),
                LinkDescriptor::page("help", "Help"),
                LinkDescriptor::blog("Blog"),
            ],
            users: vec![UserRecord::new(
                "User1",
                "/test-site/img/docusaurus.svg",
                "https://www.facebook.com",
                true,
            )],
            header_icon: Some("img/logo-plain.svg".to_owned()),
            footer_icon: Some("img/logo.png".to_owned()),
            favicon: Some("img/logo.png".to_owned()),
            colors: Colors::new("#0287ee", "#02eede"),
            copyright_holder: Some("Scott F. Swarthout".to_owned()),
            highlight: Highlight {
                theme: Some("default".to_owned()),
            },
            scripts: vec!["https://buttons.github.io/buttons.js".to_owned()],
            repo_url: Some("https://github.com/facebook/test-site".to_owned()),
            ..Default::default()
        }
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let format = Format::from_path(&path)?;
        let content =
            std::fs::read_to_string(&path).map_err(|source| ConfigurationError::Read {
                path: path.clone(),
                source,
            })?;

        let mut config = parse_internal(&content, format).map_err(|source| {
            ConfigurationError::Parse {
                origin: path.display().to_string(),
                source,
            }
        })?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    /// Parse a declaration held in memory.
    pub fn parse(content: &str, format: Format) -> Result<Config> {
        parse_internal(content, format).map_err(|source| ConfigurationError::Parse {
            origin: "<inline>".to_owned(),
            source,
        })
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILENAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {CONFIG_FILENAME} file found in current directory, using built-in config."
                );
                let config = Config {
                    root: cwd,
                    ..Config::builtin()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    pub fn to_text(&self, format: Format) -> Result<String> {
        let text: std::result::Result<String, BoxedError> = match format {
            Format::Yaml => serde_yaml::to_string(self).map_err(|e| e.into()),
            Format::Json => serde_json::to_string_pretty(self)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| e.into()),
            Format::Toml => toml::to_string(self).map_err(|e| e.into()),
        };
        text.map_err(|source| ConfigurationError::Serialize { source })
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = self.to_text(Format::Yaml).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

fn parse_internal(content: &str, format: Format) -> std::result::Result<Config, BoxedError> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
    };
    Ok(config)
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
