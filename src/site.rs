use std::collections::BTreeMap;
use std::fmt;
use std::path;

use docsite_config::{Colors, Config, ConfigurationError, Format, Highlight};

use crate::copyright::{copyright_notice, current_year};
use crate::header_link::HeaderLink;
use crate::user::User;
use crate::validate;

type Result<T, E = ConfigurationError> = std::result::Result<T, E>;

const DEFAULT_HIGHLIGHT_THEME: &str = "default";

/// Theme palette after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    primary: String,
    secondary: String,
    extra: BTreeMap<String, String>,
}

impl Palette {
    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Look up a color by its key, including `primaryColor` and `secondaryColor`.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "primaryColor" => Some(self.primary()),
            "secondaryColor" => Some(self.secondary()),
            _ => self.extra.get(name).map(String::as_str),
        }
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    fn from_colors(colors: Colors) -> Result<Self> {
        let Colors {
            primary_color,
            secondary_color,
            extra,
        } = colors;
        let primary = validate::color(
            validate::required(primary_color, "colors.primaryColor")?,
            "colors.primaryColor",
        )?;
        let secondary = validate::color(
            validate::required(secondary_color, "colors.secondaryColor")?,
            "colors.secondaryColor",
        )?;
        let extra = extra
            .into_iter()
            .map(|(name, value)| {
                let value = validate::color(value, &format!("colors.{name}"))?;
                Ok::<_, ConfigurationError>((name, value))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self {
            primary,
            secondary,
            extra,
        })
    }
}

/// The validated, read-only site configuration handed to the generator.
///
/// Built once at start-up and never mutated; share it by reference or through an `Arc`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(into = "Config")]
pub struct SiteConfig {
    title: String,
    tagline: Option<String>,
    url: String,
    base_url: String,
    project_name: String,
    organization_name: Option<String>,
    header_links: Vec<HeaderLink>,
    users: Vec<User>,
    header_icon: Option<String>,
    footer_icon: Option<String>,
    favicon: Option<String>,
    colors: Palette,
    copyright: String,
    highlight_theme: String,
    scripts: Vec<String>,
    repo_url: Option<String>,
    custom: BTreeMap<String, serde_yaml::Value>,
}

impl SiteConfig {
    /// Build the configuration this project ships with.
    pub fn load() -> Result<Self> {
        Self::from_config(Config::builtin())
    }

    pub fn load_from_file<P: AsRef<path::Path>>(path: P) -> Result<Self> {
        let config = Config::from_file(path.as_ref())?;
        Self::from_config(config)
    }

    pub fn load_from_cwd<P: AsRef<path::Path>>(cwd: P) -> Result<Self> {
        let config = Config::from_cwd(cwd.as_ref())?;
        Self::from_config(config)
    }

    /// Validate `config`, stamping the copyright with the current year.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::from_config_at(config, current_year())
    }

    /// Validate `config`, stamping the copyright with `year`.
    ///
    /// Fields are checked in declaration order and the first failure is returned.
    pub fn from_config_at(config: Config, year: i32) -> Result<Self> {
        let Config {
            root: _,
            title,
            tagline,
            url,
            base_url,
            project_name,
            organization_name,
            header_links,
            users,
            header_icon,
            footer_icon,
            favicon,
            colors,
            copyright,
            copyright_holder,
            highlight,
            scripts,
            repo_url,
            custom,
        } = config;

        let title = validate::required(title, "title")?;
        let tagline = validate::optional(tagline, "tagline")?;
        let url = validate::absolute_url(validate::required(url, "url")?, "url")?;
        let base_url = validate::base_url(validate::required(base_url, "baseUrl")?, "baseUrl")?;
        let project_name = validate::required(project_name, "projectName")?;
        let organization_name = validate::optional(organization_name, "organizationName")?;

        let header_links = header_links
            .into_iter()
            .enumerate()
            .map(|(i, link)| HeaderLink::from_descriptor(link, &format!("headerLinks[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        let users = users
            .into_iter()
            .enumerate()
            .map(|(i, user)| User::from_record(user, &format!("users[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        let header_icon = validate::optional(header_icon, "headerIcon")?;
        let footer_icon = validate::optional(footer_icon, "footerIcon")?;
        let favicon = validate::optional(favicon, "favicon")?;
        let colors = Palette::from_colors(colors)?;

        let copyright = match copyright {
            Some(copyright) => validate::non_empty(copyright, "copyright")?,
            None => {
                let holder = validate::optional(copyright_holder, "copyrightHolder")?;
                copyright_notice(year, holder.as_deref().unwrap_or(&title))
            }
        };

        let Highlight { theme } = highlight;
        let highlight_theme = validate::optional(theme, "highlight.theme")?
            .unwrap_or_else(|| DEFAULT_HIGHLIGHT_THEME.to_owned());

        let scripts = scripts
            .into_iter()
            .enumerate()
            .map(|(i, script)| validate::non_empty(script, &format!("scripts[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        let repo_url = validate::optional(repo_url, "repoUrl")?;

        log::debug!(
            "Loaded `{}` with {} header links and {} users",
            title,
            header_links.len(),
            users.len()
        );

        Ok(Self {
            title,
            tagline,
            url,
            base_url,
            project_name,
            organization_name,
            header_links,
            users,
            header_icon,
            footer_icon,
            favicon,
            colors,
            copyright,
            highlight_theme,
            scripts,
            repo_url,
            custom,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    /// Navigation entries in display order.
    pub fn header_links(&self) -> &[HeaderLink] {
        &self.header_links
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn pinned_users(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.pinned())
    }

    pub fn header_icon(&self) -> Option<&str> {
        self.header_icon.as_deref()
    }

    pub fn footer_icon(&self) -> Option<&str> {
        self.footer_icon.as_deref()
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    pub fn colors(&self) -> &Palette {
        &self.colors
    }

    /// Copyright line, fixed when the configuration was built.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn highlight_theme(&self) -> &str {
        &self.highlight_theme
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    /// Extra keys the declaration carries for templates.
    pub fn custom(&self) -> &BTreeMap<String, serde_yaml::Value> {
        &self.custom
    }

    pub fn to_config(&self) -> Config {
        self.clone().into()
    }

    pub fn to_text(&self, format: Format) -> Result<String> {
        self.to_config().to_text(format)
    }
}

impl From<SiteConfig> for Config {
    fn from(site: SiteConfig) -> Self {
        let SiteConfig {
            title,
            tagline,
            url,
            base_url,
            project_name,
            organization_name,
            header_links,
            users,
            header_icon,
            footer_icon,
            favicon,
            colors,
            copyright,
            highlight_theme,
            scripts,
            repo_url,
            custom,
        } = site;
        Config {
            root: Default::default(),
            title: Some(title),
            tagline,
            url: Some(url),
            base_url: Some(base_url),
            project_name: Some(project_name),
            organization_name,
            header_links: header_links.into_iter().map(Into::into).collect(),
            users: users.into_iter().map(Into::into).collect(),
            header_icon,
            footer_icon,
            favicon,
            colors: Colors {
                primary_color: Some(colors.primary),
                secondary_color: Some(colors.secondary),
                extra: colors.extra,
            },
            copyright: Some(copyright),
            copyright_holder: None,
            highlight: Highlight {
                theme: Some(highlight_theme),
            },
            scripts,
            repo_url,
            custom,
        }
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = self.to_text(Format::Yaml).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use docsite_config::{LinkDescriptor, UserRecord};

    use super::*;
    use crate::LinkTarget;

    fn minimal() -> Config {
        Config {
            title: Some("Minimal".to_owned()),
            url: Some("https://minimal.example.com".to_owned()),
            base_url: Some("/".to_owned()),
            project_name: Some("minimal".to_owned()),
            colors: Colors::new("#000", "#fff"),
            ..Default::default()
        }
    }

    #[test]
    fn load_builtin() {
        let site = SiteConfig::from_config_at(Config::builtin(), 2018).unwrap();
        assert_eq!(site.title(), "Aktoro Lang");
        assert_eq!(
            site.tagline(),
            Some("An Expressive Language for the Golang Ecosystem")
        );
        assert_eq!(site.url(), "https://aktoro-lang.github.io");
        assert_eq!(site.base_url(), "/test-site/");
        assert_eq!(site.project_name(), "aktoro-lang");
        assert_eq!(site.header_icon(), Some("img/logo-plain.svg"));
        assert_eq!(site.footer_icon(), Some("img/logo.png"));
        assert_eq!(site.favicon(), Some("img/logo.png"));
        assert_eq!(site.colors().primary(), "#0287ee");
        assert_eq!(site.colors().secondary(), "#02eede");
        assert_eq!(site.copyright(), "Copyright © 2018 Scott F. Swarthout");
        assert_eq!(site.highlight_theme(), "default");
        assert_eq!(site.scripts(), ["https://buttons.github.io/buttons.js"]);
        assert_eq!(site.repo_url(), Some("https://github.com/facebook/test-site"));
    }

    #[test]
    fn load_header_links_in_order() {
        let site = SiteConfig::load().unwrap();
        let links: Vec<_> = site
            .header_links()
            .iter()
            .map(|l| (l.target().clone(), l.label()))
            .collect();
        assert_eq!(
            links,
            vec![
                (LinkTarget::Doc("quickstart".to_owned()), "Getting Started"),
                (LinkTarget::Doc("overview".to_owned()), "Docs"),
                (LinkTarget::Page("help".to_owned()), "Help"),
                (LinkTarget::Blog, "Blog"),
            ]
        );
    }

    #[test]
    fn load_users() {
        let site = SiteConfig::load().unwrap();
        assert_eq!(site.users().len(), 1);
        let user = &site.users()[0];
        assert_eq!(user.caption(), "User1");
        assert!(user.pinned());
        assert_eq!(site.pinned_users().count(), 1);
    }

    #[test]
    fn load_copyright_uses_current_year() {
        let site = SiteConfig::load().unwrap();
        let year = current_year().to_string();
        assert!(site.copyright().contains(&year));
    }

    #[test]
    fn link_without_target_fails() {
        let mut config = Config::builtin();
        config.header_links[2] = LinkDescriptor {
            label: Some("Help".to_owned()),
            ..Default::default()
        };
        let err = SiteConfig::from_config(config).unwrap_err();
        assert!(matches!(err, ConfigurationError::Invalid { .. }));
        assert_eq!(err.field(), Some("headerLinks[2]"));
    }

    #[test]
    fn link_with_two_targets_fails() {
        let mut config = Config::builtin();
        config.header_links[0].page = Some("quickstart".to_owned());
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("headerLinks[0]"));
    }

    #[test]
    fn required_fields_missing() {
        let cases: [(&str, fn(&mut Config)); 4] = [
            ("title", |c| c.title = None),
            ("url", |c| c.url = None),
            ("baseUrl", |c| c.base_url = None),
            ("projectName", |c| c.project_name = None),
        ];
        for (field, clear) in cases {
            let mut config = Config::builtin();
            clear(&mut config);
            let err = SiteConfig::from_config(config).unwrap_err();
            assert!(
                matches!(err, ConfigurationError::Missing { .. }),
                "{field}: {err}"
            );
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn required_fields_empty() {
        let mut config = Config::builtin();
        config.project_name = Some(String::new());
        let err = SiteConfig::from_config(config).unwrap_err();
        assert!(matches!(err, ConfigurationError::Empty { .. }));
        assert_eq!(err.to_string(), "`projectName` must not be empty");
    }

    #[test]
    fn empty_document_reports_title_first() {
        let err = SiteConfig::from_config(Config::default()).unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn relative_url_fails() {
        let mut config = Config::builtin();
        config.url = Some("aktoro-lang.github.io".to_owned());
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("url"));
    }

    #[test]
    fn base_url_without_trailing_slash_fails() {
        let mut config = Config::builtin();
        config.base_url = Some("/test-site".to_owned());
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("baseUrl"));
    }

    #[test]
    fn user_without_image_fails() {
        let mut config = Config::builtin();
        config.users.push(UserRecord {
            image: None,
            ..UserRecord::new("User2", "/img/u.svg", "https://example.com", false)
        });
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("users[1].image"));
    }

    #[test]
    fn missing_primary_color_fails() {
        let mut config = Config::builtin();
        config.colors.primary_color = None;
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("colors.primaryColor"));
    }

    #[test]
    fn empty_script_fails() {
        let mut config = Config::builtin();
        config.scripts.push(" ".to_owned());
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("scripts[1]"));
    }

    #[test]
    fn empty_favicon_fails() {
        let mut config = Config::builtin();
        config.favicon = Some(String::new());
        let err = SiteConfig::from_config(config).unwrap_err();
        assert_eq!(err.field(), Some("favicon"));
    }

    #[test]
    fn minimal_defaults() {
        let site = SiteConfig::from_config_at(minimal(), 2021).unwrap();
        assert_eq!(site.tagline(), None);
        assert!(site.header_links().is_empty());
        assert!(site.users().is_empty());
        assert_eq!(site.highlight_theme(), "default");
        assert_eq!(site.copyright(), "Copyright © 2021 Minimal");
    }

    #[test]
    fn explicit_copyright_is_kept() {
        let config = Config {
            copyright: Some("© The Authors".to_owned()),
            copyright_holder: Some("Ignored".to_owned()),
            ..minimal()
        };
        let site = SiteConfig::from_config_at(config, 2021).unwrap();
        assert_eq!(site.copyright(), "© The Authors");
    }

    #[test]
    fn extra_colors() {
        let mut config = minimal();
        config
            .colors
            .extra
            .insert("headerColor".to_owned(), "#123".to_owned());
        let site = SiteConfig::from_config(config).unwrap();
        assert_eq!(site.colors().get("headerColor"), Some("#123"));
        assert_eq!(site.colors().get("primaryColor"), Some("#000"));
        assert_eq!(site.colors().get("footerColor"), None);
    }

    #[test]
    fn yaml_round_trip() {
        let site = SiteConfig::load().unwrap();
        let text = site.to_text(Format::Yaml).unwrap();
        let reparsed = SiteConfig::from_config(Config::parse(&text, Format::Yaml).unwrap());
        assert_eq!(reparsed.unwrap(), site);
    }

    #[test]
    fn json_round_trip() {
        let site = SiteConfig::load().unwrap();
        let text = site.to_text(Format::Json).unwrap();
        let reparsed = SiteConfig::from_config(Config::parse(&text, Format::Json).unwrap());
        assert_eq!(reparsed.unwrap(), site);
    }

    #[test]
    fn toml_round_trip() {
        let site = SiteConfig::load().unwrap();
        let text = site.to_text(Format::Toml).unwrap();
        let reparsed = SiteConfig::from_config(Config::parse(&text, Format::Toml).unwrap());
        assert_eq!(reparsed.unwrap(), site);

        let site =
            SiteConfig::load_from_file("crates/config/tests/fixtures/config/siteConfig.yml")
                .unwrap();
        let text = site.to_text(Format::Toml).unwrap();
        let reparsed =
            SiteConfig::from_config(Config::parse(&text, Format::Toml).unwrap()).unwrap();
        assert_eq!(reparsed.custom().get("twitterUsername"), site.custom().get("twitterUsername"));
        assert_eq!(reparsed, site);
    }

    #[test]
    fn round_trip_keeps_custom_keys() {
        let site =
            SiteConfig::load_from_file("crates/config/tests/fixtures/config/siteConfig.yml")
                .unwrap();
        assert_eq!(site.copyright(), "Copyright © 2020 Fixture Authors");
        assert!(site.custom().contains_key("twitterUsername"));

        let text = site.to_string();
        let reparsed = SiteConfig::from_config(Config::parse(&text, Format::Yaml).unwrap());
        assert_eq!(reparsed.unwrap(), site);
    }

    #[test]
    fn serializes_wire_names() {
        let text = SiteConfig::load().unwrap().to_text(Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["baseUrl"], "/test-site/");
        assert_eq!(value["headerLinks"][3]["blog"], true);
        assert_eq!(value["users"][0]["infoLink"], "https://www.facebook.com");
        assert_eq!(value["colors"]["secondaryColor"], "#02eede");
        assert_eq!(value["highlight"]["theme"], "default");
    }

    #[test]
    fn load_from_toml_file() {
        let site =
            SiteConfig::load_from_file("crates/config/tests/fixtures/config/site.toml").unwrap();
        assert_eq!(site.project_name(), "toml-site");
        assert_eq!(site.highlight_theme(), "github");
    }

    #[test]
    fn shared_between_threads() {
        let site = Arc::new(SiteConfig::load().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let site = Arc::clone(&site);
                std::thread::spawn(move || site.header_links().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    }
}
