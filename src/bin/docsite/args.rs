use std::env;
use std::path;

use crate::error::*;

/// Validate and inspect a documentation site's configuration
#[derive(Debug, clap::Parser)]
#[command(name = "docsite", about, version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum Command {
    Init(crate::init::InitArgs),
    Check(crate::check::CheckArgs),
    #[command(subcommand)]
    Debug(crate::debug::DebugCommands),
}

impl Command {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: siteConfig.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,

    /// Serve the site under this path instead of the configured `baseUrl`
    #[arg(long, value_name = "PATH")]
    base_url: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<docsite::Config> {
        let mut config = if let Some(config_path) = self.config.as_deref() {
            docsite::Config::from_file(config_path)
                .with_context(|| format!("Error reading config file {}", config_path.display()))?
        } else {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            docsite::Config::from_cwd(cwd)?
        };

        if let Some(base_url) = &self.base_url {
            log::debug!("Overriding baseUrl with `{base_url}`");
            config.base_url = Some(base_url.clone());
        }

        Ok(config)
    }

    pub(crate) fn load_site(&self) -> Result<docsite::SiteConfig> {
        let config = self.load_config()?;
        let site = docsite::SiteConfig::from_config(config).context("Invalid site configuration")?;
        Ok(site)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_app() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn base_url_overrides_config_file() {
        let args = ConfigArgs {
            config: Some("crates/config/tests/fixtures/config/siteConfig.yml".into()),
            base_url: Some("/preview/".to_owned()),
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.base_url.as_deref(), Some("/preview/"));

        let site = args.load_site().unwrap();
        assert_eq!(site.base_url(), "/preview/");
    }

    #[test]
    fn cwd_discovery_loads_a_site() {
        let args = ConfigArgs {
            config: None,
            base_url: None,
        };
        let site = args.load_site().unwrap();
        assert!(!site.title().is_empty());
    }
}
