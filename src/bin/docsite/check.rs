use crate::args;
use crate::error::*;

/// Validate the site configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_site()?;
        log::info!("Configuration for `{}` is valid", site.title());

        Ok(())
    }
}
