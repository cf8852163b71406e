use std::path;

use crate::error::*;

/// Write a starter siteConfig.yml
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let file = docsite::create_new_project(&self.directory)
            .context("Could not create a new site config")?;
        log::info!("Created {}", file.display());

        Ok(())
    }
}
