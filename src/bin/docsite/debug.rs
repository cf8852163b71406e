use crate::args;
use crate::error::*;

/// Print site configuration information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the validated config
    Config {
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints header links in display order
    Links {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the users shown on the users page
    Users {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Yaml,
    Json,
    Toml,
}

impl From<OutputFormat> for docsite::Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => Self::Yaml,
            OutputFormat::Json => Self::Json,
            OutputFormat::Toml => Self::Toml,
        }
    }
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { format, config } => {
                let site = config.load_site()?;
                print!("{}", site.to_text((*format).into())?);
            }
            Self::Links { config } => {
                let site = config.load_site()?;
                for link in site.header_links() {
                    println!("{link}");
                }
            }
            Self::Users { config } => {
                let site = config.load_site()?;
                for user in site.users() {
                    if user.pinned() {
                        println!("{} (pinned)", user.caption());
                    } else {
                        println!("{}", user.caption());
                    }
                }
            }
        }

        Ok(())
    }
}
