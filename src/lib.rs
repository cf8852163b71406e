//! Validated site configuration for documentation sites.
//!
//! [`SiteConfig`] is built once, from the built-in declaration or a `siteConfig.yml`, and then
//! handed to whatever renders the site. It cannot be changed after construction.

mod copyright;
mod header_link;
mod new;
mod site;
mod user;
mod validate;

pub mod error;

pub use crate::copyright::{copyright_notice, current_year};
pub use crate::header_link::{HeaderLink, LinkTarget};
pub use crate::new::{create_new_project, create_new_project_for_path};
pub use crate::site::{Palette, SiteConfig};
pub use crate::user::User;
pub use docsite_config::{CONFIG_FILENAME, Config, ConfigurationError, Format};
