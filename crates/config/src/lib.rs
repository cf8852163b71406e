mod config;
mod error;
mod links;
mod theme;
mod users;

pub use self::config::*;
pub use self::error::*;
pub use self::links::*;
pub use self::theme::*;
pub use self::users::*;

pub type Result<T, E = ConfigurationError> = std::result::Result<T, E>;
