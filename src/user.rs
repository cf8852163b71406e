use docsite_config::ConfigurationError;
use docsite_config::UserRecord;

use crate::validate;

/// An adopter shown on the users page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(into = "UserRecord")]
pub struct User {
    caption: String,
    image: String,
    info_link: String,
    pinned: bool,
}

impl User {
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn info_link(&self) -> &str {
        &self.info_link
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub(crate) fn from_record(raw: UserRecord, field: &str) -> Result<Self, ConfigurationError> {
        let UserRecord {
            caption,
            image,
            info_link,
            pinned,
        } = raw;
        Ok(Self {
            caption: validate::required(caption, &format!("{field}.caption"))?,
            image: validate::required(image, &format!("{field}.image"))?,
            info_link: validate::required(info_link, &format!("{field}.infoLink"))?,
            pinned: pinned.unwrap_or(false),
        })
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        let User {
            caption,
            image,
            info_link,
            pinned,
        } = user;
        UserRecord::new(caption, image, info_link, pinned)
    }
}
