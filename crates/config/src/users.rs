/// A project or organization shown on the users page.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl UserRecord {
    pub fn new(
        caption: impl Into<String>,
        image: impl Into<String>,
        info_link: impl Into<String>,
        pinned: bool,
    ) -> Self {
        Self {
            caption: Some(caption.into()),
            image: Some(image.into()),
            info_link: Some(info_link.into()),
            pinned: Some(pinned),
        }
    }
}
