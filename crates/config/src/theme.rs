use std::collections::BTreeMap;

/// Theme palette.
///
/// Keys other than the primary and secondary colors are kept in `extra` so templates can
/// reference custom colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Colors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Colors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary_color: Some(primary.into()),
            secondary_color: Some(secondary.into()),
            extra: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Highlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}
