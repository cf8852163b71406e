/// A navigation entry as written in the site declaration.
///
/// Exactly one of `doc`, `page` and `blog` is expected to be set; the raw form does not enforce
/// this so that a malformed entry can be reported with its position instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct LinkDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LinkDescriptor {
    pub fn doc(doc: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            doc: Some(doc.into()),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn page(page: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn blog(label: impl Into<String>) -> Self {
        Self {
            blog: Some(true),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Names of the target keys that are set, in declaration order.
    ///
    /// `blog: false` does not count as set.
    pub fn targets(&self) -> Vec<&'static str> {
        let mut targets = Vec::new();
        if self.doc.is_some() {
            targets.push("doc");
        }
        if self.page.is_some() {
            targets.push("page");
        }
        if self.blog == Some(true) {
            targets.push("blog");
        }
        targets
    }
}
