use std::fmt;

use docsite_config::ConfigurationError;
use docsite_config::LinkDescriptor;
use itertools::Itertools;

use crate::validate;

/// Where a header link points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// A document, by id.
    Doc(String),
    /// A standalone page, by path.
    Page(String),
    /// The blog index.
    Blog,
}

impl LinkTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Doc(_) => "doc",
            Self::Page(_) => "page",
            Self::Blog => "blog",
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Doc(id) | Self::Page(id) => Some(id.as_str()),
            Self::Blog => None,
        }
    }
}

/// A validated navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(into = "LinkDescriptor")]
pub struct HeaderLink {
    target: LinkTarget,
    label: String,
}

impl HeaderLink {
    pub fn target(&self) -> &LinkTarget {
        &self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn from_descriptor(
        raw: LinkDescriptor,
        field: &str,
    ) -> Result<Self, ConfigurationError> {
        let targets = raw.targets();
        match targets.len() {
            0 => {
                return Err(ConfigurationError::invalid(
                    field,
                    "one of `doc`, `page` or `blog` must be set",
                ));
            }
            1 => {}
            _ => {
                return Err(ConfigurationError::invalid(
                    field,
                    format!(
                        "only one of `doc`, `page` or `blog` may be set, found {}",
                        targets.iter().map(|t| format!("`{t}`")).join(", ")
                    ),
                ));
            }
        }

        let LinkDescriptor {
            doc, page, label, ..
        } = raw;
        let target = match (doc, page) {
            (Some(doc), _) => {
                LinkTarget::Doc(validate::non_empty(doc, &format!("{field}.doc"))?)
            }
            (_, Some(page)) => {
                LinkTarget::Page(validate::non_empty(page, &format!("{field}.page"))?)
            }
            (None, None) => LinkTarget::Blog,
        };
        let label = validate::required(label, &format!("{field}.label"))?;

        Ok(Self { target, label })
    }
}

impl From<HeaderLink> for LinkDescriptor {
    fn from(link: HeaderLink) -> Self {
        let HeaderLink { target, label } = link;
        match target {
            LinkTarget::Doc(doc) => LinkDescriptor::doc(doc, label),
            LinkTarget::Page(page) => LinkDescriptor::page(page, label),
            LinkTarget::Blog => LinkDescriptor::blog(label),
        }
    }
}

impl fmt::Display for HeaderLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target.id() {
            Some(id) => write!(f, "{} {} -> {}", self.target.kind(), id, self.label),
            None => write!(f, "{} -> {}", self.target.kind(), self.label),
        }
    }
}
