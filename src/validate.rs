use docsite_config::ConfigurationError;

static ABSOLUTE_URL: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^https?://[^\s/?#]+(?:[/?#]\S*)?$").unwrap());

static HEX_COLOR: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

type Result<T, E = ConfigurationError> = std::result::Result<T, E>;

pub(crate) fn required(value: Option<String>, field: &str) -> Result<String> {
    let value = value.ok_or_else(|| ConfigurationError::missing(field))?;
    non_empty(value, field)
}

pub(crate) fn non_empty(value: String, field: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(ConfigurationError::empty(field))
    } else {
        Ok(value)
    }
}

/// Absent is fine, present-but-blank is not.
pub(crate) fn optional(value: Option<String>, field: &str) -> Result<Option<String>> {
    value.map(|v| non_empty(v, field)).transpose()
}

pub(crate) fn absolute_url(value: String, field: &str) -> Result<String> {
    if ABSOLUTE_URL.is_match(&value) {
        Ok(value)
    } else {
        Err(ConfigurationError::invalid(
            field,
            format!("expected an absolute http(s) URL, got `{value}`"),
        ))
    }
}

pub(crate) fn base_url(value: String, field: &str) -> Result<String> {
    if value.starts_with('/') && value.ends_with('/') {
        Ok(value)
    } else {
        Err(ConfigurationError::invalid(
            field,
            format!("must start and end with `/`, got `{value}`"),
        ))
    }
}

pub(crate) fn color(value: String, field: &str) -> Result<String> {
    let value = non_empty(value, field)?;
    if !HEX_COLOR.is_match(&value) {
        log::warn!("`{field}` is not a hex color: `{value}`");
    }
    Ok(value)
}
