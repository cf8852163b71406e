pub(crate) use anyhow::Context as _;
pub(crate) use docsite::error::Result;
