use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;
use docsite_config::{CONFIG_FILENAME, Config, Format};

use crate::error::*;

/// Write the built-in site declaration into `dest`, creating the directory if needed.
///
/// An existing config file is never overwritten.
pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> Result<path::PathBuf> {
    create_new_project_for_path(dest.as_ref())
}

pub fn create_new_project_for_path(dest: &path::Path) -> Result<path::PathBuf> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    let content = Config::builtin().to_text(Format::Yaml)?;
    let file = dest.join(CONFIG_FILENAME);
    create_file(&file, &content)?;

    Ok(file)
}

fn create_file<P: AsRef<path::Path>>(path: P, content: &str) -> Result<()> {
    create_file_for_path(path.as_ref(), content)
}

fn create_file_for_path(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::SiteConfig;

    #[test]
    fn creates_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let file = create_new_project(dir.path().join("site")).unwrap();
        assert_eq!(file, dir.path().join("site").join(CONFIG_FILENAME));

        let site = SiteConfig::load_from_file(&file).unwrap();
        assert_eq!(site.title(), "Aktoro Lang");
        assert_eq!(site.header_links().len(), 4);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        create_new_project(dir.path()).unwrap();
        let err = create_new_project(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create file"));
    }
}
